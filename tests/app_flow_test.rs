//! Navigation and calendar flows driven through the shell, the way a user
//! would: key presses, mouse clicks and palette commands.

use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Rect;

use habit_flow::app::{App, InputMode, StatusLevel, View};
use habit_flow::core::{parse_command, Context};
use habit_flow::domain::ThemeChoice;

const SCREEN: Rect = Rect {
    x: 0,
    y: 0,
    width: 100,
    height: 40,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn app_on(today: NaiveDate) -> App {
    App::new(
        Context::default().with_today(today),
        View::Dashboard,
        ThemeChoice::Emerald,
    )
}

fn press(app: &mut App, code: KeyCode) {
    app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
}

fn type_command(app: &mut App, text: &str) {
    press(app, KeyCode::Char(':'));
    for ch in text.chars() {
        press(app, KeyCode::Char(ch));
    }
    press(app, KeyCode::Enter);
}

#[test]
fn test_every_view_id_selects_and_closes_sidebar() {
    let mut app = app_on(date(2024, 6, 12));
    for id in ["dashboard", "calendar", "progress", "goals", "settings"] {
        app.toggle_sidebar();
        assert!(app.nav.sidebar_open);
        app.select_view_id(id);
        assert_eq!(app.current_view().id(), id);
        assert!(!app.nav.sidebar_open);
    }
}

#[test]
fn test_click_calendar_then_day() {
    // 2024-09-01 is a Sunday, so the 15th sits in week row 2, column 0
    let mut app = app_on(date(2024, 9, 18));
    app.toggle_sidebar();
    assert!(app.nav.sidebar_open);

    // sidebar nav border on row 3, entries from row 4: Dashboard, Calendar, ...
    app.handle_click(SCREEN, 3, 5);
    assert!(!app.nav.sidebar_open);
    assert_eq!(app.current_view(), View::Calendar);
    let calendar = app.active.calendar().unwrap();
    assert_eq!(calendar.selection().selected, None);

    // main area starts on row 3; grid border row 3, weekday header row 4,
    // first week row 5
    app.handle_click(SCREEN, 3, 7);
    let calendar = app.active.calendar().unwrap();
    assert_eq!(calendar.selection().selected, Some(date(2024, 9, 15)));
    assert_eq!(calendar.selection().schedule_title(), "September 15");
}

#[test]
fn test_selection_survives_month_navigation_but_not_view_switch() {
    let mut app = app_on(date(2024, 1, 10));
    press(&mut app, KeyCode::Char('2'));
    type_command(&mut app, "select 20");
    assert_eq!(
        app.active.calendar().unwrap().selection().selected,
        Some(date(2024, 1, 20))
    );

    press(&mut app, KeyCode::Char('['));
    let selection = app.active.calendar().unwrap().selection().clone();
    assert_eq!(selection.displayed.title(), "December 2023");
    assert_eq!(selection.selected, Some(date(2024, 1, 20)));

    press(&mut app, KeyCode::Char('4'));
    press(&mut app, KeyCode::Char('2'));
    let selection = app.active.calendar().unwrap().selection();
    assert_eq!(selection.selected, None);
    assert_eq!(selection.displayed.title(), "January 2024");
}

#[test]
fn test_twelve_months_forward_is_next_year() {
    let mut app = app_on(date(2024, 12, 5));
    app.select_view(View::Calendar);
    press(&mut app, KeyCode::Char(']'));
    assert_eq!(
        app.active.calendar().unwrap().selection().displayed.title(),
        "January 2025"
    );
    for _ in 0..12 {
        type_command(&mut app, "next");
    }
    assert_eq!(
        app.active.calendar().unwrap().selection().displayed.title(),
        "January 2026"
    );
}

#[test]
fn test_out_of_range_day_reports_and_keeps_state() {
    let mut app = app_on(date(2023, 2, 1));
    app.select_view(View::Calendar);
    type_command(&mut app, "select 10");
    type_command(&mut app, "select 30");
    let (text, level) = app.status_text().unwrap();
    assert_eq!(level, StatusLevel::Warn);
    assert!(text.contains("30"));
    assert_eq!(
        app.active.calendar().unwrap().selection().selected,
        Some(date(2023, 2, 10))
    );
}

#[test]
fn test_settings_are_dropped_on_view_switch() {
    let mut app = app_on(date(2024, 6, 12));
    press(&mut app, KeyCode::Char('5'));
    type_command(&mut app, "toggle milestone-alerts");
    type_command(&mut app, "theme ocean");
    let settings = app.active.settings().unwrap();
    assert!(settings.notifications()[2].enabled);
    assert_eq!(settings.theme(), ThemeChoice::Ocean);

    press(&mut app, KeyCode::Char('1'));
    press(&mut app, KeyCode::Char('5'));
    let settings = app.active.settings().unwrap();
    assert!(!settings.notifications()[2].enabled);
    assert_eq!(settings.theme(), ThemeChoice::Emerald);
}

#[test]
fn test_unknown_command_and_view() {
    let mut app = app_on(date(2024, 6, 12));
    app.select_view(View::Goals);
    type_command(&mut app, "view reports");
    assert_eq!(app.current_view(), View::Dashboard);
    assert_eq!(app.status_text().map(|(_, level)| level), Some(StatusLevel::Warn));

    type_command(&mut app, "frobnicate");
    let (text, _) = app.status_text().unwrap();
    assert!(text.contains("frobnicate"));
    assert_eq!(app.input_mode, InputMode::Normal);
}

#[test]
fn test_escape_cancels_command() {
    let mut app = app_on(date(2024, 6, 12));
    press(&mut app, KeyCode::Char(':'));
    press(&mut app, KeyCode::Char('g'));
    press(&mut app, KeyCode::Esc);
    assert_eq!(app.input_mode, InputMode::Normal);
    assert_eq!(app.current_view(), View::Dashboard);
    assert!(app.command.input.is_empty());
}

#[test]
fn test_palette_aliases() {
    let mut app = app_on(date(2024, 6, 12));
    for (input, view) in [
        ("cal", View::Calendar),
        ("prog", View::Progress),
        ("goal", View::Goals),
        ("prefs", View::Settings),
        ("home", View::Dashboard),
    ] {
        let action = app.execute_command(&parse_command(input));
        app.apply_action(action);
        assert_eq!(app.current_view(), view, "{input}");
    }
    let action = app.execute_command(&parse_command("menu"));
    app.apply_action(action);
    assert!(app.nav.sidebar_open);
    let action = app.execute_command(&parse_command("quit"));
    app.apply_action(action);
    assert!(app.should_quit);
}
