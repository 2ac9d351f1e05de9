use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Clear, Gauge, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;

pub mod layout;
pub mod widgets;

use crate::app::{App, InputMode, StatusLevel, View};
use widgets::tone_color;

pub fn draw(f: &mut Frame, app: &App) {
    let areas = layout::areas(f.size());

    draw_header(f, areas.header, app);
    app.active.module().render(f, areas.main, &app.ctx);
    if app.nav.sidebar_open {
        draw_sidebar(f, areas, app);
    }
    draw_status_line(f, areas.status_line, app);
    draw_command_line(f, areas.command_line, app);

    if app.help_open {
        draw_help_popup(f, areas.size);
    }
}

fn accent(app: &App) -> Color {
    tone_color(app.default_theme.tone())
}

fn draw_header(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
        .split(area);

    let menu = if app.nav.sidebar_open { "[×]" } else { "[≡]" };
    let title = Line::from(vec![
        Span::styled(menu, Style::default().fg(Color::DarkGray)),
        Span::raw("  "),
        Span::styled(
            "Habit Flow",
            Style::default()
                .fg(accent(app))
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled("View ", Style::default().fg(Color::DarkGray)),
        Span::raw(app.current_view().title()),
    ]);
    let left = Paragraph::new(title)
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Left);

    let right_line = Line::from(vec![
        Span::styled("Today ", Style::default().fg(Color::DarkGray)),
        Span::raw(app.ctx.today.format("%a %b %-d, %Y").to_string()),
    ]);
    let right = Paragraph::new(right_line)
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Left);

    f.render_widget(left, chunks[0]);
    f.render_widget(right, chunks[1]);
}

fn draw_sidebar(f: &mut Frame, areas: layout::UiAreas, app: &App) {
    f.render_widget(Clear, areas.sidebar);

    let items: Vec<ListItem> = View::ALL
        .iter()
        .map(|view| {
            let is_active = *view == app.current_view();
            let mut spans = vec![
                Span::styled(
                    format!("{} ", view.shortcut()),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::raw(view.title()),
            ];
            if is_active {
                spans.push(Span::raw(" *"));
            }
            let style = if is_active {
                Style::default().fg(accent(app)).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(Line::from(spans)).style(style)
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Navigate")
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
    let mut state = ListState::default();
    state.select(Some(app.sidebar.cursor));
    f.render_stateful_widget(list, areas.sidebar_nav, &mut state);

    let weekly = app.ctx.data.weekly_progress.min(100);
    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Weekly Progress")
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .gauge_style(Style::default().fg(accent(app)))
        .percent(u16::from(weekly))
        .label(format!("{}%", weekly));
    f.render_widget(gauge, areas.sidebar_progress);
}

fn draw_status_line(f: &mut Frame, area: Rect, app: &App) {
    let sidebar = if app.nav.sidebar_open { "open" } else { "closed" };
    let mut spans = vec![
        Span::styled("View ", Style::default().fg(Color::DarkGray)),
        Span::raw(format!("{}  ", app.current_view().title())),
        Span::styled("Sidebar ", Style::default().fg(Color::DarkGray)),
        Span::raw(format!("{}  ", sidebar)),
    ];
    if let Some(calendar) = app.active.calendar() {
        let selection = calendar.selection();
        spans.push(Span::styled("Month ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::raw(format!("{}  ", selection.displayed.title())));
        if let Some(date) = selection.selected {
            spans.push(Span::styled("Selected ", Style::default().fg(Color::DarkGray)));
            spans.push(Span::raw(date.to_string()));
        }
    }
    if let Some(settings) = app.active.settings() {
        spans.push(Span::styled("Theme ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::raw(settings.theme().name()));
    }

    let paragraph = Paragraph::new(Line::from(spans))
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Left);
    f.render_widget(paragraph, area);
}

/// Get command hint for autocompletion
fn command_hint(input: &str) -> Option<&'static str> {
    let input = input.trim().to_lowercase();
    if input.is_empty() {
        return None;
    }

    let commands = [
        ("view", "Switch view by id"),
        ("dashboard", "Go to dashboard"),
        ("calendar", "Go to calendar"),
        ("progress", "Go to progress"),
        ("goals", "Go to goals"),
        ("settings", "Go to settings"),
        ("sidebar", "Toggle sidebar"),
        ("select", "Select a calendar day"),
        ("next", "Next month"),
        ("prev", "Previous month"),
        ("theme", "Pick a theme (green, blue, purple, orange)"),
        ("toggle", "Flip a notification or preference"),
        ("help", "Show help"),
        ("quit", "Quit"),
    ];

    for (cmd, desc) in commands {
        if cmd.starts_with(&input) {
            return Some(desc);
        }
    }
    None
}

fn draw_command_line(f: &mut Frame, area: Rect, app: &App) {
    let content = match app.input_mode {
        InputMode::Command => {
            let hint = command_hint(&app.command.input);
            let hint_text = hint.unwrap_or("view <id> | select <day> | theme <id> | toggle <id>");
            Line::from(vec![
                Span::styled(": ", Style::default().fg(Color::Yellow)),
                Span::raw(app.command.input.as_str()),
                Span::styled(
                    format!("  {}", hint_text),
                    Style::default().fg(Color::DarkGray),
                ),
            ])
        }
        InputMode::Normal => {
            if let Some((text, level)) = app.status_text() {
                let color = match level {
                    StatusLevel::Info => Color::LightGreen,
                    StatusLevel::Warn => Color::LightYellow,
                    StatusLevel::Error => Color::LightRed,
                };
                Line::from(vec![
                    Span::styled("msg: ", Style::default().fg(Color::DarkGray)),
                    Span::styled(text, Style::default().fg(color)),
                ])
            } else {
                key_hints(app)
            }
        }
    };

    let paragraph = Paragraph::new(content).style(Style::default().fg(Color::White));
    f.render_widget(paragraph, area);
}

fn key_hints(app: &App) -> Line<'static> {
    let view_keys = if app.nav.sidebar_open {
        "j/k move  Enter open  Esc close"
    } else {
        match app.current_view() {
            View::Dashboard => "Tab panel",
            View::Calendar => "hjkl move  Enter select  [ ] month  w week",
            View::Progress | View::Goals => "j/k move",
            View::Settings => "j/k move  Enter toggle",
        }
    };
    Line::from(vec![
        Span::styled(view_keys, Style::default().fg(Color::DarkGray)),
        Span::styled(
            "  b menu  1-5 views  : cmd  ? help  q quit",
            Style::default().fg(Color::DarkGray),
        ),
    ])
}

fn draw_help_popup(f: &mut Frame, area: Rect) {
    let popup_area = centered_rect(64, 70, area);
    f.render_widget(Clear, popup_area);

    let lines = vec![
        Line::from("Navigation"),
        Line::from("  b          Toggle sidebar"),
        Line::from("  1-5        Dashboard / Calendar / Progress / Goals / Settings"),
        Line::from("  j / k      Move (sidebar, lists, settings)"),
        Line::from("  Enter      Open / select / toggle"),
        Line::from("  Tab        Next dashboard panel"),
        Line::from("  Esc        Close sidebar / help / command"),
        Line::from("  Mouse      Click menu, entries, days, settings"),
        Line::from(""),
        Line::from("Calendar"),
        Line::from("  h j k l    Move day cursor"),
        Line::from("  Space      Select day"),
        Line::from("  [ / ]      Previous / next month"),
        Line::from("  w          Month / week"),
        Line::from(""),
        Line::from("Commands"),
        Line::from("  :view <id>        :select <day>   :next  :prev"),
        Line::from("  :theme <id>       :toggle <id>    :sidebar"),
        Line::from("  :help             :quit"),
        Line::from(""),
        Line::from("  ?          Toggle help"),
        Line::from("  q          Quit"),
    ];

    let paragraph = Paragraph::new(Text::from(lines))
        .block(Block::default().title("Help").borders(Borders::ALL))
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_hint_prefix() {
        assert_eq!(command_hint("cal"), Some("Go to calendar"));
        assert_eq!(command_hint("  TOG"), Some("Flip a notification or preference"));
        assert_eq!(command_hint(""), None);
        assert_eq!(command_hint("zzz"), None);
    }

    #[test]
    fn test_centered_rect_is_inside() {
        let outer = Rect::new(0, 0, 100, 50);
        let popup = centered_rect(60, 40, outer);
        assert!(popup.x > 0 && popup.y > 0);
        assert!(popup.right() <= outer.right());
        assert!(popup.bottom() <= outer.bottom());
    }
}
