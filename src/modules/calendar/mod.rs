//! Calendar module - month grid with a day selection and the schedule list

use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{List, ListItem, Paragraph};
use ratatui::Frame;
use tracing::debug;

use crate::core::{Action, Command, Context, Module};
use crate::domain::calendar::WEEK_DAYS;
use crate::domain::{CalendarSelection, Event, EventKind};
use crate::ui::layout::{contains, inner};
use crate::ui::widgets::{panel_block, tone_color};

/// Columns per day cell
const CELL_WIDTH: u16 = 5;

#[derive(Debug, Clone)]
pub struct CalendarView {
    selection: CalendarSelection,
}

struct Panels {
    grid: Rect,
    schedule: Rect,
}

impl CalendarView {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            selection: CalendarSelection::new(today),
        }
    }

    pub fn selection(&self) -> &CalendarSelection {
        &self.selection
    }

    pub fn select_day(&mut self, day: u32) -> Action {
        match self.selection.select_day(day) {
            Ok(date) => {
                debug!(%date, "day selected");
                Action::info(format!("Selected {}", self.selection.schedule_title()))
            }
            Err(err) => Action::warn(err.to_string()),
        }
    }

    pub fn prev_month(&mut self) -> Action {
        self.selection.prev_month();
        debug!(month = %self.selection.displayed.title(), "previous month");
        Action::None
    }

    pub fn next_month(&mut self) -> Action {
        self.selection.next_month();
        debug!(month = %self.selection.displayed.title(), "next month");
        Action::None
    }

    fn panels(area: Rect) -> Panels {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(CELL_WIDTH * 7 + 2), Constraint::Length(40)])
            .split(area);
        Panels {
            grid: chunks[0],
            schedule: chunks[1],
        }
    }

    /// Day under a terminal cell, if any
    fn day_at(&self, grid_area: Rect, col: u16, row: u16) -> Option<u32> {
        let body = inner(grid_area);
        // first inner row holds the weekday names
        if !contains(body, col, row) || row == body.y {
            return None;
        }
        let grid_col = u32::from((col - body.x) / CELL_WIDTH);
        let grid_row = self.selection.visible_rows().start + u32::from(row - body.y - 1);
        if grid_row >= self.selection.visible_rows().end {
            return None;
        }
        self.selection.displayed.day_at(grid_row, grid_col)
    }
}

impl Module for CalendarView {
    fn id(&self) -> &'static str {
        "calendar"
    }

    fn handle_key(&mut self, key: KeyEvent, _ctx: &Context) -> Action {
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => self.selection.move_cursor(-1),
            KeyCode::Right | KeyCode::Char('l') => self.selection.move_cursor(1),
            KeyCode::Up | KeyCode::Char('k') => self.selection.move_cursor(-7),
            KeyCode::Down | KeyCode::Char('j') => self.selection.move_cursor(7),
            KeyCode::Enter | KeyCode::Char(' ') => {
                return self.select_day(self.selection.cursor_day)
            }
            KeyCode::Char('[') => return self.prev_month(),
            KeyCode::Char(']') => return self.next_month(),
            KeyCode::Char('w') => {
                self.selection.toggle_mode();
                debug!(mode = self.selection.mode.title(), "calendar mode");
            }
            _ => {}
        }
        Action::None
    }

    fn handle_command(&mut self, cmd: &Command, _ctx: &Context) -> Action {
        match cmd {
            Command::Select(day) => self.select_day(*day),
            Command::NextMonth => {
                self.next_month();
                Action::info(self.selection.displayed.title())
            }
            Command::PrevMonth => {
                self.prev_month();
                Action::info(self.selection.displayed.title())
            }
            _ => Action::None,
        }
    }

    fn handle_click(&mut self, area: Rect, col: u16, row: u16, _ctx: &Context) -> Action {
        let panels = Self::panels(area);
        match self.day_at(panels.grid, col, row) {
            Some(day) => self.select_day(day),
            None => Action::None,
        }
    }

    fn render(&self, frame: &mut Frame, area: Rect, ctx: &Context) {
        let panels = Self::panels(area);
        self.render_grid(frame, panels.grid, ctx.today);
        self.render_schedule(frame, panels.schedule, &ctx.data.events);
    }
}

impl CalendarView {
    fn render_grid(&self, frame: &mut Frame, area: Rect, today: NaiveDate) {
        let sel = &self.selection;
        let title = format!(
            "{} · {}  [ prev  ] next  w mode",
            sel.displayed.title(),
            sel.mode.title()
        );
        let block = panel_block(&title, true);

        let header = Line::from(
            WEEK_DAYS
                .iter()
                .map(|name| {
                    Span::styled(
                        format!("{:>width$}", name, width = CELL_WIDTH as usize - 1) + " ",
                        Style::default().fg(Color::DarkGray),
                    )
                })
                .collect::<Vec<_>>(),
        );
        let mut lines = vec![header];
        for row in sel.visible_rows() {
            let cells = (0..7)
                .map(|col| match sel.displayed.day_at(row, col) {
                    Some(day) => self.day_cell(day, today),
                    None => Span::raw(" ".repeat(CELL_WIDTH as usize)),
                })
                .collect::<Vec<_>>();
            lines.push(Line::from(cells));
        }

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }

    fn day_cell(&self, day: u32, today: NaiveDate) -> Span<'static> {
        let sel = &self.selection;
        let mut style = Style::default();
        if sel.is_today(day, today) {
            style = style.fg(Color::LightGreen).add_modifier(Modifier::BOLD);
        }
        if sel.is_selected(day) {
            style = style.fg(Color::Black).bg(Color::LightGreen);
        }
        if sel.cursor_day == day {
            style = style.add_modifier(Modifier::UNDERLINED);
        }
        Span::styled(
            format!("{:>width$}", day, width = CELL_WIDTH as usize - 1) + " ",
            style,
        )
    }

    fn render_schedule(&self, frame: &mut Frame, area: Rect, events: &[Event]) {
        let title = self.selection.schedule_title();
        let block = panel_block(&title, false);
        let items: Vec<ListItem> = events.iter().map(event_item).collect();
        frame.render_widget(List::new(items).block(block), area);
    }
}

fn event_item(event: &Event) -> ListItem<'static> {
    let marker = match (event.kind, event.completed) {
        (EventKind::Habit, Some(true)) => Span::styled("✓ ", Style::default().fg(Color::LightGreen)),
        (EventKind::Habit, _) => Span::styled("○ ", Style::default().fg(Color::DarkGray)),
        (EventKind::Event, _) => Span::styled("◆ ", Style::default().fg(Color::LightBlue)),
    };
    let mut spans = vec![
        Span::styled(
            format!("{:>8}  ", event.time),
            Style::default().fg(Color::DarkGray),
        ),
        marker,
        Span::raw(event.title.clone()),
    ];
    if let Some(category) = event.category.as_deref() {
        spans.push(Span::styled(
            format!("  {}", category),
            Style::default().fg(tone_color(event.category_tone())),
        ));
    }
    ListItem::new(Line::from(spans))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::NotifyLevel;
    use crate::domain::CalendarMode;
    use crossterm::event::KeyModifiers;

    fn view() -> (CalendarView, Context) {
        let today = NaiveDate::from_ymd_opt(2024, 9, 18).unwrap();
        (CalendarView::new(today), Context::default().with_today(today))
    }

    fn press(view: &mut CalendarView, ctx: &Context, code: KeyCode) -> Action {
        view.handle_key(KeyEvent::new(code, KeyModifiers::NONE), ctx)
    }

    #[test]
    fn test_keyboard_select() {
        let (mut view, ctx) = view();
        press(&mut view, &ctx, KeyCode::Right);
        press(&mut view, &ctx, KeyCode::Down);
        let action = press(&mut view, &ctx, KeyCode::Enter);
        assert_eq!(action, Action::info("Selected September 26"));
        assert_eq!(
            view.selection().selected,
            NaiveDate::from_ymd_opt(2024, 9, 26)
        );
    }

    #[test]
    fn test_month_keys_and_mode() {
        let (mut view, ctx) = view();
        press(&mut view, &ctx, KeyCode::Char(']'));
        assert_eq!(view.selection().displayed.title(), "October 2024");
        press(&mut view, &ctx, KeyCode::Char('['));
        press(&mut view, &ctx, KeyCode::Char('['));
        assert_eq!(view.selection().displayed.title(), "August 2024");
        press(&mut view, &ctx, KeyCode::Char('w'));
        assert_eq!(view.selection().mode, CalendarMode::Week);
    }

    #[test]
    fn test_select_command_out_of_range() {
        let (mut view, ctx) = view();
        let action = view.handle_command(&Command::Select(31), &ctx);
        assert!(matches!(action, Action::Notify(_, NotifyLevel::Warn)));
        assert_eq!(view.selection().selected, None);
    }

    #[test]
    fn test_click_selects_day() {
        let (mut view, ctx) = view();
        let area = Rect::new(0, 0, 90, 20);
        // September 2024 starts on Sunday; grid body begins at (1, 1)
        // with the weekday header on row 1, so week 0 is on row 2.
        let action = view.handle_click(area, 1 + CELL_WIDTH * 3, 3, &ctx);
        assert_eq!(action, Action::info("Selected September 11"));

        // header row and blank area select nothing
        assert_eq!(view.handle_click(area, 2, 1, &ctx), Action::None);
        assert_eq!(view.handle_click(area, 2, 15, &ctx), Action::None);
    }
}
