//! Settings module - notification switches, theme, preferences, security
//!
//! Everything here lives only as long as the view is mounted.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use tracing::{debug, info};

use crate::core::{Action, Command, Context, Module};
use crate::domain::{NotificationSetting, PreferenceKey, Preferences, SampleData, ThemeChoice};
use crate::error::Error;
use crate::ui::layout::{contains, inner};
use crate::ui::widgets::{panel_block, tone_color};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecurityItem {
    ChangePassword,
    LoginHistory,
}

impl SecurityItem {
    pub const ALL: [SecurityItem; 2] = [SecurityItem::ChangePassword, SecurityItem::LoginHistory];

    pub fn title(&self) -> &'static str {
        match self {
            SecurityItem::ChangePassword => "Change Password",
            SecurityItem::LoginHistory => "Login History",
        }
    }
}

/// A cursor stop, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsRow {
    Notification(usize),
    Theme(ThemeChoice),
    Preference(PreferenceKey),
    Security(SecurityItem),
}

#[derive(Debug, Clone)]
pub struct SettingsView {
    notifications: Vec<NotificationSetting>,
    preferences: Preferences,
    theme: ThemeChoice,
    cursor: usize,
}

struct Panels {
    notifications: Rect,
    theme: Rect,
    preferences: Rect,
    security: Rect,
}

impl SettingsView {
    pub fn new(data: &SampleData, theme: ThemeChoice) -> Self {
        Self {
            notifications: data.notifications.clone(),
            preferences: data.preferences.clone(),
            theme,
            cursor: 0,
        }
    }

    pub fn notifications(&self) -> &[NotificationSetting] {
        &self.notifications
    }

    pub fn preferences(&self) -> &Preferences {
        &self.preferences
    }

    pub fn theme(&self) -> ThemeChoice {
        self.theme
    }

    pub fn rows(&self) -> Vec<SettingsRow> {
        (0..self.notifications.len())
            .map(SettingsRow::Notification)
            .chain(ThemeChoice::ALL.into_iter().map(SettingsRow::Theme))
            .chain(PreferenceKey::ALL.into_iter().map(SettingsRow::Preference))
            .chain(SecurityItem::ALL.into_iter().map(SettingsRow::Security))
            .collect()
    }

    pub fn cursor_row(&self) -> Option<SettingsRow> {
        self.rows().get(self.cursor).copied()
    }

    /// Flips the notification with `id`. Returns whether one matched.
    pub fn toggle_notification(&mut self, id: &str) -> bool {
        match self.notifications.iter_mut().find(|n| n.id == id) {
            Some(setting) => {
                setting.enabled = !setting.enabled;
                debug!(id, enabled = setting.enabled, "notification toggled");
                true
            }
            None => false,
        }
    }

    /// Flips a preference and returns its new value
    pub fn toggle_preference(&mut self, key: PreferenceKey) -> bool {
        let value = self.preferences.toggle(key);
        debug!(key = key.id(), value, "preference toggled");
        value
    }

    pub fn select_theme(&mut self, theme: ThemeChoice) {
        if self.theme != theme {
            info!(theme = theme.id(), "theme selected");
        }
        self.theme = theme;
    }

    pub fn activate(&mut self, row: SettingsRow) -> Action {
        match row {
            SettingsRow::Notification(index) => {
                let Some(id) = self.notifications.get(index).map(|n| n.id.clone()) else {
                    return Action::None;
                };
                self.toggle_notification(&id);
                Action::None
            }
            SettingsRow::Theme(theme) => {
                self.select_theme(theme);
                Action::None
            }
            SettingsRow::Preference(key) => {
                self.toggle_preference(key);
                Action::None
            }
            SettingsRow::Security(item) => {
                Action::info(format!("{} is not available in this demo", item.title()))
            }
        }
    }

    fn toggle_by_id(&mut self, id: &str) -> Action {
        if self.toggle_notification(id) {
            let enabled = self
                .notifications
                .iter()
                .find(|n| n.id == id)
                .map(|n| n.enabled)
                .unwrap_or(false);
            return Action::info(format!("{} {}", id, on_off(enabled)));
        }
        if let Some(key) = PreferenceKey::from_id(id) {
            let value = self.toggle_preference(key);
            return Action::info(format!("{} {}", key.title(), on_off(value)));
        }
        Action::warn(Error::UnknownSetting(id.to_string()).to_string())
    }

    fn move_cursor(&mut self, delta: isize) {
        let last = self.rows().len() as isize - 1;
        self.cursor = (self.cursor as isize + delta).clamp(0, last.max(0)) as usize;
    }

    fn panels(area: Rect) -> Panels {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);
        let left = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(5), Constraint::Length(ThemeChoice::ALL.len() as u16 + 2)])
            .split(cols[0]);
        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(PreferenceKey::ALL.len() as u16 + 4),
                Constraint::Length(SecurityItem::ALL.len() as u16 + 2),
            ])
            .split(cols[1]);
        Panels {
            notifications: left[0],
            theme: left[1],
            preferences: right[0],
            security: right[1],
        }
    }

    /// Row index of the first stop in each section
    fn section_offsets(&self) -> [usize; 4] {
        let notifications = 0;
        let theme = notifications + self.notifications.len();
        let preferences = theme + ThemeChoice::ALL.len();
        let security = preferences + PreferenceKey::ALL.len();
        [notifications, theme, preferences, security]
    }
}

fn on_off(value: bool) -> &'static str {
    if value {
        "on"
    } else {
        "off"
    }
}

impl Module for SettingsView {
    fn id(&self) -> &'static str {
        "settings"
    }

    fn handle_key(&mut self, key: KeyEvent, _ctx: &Context) -> Action {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.move_cursor(-1),
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor(1),
            KeyCode::Enter | KeyCode::Char(' ') => {
                if let Some(row) = self.cursor_row() {
                    return self.activate(row);
                }
            }
            _ => {}
        }
        Action::None
    }

    fn handle_command(&mut self, cmd: &Command, _ctx: &Context) -> Action {
        match cmd {
            Command::Theme(None) => Action::info(format!("Theme: {}", self.theme)),
            Command::Theme(Some(id)) => match id.parse::<ThemeChoice>() {
                Ok(theme) => {
                    self.select_theme(theme);
                    Action::info(format!("Theme: {}", theme))
                }
                Err(err) => Action::warn(err.to_string()),
            },
            Command::Toggle(Some(id)) => self.toggle_by_id(id),
            Command::Toggle(None) => Action::warn("Usage: toggle <setting-id>"),
            _ => Action::None,
        }
    }

    fn handle_click(&mut self, area: Rect, col: u16, row: u16, _ctx: &Context) -> Action {
        let panels = Self::panels(area);
        let [notifications, theme, preferences, security] = self.section_offsets();
        let sections = [
            (panels.notifications, notifications, self.notifications.len(), 2),
            (panels.theme, theme, ThemeChoice::ALL.len(), 1),
            (panels.preferences, preferences, PreferenceKey::ALL.len(), 1),
            (panels.security, security, SecurityItem::ALL.len(), 1),
        ];
        for (rect, offset, len, height) in sections {
            let body = inner(rect);
            if !contains(body, col, row) {
                continue;
            }
            let index = usize::from(row - body.y) / height;
            if index < len {
                self.cursor = offset + index;
                if let Some(row) = self.cursor_row() {
                    return self.activate(row);
                }
            }
            return Action::None;
        }
        Action::None
    }

    fn render(&self, frame: &mut Frame, area: Rect, _ctx: &Context) {
        let panels = Self::panels(area);
        let accent = tone_color(self.theme.tone());
        let [notifications, theme, preferences, security] = self.section_offsets();

        let mut lines = Vec::new();
        for (i, setting) in self.notifications.iter().enumerate() {
            lines.push(Line::from(vec![
                switch(setting.enabled, accent),
                Span::styled(
                    setting.title.clone(),
                    self.row_style(notifications + i).add_modifier(Modifier::BOLD),
                ),
            ]));
            lines.push(Line::from(Span::styled(
                format!("    {}", setting.description),
                Style::default().fg(Color::DarkGray),
            )));
        }
        frame.render_widget(
            Paragraph::new(lines).block(panel_block("Notifications", false)),
            panels.notifications,
        );

        let lines: Vec<Line> = ThemeChoice::ALL
            .iter()
            .enumerate()
            .map(|(i, choice)| {
                let marker = if *choice == self.theme { "(•) " } else { "( ) " };
                Line::from(vec![
                    Span::styled(marker, Style::default().fg(tone_color(choice.tone()))),
                    Span::styled(choice.name(), self.row_style(theme + i)),
                ])
            })
            .collect();
        frame.render_widget(
            Paragraph::new(lines).block(panel_block("Theme", false)),
            panels.theme,
        );

        let mut lines: Vec<Line> = PreferenceKey::ALL
            .iter()
            .enumerate()
            .map(|(i, key)| {
                Line::from(vec![
                    switch(self.preferences.get(*key), accent),
                    Span::styled(key.title(), self.row_style(preferences + i)),
                    Span::styled(
                        format!("  {}", key.description()),
                        Style::default().fg(Color::DarkGray),
                    ),
                ])
            })
            .collect();
        lines.push(Line::from(vec![
            Span::styled("    Timezone ", Style::default().fg(Color::DarkGray)),
            Span::raw(self.preferences.timezone.clone()),
        ]));
        lines.push(Line::from(vec![
            Span::styled("    Language ", Style::default().fg(Color::DarkGray)),
            Span::raw(self.preferences.language.clone()),
        ]));
        frame.render_widget(
            Paragraph::new(lines).block(panel_block("Preferences", false)),
            panels.preferences,
        );

        let lines: Vec<Line> = SecurityItem::ALL
            .iter()
            .enumerate()
            .map(|(i, item)| {
                Line::from(vec![
                    Span::styled("  › ", Style::default().fg(Color::DarkGray)),
                    Span::styled(item.title(), self.row_style(security + i)),
                ])
            })
            .collect();
        frame.render_widget(
            Paragraph::new(lines).block(panel_block("Security", false)),
            panels.security,
        );
    }
}

impl SettingsView {
    fn row_style(&self, index: usize) -> Style {
        if index == self.cursor {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        }
    }
}

fn switch(on: bool, accent: Color) -> Span<'static> {
    if on {
        Span::styled("[●] ", Style::default().fg(accent))
    } else {
        Span::styled("[ ] ", Style::default().fg(Color::DarkGray))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::NotifyLevel;
    use crossterm::event::KeyModifiers;

    fn view() -> SettingsView {
        SettingsView::new(&SampleData::builtin(), ThemeChoice::Emerald)
    }

    fn enabled(view: &SettingsView, id: &str) -> bool {
        view.notifications()
            .iter()
            .find(|n| n.id == id)
            .map(|n| n.enabled)
            .unwrap()
    }

    #[test]
    fn test_toggle_notification_only_touches_match() {
        let mut view = view();
        assert!(view.toggle_notification("weekly-summary"));
        assert!(!enabled(&view, "weekly-summary"));
        assert!(enabled(&view, "daily-reminder"));
        assert!(!enabled(&view, "milestone-alerts"));

        assert!(!view.toggle_notification("nope"));
        assert!(view.toggle_notification("weekly-summary"));
        assert!(enabled(&view, "weekly-summary"));
    }

    #[test]
    fn test_select_theme_is_idempotent() {
        let mut view = view();
        view.select_theme(ThemeChoice::Ocean);
        view.select_theme(ThemeChoice::Ocean);
        assert_eq!(view.theme(), ThemeChoice::Ocean);
    }

    #[test]
    fn test_keyboard_walks_all_rows() {
        let ctx = Context::default();
        let mut view = view();
        let rows = view.rows();
        assert_eq!(rows.len(), 3 + 4 + 3 + 2);

        let down = KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE);
        // first theme row is the fourth stop; move to Amethyst
        for _ in 0..5 {
            view.handle_key(down, &ctx);
        }
        assert_eq!(view.cursor_row(), Some(SettingsRow::Theme(ThemeChoice::Amethyst)));
        view.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE), &ctx);
        assert_eq!(view.theme(), ThemeChoice::Amethyst);

        for _ in 0..20 {
            view.handle_key(down, &ctx);
        }
        assert_eq!(
            view.cursor_row(),
            Some(SettingsRow::Security(SecurityItem::LoginHistory))
        );
        let action = view.handle_key(KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE), &ctx);
        assert!(matches!(action, Action::Notify(_, NotifyLevel::Info)));
    }

    #[test]
    fn test_commands() {
        let ctx = Context::default();
        let mut view = view();
        view.handle_command(&Command::Theme(Some("orange".into())), &ctx);
        assert_eq!(view.theme(), ThemeChoice::Sunset);

        let action = view.handle_command(&Command::Theme(Some("teal".into())), &ctx);
        assert!(matches!(action, Action::Notify(_, NotifyLevel::Warn)));
        assert_eq!(view.theme(), ThemeChoice::Sunset);

        view.handle_command(&Command::Toggle(Some("dark-mode".into())), &ctx);
        assert!(!view.preferences().dark_mode);

        let action = view.handle_command(&Command::Toggle(Some("push".into())), &ctx);
        assert_eq!(action, Action::warn("unknown setting: push"));
    }
    #[test]
    fn test_click_maps_rows_per_section() {
        let ctx = Context::default();
        let mut view = view();
        // left: notifications y 0..24, theme y 24..30
        // right: preferences y 0..26, security y 26..30
        let area = Rect::new(0, 0, 100, 30);

        // notification title and description lines hit the same setting
        view.handle_click(area, 5, 1, &ctx);
        assert!(!enabled(&view, "daily-reminder"));
        view.handle_click(area, 5, 2, &ctx);
        assert!(enabled(&view, "daily-reminder"));
        view.handle_click(area, 5, 4, &ctx);
        assert!(!enabled(&view, "weekly-summary"));
        assert_eq!(view.cursor_row(), Some(SettingsRow::Notification(1)));

        view.handle_click(area, 5, 27, &ctx);
        assert_eq!(view.theme(), ThemeChoice::Amethyst);

        let sound = view.preferences().get(PreferenceKey::SoundEffects);
        view.handle_click(area, 60, 2, &ctx);
        assert_eq!(view.preferences().get(PreferenceKey::SoundEffects), !sound);

        // the timezone line is not a stop
        let action = view.handle_click(area, 60, 4, &ctx);
        assert_eq!(action, Action::None);
        assert_eq!(
            view.cursor_row(),
            Some(SettingsRow::Preference(PreferenceKey::SoundEffects))
        );

        let action = view.handle_click(area, 60, 28, &ctx);
        assert!(matches!(action, Action::Notify(_, NotifyLevel::Info)));
        assert_eq!(
            view.cursor_row(),
            Some(SettingsRow::Security(SecurityItem::LoginHistory))
        );
    }
}
