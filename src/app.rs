use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::layout::Rect;
use tracing::{debug, info, warn};

use crate::core::{parse_command, Action, Command, Context, Module, NotifyLevel};
use crate::domain::ThemeChoice;
use crate::error::Error;
use crate::modules::{CalendarView, Dashboard, GoalsView, ProgressView, SettingsView};
use crate::ui::layout;

const STATUS_TTL: Duration = Duration::from_secs(3);

/// Top-level screens, in sidebar order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    Dashboard,
    Calendar,
    Progress,
    Goals,
    Settings,
}

impl View {
    pub const ALL: [View; 5] = [
        View::Dashboard,
        View::Calendar,
        View::Progress,
        View::Goals,
        View::Settings,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            View::Dashboard => "dashboard",
            View::Calendar => "calendar",
            View::Progress => "progress",
            View::Goals => "goals",
            View::Settings => "settings",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            View::Dashboard => "Dashboard",
            View::Calendar => "Calendar",
            View::Progress => "Progress",
            View::Goals => "Goals",
            View::Settings => "Settings",
        }
    }

    pub fn shortcut(&self) -> char {
        match self {
            View::Dashboard => '1',
            View::Calendar => '2',
            View::Progress => '3',
            View::Goals => '4',
            View::Settings => '5',
        }
    }

    /// Unknown ids resolve to the first view
    pub fn parse_or_default(id: &str) -> View {
        id.parse().unwrap_or(View::ALL[0])
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl FromStr for View {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        View::ALL
            .into_iter()
            .find(|view| view.id().eq_ignore_ascii_case(needle))
            .ok_or_else(|| Error::UnknownView(needle.to_string()))
    }
}

/// The only state shared across views
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationState {
    pub view: View,
    pub sidebar_open: bool,
}

/// State of the mounted view. Replaced wholesale on every view switch.
#[derive(Debug)]
pub enum ActiveView {
    Dashboard(Dashboard),
    Calendar(CalendarView),
    Progress(ProgressView),
    Goals(GoalsView),
    Settings(SettingsView),
}

impl ActiveView {
    pub fn mount(view: View, ctx: &Context, theme: ThemeChoice) -> Self {
        match view {
            View::Dashboard => ActiveView::Dashboard(Dashboard::new()),
            View::Calendar => ActiveView::Calendar(CalendarView::new(ctx.today)),
            View::Progress => ActiveView::Progress(ProgressView::new()),
            View::Goals => ActiveView::Goals(GoalsView::new()),
            View::Settings => ActiveView::Settings(SettingsView::new(&ctx.data, theme)),
        }
    }

    pub fn view(&self) -> View {
        match self {
            ActiveView::Dashboard(_) => View::Dashboard,
            ActiveView::Calendar(_) => View::Calendar,
            ActiveView::Progress(_) => View::Progress,
            ActiveView::Goals(_) => View::Goals,
            ActiveView::Settings(_) => View::Settings,
        }
    }

    pub fn module(&self) -> &dyn Module {
        match self {
            ActiveView::Dashboard(m) => m,
            ActiveView::Calendar(m) => m,
            ActiveView::Progress(m) => m,
            ActiveView::Goals(m) => m,
            ActiveView::Settings(m) => m,
        }
    }

    pub fn module_mut(&mut self) -> &mut dyn Module {
        match self {
            ActiveView::Dashboard(m) => m,
            ActiveView::Calendar(m) => m,
            ActiveView::Progress(m) => m,
            ActiveView::Goals(m) => m,
            ActiveView::Settings(m) => m,
        }
    }

    pub fn calendar(&self) -> Option<&CalendarView> {
        match self {
            ActiveView::Calendar(view) => Some(view),
            _ => None,
        }
    }

    pub fn settings(&self) -> Option<&SettingsView> {
        match self {
            ActiveView::Settings(view) => Some(view),
            _ => None,
        }
    }
}

/// Keyboard cursor over the navigation menu
#[derive(Debug, Clone, Copy, Default)]
pub struct Sidebar {
    pub cursor: usize,
}

impl Sidebar {
    pub fn selected(&self) -> View {
        View::ALL[self.cursor.min(View::ALL.len() - 1)]
    }

    pub fn move_up(&mut self) {
        self.cursor = (self.cursor + View::ALL.len() - 1) % View::ALL.len();
    }

    pub fn move_down(&mut self) {
        self.cursor = (self.cursor + 1) % View::ALL.len();
    }

    pub fn point_at(&mut self, view: View) {
        self.cursor = View::ALL.iter().position(|v| *v == view).unwrap_or(0);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warn,
    Error,
}

impl From<NotifyLevel> for StatusLevel {
    fn from(level: NotifyLevel) -> Self {
        match level {
            NotifyLevel::Info => StatusLevel::Info,
            NotifyLevel::Warn => StatusLevel::Warn,
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct CommandBar {
    pub input: String,
    pub last: Option<String>,
}

#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub level: StatusLevel,
    pub since: Instant,
}

#[derive(Debug)]
pub struct App {
    /// Read-only data for views
    pub ctx: Context,
    pub nav: NavigationState,
    pub active: ActiveView,
    pub sidebar: Sidebar,
    pub input_mode: InputMode,
    pub command: CommandBar,
    pub status: Option<StatusMessage>,
    pub help_open: bool,
    pub should_quit: bool,
    /// Theme a freshly mounted settings view starts with
    pub default_theme: ThemeChoice,
}

impl App {
    pub fn new(ctx: Context, start: View, default_theme: ThemeChoice) -> Self {
        let active = ActiveView::mount(start, &ctx, default_theme);
        let mut sidebar = Sidebar::default();
        sidebar.point_at(start);
        Self {
            ctx,
            nav: NavigationState {
                view: start,
                sidebar_open: false,
            },
            active,
            sidebar,
            input_mode: InputMode::Normal,
            command: CommandBar::default(),
            status: None,
            help_open: false,
            should_quit: false,
            default_theme,
        }
    }

    pub fn current_view(&self) -> View {
        self.nav.view
    }

    /// Makes `view` active and closes the sidebar. Switching to another
    /// view drops the old view's local state.
    pub fn select_view(&mut self, view: View) {
        if view != self.nav.view {
            self.active = ActiveView::mount(view, &self.ctx, self.default_theme);
            debug!(
                from = self.nav.view.id(),
                module = self.active.module().id(),
                "switching view"
            );
            self.nav.view = view;
        }
        self.nav.sidebar_open = false;
        self.sidebar.point_at(view);
    }

    /// String-keyed navigation; unknown ids fall back to the dashboard.
    pub fn select_view_id(&mut self, id: &str) {
        match id.parse::<View>() {
            Ok(view) => self.select_view(view),
            Err(err) => {
                let fallback = View::parse_or_default(id);
                warn!(%err, fallback = fallback.id(), "falling back to default view");
                self.select_view(fallback);
                self.set_status(
                    format!("Unknown view '{}', showing {}", id.trim(), fallback),
                    StatusLevel::Warn,
                );
            }
        }
    }

    pub fn toggle_sidebar(&mut self) {
        self.nav.sidebar_open = !self.nav.sidebar_open;
        if self.nav.sidebar_open {
            self.sidebar.point_at(self.nav.view);
        }
        debug!(open = self.nav.sidebar_open, "sidebar toggled");
    }

    pub fn close_sidebar(&mut self) {
        self.nav.sidebar_open = false;
    }

    pub fn set_status(&mut self, text: impl Into<String>, level: StatusLevel) {
        self.status = Some(StatusMessage {
            text: text.into(),
            level,
            since: Instant::now(),
        });
    }

    pub fn status_text(&self) -> Option<(&str, StatusLevel)> {
        self.status
            .as_ref()
            .map(|status| (status.text.as_str(), status.level))
    }

    pub fn on_tick(&mut self) {
        if let Some(status) = self.status.as_ref() {
            if status.since.elapsed() > STATUS_TTL {
                self.status = None;
            }
        }
        self.ctx.refresh_today();
    }

    /// Apply an action returned by a command or view
    pub fn apply_action(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::Navigate(view) => self.select_view(view),
            Action::ToggleSidebar => self.toggle_sidebar(),
            Action::Notify(msg, level) => self.set_status(msg, level.into()),
            Action::Quit => {
                info!("quit requested");
                self.should_quit = true;
            }
        }
    }

    pub fn enter_command(&mut self) {
        self.input_mode = InputMode::Command;
        self.command.input.clear();
    }

    pub fn exit_command(&mut self) {
        self.input_mode = InputMode::Normal;
        self.command.input.clear();
    }

    pub fn apply_command(&mut self) {
        let input = self.command.input.trim().to_string();
        self.exit_command();
        if input.is_empty() {
            return;
        }
        let cmd = parse_command(&input);
        debug!(?cmd, "command");
        self.command.last = Some(input);
        let action = self.execute_command(&cmd);
        self.apply_action(action);
    }

    /// Execute a parsed command
    pub fn execute_command(&mut self, cmd: &Command) -> Action {
        match cmd {
            Command::View(id) => {
                self.select_view_id(id);
                Action::None
            }
            Command::Sidebar => Action::ToggleSidebar,
            Command::Help => {
                self.help_open = true;
                Action::None
            }
            Command::Quit => Action::Quit,
            Command::Unknown(s) => Action::warn(format!("Unknown command: {}", s)),
            Command::Select(_)
            | Command::NextMonth
            | Command::PrevMonth
            | Command::Theme(_)
            | Command::Toggle(_) => {
                let action = self.active.module_mut().handle_command(cmd, &self.ctx);
                if action == Action::None {
                    Action::warn(format!(
                        "Command not available in {}",
                        self.current_view()
                    ))
                } else {
                    action
                }
            }
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if self.help_open {
            if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc) {
                self.help_open = false;
            }
            return;
        }

        if self.input_mode == InputMode::Command {
            self.handle_command_key(key);
            return;
        }

        match (key.code, key.modifiers) {
            (KeyCode::Char('c'), mods) if mods.contains(KeyModifiers::CONTROL) => {
                self.apply_action(Action::Quit)
            }
            (KeyCode::Char('q'), _) => self.apply_action(Action::Quit),
            (KeyCode::Char('?'), _) => self.help_open = true,
            (KeyCode::Char(':'), _) => self.enter_command(),
            (KeyCode::Char('b'), _) => self.toggle_sidebar(),
            (KeyCode::Char(ch @ '1'..='5'), _) => {
                let index = (ch as u8 - b'1') as usize;
                self.select_view(View::ALL[index]);
            }
            _ if self.nav.sidebar_open => self.handle_sidebar_key(key),
            _ => {
                let action = self.active.module_mut().handle_key(key, &self.ctx);
                self.apply_action(action);
            }
        }
    }

    fn handle_sidebar_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.close_sidebar(),
            KeyCode::Up | KeyCode::Char('k') => self.sidebar.move_up(),
            KeyCode::Down | KeyCode::Char('j') => self.sidebar.move_down(),
            KeyCode::Enter => self.select_view(self.sidebar.selected()),
            _ => {}
        }
    }

    fn handle_command_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.exit_command(),
            KeyCode::Enter => self.apply_command(),
            KeyCode::Backspace => {
                self.command.input.pop();
            }
            KeyCode::Char(ch) => {
                if key.modifiers.contains(KeyModifiers::CONTROL) {
                    return;
                }
                self.command.input.push(ch);
            }
            _ => {}
        }
    }

    /// Left click at (`col`, `row`) on a terminal of `size`
    pub fn handle_click(&mut self, size: Rect, col: u16, row: u16) {
        if self.help_open || self.input_mode == InputMode::Command {
            return;
        }
        let areas = layout::areas(size);

        if layout::contains(areas.menu_button, col, row) {
            self.toggle_sidebar();
            return;
        }

        if self.nav.sidebar_open && layout::contains(areas.sidebar, col, row) {
            if let Some(index) = layout::sidebar_item_at(areas, row) {
                if let Some(view) = View::ALL.get(index).copied() {
                    self.select_view(view);
                }
            }
            return;
        }

        if layout::contains(areas.main, col, row) {
            let action = self
                .active
                .module_mut()
                .handle_click(areas.main, col, row, &self.ctx);
            self.apply_action(action);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn app() -> App {
        let ctx = Context::default().with_today(NaiveDate::from_ymd_opt(2024, 6, 12).unwrap());
        App::new(ctx, View::Dashboard, ThemeChoice::Emerald)
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_view_ids_roundtrip() {
        for view in View::ALL {
            assert_eq!(view.id().parse::<View>().unwrap(), view);
        }
        assert_eq!("CALENDAR".parse::<View>().unwrap(), View::Calendar);
        assert!(matches!("reports".parse::<View>(), Err(Error::UnknownView(_))));
        assert_eq!(View::parse_or_default("reports"), View::Dashboard);
    }

    #[test]
    fn test_select_view_closes_sidebar() {
        let mut app = app();
        for view in View::ALL {
            app.nav.sidebar_open = true;
            app.select_view(view);
            assert_eq!(app.current_view(), view);
            assert_eq!(app.active.view(), view);
            assert_eq!(app.active.module().id(), view.id());
            assert!(!app.nav.sidebar_open);
        }
    }

    #[test]
    fn test_toggle_sidebar() {
        let mut app = app();
        assert!(!app.nav.sidebar_open);
        app.toggle_sidebar();
        assert!(app.nav.sidebar_open);
        app.toggle_sidebar();
        assert!(!app.nav.sidebar_open);
    }

    #[test]
    fn test_unknown_view_id_falls_back() {
        let mut app = app();
        app.select_view(View::Goals);
        app.nav.sidebar_open = true;
        app.select_view_id("reports");
        assert_eq!(app.current_view(), View::Dashboard);
        assert!(!app.nav.sidebar_open);
        let (text, level) = app.status_text().unwrap();
        assert_eq!(level, StatusLevel::Warn);
        assert!(text.contains("reports"));
    }

    #[test]
    fn test_switch_discards_view_state() {
        let mut app = app();
        app.select_view(View::Calendar);
        app.execute_command(&Command::Select(3));
        assert!(app.active.calendar().unwrap().selection().selected.is_some());

        // same view keeps state
        app.select_view(View::Calendar);
        assert!(app.active.calendar().unwrap().selection().selected.is_some());

        app.select_view(View::Goals);
        app.select_view(View::Calendar);
        assert_eq!(app.active.calendar().unwrap().selection().selected, None);
    }

    #[test]
    fn test_sidebar_keys() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('b')));
        assert!(app.nav.sidebar_open);
        app.handle_key(key(KeyCode::Down));
        app.handle_key(key(KeyCode::Down));
        assert_eq!(app.sidebar.selected(), View::Progress);
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.current_view(), View::Progress);
        assert!(!app.nav.sidebar_open);

        app.handle_key(key(KeyCode::Char('b')));
        app.handle_key(key(KeyCode::Esc));
        assert!(!app.nav.sidebar_open);
        assert_eq!(app.current_view(), View::Progress);
    }

    #[test]
    fn test_digit_shortcuts() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('5')));
        assert_eq!(app.current_view(), View::Settings);
        app.handle_key(key(KeyCode::Char('2')));
        assert_eq!(app.current_view(), View::Calendar);
    }

    #[test]
    fn test_command_mode() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char(':')));
        assert_eq!(app.input_mode, InputMode::Command);
        for ch in "goals".chars() {
            app.handle_key(key(KeyCode::Char(ch)));
        }
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.input_mode, InputMode::Normal);
        assert_eq!(app.current_view(), View::Goals);
        assert_eq!(app.command.last.as_deref(), Some("goals"));
    }

    #[test]
    fn test_view_command_outside_its_view() {
        let mut app = app();
        let action = app.execute_command(&Command::NextMonth);
        assert!(matches!(action, Action::Notify(_, NotifyLevel::Warn)));
    }

    #[test]
    fn test_quit_and_help() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('?')));
        assert!(app.help_open);
        app.handle_key(key(KeyCode::Char('q')));
        assert!(!app.should_quit);
        app.handle_key(key(KeyCode::Esc));
        assert!(!app.help_open);
        app.handle_key(key(KeyCode::Char('q')));
        assert!(app.should_quit);
    }
}
