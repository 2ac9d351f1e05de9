//! Views
//!
//! Each view implements the Module trait and owns its local state:
//! - dashboard: metric cards, habit grid, timeline
//! - calendar: month grid, day selection, schedule
//! - progress: habit performance, achievements
//! - goals: goal list with milestones
//! - settings: notifications, theme, preferences, security

pub mod calendar;
pub mod dashboard;
pub mod goals;
pub mod progress;
pub mod settings;

pub use calendar::CalendarView;
pub use dashboard::Dashboard;
pub use goals::GoalsView;
pub use progress::ProgressView;
pub use settings::SettingsView;
