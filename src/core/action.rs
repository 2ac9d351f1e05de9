//! Actions that views return to communicate with the shell

use crate::app::View;

/// Actions returned by views and commands to request shell changes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// No action needed
    None,

    /// Switch the active view
    Navigate(View),

    /// Flip the sidebar open/closed
    ToggleSidebar,

    /// Show notification in status line
    Notify(String, NotifyLevel),

    /// Request quit
    Quit,
}

impl Action {
    pub fn info(text: impl Into<String>) -> Self {
        Action::Notify(text.into(), NotifyLevel::Info)
    }

    pub fn warn(text: impl Into<String>) -> Self {
        Action::Notify(text.into(), NotifyLevel::Warn)
    }
}

/// Notification levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyLevel {
    Info,
    Warn,
}
