//! Command parser for the : command system

/// Parsed command from user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    // Navigation commands
    /// Raw view id; unknown ids are resolved by the shell
    View(String),
    Sidebar,

    // Calendar commands
    Select(u32),
    NextMonth,
    PrevMonth,

    // Settings commands
    Theme(Option<String>),
    Toggle(Option<String>),

    Help,
    Quit,

    // Unknown command
    Unknown(String),
}

/// Parse a command string (without the leading :)
pub fn parse_command(input: &str) -> Command {
    let input = input.trim();
    let mut parts = input.splitn(2, ' ');
    let cmd = parts.next().unwrap_or("");
    let args = parts
        .next()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());

    match cmd.to_lowercase().as_str() {
        // Navigation
        "view" | "go" => match args {
            Some(id) => Command::View(id),
            None => Command::Unknown(input.to_string()),
        },
        "dashboard" | "dash" | "home" => Command::View("dashboard".to_string()),
        "calendar" | "cal" => Command::View("calendar".to_string()),
        "progress" | "prog" => Command::View("progress".to_string()),
        "goals" | "goal" => Command::View("goals".to_string()),
        "settings" | "prefs" => Command::View("settings".to_string()),
        "sidebar" | "menu" => Command::Sidebar,

        // Calendar
        "select" | "day" => match args.and_then(|s| s.parse().ok()) {
            Some(day) => Command::Select(day),
            None => Command::Unknown(input.to_string()),
        },
        "next" => Command::NextMonth,
        "prev" => Command::PrevMonth,

        // Settings
        "theme" => Command::Theme(args),
        "toggle" => Command::Toggle(args),

        "help" => Command::Help,
        "quit" | "q" => Command::Quit,

        _ => Command::Unknown(input.to_string()),
    }
}
