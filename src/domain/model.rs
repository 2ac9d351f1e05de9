//! View-models shown by the dashboard views.
//!
//! Nothing here is validated or persisted; the types only carry what the
//! views render.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Named accent color, mapped to a terminal color when rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Green,
    Orange,
    Purple,
    Blue,
    White,
    Gray,
    Red,
    Yellow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
}

impl Trend {
    pub fn arrow(&self) -> &'static str {
        match self {
            Trend::Up => "▲",
            Trend::Down => "▼",
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            Trend::Up => Tone::Green,
            Trend::Down => Tone::Red,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Habit,
    Event,
}

/// Calendar entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: u32,
    pub title: String,
    /// Display label such as "7:00 AM"
    pub time: String,
    pub kind: EventKind,
    #[serde(default)]
    pub completed: Option<bool>,
    #[serde(default)]
    pub category: Option<String>,
}

impl Event {
    pub fn category_tone(&self) -> Tone {
        category_tone(self.category.as_deref().unwrap_or(""))
    }
}

pub fn category_tone(category: &str) -> Tone {
    match category {
        "Fitness" => Tone::Green,
        "Wellness" => Tone::Purple,
        "Work" => Tone::Orange,
        "Personal Development" => Tone::Blue,
        _ => Tone::Gray,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn label(&self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            Priority::High => Tone::Red,
            Priority::Medium => Tone::Yellow,
            Priority::Low => Tone::Blue,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Milestone {
    pub id: u32,
    pub title: String,
    pub completed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goal {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub deadline: NaiveDate,
    /// Percentage, 0..=100
    pub progress: u8,
    #[serde(default)]
    pub milestones: Vec<Milestone>,
    pub category: String,
    pub priority: Priority,
}

impl Goal {
    pub fn progress_tone(&self) -> Tone {
        progress_tone(self.progress)
    }

    pub fn completed_milestones(&self) -> usize {
        self.milestones.iter().filter(|m| m.completed).count()
    }
}

/// Bar color for a progress percentage
pub fn progress_tone(progress: u8) -> Tone {
    if progress >= 75 {
        Tone::Green
    } else if progress >= 50 {
        Tone::Orange
    } else {
        Tone::Blue
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationSetting {
    pub id: String,
    pub title: String,
    pub description: String,
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    pub dark_mode: bool,
    pub sound_effects: bool,
    pub email_updates: bool,
    pub timezone: String,
    pub language: String,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            dark_mode: true,
            sound_effects: true,
            email_updates: true,
            timezone: "UTC".to_string(),
            language: "English".to_string(),
        }
    }
}

/// The boolean switches in [`Preferences`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreferenceKey {
    DarkMode,
    SoundEffects,
    EmailUpdates,
}

impl PreferenceKey {
    pub const ALL: [PreferenceKey; 3] = [
        PreferenceKey::DarkMode,
        PreferenceKey::SoundEffects,
        PreferenceKey::EmailUpdates,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            PreferenceKey::DarkMode => "dark-mode",
            PreferenceKey::SoundEffects => "sound-effects",
            PreferenceKey::EmailUpdates => "email-updates",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        PreferenceKey::ALL
            .into_iter()
            .find(|key| key.id().eq_ignore_ascii_case(id.trim()))
    }

    pub fn title(&self) -> &'static str {
        match self {
            PreferenceKey::DarkMode => "Dark Mode",
            PreferenceKey::SoundEffects => "Sound Effects",
            PreferenceKey::EmailUpdates => "Email Updates",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            PreferenceKey::DarkMode => "Enable dark theme",
            PreferenceKey::SoundEffects => "Enable sound feedback",
            PreferenceKey::EmailUpdates => "Receive email notifications",
        }
    }
}

impl Preferences {
    pub fn get(&self, key: PreferenceKey) -> bool {
        match key {
            PreferenceKey::DarkMode => self.dark_mode,
            PreferenceKey::SoundEffects => self.sound_effects,
            PreferenceKey::EmailUpdates => self.email_updates,
        }
    }

    pub fn toggle(&mut self, key: PreferenceKey) -> bool {
        let flag = match key {
            PreferenceKey::DarkMode => &mut self.dark_mode,
            PreferenceKey::SoundEffects => &mut self.sound_effects,
            PreferenceKey::EmailUpdates => &mut self.email_updates,
        };
        *flag = !*flag;
        *flag
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ThemeChoice {
    #[default]
    #[serde(rename = "green")]
    Emerald,
    #[serde(rename = "blue")]
    Ocean,
    #[serde(rename = "purple")]
    Amethyst,
    #[serde(rename = "orange")]
    Sunset,
}

impl ThemeChoice {
    pub const ALL: [ThemeChoice; 4] = [
        ThemeChoice::Emerald,
        ThemeChoice::Ocean,
        ThemeChoice::Amethyst,
        ThemeChoice::Sunset,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            ThemeChoice::Emerald => "green",
            ThemeChoice::Ocean => "blue",
            ThemeChoice::Amethyst => "purple",
            ThemeChoice::Sunset => "orange",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ThemeChoice::Emerald => "Emerald",
            ThemeChoice::Ocean => "Ocean",
            ThemeChoice::Amethyst => "Amethyst",
            ThemeChoice::Sunset => "Sunset",
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            ThemeChoice::Emerald => Tone::Green,
            ThemeChoice::Ocean => Tone::Blue,
            ThemeChoice::Amethyst => Tone::Purple,
            ThemeChoice::Sunset => Tone::Orange,
        }
    }
}

impl fmt::Display for ThemeChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ThemeChoice {
    type Err = Error;

    /// Accepts either the id ("green") or the display name ("Emerald")
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        ThemeChoice::ALL
            .into_iter()
            .find(|theme| {
                theme.id().eq_ignore_ascii_case(needle) || theme.name().eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| Error::UnknownTheme(needle.to_string()))
    }
}

/// Dashboard metric card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metric {
    pub title: String,
    pub value: String,
    pub change: String,
    pub trend: Trend,
    pub tone: Tone,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineItem {
    pub id: u32,
    pub title: String,
    pub progress: u8,
    pub tone: Tone,
}

/// Per-habit performance shown in the progress view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HabitStat {
    pub id: u32,
    pub name: String,
    /// Display-only count of consecutive days
    pub streak: u32,
    pub completion: u8,
    pub trend: Trend,
    pub change: String,
    #[serde(default)]
    pub history: Vec<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Achievement {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub tone: Tone,
    pub achieved: bool,
}

/// Headline tile: big value with a caption
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryStat {
    pub title: String,
    pub value: String,
    pub caption: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_tone_thresholds() {
        assert_eq!(progress_tone(100), Tone::Green);
        assert_eq!(progress_tone(75), Tone::Green);
        assert_eq!(progress_tone(74), Tone::Orange);
        assert_eq!(progress_tone(50), Tone::Orange);
        assert_eq!(progress_tone(49), Tone::Blue);
        assert_eq!(progress_tone(0), Tone::Blue);
    }

    #[test]
    fn test_category_tone() {
        assert_eq!(category_tone("Fitness"), Tone::Green);
        assert_eq!(category_tone("Wellness"), Tone::Purple);
        assert_eq!(category_tone("Work"), Tone::Orange);
        assert_eq!(category_tone("Personal Development"), Tone::Blue);
        assert_eq!(category_tone("Hobby"), Tone::Gray);
    }

    #[test]
    fn test_theme_parse() {
        assert_eq!("green".parse::<ThemeChoice>().unwrap(), ThemeChoice::Emerald);
        assert_eq!(" Ocean ".parse::<ThemeChoice>().unwrap(), ThemeChoice::Ocean);
        assert_eq!("ORANGE".parse::<ThemeChoice>().unwrap(), ThemeChoice::Sunset);
        assert!(matches!(
            "teal".parse::<ThemeChoice>(),
            Err(Error::UnknownTheme(id)) if id == "teal"
        ));
    }

    #[test]
    fn test_preference_toggle() {
        let mut prefs = Preferences::default();
        assert!(!prefs.toggle(PreferenceKey::SoundEffects));
        assert!(!prefs.sound_effects);
        assert!(prefs.dark_mode);
        assert!(prefs.email_updates);
        assert!(prefs.toggle(PreferenceKey::SoundEffects));
    }

    #[test]
    fn test_preference_ids() {
        for key in PreferenceKey::ALL {
            assert_eq!(PreferenceKey::from_id(key.id()), Some(key));
        }
        assert_eq!(PreferenceKey::from_id("Dark-Mode"), Some(PreferenceKey::DarkMode));
        assert_eq!(PreferenceKey::from_id("night-mode"), None);
    }
}
