//! Sample data set shown by the views.
//!
//! The built-in set is used unless a JSON or TOML file is supplied.

use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::habit_grid::{HabitGridSource, HabitRow, DEFAULT_DAYS};
use super::model::{
    Achievement, Event, EventKind, Goal, HabitStat, Metric, Milestone, NotificationSetting,
    Preferences, Priority, SummaryStat, TimelineItem, Tone, Trend,
};
use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleData {
    pub metrics: Vec<Metric>,
    pub timeline: Vec<TimelineItem>,
    pub habit_grid: HabitGridSource,
    pub events: Vec<Event>,
    pub goals: Vec<Goal>,
    pub goal_summary: Vec<SummaryStat>,
    pub habits: Vec<HabitStat>,
    pub achievements: Vec<Achievement>,
    pub progress_summary: Vec<SummaryStat>,
    pub notifications: Vec<NotificationSetting>,
    #[serde(default)]
    pub preferences: Preferences,
    /// Sidebar "Weekly Progress" gauge
    #[serde(default = "default_weekly_progress")]
    pub weekly_progress: u8,
}

fn default_weekly_progress() -> u8 {
    75
}

impl Default for SampleData {
    fn default() -> Self {
        Self::builtin()
    }
}

impl SampleData {
    /// Reads a sample set from `.json` or `.toml`.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|err| Error::Data {
            path: path.to_path_buf(),
            message: err.to_string(),
        })?;
        let is_toml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("toml"))
            .unwrap_or(false);
        debug!(path = %path.display(), toml = is_toml, "parsing sample data");

        let parsed = if is_toml {
            toml::from_str::<SampleData>(&content).map_err(|err| err.to_string())
        } else {
            serde_json::from_str::<SampleData>(&content).map_err(|err| err.to_string())
        };
        let data = parsed.map_err(|message| Error::Data {
            path: path.to_path_buf(),
            message,
        })?;
        info!(
            path = %path.display(),
            goals = data.goals.len(),
            events = data.events.len(),
            "loaded sample data"
        );
        Ok(data)
    }

    pub fn builtin() -> Self {
        Self {
            metrics: vec![
                metric("Weekly Progress", "76%", "+12%", Trend::Up, Tone::Green),
                metric("Current Streak", "14", "+2", Trend::Up, Tone::Orange),
                metric("Completion Rate", "89%", "+5%", Trend::Up, Tone::White),
            ],
            timeline: vec![
                timeline(1, "Morning Routine", 75, Tone::Green),
                timeline(2, "Workout", 100, Tone::Orange),
                timeline(3, "Reading", 50, Tone::White),
            ],
            habit_grid: HabitGridSource {
                days: DEFAULT_DAYS,
                seed: None,
                rows: vec![
                    grid_row("Exercise", Tone::Green),
                    grid_row("Meditation", Tone::Orange),
                    grid_row("Reading", Tone::White),
                ],
            },
            events: vec![
                event(1, "Morning Meditation", "7:00 AM", EventKind::Habit, Some(true), "Wellness"),
                event(2, "Workout Session", "8:00 AM", EventKind::Habit, Some(false), "Fitness"),
                event(3, "Team Meeting", "10:00 AM", EventKind::Event, None, "Work"),
                event(
                    4,
                    "Reading",
                    "7:00 PM",
                    EventKind::Habit,
                    Some(true),
                    "Personal Development",
                ),
                event(5, "Evening Run", "6:00 PM", EventKind::Habit, Some(false), "Fitness"),
            ],
            goals: vec![
                Goal {
                    id: 1,
                    title: "Run a Marathon".into(),
                    description: "Complete a full marathon in under 4 hours".into(),
                    deadline: ymd(2024, 12, 31),
                    progress: 65,
                    milestones: milestones(&[
                        ("Run 5km without stopping", true),
                        ("Complete a half marathon", true),
                        ("Train 4 times per week", false),
                        ("Complete marathon preparation plan", false),
                    ]),
                    category: "Fitness".into(),
                    priority: Priority::High,
                },
                Goal {
                    id: 2,
                    title: "Learn Spanish".into(),
                    description: "Achieve B2 level in Spanish".into(),
                    deadline: ymd(2024, 9, 30),
                    progress: 40,
                    milestones: milestones(&[
                        ("Complete basic vocabulary", true),
                        ("Practice daily conversations", true),
                        ("Pass intermediate exam", false),
                    ]),
                    category: "Education".into(),
                    priority: Priority::Medium,
                },
                Goal {
                    id: 3,
                    title: "Launch Side Project".into(),
                    description: "Develop and launch a web application".into(),
                    deadline: ymd(2024, 6, 30),
                    progress: 25,
                    milestones: milestones(&[
                        ("Complete MVP design", true),
                        ("Develop core features", false),
                        ("Beta testing", false),
                        ("Official launch", false),
                    ]),
                    category: "Career".into(),
                    priority: Priority::High,
                },
            ],
            goal_summary: vec![
                summary("Achievement Rate", "78%", "Goals completed this year"),
                summary("Upcoming Deadlines", "2", "Goals due this month"),
            ],
            habits: vec![
                habit(1, "Morning Meditation", 14, 92, Trend::Up, "+8%", &[65, 70, 85, 82, 90, 88, 92]),
                habit(2, "Exercise", 7, 78, Trend::Up, "+12%", &[45, 52, 60, 65, 70, 75, 78]),
                habit(3, "Reading", 5, 65, Trend::Down, "-5%", &[70, 72, 68, 65, 63, 64, 65]),
            ],
            achievements: vec![
                achievement(
                    1,
                    "7 Day Streak",
                    "Maintained a habit for 7 consecutive days",
                    Tone::Orange,
                    true,
                ),
                achievement(
                    2,
                    "Early Bird",
                    "Completed morning routine for 30 days",
                    Tone::Purple,
                    true,
                ),
                achievement(
                    3,
                    "Consistency King",
                    "Achieved 90% completion rate",
                    Tone::Green,
                    false,
                ),
            ],
            progress_summary: vec![
                summary("Overall Progress", "78%", "Average completion rate"),
                summary("Best Streak", "14 days", "Morning Meditation"),
                summary("Achievements", "2/3", "Milestones reached"),
            ],
            notifications: vec![
                notification(
                    "daily-reminder",
                    "Daily Reminders",
                    "Get notified about your daily habits",
                    true,
                ),
                notification(
                    "weekly-summary",
                    "Weekly Summary",
                    "Receive a weekly progress report",
                    true,
                ),
                notification(
                    "milestone-alerts",
                    "Milestone Alerts",
                    "Get notified when you reach milestones",
                    false,
                ),
            ],
            preferences: Preferences::default(),
            weekly_progress: default_weekly_progress(),
        }
    }
}

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn metric(title: &str, value: &str, change: &str, trend: Trend, tone: Tone) -> Metric {
    Metric {
        title: title.into(),
        value: value.into(),
        change: change.into(),
        trend,
        tone,
    }
}

fn timeline(id: u32, title: &str, progress: u8, tone: Tone) -> TimelineItem {
    TimelineItem {
        id,
        title: title.into(),
        progress,
        tone,
    }
}

fn grid_row(habit: &str, tone: Tone) -> HabitRow {
    HabitRow {
        habit: habit.into(),
        tone,
        days: None,
    }
}

fn event(
    id: u32,
    title: &str,
    time: &str,
    kind: EventKind,
    completed: Option<bool>,
    category: &str,
) -> Event {
    Event {
        id,
        title: title.into(),
        time: time.into(),
        kind,
        completed,
        category: Some(category.into()),
    }
}

fn milestones(items: &[(&str, bool)]) -> Vec<Milestone> {
    items
        .iter()
        .enumerate()
        .map(|(idx, (title, completed))| Milestone {
            id: idx as u32 + 1,
            title: (*title).into(),
            completed: *completed,
        })
        .collect()
}

fn summary(title: &str, value: &str, caption: &str) -> SummaryStat {
    SummaryStat {
        title: title.into(),
        value: value.into(),
        caption: caption.into(),
    }
}

fn habit(
    id: u32,
    name: &str,
    streak: u32,
    completion: u8,
    trend: Trend,
    change: &str,
    history: &[u64],
) -> HabitStat {
    HabitStat {
        id,
        name: name.into(),
        streak,
        completion,
        trend,
        change: change.into(),
        history: history.to_vec(),
    }
}

fn achievement(id: u32, title: &str, description: &str, tone: Tone, achieved: bool) -> Achievement {
    Achievement {
        id,
        title: title.into(),
        description: description.into(),
        tone,
        achieved,
    }
}

fn notification(id: &str, title: &str, description: &str, enabled: bool) -> NotificationSetting {
    NotificationSetting {
        id: id.into(),
        title: title.into(),
        description: description.into(),
        enabled,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("habit-flow-{}-{}", std::process::id(), name))
    }

    #[test]
    fn test_builtin_shape() {
        let data = SampleData::builtin();
        assert_eq!(data.metrics.len(), 3);
        assert_eq!(data.events.len(), 5);
        assert_eq!(data.goals.len(), 3);
        assert_eq!(data.goals[0].milestones.len(), 4);
        assert_eq!(data.goals[0].completed_milestones(), 2);
        assert_eq!(data.habit_grid.rows.len(), 3);
        assert_eq!(data.notifications.len(), 3);
        assert!(!data.notifications[2].enabled);
    }

    #[test]
    fn test_json_load() {
        let path = temp_path("sample.json");
        let mut data = SampleData::builtin();
        data.goals.truncate(1);
        fs::write(&path, serde_json::to_string_pretty(&data).unwrap()).unwrap();

        let loaded = SampleData::load(&path).unwrap();
        assert_eq!(loaded, data);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_toml_load() {
        let path = temp_path("sample.toml");
        let data = SampleData::builtin();
        fs::write(&path, toml::to_string(&data).unwrap()).unwrap();

        let loaded = SampleData::load(&path).unwrap();
        assert_eq!(loaded.goals, data.goals);
        assert_eq!(loaded.habit_grid, data.habit_grid);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_bad_or_missing_file_is_data_error() {
        let path = temp_path("broken.json");
        fs::write(&path, "{ not json").unwrap();
        let err = SampleData::load(&path).unwrap_err();
        assert!(matches!(err, Error::Data { .. }));
        let _ = fs::remove_file(&path);

        let missing = temp_path("missing.json");
        match SampleData::load(&missing) {
            Err(Error::Data { path, .. }) => assert_eq!(path, missing),
            other => panic!("expected data error, got {other:?}"),
        }
    }
}
