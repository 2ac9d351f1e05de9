//! Read-only data handed to views

use chrono::{Local, NaiveDate};

use crate::domain::habit_grid::HabitGrid;
use crate::domain::SampleData;

/// Shared context available to all views.
///
/// Views never mutate it; they report back through [`super::Action`].
#[derive(Debug, Clone)]
pub struct Context {
    /// Date used for "today" highlighting
    pub today: NaiveDate,

    /// Sample data shown by the views
    pub data: SampleData,

    /// Habit grid materialized once at startup
    pub habit_grid: HabitGrid,
}

impl Context {
    pub fn new(data: SampleData, seed: Option<u64>) -> Self {
        let habit_grid = data.habit_grid.build(seed);
        Self {
            today: Local::now().date_naive(),
            data,
            habit_grid,
        }
    }

    /// Fixes "today", mostly for tests and screenshots
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    /// Re-reads the wall clock so highlighting follows midnight
    pub fn refresh_today(&mut self) {
        self.today = Local::now().date_naive();
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new(SampleData::builtin(), None)
    }
}
