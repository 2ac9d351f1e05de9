//! Completion matrix behind the dashboard habit grid.
//!
//! The grid is built once from a seed or from explicit rows and never
//! re-rolled while rendering.

use serde::{Deserialize, Serialize};

use super::model::Tone;

pub const DEFAULT_DAYS: usize = 30;
pub const DEFAULT_SEED: u64 = 0x5eed_f10e;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HabitRow {
    pub habit: String,
    pub tone: Tone,
    /// Explicit completion flags; generated from the seed when absent
    #[serde(default)]
    pub days: Option<Vec<bool>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HabitGridSource {
    #[serde(default = "default_days")]
    pub days: usize,
    #[serde(default)]
    pub seed: Option<u64>,
    pub rows: Vec<HabitRow>,
}

fn default_days() -> usize {
    DEFAULT_DAYS
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HabitGrid {
    pub rows: Vec<GridRow>,
    pub days: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridRow {
    pub habit: String,
    pub tone: Tone,
    pub completed: Vec<bool>,
}

impl GridRow {
    pub fn completed_count(&self) -> usize {
        self.completed.iter().filter(|done| **done).count()
    }
}

impl HabitGridSource {
    /// Materializes the grid. `seed_override` wins over `self.seed`.
    pub fn build(&self, seed_override: Option<u64>) -> HabitGrid {
        let seed = seed_override.or(self.seed).unwrap_or(DEFAULT_SEED);
        let rows = self
            .rows
            .iter()
            .enumerate()
            .map(|(habit_index, row)| {
                let completed = match &row.days {
                    Some(days) => (0..self.days)
                        .map(|day| days.get(day).copied().unwrap_or(false))
                        .collect(),
                    None => (0..self.days)
                        .map(|day| seeded_completion(seed, habit_index as u64, day as u64))
                        .collect(),
                };
                GridRow {
                    habit: row.habit.clone(),
                    tone: row.tone,
                    completed,
                }
            })
            .collect();
        HabitGrid {
            rows,
            days: self.days,
        }
    }
}

/// Roughly 70% of cells come out completed.
fn seeded_completion(seed: u64, habit: u64, day: u64) -> bool {
    mix(seed ^ habit.wrapping_mul(0x9e37_79b9_7f4a_7c15) ^ day.wrapping_mul(0xbf58_476d_1ce4_e5b9))
        % 10
        >= 3
}

// splitmix64 finalizer
fn mix(mut z: u64) -> u64 {
    z = z.wrapping_add(0x9e37_79b9_7f4a_7c15);
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}
