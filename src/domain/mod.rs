pub mod calendar;
pub mod habit_grid;
pub mod model;
pub mod sample;

pub use calendar::{CalendarMode, CalendarSelection, MonthCursor};
pub use habit_grid::{HabitGrid, HabitGridSource};
pub use model::*;
pub use sample::SampleData;
