//! Month arithmetic and the calendar selection state machine

use chrono::{Datelike, NaiveDate};

use crate::error::{Error, Result};

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

pub const WEEK_DAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// A displayed month. `month` is 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct MonthCursor {
    pub year: i32,
    pub month: u32,
}

impl MonthCursor {
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Moves by `delta` months, carrying into the year.
    pub fn shift(self, delta: i32) -> Self {
        let index = i64::from(self.year) * 12 + i64::from(self.month) - 1 + i64::from(delta);
        Self {
            year: index.div_euclid(12) as i32,
            month: index.rem_euclid(12) as u32 + 1,
        }
    }

    pub fn prev(self) -> Self {
        self.shift(-1)
    }

    pub fn next(self) -> Self {
        self.shift(1)
    }

    pub fn name(&self) -> &'static str {
        MONTH_NAMES[(self.month - 1) as usize]
    }

    pub fn title(&self) -> String {
        format!("{} {}", self.name(), self.year)
    }

    pub fn first_day(&self) -> NaiveDate {
        // month is always 1..=12 and day 1 always exists
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or_default()
    }

    pub fn days_in_month(&self) -> u32 {
        let next = self.next().first_day();
        next.pred_opt().map(|d| d.day()).unwrap_or(31)
    }

    /// Blank cells before day 1 in a Sunday-first grid
    pub fn first_weekday_offset(&self) -> u32 {
        self.first_day().weekday().num_days_from_sunday()
    }

    pub fn date(&self, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, day)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// Number of grid rows needed to show the month
    pub fn week_rows(&self) -> u32 {
        (self.first_weekday_offset() + self.days_in_month()).div_ceil(7)
    }

    /// Grid row (0-based) holding `day`
    pub fn week_row_of(&self, day: u32) -> u32 {
        (self.first_weekday_offset() + day.saturating_sub(1)) / 7
    }

    /// Day number at a grid cell, if the cell holds one
    pub fn day_at(&self, row: u32, col: u32) -> Option<u32> {
        if col >= 7 {
            return None;
        }
        let index = row * 7 + col;
        let offset = self.first_weekday_offset();
        if index < offset {
            return None;
        }
        let day = index - offset + 1;
        (day <= self.days_in_month()).then_some(day)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarMode {
    Month,
    Week,
}

impl CalendarMode {
    pub fn title(&self) -> &'static str {
        match self {
            CalendarMode::Month => "Month",
            CalendarMode::Week => "Week",
        }
    }
}

/// Calendar view state: displayed month plus an optional selected date.
///
/// "Today" and "selected" highlighting are derived from this on every
/// render; no per-cell flags are stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarSelection {
    pub displayed: MonthCursor,
    pub selected: Option<NaiveDate>,
    pub mode: CalendarMode,
    /// Keyboard cursor inside the displayed month
    pub cursor_day: u32,
}

impl CalendarSelection {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            displayed: MonthCursor::of(today),
            selected: None,
            mode: CalendarMode::Month,
            cursor_day: today.day(),
        }
    }

    /// Stores (year, month, day) of the displayed month as the selection.
    pub fn select_day(&mut self, day: u32) -> Result<NaiveDate> {
        let date = self
            .displayed
            .date(day)
            .ok_or(Error::DayOutOfRange {
                year: self.displayed.year,
                month: self.displayed.month,
                day,
            })?;
        self.selected = Some(date);
        self.cursor_day = day;
        Ok(date)
    }

    pub fn select_cursor(&mut self) -> Result<NaiveDate> {
        self.select_day(self.cursor_day)
    }

    pub fn prev_month(&mut self) {
        self.displayed = self.displayed.prev();
        self.clamp_cursor();
    }

    pub fn next_month(&mut self) {
        self.displayed = self.displayed.next();
        self.clamp_cursor();
    }

    pub fn toggle_mode(&mut self) {
        self.mode = match self.mode {
            CalendarMode::Month => CalendarMode::Week,
            CalendarMode::Week => CalendarMode::Month,
        };
    }

    /// Moves the cursor by `delta` days, clamped to the displayed month.
    pub fn move_cursor(&mut self, delta: i32) {
        let max = self.displayed.days_in_month() as i32;
        self.cursor_day = (self.cursor_day as i32 + delta).clamp(1, max) as u32;
    }

    pub fn is_today(&self, day: u32, today: NaiveDate) -> bool {
        self.displayed.contains(today) && today.day() == day
    }

    pub fn is_selected(&self, day: u32) -> bool {
        self.selected
            .map(|date| self.displayed.contains(date) && date.day() == day)
            .unwrap_or(false)
    }

    /// Grid rows shown for the current mode
    pub fn visible_rows(&self) -> std::ops::Range<u32> {
        match self.mode {
            CalendarMode::Month => 0..self.displayed.week_rows(),
            CalendarMode::Week => {
                let row = self.displayed.week_row_of(self.cursor_day);
                row..row + 1
            }
        }
    }

    /// Side panel heading: "<Month> <day>" or "Today's Schedule"
    pub fn schedule_title(&self) -> String {
        match self.selected {
            Some(date) => format!("{} {}", MonthCursor::of(date).name(), date.day()),
            None => "Today's Schedule".to_string(),
        }
    }

    fn clamp_cursor(&mut self) {
        self.cursor_day = self.cursor_day.clamp(1, self.displayed.days_in_month());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_month_rollover() {
        let jan = MonthCursor { year: 2024, month: 1 };
        assert_eq!(jan.prev(), MonthCursor { year: 2023, month: 12 });
        let dec = MonthCursor { year: 2024, month: 12 };
        assert_eq!(dec.next(), MonthCursor { year: 2025, month: 1 });
    }

    #[test]
    fn test_shift_large_deltas() {
        let base = MonthCursor { year: 2024, month: 5 };
        assert_eq!(base.shift(13), MonthCursor { year: 2025, month: 6 });
        assert_eq!(base.shift(-17), MonthCursor { year: 2022, month: 12 });
        assert_eq!(base.shift(0), base);
        assert_eq!(base.shift(-6), MonthCursor { year: 2023, month: 11 });
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(MonthCursor { year: 2024, month: 2 }.days_in_month(), 29);
        assert_eq!(MonthCursor { year: 2023, month: 2 }.days_in_month(), 28);
        assert_eq!(MonthCursor { year: 1900, month: 2 }.days_in_month(), 28);
        assert_eq!(MonthCursor { year: 2000, month: 2 }.days_in_month(), 29);
        assert_eq!(MonthCursor { year: 2024, month: 4 }.days_in_month(), 30);
        assert_eq!(MonthCursor { year: 2024, month: 12 }.days_in_month(), 31);
    }

    #[test]
    fn test_grid_geometry() {
        // 2024-09-01 is a Sunday, 2024-02-01 a Thursday
        let sep = MonthCursor { year: 2024, month: 9 };
        assert_eq!(sep.first_weekday_offset(), 0);
        assert_eq!(sep.day_at(0, 0), Some(1));
        assert_eq!(sep.week_rows(), 5);

        let feb = MonthCursor { year: 2024, month: 2 };
        assert_eq!(feb.first_weekday_offset(), 4);
        assert_eq!(feb.day_at(0, 3), None);
        assert_eq!(feb.day_at(0, 4), Some(1));
        assert_eq!(feb.day_at(4, 4), Some(29));
        assert_eq!(feb.day_at(4, 5), None);
        assert_eq!(feb.week_row_of(29), 4);
    }

    #[test]
    fn test_select_day_overwrites_previous() {
        let mut cal = CalendarSelection::new(date(2024, 3, 10));
        assert_eq!(cal.selected, None);
        cal.select_day(4).unwrap();
        cal.select_day(15).unwrap();
        assert_eq!(cal.selected, Some(date(2024, 3, 15)));
        assert_eq!(cal.cursor_day, 15);
    }

    #[test]
    fn test_select_day_out_of_range_keeps_state() {
        let mut cal = CalendarSelection::new(date(2023, 2, 10));
        cal.select_day(3).unwrap();
        let err = cal.select_day(29).unwrap_err();
        assert!(matches!(err, Error::DayOutOfRange { day: 29, .. }));
        assert!(cal.select_day(0).is_err());
        assert_eq!(cal.selected, Some(date(2023, 2, 3)));
    }

    #[test]
    fn test_month_navigation_keeps_selection() {
        let mut cal = CalendarSelection::new(date(2024, 1, 31));
        cal.select_day(31).unwrap();
        cal.prev_month();
        assert_eq!(cal.displayed, MonthCursor { year: 2023, month: 12 });
        assert_eq!(cal.selected, Some(date(2024, 1, 31)));
        assert!(!cal.is_selected(31));

        cal.next_month();
        cal.next_month();
        assert_eq!(cal.displayed, MonthCursor { year: 2024, month: 2 });
        // cursor clamps into the shorter month
        assert_eq!(cal.cursor_day, 29);
        cal.prev_month();
        assert!(cal.is_selected(31));
    }

    #[test]
    fn test_today_highlight_is_derived() {
        let today = date(2024, 6, 12);
        let mut cal = CalendarSelection::new(today);
        assert!(cal.is_today(12, today));
        assert!(!cal.is_today(11, today));
        cal.next_month();
        assert!(!cal.is_today(12, today));
    }

    #[test]
    fn test_schedule_title() {
        let mut cal = CalendarSelection::new(date(2024, 6, 12));
        assert_eq!(cal.schedule_title(), "Today's Schedule");
        cal.select_day(15).unwrap();
        assert_eq!(cal.schedule_title(), "June 15");
    }

    #[test]
    fn test_week_mode_rows() {
        let mut cal = CalendarSelection::new(date(2024, 9, 18));
        assert_eq!(cal.visible_rows(), 0..5);
        cal.toggle_mode();
        assert_eq!(cal.mode, CalendarMode::Week);
        assert_eq!(cal.visible_rows(), 2..3);
        cal.move_cursor(-100);
        assert_eq!(cal.cursor_day, 1);
        assert_eq!(cal.visible_rows(), 0..1);
    }
}
