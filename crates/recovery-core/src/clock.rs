//! Calendar-day arithmetic anchored on a caller-supplied "today".
//!
//! Every day count in the engine is a difference between two local calendar
//! dates, never a duration divided by 24h. Stored dates are plain `YYYY-MM-DD`
//! strings and are parsed straight into [`NaiveDate`] so no timezone offset is
//! ever applied to them.
//!
//! The day sobriety began is day 0: a streak started today has 0 elapsed
//! days, and one started yesterday has 1.

use chrono::{DateTime, Datelike, Days, Months, NaiveDate, TimeZone};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Format of stored calendar dates.
pub const CALENDAR_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a stored `YYYY-MM-DD` string as a local calendar date.
pub fn parse_calendar_date(value: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(value.trim(), CALENDAR_DATE_FORMAT)
        .map_err(|_| ValidationError::InvalidDate(value.to_string()))
}

/// Add whole days to a calendar date, saturating at the end of chrono's range.
pub fn add_days(date: NaiveDate, days: u32) -> NaiveDate {
    date.checked_add_days(Days::new(days.into()))
        .unwrap_or(NaiveDate::MAX)
}

/// Non-negative calendar-day difference `to - from`.
fn days_between(from: NaiveDate, to: NaiveDate) -> u32 {
    let days = to.signed_duration_since(from).num_days().max(0);
    u32::try_from(days).unwrap_or(u32::MAX)
}

/// Half-open range of calendar dates `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Whether `date` falls in `[start, end)`.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date < self.end
    }

    /// Number of calendar days covered by the window.
    pub fn len_days(&self) -> u32 {
        days_between(self.start, self.end)
    }
}

/// The caller's notion of "now", reduced to a local calendar date.
///
/// The engine never reads the system clock. The presentation layer builds one
/// `Clock` per render pass and threads it through every computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Clock {
    today: NaiveDate,
}

impl Clock {
    /// Clock pinned to a local calendar date.
    pub fn on(today: NaiveDate) -> Self {
        Self { today }
    }

    /// Clock for an instant, using the calendar date in the instant's own zone.
    ///
    /// Pass `chrono::Local::now()` to get the user's local day.
    pub fn from_instant<Tz: TimeZone>(now: &DateTime<Tz>) -> Self {
        Self {
            today: now.date_naive(),
        }
    }

    /// Today's local calendar date.
    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Days elapsed since `start`, with the start day counted as day 0.
    ///
    /// A start date in the future yields 0.
    pub fn elapsed_days(&self, start: NaiveDate) -> u32 {
        days_between(start, self.today)
    }

    /// Days of the sobriety period `[start, today]` that fall inside
    /// `[window_start, window_end)`.
    ///
    /// Uses the same day-0 convention as [`Clock::elapsed_days`], so
    /// consecutive windows partition the total: summing this over every month
    /// since `start` gives exactly `elapsed_days(start)`.
    pub fn days_in_window(
        &self,
        start: NaiveDate,
        window_start: NaiveDate,
        window_end: NaiveDate,
    ) -> u32 {
        let from = start.max(window_start);
        let to = self.today.min(window_end);
        days_between(from, to)
    }

    /// The calendar month containing today.
    pub fn month_window(&self) -> DateWindow {
        let start = self.today - Days::new(self.today.day0().into());
        DateWindow::new(start, start + Months::new(1))
    }

    /// The calendar year containing today.
    pub fn year_window(&self) -> DateWindow {
        let start = self.today - Days::new(self.today.ordinal0().into());
        DateWindow::new(start, start + Months::new(12))
    }

    /// The `days`-long window ending today (inclusive).
    pub fn trailing_window(&self, days: u32) -> DateWindow {
        let end = add_days(self.today, 1);
        let start = end
            .checked_sub_days(Days::new(days.into()))
            .unwrap_or(NaiveDate::MIN);
        DateWindow::new(start, end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;
    use proptest::prelude::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn ten_days_after_new_year() {
        let clock = Clock::on(date(2024, 1, 11));
        assert_eq!(clock.elapsed_days(date(2024, 1, 1)), 10);
    }

    #[test]
    fn start_day_is_day_zero() {
        let clock = Clock::on(date(2024, 6, 1));
        assert_eq!(clock.elapsed_days(date(2024, 6, 1)), 0);
    }

    #[test]
    fn future_start_clamps_to_zero() {
        let clock = Clock::on(date(2024, 6, 1));
        assert_eq!(clock.elapsed_days(date(2024, 6, 20)), 0);
    }

    #[test]
    fn parse_does_not_shift_the_date() {
        let parsed = parse_calendar_date("2024-01-01").unwrap();
        assert_eq!(parsed, date(2024, 1, 1));
        assert!(parse_calendar_date("2024-13-01").is_err());
        assert!(parse_calendar_date("01/01/2024").is_err());
    }

    #[test]
    fn late_evening_in_western_zone_is_still_the_local_day() {
        // 23:30 at UTC-8 is already the next day in UTC.
        let pst = FixedOffset::west_opt(8 * 3600).unwrap();
        let now = pst.with_ymd_and_hms(2024, 1, 11, 23, 30, 0).unwrap();
        let clock = Clock::from_instant(&now);
        assert_eq!(clock.today(), date(2024, 1, 11));
        assert_eq!(clock.elapsed_days(date(2024, 1, 1)), 10);
    }

    #[test]
    fn dst_change_between_dates_does_not_shift_count() {
        // US spring-forward happened on 2024-03-10; "now" is observed in EDT.
        let edt = FixedOffset::west_opt(4 * 3600).unwrap();
        let now = edt.with_ymd_and_hms(2024, 3, 15, 0, 30, 0).unwrap();
        let clock = Clock::from_instant(&now);
        assert_eq!(clock.elapsed_days(date(2024, 3, 5)), 10);
    }

    #[test]
    fn window_before_start_counts_from_start() {
        let clock = Clock::on(date(2024, 3, 20));
        let days = clock.days_in_window(date(2024, 3, 10), date(2024, 3, 1), date(2024, 4, 1));
        assert_eq!(days, 10);
    }

    #[test]
    fn window_after_start_counts_from_window() {
        let clock = Clock::on(date(2024, 3, 20));
        let days = clock.days_in_window(date(2023, 12, 25), date(2024, 3, 1), date(2024, 4, 1));
        assert_eq!(days, 19);
    }

    #[test]
    fn window_in_the_past_is_capped_at_its_end() {
        let clock = Clock::on(date(2024, 3, 20));
        let days = clock.days_in_window(date(2024, 1, 1), date(2024, 2, 1), date(2024, 3, 1));
        assert_eq!(days, 29);
    }

    #[test]
    fn window_entirely_before_start_is_empty() {
        let clock = Clock::on(date(2024, 3, 20));
        let days = clock.days_in_window(date(2024, 3, 1), date(2024, 1, 1), date(2024, 2, 1));
        assert_eq!(days, 0);
    }

    #[test]
    fn month_and_year_windows() {
        let clock = Clock::on(date(2024, 12, 31));
        assert_eq!(
            clock.month_window(),
            DateWindow::new(date(2024, 12, 1), date(2025, 1, 1))
        );
        assert_eq!(
            clock.year_window(),
            DateWindow::new(date(2024, 1, 1), date(2025, 1, 1))
        );
        assert_eq!(clock.year_window().len_days(), 366);
    }

    #[test]
    fn trailing_window_includes_today() {
        let clock = Clock::on(date(2024, 3, 31));
        let window = clock.trailing_window(31);
        assert_eq!(window.start, date(2024, 3, 1));
        assert!(window.contains(date(2024, 3, 31)));
        assert!(!window.contains(date(2024, 2, 29)));
        assert_eq!(window.len_days(), 31);
    }

    proptest! {
        #[test]
        fn elapsed_matches_added_days(offset in 0u32..3_000, base in 0u32..10_000) {
            let start = add_days(date(1999, 1, 1), base);
            let clock = Clock::on(add_days(start, offset));
            prop_assert_eq!(clock.elapsed_days(start), offset);
        }

        #[test]
        fn monthly_windows_partition_elapsed_days(base in 0u32..2_000, offset in 0u32..900) {
            let start = add_days(date(2020, 1, 1), base);
            let clock = Clock::on(add_days(start, offset));
            let mut month = start - Days::new(start.day0().into());
            let mut sum = 0;
            while month <= clock.today() {
                let next = month + Months::new(1);
                sum += clock.days_in_window(start, month, next);
                month = next;
            }
            prop_assert_eq!(sum, clock.elapsed_days(start));
        }
    }
}
