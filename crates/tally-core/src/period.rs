//! Reporting windows
//!
//! Every window is a half-open date interval `[from, to)`: start inclusive,
//! end exclusive. Month boundaries are computed with explicit first-day /
//! next-month arithmetic so the calendar handles month lengths and year
//! rollover.

use chrono::{Datelike, Duration, NaiveDate};

/// `[day, day + 1)`
pub fn today_window(day: NaiveDate) -> (NaiveDate, NaiveDate) {
    (day, day + Duration::days(1))
}

/// The calendar month containing `day`: `[first_of_month, first_of_next_month)`
pub fn month_window(day: NaiveDate) -> (NaiveDate, NaiveDate) {
    let from = NaiveDate::from_ymd_opt(day.year(), day.month(), 1).unwrap();
    (from, first_of_next_month(day))
}

/// The calendar month before the one containing `day`
pub fn previous_month_window(day: NaiveDate) -> (NaiveDate, NaiveDate) {
    // Rewind to the last day of the previous month, then reuse the same
    // first/last-day formula.
    let last_of_previous = NaiveDate::from_ymd_opt(day.year(), day.month(), 1)
        .unwrap()
        .pred_opt()
        .unwrap();
    month_window(last_of_previous)
}

fn first_of_next_month(day: NaiveDate) -> NaiveDate {
    if day.month() == 12 {
        NaiveDate::from_ymd_opt(day.year() + 1, 1, 1).unwrap()
    } else {
        NaiveDate::from_ymd_opt(day.year(), day.month() + 1, 1).unwrap()
    }
}
