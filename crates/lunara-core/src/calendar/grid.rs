//! Month grid construction.

use chrono::{Datelike, NaiveDate};

/// Weekday index of the first day of the month, 0 = Sunday.
pub fn first_weekday(year: i32, month: u32) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    Some(first.weekday().num_days_from_sunday())
}

/// Number of days in a month, leap-year aware.
///
/// Computed as the distance from the 1st of the month to the 1st of the
/// following month.
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    Some((next - first).num_days() as u32)
}

/// Ordered grid slots for a month: leading blanks for the weekday offset
/// of day 1, then the day numbers themselves.
///
/// The grid is not padded at the tail to a multiple of 7; its length is
/// exactly `first_weekday + days_in_month`. Returns `None` for an invalid
/// year/month pair.
pub fn month_grid(year: i32, month: u32) -> Option<Vec<Option<u32>>> {
    let blanks = first_weekday(year, month)?;
    let days = days_in_month(year, month)?;
    let mut grid = Vec::with_capacity((blanks + days) as usize);
    grid.extend(std::iter::repeat(None).take(blanks as usize));
    grid.extend((1..=days).map(Some));
    Some(grid)
}
