pub mod calendar;
pub mod config;
pub mod cycle;
pub mod journal;

use lunara_core::CoreError;

/// Parse a user-supplied `YYYY-MM-DD` date, rejecting it before any
/// engine function sees it.
pub fn parse_date(input: &str) -> Result<chrono::NaiveDate, CoreError> {
    input
        .parse::<chrono::NaiveDate>()
        .map_err(|_| CoreError::InvalidDate {
            input: input.to_string(),
        })
}

/// Today's date at local calendar-day granularity.
pub fn today() -> chrono::NaiveDate {
    chrono::Local::now().date_naive()
}
