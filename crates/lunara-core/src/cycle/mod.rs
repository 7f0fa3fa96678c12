//! Cycle engine: pure date math over a recorded period start.
//!
//! Everything here is a pure function of its inputs. The caller owns the
//! single `Cycle` value and replaces it wholesale on update -- there is no
//! internal state and no I/O.

mod phase;

pub use phase::{classify_phase, Phase, DEFAULT_CYCLE_LENGTH};

use chrono::{Duration, NaiveDate, TimeZone};
use serde::{Deserialize, Serialize};

/// Cycle days 11-18 are treated as the fertile window.
const FERTILE_START_OFFSET: i64 = 10;
const FERTILE_END_OFFSET: i64 = 17;

/// Snapshot of the current cycle state.
///
/// Immutable: recording a new period start builds a fresh value via
/// [`Cycle::at`] and the caller replaces its held copy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cycle {
    /// Most recent recorded period start.
    pub start: NaiveDate,
    /// 1-based day within the cycle, clamped to >= 1.
    pub current_day: i64,
    /// Phase derived from `current_day`.
    pub phase: Phase,
}

impl Cycle {
    /// Build the cycle state for `reference` given a period start.
    ///
    /// `current_day` is clamped to 1 when `start` lies in the future, so
    /// a freshly recorded start always reads as "Day 1".
    pub fn at(start: NaiveDate, reference: NaiveDate) -> Self {
        Self::with_length(start, reference, DEFAULT_CYCLE_LENGTH)
    }

    /// Like [`Cycle::at`] with an explicit cycle length.
    pub fn with_length(start: NaiveDate, reference: NaiveDate, cycle_length: u32) -> Self {
        let current_day = cycle_day(reference, start).max(1);
        Self {
            start,
            current_day,
            phase: classify_phase(current_day, cycle_length),
        }
    }
}

/// Inclusive 1-based count of calendar days from `start` to `reference`.
///
/// The start day itself is day 1. Not clamped: a future `start` yields
/// zero or a negative number, and callers that display the value clamp
/// explicitly (see [`Cycle::at`]).
pub fn cycle_day(reference: NaiveDate, start: NaiveDate) -> i64 {
    (reference - start).num_days() + 1
}

/// [`cycle_day`] for timestamped inputs.
///
/// Both timestamps are truncated to their local calendar day first, so two
/// times on the same day always produce the same day number.
pub fn cycle_day_at<Tz: TimeZone>(
    reference: chrono::DateTime<Tz>,
    start: chrono::DateTime<Tz>,
) -> i64 {
    cycle_day(reference.date_naive(), start.date_naive())
}

/// Projected start of the next period: `start + cycle_length`.
pub fn next_period(start: NaiveDate) -> NaiveDate {
    next_period_with_length(start, DEFAULT_CYCLE_LENGTH)
}

pub fn next_period_with_length(start: NaiveDate, cycle_length: u32) -> NaiveDate {
    start + Duration::days(i64::from(cycle_length))
}

/// Projected fertile window: cycle days 11 through 18, inclusive.
pub fn fertile_window(start: NaiveDate) -> (NaiveDate, NaiveDate) {
    (
        start + Duration::days(FERTILE_START_OFFSET),
        start + Duration::days(FERTILE_END_OFFSET),
    )
}

/// Format a date as "short-month day", e.g. "Jan 5".
pub fn short_date(date: NaiveDate) -> String {
    format!("{} {}", date.format("%b"), date.format("%-d"))
}

/// Fertile window formatted for display, en dash between the endpoints:
/// "Jan 11 – Jan 18".
pub fn fertile_window_label(start: NaiveDate) -> String {
    let (from, to) = fertile_window(start);
    format!("{} – {}", short_date(from), short_date(to))
}

/// Phase of an arbitrary calendar date, tolerating an unconfigured cycle.
///
/// Returns [`Phase::Unknown`] when no start has been recorded; otherwise
/// classifies the date's cycle day. This is the one path that produces
/// `Unknown` -- the numeric classification itself never does.
pub fn phase_on(date: NaiveDate, start: Option<NaiveDate>, cycle_length: u32) -> Phase {
    match start {
        Some(start) => classify_phase(cycle_day(date, start), cycle_length),
        None => Phase::Unknown,
    }
}
