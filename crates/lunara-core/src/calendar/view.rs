//! Month view composition: grid slots annotated with phase, journal mood
//! and a today marker.
//!
//! Recomputed per render from the raw cycle start and journal index --
//! cells are transient and never stored.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::grid::month_grid;
use crate::cycle::{phase_on, Phase, DEFAULT_CYCLE_LENGTH};
use crate::journal::{date_key, JournalIndex, Mood};

/// One slot of a rendered month. `day` is `None` for the leading blanks
/// that align day 1 with its weekday column.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarCell {
    pub day: Option<u32>,
    /// `YYYY-MM-DD` for day cells, empty for blanks.
    pub date_key: String,
    pub phase: Phase,
    pub is_today: bool,
    pub mood: Option<Mood>,
}

impl CalendarCell {
    fn blank() -> Self {
        Self {
            day: None,
            date_key: String::new(),
            phase: Phase::Unknown,
            is_today: false,
            mood: None,
        }
    }
}

/// A fully annotated month, ready for a presentation layer to render.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthView {
    pub year: i32,
    pub month: u32,
    pub cells: Vec<CalendarCell>,
}

impl MonthView {
    /// Compose the view for one month.
    ///
    /// Each day slot gets its phase from the cycle start (Unknown when no
    /// start is recorded), its mood from the journal index, and a today
    /// flag by exact date match. Returns `None` for an invalid
    /// year/month pair.
    pub fn build(
        year: i32,
        month: u32,
        cycle_start: Option<NaiveDate>,
        journal: &JournalIndex,
        today: NaiveDate,
    ) -> Option<Self> {
        Self::build_with_length(year, month, cycle_start, DEFAULT_CYCLE_LENGTH, journal, today)
    }

    /// [`MonthView::build`] with an explicit cycle length.
    pub fn build_with_length(
        year: i32,
        month: u32,
        cycle_start: Option<NaiveDate>,
        cycle_length: u32,
        journal: &JournalIndex,
        today: NaiveDate,
    ) -> Option<Self> {
        let grid = month_grid(year, month)?;
        let cells = grid
            .into_iter()
            .map(|slot| {
                // month_grid only yields days valid for this month.
                let date = slot.and_then(|day| NaiveDate::from_ymd_opt(year, month, day));
                match (slot, date) {
                    (Some(day), Some(date)) => CalendarCell {
                        day: Some(day),
                        date_key: date_key(date),
                        phase: phase_on(date, cycle_start, cycle_length),
                        is_today: date == today,
                        mood: journal.lookup_date(date).map(|e| e.mood),
                    },
                    _ => CalendarCell::blank(),
                }
            })
            .collect();
        Some(Self { year, month, cells })
    }
}
