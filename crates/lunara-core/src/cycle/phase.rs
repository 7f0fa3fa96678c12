//! Cycle phase classification.
//!
//! A phase is never stored on its own -- it is always derived from a cycle
//! day number, so classification has to be total and periodic: day 29 of a
//! 28-day cycle is day 1 of the next one.

use serde::{Deserialize, Serialize};

/// Default cycle length in days.
///
/// The classic textbook value. Kept as a named constant so a per-user
/// length can be threaded through without touching the classification
/// logic.
pub const DEFAULT_CYCLE_LENGTH: u32 = 28;

/// Phase of the menstrual cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Menstrual,
    Follicular,
    Ovulatory,
    Luteal,
    /// No period start date has been recorded yet. Never produced by
    /// numeric classification.
    Unknown,
}

impl Phase {
    /// Human-readable label for CLI output.
    pub fn label(&self) -> &'static str {
        match self {
            Phase::Menstrual => "Menstrual",
            Phase::Follicular => "Follicular",
            Phase::Ovulatory => "Ovulatory",
            Phase::Luteal => "Luteal",
            Phase::Unknown => "Unknown",
        }
    }

    /// Single-character marker used when rendering calendar cells.
    pub fn glyph(&self) -> char {
        match self {
            Phase::Menstrual => 'M',
            Phase::Follicular => 'F',
            Phase::Ovulatory => 'O',
            Phase::Luteal => 'L',
            Phase::Unknown => '.',
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify a 1-based cycle day into a phase.
///
/// The day is first normalized into `[1, cycle_length]` with
/// `((day - 1) mod cycle_length) + 1`, so arbitrarily large day numbers
/// (multi-cycle spans) and even zero/negative offsets classify cleanly.
/// Boundaries are fixed and inclusive:
///
/// - days 1-5: menstrual
/// - days 6-13: follicular
/// - days 14-15: ovulatory
/// - days 16-28: luteal
pub fn classify_phase(day: i64, cycle_length: u32) -> Phase {
    let len = i64::from(cycle_length.max(1));
    let normalized = (day - 1).rem_euclid(len) + 1;
    match normalized {
        1..=5 => Phase::Menstrual,
        6..=13 => Phase::Follicular,
        14..=15 => Phase::Ovulatory,
        _ => Phase::Luteal,
    }
}
