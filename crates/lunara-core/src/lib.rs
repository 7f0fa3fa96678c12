//! # Lunara Core Library
//!
//! This library provides the core business logic for the Lunara cycle
//! calendar. It implements a CLI-first philosophy where all operations are
//! available via a standalone CLI binary, with any GUI being a thin layer
//! over the same core library.
//!
//! ## Architecture
//!
//! - **Cycle Engine**: pure date math deriving cycle day, phase, and the
//!   next-period / fertile-window projections from a recorded period start
//! - **Calendar**: month grid construction and per-cell annotation
//!   (phase, today marker, journal mood)
//! - **Journal**: dated entries with an O(1) date-keyed lookup index
//! - **Storage**: TOML-based configuration and a JSON journal file
//!
//! ## Key Components
//!
//! - [`Cycle`]: immutable snapshot of cycle day and phase
//! - [`MonthView`]: fully annotated month ready for rendering
//! - [`JournalIndex`]: date-keyed entry lookup
//! - [`Config`]: application configuration management

pub mod calendar;
pub mod cycle;
pub mod error;
pub mod journal;
pub mod storage;

pub use calendar::{days_in_month, first_weekday, month_grid, CalendarCell, MonthView};
pub use cycle::{
    classify_phase, cycle_day, cycle_day_at, fertile_window, fertile_window_label, next_period,
    next_period_with_length, phase_on, short_date, Cycle, Phase, DEFAULT_CYCLE_LENGTH,
};
pub use error::{ConfigError, CoreError, JournalError, Result};
pub use journal::{date_key, JournalEntry, JournalIndex, Mood};
pub use storage::{Config, CycleConfig, JournalStore};
