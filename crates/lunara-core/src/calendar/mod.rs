//! Calendar grid construction and month-view composition.

pub mod grid;
pub mod view;

pub use grid::{days_in_month, first_weekday, month_grid};
pub use view::{CalendarCell, MonthView};
