use chrono::{Datelike, NaiveDate};
use clap::Subcommand;
use lunara_core::{Config, JournalIndex, JournalStore, MonthView};

use super::today;

#[derive(Subcommand)]
pub enum CalendarAction {
    /// Render a month with phase and mood annotations
    Show {
        /// Year to display (defaults to current)
        #[arg(long)]
        year: Option<i32>,
        /// Month to display, 1-12 (defaults to current)
        #[arg(long)]
        month: Option<u32>,
        /// Output machine-readable JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: CalendarAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        CalendarAction::Show { year, month, json } => {
            let today = today();
            let year = year.unwrap_or_else(|| today.year());
            let month = month.unwrap_or_else(|| today.month());

            let config = Config::load()?;
            let entries = JournalStore::open()?.load()?;
            let index = JournalIndex::build(&entries);

            let view = MonthView::build_with_length(
                year,
                month,
                config.cycle.start,
                config.cycle.length,
                &index,
                today,
            )
            .ok_or_else(|| format!("invalid month: {year}-{month}"))?;

            if json {
                println!("{}", serde_json::to_string_pretty(&view)?);
            } else {
                print_view(&view);
            }
        }
    }
    Ok(())
}

/// Render the view as a weekday-aligned text grid.
///
/// Each day cell is `DD<phase><mood?>`, today wrapped in brackets.
fn print_view(view: &MonthView) {
    let title = NaiveDate::from_ymd_opt(view.year, view.month, 1)
        .map(|d| d.format("%B %Y").to_string())
        .unwrap_or_default();
    println!("{title}");
    println!(" Su   Mo   Tu   We   Th   Fr   Sa");

    let mut line = String::new();
    for (i, cell) in view.cells.iter().enumerate() {
        let rendered = match cell.day {
            None => "     ".to_string(),
            Some(day) => {
                if cell.is_today {
                    // Today marker takes the mood column.
                    format!("[{:>2}{}]", day, cell.phase.glyph())
                } else {
                    let mood = cell.mood.map(|m| m.glyph()).unwrap_or(' ');
                    format!(" {:>2}{}{}", day, cell.phase.glyph(), mood)
                }
            }
        };
        line.push_str(&rendered);
        if (i + 1) % 7 == 0 {
            println!("{}", line.trim_end());
            line.clear();
        }
    }
    if !line.is_empty() {
        println!("{}", line.trim_end());
    }
    println!();
    println!("Phases: M menstrual  F follicular  O ovulatory  L luteal");
    println!("Moods:  + happy  ^ energetic  ~ neutral  - sad");
}
