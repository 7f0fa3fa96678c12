use clap::Subcommand;
use lunara_core::{
    classify_phase, fertile_window, fertile_window_label, next_period_with_length, short_date,
    Config, Cycle, Phase,
};

use super::{parse_date, today};

#[derive(Subcommand)]
pub enum CycleAction {
    /// Current cycle day, phase, and projections
    Status {
        /// Output machine-readable JSON
        #[arg(long)]
        json: bool,
    },
    /// Record a new period start date (YYYY-MM-DD)
    Set {
        date: String,
    },
    /// Classify an arbitrary cycle day into a phase
    Phase {
        /// 1-based cycle day number
        #[arg(long)]
        day: i64,
        /// Cycle length override
        #[arg(long)]
        length: Option<u32>,
    },
    /// Next period and fertile window projections
    Projections {
        /// Output machine-readable JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: CycleAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        CycleAction::Status { json } => {
            let config = Config::load()?;
            match config.cycle.start {
                Some(start) => {
                    let cycle = Cycle::with_length(start, today(), config.cycle.length);
                    if json {
                        println!("{}", serde_json::to_string_pretty(&cycle)?);
                    } else {
                        println!("Day {} · {}", cycle.current_day, cycle.phase);
                        println!(
                            "Next period: {}",
                            short_date(next_period_with_length(start, config.cycle.length))
                        );
                        println!("Fertile window: {}", fertile_window_label(start));
                    }
                }
                None => {
                    if json {
                        // Same top-level shape as the configured case.
                        let out = serde_json::json!({ "phase": Phase::Unknown });
                        println!("{}", serde_json::to_string_pretty(&out)?);
                    } else {
                        println!("No period start recorded. Run `lunara cycle set <date>`.");
                    }
                }
            }
        }
        CycleAction::Set { date } => {
            let start = parse_date(&date)?;
            let mut config = Config::load()?;
            config.cycle.start = Some(start);
            config.save()?;
            let cycle = Cycle::with_length(start, today(), config.cycle.length);
            println!("Cycle start set to {start}. Day {} · {}", cycle.current_day, cycle.phase);
        }
        CycleAction::Phase { day, length } => {
            let length = match length {
                Some(len) => len,
                None => Config::load()?.cycle.length,
            };
            println!("{}", classify_phase(day, length));
        }
        CycleAction::Projections { json } => {
            let config = Config::load()?;
            match config.cycle.start {
                Some(start) => {
                    let next = next_period_with_length(start, config.cycle.length);
                    let (from, to) = fertile_window(start);
                    if json {
                        let out = serde_json::json!({
                            "next_period": next,
                            "fertile_window": { "from": from, "to": to },
                        });
                        println!("{}", serde_json::to_string_pretty(&out)?);
                    } else {
                        println!("Next period: {}", short_date(next));
                        println!("Fertile window: {}", fertile_window_label(start));
                    }
                }
                None => println!("Unknown"),
            }
        }
    }
    Ok(())
}
