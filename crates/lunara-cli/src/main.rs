use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "lunara", version, about = "Lunara cycle calendar CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Cycle tracking and projections
    Cycle {
        #[command(subcommand)]
        action: commands::cycle::CycleAction,
    },
    /// Month calendar rendering
    Calendar {
        #[command(subcommand)]
        action: commands::calendar::CalendarAction,
    },
    /// Journal entries
    Journal {
        #[command(subcommand)]
        action: commands::journal::JournalAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Cycle { action } => commands::cycle::run(action),
        Commands::Calendar { action } => commands::calendar::run(action),
        Commands::Journal { action } => commands::journal::run(action),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
