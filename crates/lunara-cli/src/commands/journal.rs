use clap::{Subcommand, ValueEnum};
use lunara_core::{cycle_day, Config, JournalEntry, JournalStore, Mood};
use uuid::Uuid;

use super::parse_date;

#[derive(Clone, Copy, ValueEnum)]
pub enum MoodArg {
    Happy,
    Energetic,
    Neutral,
    Sad,
}

impl From<MoodArg> for Mood {
    fn from(arg: MoodArg) -> Self {
        match arg {
            MoodArg::Happy => Mood::Happy,
            MoodArg::Energetic => Mood::Energetic,
            MoodArg::Neutral => Mood::Neutral,
            MoodArg::Sad => Mood::Sad,
        }
    }
}

#[derive(Subcommand)]
pub enum JournalAction {
    /// Add or replace the entry for a date (YYYY-MM-DD)
    Add {
        date: String,
        /// Entry text
        #[arg(long)]
        content: String,
        /// Recorded mood
        #[arg(long, value_enum, default_value = "neutral")]
        mood: MoodArg,
        /// Symptom tags, repeatable
        #[arg(long = "symptom")]
        symptoms: Vec<String>,
        /// Separate notes (defaults to the entry text)
        #[arg(long)]
        notes: Option<String>,
    },
    /// List all entries
    List {
        /// Output machine-readable JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the entry for a date (YYYY-MM-DD)
    Show {
        date: String,
        /// Output machine-readable JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: JournalAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = JournalStore::open()?;

    match action {
        JournalAction::Add {
            date,
            content,
            mood,
            symptoms,
            notes,
        } => {
            let date = parse_date(&date)?;
            let config = Config::load()?;
            // Cycle day 0 stands for "no cycle recorded yet".
            let cycle_day = config
                .cycle
                .start
                .map(|start| cycle_day(date, start))
                .unwrap_or(0);
            let entry = JournalEntry {
                id: Uuid::new_v4().to_string(),
                date,
                content,
                mood: mood.into(),
                symptoms,
                cycle_day,
                notes,
                voice_note: None,
            };
            store.upsert(entry)?;
            println!("Entry saved for {date}");
        }
        JournalAction::List { json } => {
            let mut entries = store.load()?;
            entries.sort_by_key(|e| e.date);
            if json {
                println!("{}", serde_json::to_string_pretty(&entries)?);
            } else if entries.is_empty() {
                println!("No journal entries");
            } else {
                for e in &entries {
                    println!("{}  {:<9}  {}", e.date, e.mood.label(), e.content);
                }
            }
        }
        JournalAction::Show { date, json } => {
            let date = parse_date(&date)?;
            let entry = store.get(date)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&entry)?);
            } else {
                println!("Date: {}", entry.date);
                println!("Mood: {}", entry.mood);
                if !entry.symptoms.is_empty() {
                    println!("Symptoms: {}", entry.symptoms.join(", "));
                }
                println!("{}", entry.notes.as_deref().unwrap_or(&entry.content));
            }
        }
    }
    Ok(())
}
