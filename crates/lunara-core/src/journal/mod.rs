//! Journal entries and the date-keyed lookup index.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Mood recorded with a journal entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Happy,
    Energetic,
    Neutral,
    Sad,
}

impl Mood {
    pub fn label(&self) -> &'static str {
        match self {
            Mood::Happy => "Happy",
            Mood::Energetic => "Energetic",
            Mood::Neutral => "Neutral",
            Mood::Sad => "Sad",
        }
    }

    /// Single-character marker used when rendering calendar cells.
    pub fn glyph(&self) -> char {
        match self {
            Mood::Happy => '+',
            Mood::Energetic => '^',
            Mood::Neutral => '~',
            Mood::Sad => '-',
        }
    }
}

impl std::fmt::Display for Mood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A single dated journal entry. One entry per calendar date is expected.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalEntry {
    pub id: String,
    pub date: NaiveDate,
    pub content: String,
    pub mood: Mood,
    #[serde(default)]
    pub symptoms: Vec<String>,
    /// Cycle day the entry was written on, as recorded at write time.
    pub cycle_day: i64,
    /// Falls back to `content` when absent; normalized at index build.
    #[serde(default)]
    pub notes: Option<String>,
    /// Reference to an attached voice memo, if any.
    #[serde(default)]
    pub voice_note: Option<String>,
}

/// Canonical `YYYY-MM-DD` key for a calendar date, zero-padded.
pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// O(1) lookup of journal entries by date key.
///
/// Built once from a list of entries; the source list is never mutated.
/// When two entries carry the same date, the last one listed wins.
#[derive(Debug, Clone, Default)]
pub struct JournalIndex {
    by_date: HashMap<String, JournalEntry>,
}

impl JournalIndex {
    /// Build the index, normalizing each entry as it is ingested:
    /// `notes` defaults to a copy of `content` when absent.
    pub fn build(entries: &[JournalEntry]) -> Self {
        let mut by_date = HashMap::with_capacity(entries.len());
        for entry in entries {
            let mut entry = entry.clone();
            if entry.notes.is_none() {
                entry.notes = Some(entry.content.clone());
            }
            by_date.insert(date_key(entry.date), entry);
        }
        Self { by_date }
    }

    /// Look up the entry for a `YYYY-MM-DD` key. Absence is not an error.
    pub fn lookup(&self, key: &str) -> Option<&JournalEntry> {
        self.by_date.get(key)
    }

    /// Look up by date directly.
    pub fn lookup_date(&self, date: NaiveDate) -> Option<&JournalEntry> {
        self.lookup(&date_key(date))
    }

    pub fn len(&self) -> usize {
        self.by_date.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_date.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, date: NaiveDate, content: &str) -> JournalEntry {
        JournalEntry {
            id: id.to_string(),
            date,
            content: content.to_string(),
            mood: Mood::Neutral,
            symptoms: vec![],
            cycle_day: 1,
            notes: None,
            voice_note: None,
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_date_key_zero_padded() {
        assert_eq!(date_key(date(2024, 3, 5)), "2024-03-05");
        assert_eq!(date_key(date(2024, 11, 30)), "2024-11-30");
    }

    #[test]
    fn test_lookup_round_trip() {
        let entries = vec![
            entry("a", date(2024, 1, 5), "cramps in the morning"),
            entry("b", date(2024, 1, 9), "felt great"),
        ];
        let index = JournalIndex::build(&entries);
        let found = index.lookup("2024-01-05").unwrap();
        assert_eq!(found.id, "a");
        // Notes default applied at build time.
        assert_eq!(found.notes.as_deref(), Some("cramps in the morning"));
        assert!(found.voice_note.is_none());
        assert!(index.lookup("2024-01-06").is_none());
    }

    #[test]
    fn test_explicit_notes_kept() {
        let mut e = entry("a", date(2024, 1, 5), "content");
        e.notes = Some("separate notes".to_string());
        let index = JournalIndex::build(&[e]);
        assert_eq!(
            index.lookup("2024-01-05").unwrap().notes.as_deref(),
            Some("separate notes")
        );
    }

    #[test]
    fn test_duplicate_dates_last_wins() {
        let entries = vec![
            entry("first", date(2024, 1, 5), "early"),
            entry("second", date(2024, 1, 5), "late"),
        ];
        let index = JournalIndex::build(&entries);
        assert_eq!(index.len(), 1);
        assert_eq!(index.lookup("2024-01-05").unwrap().id, "second");
    }

    #[test]
    fn test_source_list_untouched() {
        let entries = vec![entry("a", date(2024, 1, 5), "content")];
        let _ = JournalIndex::build(&entries);
        assert!(entries[0].notes.is_none());
    }
}
