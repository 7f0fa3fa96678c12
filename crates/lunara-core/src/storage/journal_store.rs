//! JSON-file journal storage.
//!
//! The engine only ever sees a `Vec<JournalEntry>` -- this store is the
//! CLI-facing layer that reads and writes `journal.json` in the data dir.

use std::path::PathBuf;

use chrono::NaiveDate;

use super::data_dir;
use crate::error::{JournalError, Result};
use crate::journal::JournalEntry;

/// Reads and writes the journal entry list.
pub struct JournalStore {
    path: PathBuf,
}

impl JournalStore {
    /// Store backed by `journal.json` in the data directory.
    pub fn open() -> Result<Self> {
        Ok(Self {
            path: data_dir()?.join("journal.json"),
        })
    }

    /// Store backed by an explicit path. Used by tests.
    pub fn at(path: PathBuf) -> Self {
        Self { path }
    }

    /// Load all entries; a missing file is an empty journal.
    ///
    /// Any other read failure propagates. Collapsing it to "empty" would
    /// let a later save overwrite a journal that is still on disk.
    pub fn load(&self) -> Result<Vec<JournalEntry>> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(JournalError::LoadFailed {
                    path: self.path.clone(),
                    message: e.to_string(),
                }
                .into())
            }
        };
        let entries = serde_json::from_str(&content).map_err(|e| JournalError::LoadFailed {
            path: self.path.clone(),
            message: e.to_string(),
        })?;
        Ok(entries)
    }

    /// Persist the full entry list.
    pub fn save(&self, entries: &[JournalEntry]) -> Result<()> {
        let content =
            serde_json::to_string_pretty(entries).map_err(|e| JournalError::SaveFailed {
                path: self.path.clone(),
                message: e.to_string(),
            })?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }

    /// Append an entry, replacing any existing entry on the same date.
    ///
    /// One entry per date is the expected shape; replacing keeps the file
    /// consistent with the index's last-wins lookup semantics.
    pub fn upsert(&self, entry: JournalEntry) -> Result<()> {
        let mut entries = self.load()?;
        entries.retain(|e| e.date != entry.date);
        entries.push(entry);
        self.save(&entries)
    }

    /// Fetch the entry for a date, erroring when none exists.
    pub fn get(&self, date: NaiveDate) -> Result<JournalEntry> {
        self.load()?
            .into_iter()
            .find(|e| e.date == date)
            .ok_or_else(|| {
                JournalError::NotFound {
                    date: date.to_string(),
                }
                .into()
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::journal::Mood;
    use tempfile::tempdir;

    fn entry(date: NaiveDate, content: &str) -> JournalEntry {
        JournalEntry {
            id: format!("id-{date}"),
            date,
            content: content.to_string(),
            mood: Mood::Neutral,
            symptoms: vec!["cramps".to_string()],
            cycle_day: 3,
            notes: None,
            voice_note: None,
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_missing_file_is_empty_journal() {
        let dir = tempdir().unwrap();
        let store = JournalStore::at(dir.path().join("journal.json"));
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_upsert_and_get() {
        let dir = tempdir().unwrap();
        let store = JournalStore::at(dir.path().join("journal.json"));
        store.upsert(entry(date(2024, 1, 5), "first")).unwrap();
        store.upsert(entry(date(2024, 1, 6), "second")).unwrap();

        let found = store.get(date(2024, 1, 5)).unwrap();
        assert_eq!(found.content, "first");
        assert_eq!(store.load().unwrap().len(), 2);
    }

    #[test]
    fn test_upsert_replaces_same_date() {
        let dir = tempdir().unwrap();
        let store = JournalStore::at(dir.path().join("journal.json"));
        store.upsert(entry(date(2024, 1, 5), "first")).unwrap();
        store.upsert(entry(date(2024, 1, 5), "revised")).unwrap();

        let entries = store.load().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].content, "revised");
    }

    #[test]
    fn test_corrupt_file_errors_instead_of_emptying() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("journal.json");
        std::fs::write(&path, "not json").unwrap();
        let store = JournalStore::at(path.clone());

        assert!(store.load().is_err());
        // An upsert on top of the unreadable journal must fail, not
        // replace the file with a single-entry list.
        assert!(store.upsert(entry(date(2024, 1, 5), "new")).is_err());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "not json");
    }

    #[test]
    fn test_unreadable_path_errors() {
        let dir = tempdir().unwrap();
        // A directory at the journal path is a read failure, not an
        // empty journal.
        let store = JournalStore::at(dir.path().to_path_buf());
        assert!(store.load().is_err());
    }

    #[test]
    fn test_get_missing_date_errors() {
        let dir = tempdir().unwrap();
        let store = JournalStore::at(dir.path().join("journal.json"));
        assert!(store.get(date(2024, 1, 5)).is_err());
    }
}
