//! Persistent storage for the generation history log.
//!
//! The log is loaded once at construction and every mutating operation
//! rewrites the whole backing file, truncated to the configured maximum.
//! The backing file holds a single top-level JSON array of entries, written
//! to a temporary file first and then renamed into place so a failed write
//! never leaves a half-written log behind.

use super::models::{Entry, HistoryError};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Default maximum number of history entries to retain.
pub const DEFAULT_MAX_HISTORY_ITEMS: usize = 50;

/// Default name of the backing file.
pub const DEFAULT_HISTORY_FILE: &str = "excuse_history.json";

/// Capped, append-only history of generated artifacts.
///
/// Insertion order is chronological order. The in-memory sequence and the
/// persisted sequence are kept identical: truncation to `max_items` happens
/// at `add` time, before the write, so reloading the file always yields the
/// same entries field-for-field.
#[derive(Debug)]
pub struct HistoryLog {
    path: PathBuf,
    max_items: usize,
    entries: Vec<Entry>,
}

impl HistoryLog {
    /// Opens the history log at `path`, loading any existing entries.
    ///
    /// # Arguments
    ///
    /// * `path` - Location of the backing file
    /// * `max_items` - Most-recent entry count retained on every persist
    ///
    /// # Returns
    ///
    /// A `HistoryLog` holding the stored sequence, empty if the file has
    /// never been written.
    ///
    /// # Errors
    ///
    /// Returns `HistoryError::Storage` if the file exists but cannot be
    /// read, or `HistoryError::Serialization` if it holds malformed JSON.
    /// Malformed files are surfaced rather than silently treated as empty.
    pub fn load(path: impl Into<PathBuf>, max_items: usize) -> Result<Self, HistoryError> {
        let path = path.into();

        let entries = if path.exists() {
            let raw = fs::read_to_string(&path)?;
            serde_json::from_str::<Vec<Entry>>(&raw)?
        } else {
            Vec::new()
        };

        Ok(Self {
            path,
            max_items,
            entries,
        })
    }

    /// Appends a new entry and persists the truncated sequence.
    ///
    /// The entry is stamped with the current instant. If the log would
    /// exceed `max_items`, the oldest entries are dropped first.
    ///
    /// # Arguments
    ///
    /// * `content` - The generated text payload
    /// * `scenario` - Context label the content was generated for
    /// * `tags` - Tags for the new entry
    ///
    /// # Returns
    ///
    /// The stored entry (useful for reading back its timestamp).
    ///
    /// # Errors
    ///
    /// Returns `HistoryError` if the backing file cannot be rewritten.
    pub fn add(
        &mut self,
        content: String,
        scenario: String,
        tags: Vec<String>,
    ) -> Result<Entry, HistoryError> {
        let entry = Entry::new(content, scenario, tags);
        self.entries.push(entry.clone());

        if self.entries.len() > self.max_items {
            let drop_count = self.entries.len() - self.max_items;
            self.entries.drain(..drop_count);
        }

        self.persist()?;

        Ok(entry)
    }

    /// Returns the last `limit` entries in chronological order, oldest of
    /// the selected window first.
    ///
    /// A `limit` of zero yields an empty slice; a limit beyond the stored
    /// count yields everything.
    pub fn get_recent(&self, limit: usize) -> &[Entry] {
        let start = self.entries.len().saturating_sub(limit);
        &self.entries[start..]
    }

    /// Returns every stored entry tagged `"favorite"`, in storage order.
    pub fn get_favorites(&self) -> Vec<&Entry> {
        self.entries.iter().filter(|e| e.is_favorite()).collect()
    }

    /// Flips favorite membership on the first entry whose timestamp
    /// exactly equals `timestamp`, then persists.
    ///
    /// # Returns
    ///
    /// `Ok(true)` if an entry was found and toggled, `Ok(false)` if no
    /// entry matched (in which case nothing is written).
    ///
    /// # Errors
    ///
    /// Returns `HistoryError` if the backing file cannot be rewritten.
    pub fn toggle_favorite(&mut self, timestamp: &str) -> Result<bool, HistoryError> {
        let found = self
            .entries
            .iter_mut()
            .find(|e| e.timestamp == timestamp);

        match found {
            Some(entry) => {
                entry.toggle_favorite();
                self.persist()?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the log holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Rewrites the whole backing file with the current sequence.
    ///
    /// Writes to `<path>.tmp` and renames over the target so the old file
    /// survives a failed write.
    fn persist(&self) -> Result<(), HistoryError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string(&self.entries)?;

        let temp_path = self.path.with_extension("json.tmp");
        let mut temp_file = File::create(&temp_path)?;
        temp_file.write_all(json.as_bytes())?;
        temp_file.flush()?;
        drop(temp_file);

        fs::rename(&temp_path, &self.path)?;

        Ok(())
    }
}
