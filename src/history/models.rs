//! Data models for the generation history log.
//!
//! This module defines the record stored for every generated artifact and
//! the error type surfaced by the persistence layer.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Tag literal that marks an entry as favorited.
///
/// Stored identically to any other tag; only its presence is special.
pub const FAVORITE_TAG: &str = "favorite";

/// A single entry in the generation history.
///
/// Represents one recorded generation result with metadata for
/// filtering and favorite-tagging.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Creation instant, RFC 3339 in UTC.
    ///
    /// Used as the lookup key for favorite-toggling. Two entries created
    /// in quick succession can share a timestamp; lookups resolve to the
    /// first match in storage order.
    pub timestamp: String,

    /// The generated text payload (excuse, apology, or proof description).
    pub content: String,

    /// Free-form label for the context the content was generated for.
    pub scenario: String,

    /// Free-form labels. Defaults to empty when absent from stored data.
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Entry {
    /// Creates a new entry stamped with the current wall-clock instant.
    ///
    /// # Arguments
    ///
    /// * `content` - The generated text payload
    /// * `scenario` - Context label the content was generated for
    /// * `tags` - Tags for this entry; pass an empty `Vec` for none
    pub fn new(content: String, scenario: String, tags: Vec<String>) -> Self {
        Self {
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true),
            content,
            scenario,
            tags,
        }
    }

    /// Checks if this entry carries a specific tag.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Returns `true` if this entry is favorited.
    pub fn is_favorite(&self) -> bool {
        self.has_tag(FAVORITE_TAG)
    }

    /// Flips favorite membership: removes the tag if present, appends it
    /// otherwise. Calling twice restores the original tag set.
    pub fn toggle_favorite(&mut self) {
        if self.is_favorite() {
            self.tags.retain(|t| t != FAVORITE_TAG);
        } else {
            self.tags.push(FAVORITE_TAG.to_string());
        }
    }
}

/// Errors that can occur while persisting or loading history.
#[derive(Debug)]
pub enum HistoryError {
    /// The backing file could not be read or written.
    ///
    /// Contains the underlying I/O error for detailed diagnostics.
    Storage(std::io::Error),

    /// The backing file holds malformed JSON, or an entry could not be
    /// serialized.
    Serialization(serde_json::Error),
}

impl fmt::Display for HistoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HistoryError::Storage(err) => {
                write!(f, "History storage error: {}", err)
            }
            HistoryError::Serialization(err) => {
                write!(f, "History serialization error: {}", err)
            }
        }
    }
}

impl std::error::Error for HistoryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HistoryError::Storage(err) => Some(err),
            HistoryError::Serialization(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for HistoryError {
    fn from(err: std::io::Error) -> Self {
        HistoryError::Storage(err)
    }
}

impl From<serde_json::Error> for HistoryError {
    fn from(err: serde_json::Error) -> Self {
        HistoryError::Serialization(err)
    }
}
