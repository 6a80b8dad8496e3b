//! Generation history tracking and persistence.
//!
//! This module records every generated artifact in arrival order, caps the
//! stored count, and supports favorite-tagging and bounded retrieval.
//!
//! # Features
//!
//! - Load-once construction from a JSON backing file
//! - Capped append: oldest entries dropped past the configured maximum
//! - Favorite toggling keyed on exact timestamp match
//! - Whole-file rewrite (temp file + rename) on every mutation
//!
//! # Example
//!
//! ```ignore
//! use excuse_gen::history::HistoryLog;
//!
//! let mut log = HistoryLog::load("excuse_history.json", 50)?;
//! log.add(excuse, "work".to_string(), vec!["professional".to_string()])?;
//! for entry in log.get_recent(10) {
//!     println!("{}: {}", entry.timestamp, entry.content);
//! }
//! ```

pub mod models;
pub mod storage;

pub use models::{Entry, HistoryError, FAVORITE_TAG};
pub use storage::{HistoryLog, DEFAULT_HISTORY_FILE, DEFAULT_MAX_HISTORY_ITEMS};
