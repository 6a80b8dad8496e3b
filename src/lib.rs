//! Intelligent Excuse Generator
//!
//! A novelty content generator: fabricated excuses, apologies, and
//! "supporting proof" artifacts (fake documents, fake location logs, fake
//! chat screenshots), with a capped history log persisted to disk. The
//! same operations are exposed through an interactive CLI and a small
//! HTTP API.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - **config**: Configuration schema, file loading, environment override
//! - **history**: The bounded history log, the one component with real
//!   invariants (capped, ordered, favorite-taggable, file-backed)
//! - **llm**: Gemini `generateContent` client
//! - **generators**: Excuse and apology prompt builders over the client
//! - **proof**: Fake document, location log, and chat-screenshot producers
//! - **emergency**: Staged emergency call/text simulation
//! - **server**: axum router and JSON handlers for the HTTP front end
//! - **ui**: Text formatting for the interactive CLI
//!
//! # Data flow
//!
//! Every generation path is "build a string prompt, forward it to the
//! model" or "sample fake data and format it". Each front end passes the
//! result into [`history::HistoryLog`], which truncates to the configured
//! maximum and rewrites its backing file on every mutation. Generation
//! failures are converted to placeholder text by the generators; only
//! persistence failures propagate.
//!
//! # Usage
//!
//! ```no_run
//! use excuse_gen::config::load_config;
//! use excuse_gen::history::HistoryLog;
//!
//! let config = load_config(None).unwrap();
//! let mut log = HistoryLog::load(&config.history_file, config.max_history_items).unwrap();
//! for entry in log.get_recent(10) {
//!     println!("{}  {}", entry.timestamp, entry.content);
//! }
//! ```

pub mod config;
pub mod emergency;
pub mod generators;
pub mod history;
pub mod llm;
pub mod proof;
pub mod server;
pub mod ui;
