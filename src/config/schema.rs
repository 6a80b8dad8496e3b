//! Configuration schema for the excuse generator.
//!
//! This module defines the configuration structure and validation logic for
//! all user-configurable settings. Missing fields fall back to defaults.

use serde::{Deserialize, Serialize};

/// Main configuration structure.
///
/// Loaded from an optional JSON file and an environment override for the
/// API key. Passed explicitly into the collaborators at construction; there
/// is no ambient global configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExcuseGenConfig {
    /// Gemini API key used by the excuse and apology generators.
    ///
    /// Usually supplied via the `GEMINI_API_KEY` environment variable
    /// rather than the config file. Must be non-empty before any
    /// generation call is made.
    #[serde(default)]
    pub gemini_api_key: String,

    /// Gemini model identifier. Defaults to "gemini-1.5-flash".
    #[serde(default = "default_gemini_model")]
    pub gemini_model: String,

    /// Language the generated text should be written in.
    ///
    /// Defaults to "English".
    #[serde(default = "default_language")]
    pub default_language: String,

    /// Path of the history backing file.
    ///
    /// Defaults to "excuse_history.json" in the working directory.
    #[serde(default = "default_history_file")]
    pub history_file: String,

    /// Maximum number of history entries to retain.
    ///
    /// Older entries beyond this limit are dropped on every persist.
    /// Defaults to 50. Must be > 0.
    #[serde(default = "default_max_history_items")]
    pub max_history_items: usize,

    /// Model request timeout in milliseconds.
    ///
    /// Defaults to 30000ms (30 seconds). Must be greater than 0.
    #[serde(default = "default_timeout")]
    pub timeout: u64,

    /// TCP port the HTTP front end listens on. Defaults to 5000.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Path the proof chat screenshot is saved to.
    ///
    /// Defaults to "chat_proof.png" in the working directory.
    #[serde(default = "default_screenshot_path")]
    pub screenshot_path: String,
}

impl Default for ExcuseGenConfig {
    fn default() -> Self {
        Self {
            gemini_api_key: String::new(),
            gemini_model: default_gemini_model(),
            default_language: default_language(),
            history_file: default_history_file(),
            max_history_items: default_max_history_items(),
            timeout: default_timeout(),
            port: default_port(),
            screenshot_path: default_screenshot_path(),
        }
    }
}

impl ExcuseGenConfig {
    /// Validates the configuration.
    ///
    /// # Returns
    ///
    /// `Ok(())` if all settings are usable, or a human-readable message
    /// naming the first invalid field.
    pub fn validate(&self) -> Result<(), String> {
        if self.max_history_items == 0 {
            return Err("maxHistoryItems must be greater than 0".to_string());
        }
        if self.timeout == 0 {
            return Err("timeout must be greater than 0".to_string());
        }
        if self.gemini_model.trim().is_empty() {
            return Err("geminiModel must not be empty".to_string());
        }
        if self.default_language.trim().is_empty() {
            return Err("defaultLanguage must not be empty".to_string());
        }
        if self.history_file.trim().is_empty() {
            return Err("historyFile must not be empty".to_string());
        }
        Ok(())
    }
}

fn default_gemini_model() -> String {
    "gemini-1.5-flash".to_string()
}

fn default_language() -> String {
    "English".to_string()
}

fn default_history_file() -> String {
    "excuse_history.json".to_string()
}

fn default_max_history_items() -> usize {
    50
}

fn default_timeout() -> u64 {
    30000
}

fn default_port() -> u16 {
    5000
}

fn default_screenshot_path() -> String {
    "chat_proof.png".to_string()
}
