//! Configuration loading for the excuse generator.
//!
//! Settings come from an optional JSON config file merged over defaults,
//! with the Gemini API key overridable through the `GEMINI_API_KEY`
//! environment variable. The resulting [`ExcuseGenConfig`] is handed to
//! each collaborator at construction rather than held in process-global
//! state.

pub mod schema;

pub use schema::ExcuseGenConfig;

use std::path::Path;

/// Environment variable consulted for the Gemini API key.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Loads configuration from an optional JSON file and the environment.
///
/// A missing file yields defaults; a present but unparseable file is an
/// error (silently running with defaults would hide a broken config). The
/// `GEMINI_API_KEY` environment variable, when set and non-empty, replaces
/// whatever key the file carried.
///
/// # Arguments
///
/// * `path` - Config file location, or `None` for defaults + environment
///
/// # Returns
///
/// The validated configuration.
///
/// # Example
///
/// ```no_run
/// use excuse_gen::config::load_config;
///
/// let config = load_config(Some("excuse-gen.json".as_ref())).unwrap();
/// println!("history cap: {}", config.max_history_items);
/// ```
pub fn load_config(path: Option<&Path>) -> Result<ExcuseGenConfig, String> {
    let mut config = match path {
        Some(path) if path.exists() => {
            let raw = std::fs::read_to_string(path)
                .map_err(|e| format!("Failed to read config file {}: {}", path.display(), e))?;
            serde_json::from_str::<ExcuseGenConfig>(&raw)
                .map_err(|e| format!("Invalid config file {}: {}", path.display(), e))?
        }
        _ => ExcuseGenConfig::default(),
    };

    if let Ok(key) = std::env::var(API_KEY_ENV) {
        if !key.trim().is_empty() {
            config.gemini_api_key = key;
        }
    }

    config
        .validate()
        .map_err(|e| format!("Invalid configuration: {}", e))?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join("excuse-gen.json");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_load_config_without_file_uses_defaults() {
        let config = load_config(None).unwrap();
        assert_eq!(config.gemini_model, "gemini-1.5-flash");
        assert_eq!(config.max_history_items, 50);
    }

    #[test]
    fn test_load_config_missing_path_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let config = load_config(Some(&dir.path().join("absent.json"))).unwrap();
        assert_eq!(config.port, 5000);
    }

    #[test]
    fn test_load_config_from_file() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            r#"{"maxHistoryItems": 7, "defaultLanguage": "French", "port": 9000}"#,
        );

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.max_history_items, 7);
        assert_eq!(config.default_language, "French");
        assert_eq!(config.port, 9000);
        // Unspecified fields keep defaults.
        assert_eq!(config.timeout, 30000);
    }

    #[test]
    fn test_load_config_rejects_malformed_file() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "{ not json");

        let err = load_config(Some(&path)).unwrap_err();
        assert!(err.contains("Invalid config file"));
    }

    #[test]
    fn test_load_config_rejects_invalid_values() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, r#"{"maxHistoryItems": 0}"#);

        let err = load_config(Some(&path)).unwrap_err();
        assert!(err.contains("maxHistoryItems"));
    }
}
