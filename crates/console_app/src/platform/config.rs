use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use console_client::{ApiSettings, DEFAULT_BASE_URL};
use console_logging::console_info;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::logging::LogDestination;

const CONFIG_ENV_VAR: &str = "SEARCH_CONSOLE_CONFIG";
const DEFAULT_CONFIG_FILENAME: &str = "console.ron";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub api_base_url: String,
    pub connect_timeout_ms: Option<u64>,
    pub request_timeout_ms: Option<u64>,
    pub log_destination: LogDestination,
    /// When set, every render also writes the page markup to this file.
    pub html_snapshot: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_BASE_URL.to_string(),
            connect_timeout_ms: None,
            request_timeout_ms: None,
            log_destination: LogDestination::File,
            html_snapshot: None,
        }
    }
}

impl AppConfig {
    pub fn api_settings(&self) -> ApiSettings {
        ApiSettings {
            base_url: self.api_base_url.clone(),
            connect_timeout: self.connect_timeout_ms.map(Duration::from_millis),
            request_timeout: self.request_timeout_ms.map(Duration::from_millis),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },
}

/// Loads configuration from, in order: the explicit path, `$SEARCH_CONSOLE_CONFIG`,
/// `./console.ron` if present. Falls back to defaults when none applies.
///
/// An explicitly named file that cannot be read is an error.
pub fn load(explicit: Option<PathBuf>) -> Result<AppConfig, ConfigError> {
    let named = explicit.or_else(|| env::var_os(CONFIG_ENV_VAR).map(PathBuf::from));
    if let Some(path) = named {
        return load_from(&path);
    }

    let fallback = PathBuf::from(DEFAULT_CONFIG_FILENAME);
    if fallback.is_file() {
        return load_from(&fallback);
    }
    Ok(AppConfig::default())
}

pub fn load_from(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config = ron::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    console_info!("Loaded config from {:?}", path);
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn partial_config_keeps_defaults_for_missing_fields() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("console.ron");
        fs::write(
            &path,
            r#"(api_base_url: "http://search.local/api", request_timeout_ms: Some(1500))"#,
        )
        .unwrap();

        let config = load_from(&path).unwrap();

        assert_eq!(config.api_base_url, "http://search.local/api");
        assert_eq!(config.log_destination, LogDestination::File);
        assert_eq!(config.html_snapshot, None);
        let settings = config.api_settings();
        assert_eq!(settings.request_timeout, Some(Duration::from_millis(1500)));
        assert_eq!(settings.connect_timeout, None);
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        let err = load(Some(temp.path().join("absent.ron"))).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn malformed_file_reports_parse_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("bad.ron");
        fs::write(&path, "(api_base_url: 42").unwrap();

        let err = load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
