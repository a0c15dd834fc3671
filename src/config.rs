//! Configuration
//!
//! Loaded from a TOML file with `STAYLOFT_*` environment overrides.

use crate::models::PropertyType;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub session: SessionConfig,

    #[serde(default)]
    pub search: SearchConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    /// Where the signed-in session is kept between runs
    #[serde(default = "default_session_file")]
    pub file: PathBuf,
}

fn default_session_file() -> PathBuf {
    dirs::data_local_dir()
        .map(|p| p.join("stayloft").join("session.json"))
        .unwrap_or_else(|| PathBuf::from("./stayloft_session.json"))
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            file: default_session_file(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchConfig {
    /// Kind searched when none is given on the command line
    #[serde(default = "default_kind")]
    pub default_kind: PropertyType,

    #[serde(default = "default_results_file")]
    pub results_file: PathBuf,
}

fn default_kind() -> PropertyType {
    PropertyType::Flat
}

fn default_results_file() -> PathBuf {
    PathBuf::from("search_results.json")
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_kind: default_kind(),
            results_file: default_results_file(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|error| ConfigError::Parse {
            path: path.to_path_buf(),
            error,
        })
    }

    fn parse(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    /// Load from default locations, falling back to defaults
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("stayloft").join("config.toml")),
            Some(PathBuf::from("./stayloft.toml")),
        ];

        for path in config_paths.iter().flatten() {
            if path.exists() {
                match Self::load(path) {
                    Ok(mut config) => {
                        tracing::info!("Loaded config from {:?}", path);
                        config.apply_env_overrides();
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        let mut config = Self::default();
        config.apply_env_overrides();
        config
    }

    /// Apply environment variable overrides
    pub fn apply_env_overrides(&mut self) {
        if let Ok(level) = std::env::var("STAYLOFT_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(file) = std::env::var("STAYLOFT_SESSION_FILE") {
            self.session.file = PathBuf::from(file);
        }
        if let Ok(file) = std::env::var("STAYLOFT_RESULTS_FILE") {
            self.search.results_file = PathBuf::from(file);
        }
    }
}

/// Default config file content
pub fn generate_default_config() -> String {
    r#"# StayLoft Configuration
#
# Environment variables override these settings:
# - STAYLOFT_LOG_LEVEL
# - STAYLOFT_SESSION_FILE
# - STAYLOFT_RESULTS_FILE

[logging]
# trace, debug, info, warn or error (RUST_LOG takes precedence)
level = "info"

[session]
# file = "~/.local/share/stayloft/session.json"

[search]
# FLAT, PG or HOSTEL
default_kind = "FLAT"
results_file = "search_results.json"
"#
    .to_string()
}
