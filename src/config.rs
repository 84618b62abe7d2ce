//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::api::ApiConfig;
use crate::intelligence::LlmConfig;
use crate::telemetry::SimulatorConfig;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub simulator: SimulatorConfig,

    #[serde(default)]
    pub intelligence: LlmConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl LoggingConfig {
    /// Whether structured JSON output is requested
    pub fn is_json(&self) -> bool {
        self.format.eq_ignore_ascii_case("json")
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// First existing file among the default config locations
    pub fn default_path() -> Option<PathBuf> {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("powergrid").join("config.toml")),
            Some(PathBuf::from("/etc/powergrid/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        config_paths.into_iter().flatten().find(|p| p.exists())
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        // API overrides
        if let Some(host) = var("POWERGRID_HOST") {
            self.api.host = host;
        }
        if let Some(port) = var("POWERGRID_PORT").and_then(|p| p.parse().ok()) {
            self.api.port = port;
        }

        // Simulator overrides
        if let Some(count) = var("POWERGRID_METER_COUNT").and_then(|c| c.parse().ok()) {
            self.simulator.meter_count = count;
        }
        if let Some(tick) = var("POWERGRID_TICK_MS").and_then(|t| t.parse().ok()) {
            self.simulator.tick_interval_ms = tick;
        }

        // Intelligence overrides
        if let Some(key) = var("OPENAI_API_KEY") {
            self.intelligence.api_key = Some(key);
        }
        if let Some(model) = var("POWERGRID_LLM_MODEL") {
            self.intelligence.model = model;
        }
        if let Some(url) = var("POWERGRID_LLM_URL") {
            self.intelligence.base_url = url;
        }

        // Logging overrides
        if let Some(level) = var("POWERGRID_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = var("POWERGRID_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# PowerGrid Gateway Configuration
#
# Environment variables override these settings:
# - POWERGRID_HOST
# - POWERGRID_PORT
# - POWERGRID_METER_COUNT
# - POWERGRID_TICK_MS
# - OPENAI_API_KEY
# - POWERGRID_LLM_MODEL
# - POWERGRID_LLM_URL
# - POWERGRID_LOG_LEVEL
# - POWERGRID_LOG_FORMAT

[api]
# API server host
host = "0.0.0.0"

# API server port
port = 8080

# Allowed CORS origins (empty list allows any origin)
cors_origins = ["http://localhost:3000", "http://127.0.0.1:3000"]

# Lifetime advertised for mock access tokens (seconds)
token_ttl_secs = 3600

[simulator]
# Number of smart meters to simulate
meter_count = 50

# How often every meter reports (ms)
tick_interval_ms = 2000

[intelligence]
# OpenAI-compatible API key; leave unset to answer in simulation mode
# api_key = "sk-..."

# OpenAI-compatible API base URL
base_url = "https://api.openai.com/v1"

# Chat model
model = "gpt-3.5-turbo"

# Sampling temperature
temperature = 0.1

# Request timeout (ms)
request_timeout_ms = 30000

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.api.port, 8080);
        assert_eq!(config.simulator.meter_count, 50);
        assert_eq!(config.simulator.tick_interval_ms, 2000);
        assert!(config.intelligence.api_key.is_none());
        assert!(!config.logging.is_json());
    }

    #[test]
    fn test_generated_config_parses_to_defaults() {
        let config = Config::parse(&generate_default_config()).unwrap();
        let defaults = Config::default();

        assert_eq!(config.api.port, defaults.api.port);
        assert_eq!(config.api.cors_origins, defaults.api.cors_origins);
        assert_eq!(config.simulator.meter_count, defaults.simulator.meter_count);
        assert_eq!(config.intelligence.model, defaults.intelligence.model);
        assert_eq!(config.logging.level, defaults.logging.level);
    }

    #[test]
    fn test_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[simulator]\nmeter_count = 8\n\n[logging]\nformat = \"json\"").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.simulator.meter_count, 8);
        assert_eq!(config.simulator.tick_interval_ms, 2000);
        assert_eq!(config.api.port, 8080);
        assert!(config.logging.is_json());
    }

    #[test]
    fn test_missing_file() {
        let err = Config::load(Path::new("/nonexistent/powergrid.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_invalid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[api]\nport = \"not a port\"").unwrap();

        let err = Config::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            ("POWERGRID_PORT", "9090"),
            ("POWERGRID_METER_COUNT", "12"),
            ("POWERGRID_TICK_MS", "not a number"),
            ("OPENAI_API_KEY", "sk-test"),
            ("POWERGRID_LOG_FORMAT", "json"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_overrides(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.api.port, 9090);
        assert_eq!(config.simulator.meter_count, 12);
        assert_eq!(config.simulator.tick_interval_ms, 2000);
        assert!(config.intelligence.has_api_key());
        assert!(config.logging.is_json());
        assert_eq!(config.api.host, "0.0.0.0");
    }
}
