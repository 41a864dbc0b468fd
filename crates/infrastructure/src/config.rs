//! Service configuration: structs, parsing, and validation.

use std::path::Path;

use domain::alert::engine::JoinMode;
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_FIXTURE_PATH, DEFAULT_HTTP_PORT};

// ── Config errors ──────────────────────────────────────────────────

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("I/O error reading config: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    Yaml(String),

    #[error("validation error: {field}: {message}")]
    Validation { field: String, message: String },
}

impl From<serde_yaml_ng::Error> for ConfigError {
    fn from(e: serde_yaml_ng::Error) -> Self {
        Self::Yaml(e.to_string())
    }
}

// ── Top-level config ───────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceConfig {
    #[serde(default)]
    pub server: ServerSection,

    #[serde(default)]
    pub logging: LoggingSection,

    #[serde(default)]
    pub data: DataSection,

    #[serde(default)]
    pub alerts: AlertsSection,
}

impl ServiceConfig {
    /// Load config from a YAML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml_ng::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation {
                field: "server.port".to_string(),
                message: "port must be non-zero".to_string(),
            });
        }
        if self.server.bind_address.trim().is_empty() {
            return Err(ConfigError::Validation {
                field: "server.bind_address".to_string(),
                message: "bind address must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

// ── Sections ───────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    /// IP address to bind to. Defaults to `127.0.0.1`; set to
    /// `0.0.0.0` for container deployments.
    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    #[serde(default = "default_http_port")]
    pub port: u16,

    /// Enable Swagger UI at `/swagger-ui`. Disabled by default.
    #[serde(default)]
    pub swagger_ui: bool,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            port: DEFAULT_HTTP_PORT,
            swagger_ui: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingSection {
    #[serde(default = "default_log_level")]
    pub level: LogLevel,

    #[serde(default = "default_log_format")]
    pub format: LogFormat,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DataSection {
    /// JSON fixture loaded into the stores at startup. Set `enabled`
    /// to `false` to boot with empty stores.
    #[serde(default = "default_true")]
    pub enabled: bool,

    #[serde(default = "default_fixture_path")]
    pub fixture_path: String,
}

impl Default for DataSection {
    fn default() -> Self {
        Self {
            enabled: true,
            fixture_path: default_fixture_path(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AlertsSection {
    /// How persons are joined to medical records: `id` (historical
    /// contract) or `name`.
    #[serde(default)]
    pub medical_join: JoinMode,
}

fn default_bind_address() -> String {
    "127.0.0.1".to_string()
}
fn default_http_port() -> u16 {
    DEFAULT_HTTP_PORT
}
fn default_log_level() -> LogLevel {
    LogLevel::Info
}
fn default_log_format() -> LogFormat {
    LogFormat::Json
}
fn default_fixture_path() -> String {
    DEFAULT_FIXTURE_PATH.to_string()
}
fn default_true() -> bool {
    true
}

// ── Log level ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "error" => Ok(Self::Error),
            "warn" | "warning" => Ok(Self::Warn),
            "info" => Ok(Self::Info),
            "debug" => Ok(Self::Debug),
            "trace" => Ok(Self::Trace),
            _ => Err(format!(
                "invalid log level '{s}': expected error|warn|info|debug|trace"
            )),
        }
    }
}

// ── Log format ─────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    Json,
    Text,
}

impl LogFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Text => "text",
        }
    }
}

impl std::fmt::Display for LogFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "text" | "pretty" => Ok(Self::Text),
            _ => Err(format!("invalid log format '{s}': expected json|text")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_yaml_yields_defaults() {
        let config = ServiceConfig::from_yaml("{}").unwrap();
        assert_eq!(config.server.bind_address, "127.0.0.1");
        assert_eq!(config.server.port, DEFAULT_HTTP_PORT);
        assert!(!config.server.swagger_ui);
        assert_eq!(config.logging.level, LogLevel::Info);
        assert_eq!(config.logging.format, LogFormat::Json);
        assert!(config.data.enabled);
        assert_eq!(config.alerts.medical_join, JoinMode::Id);
    }

    #[test]
    fn full_yaml_parses() {
        let yaml = r"
server:
  bind_address: 0.0.0.0
  port: 9000
  swagger_ui: true
logging:
  level: debug
  format: text
data:
  enabled: false
  fixture_path: /srv/data.json
alerts:
  medical_join: name
";
        let config = ServiceConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.server.port, 9000);
        assert!(config.server.swagger_ui);
        assert_eq!(config.logging.level, LogLevel::Debug);
        assert!(!config.data.enabled);
        assert_eq!(config.alerts.medical_join, JoinMode::Name);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        assert!(ServiceConfig::from_yaml("bogus: 1").is_err());
    }

    #[test]
    fn port_zero_fails_validation() {
        let err = ServiceConfig::from_yaml("server:\n  port: 0").unwrap_err();
        assert!(matches!(err, ConfigError::Validation { .. }));
    }

    #[test]
    fn log_level_round_trips_from_str() {
        for s in ["error", "warn", "info", "debug", "trace"] {
            let level: LogLevel = s.parse().unwrap();
            assert_eq!(level.as_str(), s);
        }
        assert!("loud".parse::<LogLevel>().is_err());
    }
}
