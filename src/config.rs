//! Configuration loading and constants.
//!
//! Loads application configuration from an optional TOML file and defines
//! defaults for the HTTP listener and logging. The service is a quickstart:
//! every setting has a default, so it starts with no arguments and no config
//! file present. `AppConfig` is the root configuration struct.

use serde::Deserialize;
use std::path::Path;

// =============================================================================
// HTTP Response Cache Control
// =============================================================================

/// Health checks - never cached, probes must always see a fresh response
pub const CACHE_CONTROL_HEALTH: &str = "no-store";

// =============================================================================
// Default Paths and Strings
// =============================================================================

/// Default configuration file path
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Default listen host (all interfaces, as expected inside a container)
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default listen port (the conventional container platform port)
pub const DEFAULT_PORT: u16 = 8080;

/// Environment variable consulted for the listen port when --port is not given
pub const PORT_ENV_VAR: &str = "PORT";

/// Default log filter when neither --log-level nor RUST_LOG is set
pub const DEFAULT_LOG_FILTER: &str = "aca_quickstart=info";

/// Default log format (text or json)
pub const DEFAULT_LOG_FORMAT: &str = "text";

/// Grace period for draining connections on shutdown, in seconds
pub const SHUTDOWN_GRACE_SECS: u64 = 30;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub http: HttpServerConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct HttpServerConfig {
    #[serde(default = "HttpServerConfig::default_host")]
    pub host: String,
    #[serde(default = "HttpServerConfig::default_port")]
    pub port: u16,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: Self::default_host(),
            port: Self::default_port(),
        }
    }
}

impl HttpServerConfig {
    fn default_host() -> String {
        DEFAULT_HOST.to_string()
    }

    fn default_port() -> u16 {
        DEFAULT_PORT
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log format: "text" (human-readable, default) or "json" (structured)
    #[serde(default = "LoggingConfig::default_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: DEFAULT_LOG_FORMAT.to_string(),
        }
    }
}

impl LoggingConfig {
    fn default_format() -> String {
        DEFAULT_LOG_FORMAT.to_string()
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    ///
    /// A missing file is not an error: the quickstart falls back to built-in
    /// defaults so it runs without any setup. A file that exists but fails to
    /// parse is fatal.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file found, using defaults");
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Resolve the effective listen port.
    ///
    /// Precedence: CLI flag, then the PORT environment variable, then the
    /// config file (or its default). An unparseable PORT value is ignored
    /// with a warning rather than failing startup.
    pub fn resolve_port(&self, cli_port: Option<u16>) -> u16 {
        if let Some(port) = cli_port {
            return port;
        }

        if let Ok(value) = std::env::var(PORT_ENV_VAR) {
            match value.parse::<u16>() {
                Ok(port) => return port,
                Err(_) => {
                    tracing::warn!(
                        value = %value,
                        "Ignoring {} environment variable: not a valid port",
                        PORT_ENV_VAR
                    );
                }
            }
        }

        self.http.port
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_when_file_missing() {
        let config = AppConfig::load("does/not/exist.toml").unwrap();
        assert_eq!(config.http.host, DEFAULT_HOST);
        assert_eq!(config.http.port, DEFAULT_PORT);
        assert_eq!(config.logging.format, DEFAULT_LOG_FORMAT);
    }

    #[test]
    fn loads_partial_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[http]\nport = 3000").unwrap();

        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.http.port, 3000);
        // Unspecified fields keep their defaults
        assert_eq!(config.http.host, DEFAULT_HOST);
        assert_eq!(config.logging.format, DEFAULT_LOG_FORMAT);
    }

    #[test]
    fn malformed_toml_is_fatal() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[http\nport = oops").unwrap();

        let result = AppConfig::load(file.path());
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn cli_port_takes_precedence() {
        let config = AppConfig::default();
        assert_eq!(config.resolve_port(Some(9999)), 9999);
    }

    #[test]
    fn config_port_used_without_cli_or_env() {
        let mut config = AppConfig::default();
        config.http.port = 4242;
        // Note: assumes PORT is not set in the test environment
        if std::env::var(PORT_ENV_VAR).is_err() {
            assert_eq!(config.resolve_port(None), 4242);
        }
    }
}
