//! Configuration loading and constants.
//!
//! Settings come from an optional TOML file, then from the `PORT` and `HOST`
//! environment variables, then from command line flags. Every field has a
//! default so the service starts with no configuration at all.

use serde::Deserialize;
use std::path::Path;

// =============================================================================
// Network Defaults
// =============================================================================

/// Port used when neither the file, the environment nor the CLI sets one
pub const DEFAULT_PORT: u16 = 8080;

/// Listen on every interface by default
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Environment variable selecting the listening port
pub const PORT_ENV: &str = "PORT";

/// Environment variable selecting the listening host
pub const HOST_ENV: &str = "HOST";

// =============================================================================
// Logging Defaults
// =============================================================================

/// Default log filter when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "voice_api=debug,tower_http=debug";

/// Default log format (text or json)
pub const DEFAULT_LOG_FORMAT: &str = "text";

// =============================================================================
// Cross-Origin Policy
// =============================================================================

pub const CORS_ALLOW_ORIGIN: &str = "*";
pub const CORS_ALLOW_METHODS: &str = "GET, POST, OPTIONS";
pub const CORS_ALLOW_HEADERS: &str = "Content-Type";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// HTTP listener configuration
    #[serde(default)]
    pub http: HttpServerConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP listener configuration
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

    /// Whether structured JSON output was requested
    pub fn is_json(&self) -> bool {
        self.format.eq_ignore_ascii_case("json")
    }
}

impl AppConfig {
    /// Load configuration from `path`, or start from defaults when no file is given.
    pub fn load<P: AsRef<Path>>(path: Option<P>) -> Result<Self, ConfigError> {
        let config = match path {
            Some(path) => {
                let contents = std::fs::read_to_string(path)?;
                toml::from_str(&contents)?
            }
            None => AppConfig::default(),
        };

        match config.logging.format.to_ascii_lowercase().as_str() {
            "text" | "json" => Ok(config),
            other => Err(ConfigError::Validation(format!(
                "Unknown logging.format '{}', expected \"text\" or \"json\"",
                other
            ))),
        }
    }

    /// Apply the `PORT` and `HOST` environment variables on top of the file values.
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        let port = std::env::var(PORT_ENV).ok();
        let host = std::env::var(HOST_ENV).ok();
        self.apply_overrides(port.as_deref(), host.as_deref())
    }

    /// Override host and port. Unset or empty values leave the current setting alone.
    pub fn apply_overrides(
        &mut self,
        port: Option<&str>,
        host: Option<&str>,
    ) -> Result<(), ConfigError> {
        if let Some(port) = port.map(str::trim).filter(|p| !p.is_empty()) {
            self.http.port = port.parse().map_err(|_| {
                ConfigError::Validation(format!("Invalid port '{}'", port))
            })?;
        }

        if let Some(host) = host.map(str::trim).filter(|h| !h.is_empty()) {
            self.http.host = host.to_string();
        }

        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Configuration error: {0}")]
    Validation(String),
}
