//! # Configuration
//!
//! Application configuration loading and management.
//!
//! Configuration is read once at startup into an immutable [`AppConfig`]
//! that is passed by reference into each component's constructor; there are
//! no ambient global lookups at request time.
//!
//! # Configuration Sources
//!
//! Configuration is loaded in the following order (later sources override earlier):
//! 1. Default values
//! 2. Configuration file (if exists)
//! 3. Environment variables (prefixed with `CURRENCY_`)
//!
//! # Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `CURRENCY_GRPC_HOST` | Bridge gRPC server host | `0.0.0.0` |
//! | `CURRENCY_GRPC_PORT` | Bridge gRPC server port | `7000` |
//! | `CURRENCY_HTTP_HOST` | Engine HTTP server host | `0.0.0.0` |
//! | `CURRENCY_HTTP_PORT` | Engine HTTP server port | `7001` |
//! | `CURRENCY_DOWNSTREAM_URL` | Engine base URL seen by the bridge | `http://127.0.0.1:7001` |
//! | `CURRENCY_RATE_SOURCE_URL` | External rate API base URL | `https://api.exchangeratesapi.io` |
//! | `CURRENCY_RATE_SOURCE_MODE` | Rate source mode (live/static) | `live` |
//! | `CURRENCY_LOG_LEVEL` | Log level | `info` |
//! | `CURRENCY_LOG_FORMAT` | Log format (json/pretty) | `json` |
//!
//! # Examples
//!
//! ```ignore
//! use currency_service::config::AppConfig;
//!
//! let config = AppConfig::load()?;
//! println!("gRPC server: {}:{}", config.grpc.host, config.grpc.port);
//! ```

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::Path;
use thiserror::Error;

// ============================================================================
// Configuration Errors
// ============================================================================

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse configuration.
    #[error("failed to parse config: {0}")]
    Parse(String),

    /// Invalid configuration value.
    #[error("invalid config value for {field}: {message}")]
    InvalidValue {
        /// Field name.
        field: String,
        /// Error message.
        message: String,
    },
}

// ============================================================================
// Server Configuration
// ============================================================================

/// Bridge gRPC server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrpcConfig {
    /// Server host address.
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port.
    #[serde(default = "default_grpc_port")]
    pub port: u16,
}

impl Default for GrpcConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_grpc_port(),
        }
    }
}

impl GrpcConfig {
    /// Returns the socket address for the gRPC server.
    ///
    /// # Errors
    ///
    /// Returns an error if the address cannot be parsed.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| ConfigError::InvalidValue {
                field: "grpc.host:port".to_string(),
                message: format!("{e}"),
            })
    }
}

/// Engine HTTP server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Server host address.
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port.
    #[serde(default = "default_http_port")]
    pub port: u16,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_http_port(),
        }
    }
}

impl HttpConfig {
    /// Returns the socket address for the HTTP server.
    ///
    /// # Errors
    ///
    /// Returns an error if the address cannot be parsed.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| ConfigError::InvalidValue {
                field: "http.host:port".to_string(),
                message: format!("{e}"),
            })
    }
}

// ============================================================================
// Logging Configuration
// ============================================================================

/// Log format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// JSON format (structured logging).
    #[default]
    Json,
    /// Pretty format (human-readable).
    Pretty,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format.
    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::Json,
        }
    }
}

// ============================================================================
// Rate Source Configuration
// ============================================================================

/// Rate source selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RateSourceMode {
    /// Query the external rate API per request.
    #[default]
    Live,
    /// Use the embedded euro-reference dataset.
    Static,
}

/// External rate source configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateSourceConfig {
    /// Rate source mode.
    #[serde(default)]
    pub mode: RateSourceMode,

    /// Base URL of the external rate API.
    #[serde(default = "default_rate_source_url")]
    pub base_url: String,

    /// Request timeout in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for RateSourceConfig {
    fn default() -> Self {
        Self {
            mode: RateSourceMode::Live,
            base_url: default_rate_source_url(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

// ============================================================================
// Downstream Configuration
// ============================================================================

/// Downstream conversion engine configuration, as seen by the bridge.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DownstreamConfig {
    /// Base URL of the conversion engine's HTTP interface.
    #[serde(default = "default_downstream_url")]
    pub base_url: String,

    /// Request timeout in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for DownstreamConfig {
    fn default() -> Self {
        Self {
            base_url: default_downstream_url(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

// ============================================================================
// Application Configuration
// ============================================================================

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Bridge gRPC server configuration.
    #[serde(default)]
    pub grpc: GrpcConfig,

    /// Engine HTTP server configuration.
    #[serde(default)]
    pub http: HttpConfig,

    /// Logging configuration.
    #[serde(default)]
    pub log: LogConfig,

    /// Rate source configuration.
    #[serde(default)]
    pub rates: RateSourceConfig,

    /// Downstream engine configuration.
    #[serde(default)]
    pub downstream: DownstreamConfig,

    /// Service name for logging.
    #[serde(default = "default_service_name")]
    pub service_name: String,
}

impl AppConfig {
    /// Loads configuration from environment variables and optional config file.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading fails.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Try to load from config file if it exists
        let config_path =
            std::env::var("CURRENCY_CONFIG_FILE").unwrap_or_else(|_| "config.toml".to_string());

        if Path::new(&config_path).exists() {
            config = Self::from_file(&config_path)?;
        }

        // Override with environment variables
        config.apply_env_overrides();

        Ok(config)
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Applies environment variable overrides to the configuration.
    fn apply_env_overrides(&mut self) {
        // gRPC configuration
        if let Ok(host) = std::env::var("CURRENCY_GRPC_HOST") {
            self.grpc.host = host;
        }
        if let Ok(port) = std::env::var("CURRENCY_GRPC_PORT")
            && let Ok(p) = port.parse()
        {
            self.grpc.port = p;
        }

        // HTTP configuration
        if let Ok(host) = std::env::var("CURRENCY_HTTP_HOST") {
            self.http.host = host;
        }
        if let Ok(port) = std::env::var("CURRENCY_HTTP_PORT")
            && let Ok(p) = port.parse()
        {
            self.http.port = p;
        }

        // Rate source configuration
        if let Ok(url) = std::env::var("CURRENCY_RATE_SOURCE_URL") {
            self.rates.base_url = url;
        }
        if let Ok(mode) = std::env::var("CURRENCY_RATE_SOURCE_MODE") {
            self.rates.mode = match mode.to_lowercase().as_str() {
                "static" => RateSourceMode::Static,
                _ => RateSourceMode::Live,
            };
        }

        // Downstream configuration
        if let Ok(url) = std::env::var("CURRENCY_DOWNSTREAM_URL") {
            self.downstream.base_url = url;
        }

        // Logging configuration
        if let Ok(level) = std::env::var("CURRENCY_LOG_LEVEL") {
            self.log.level = level;
        }
        if let Ok(format) = std::env::var("CURRENCY_LOG_FORMAT") {
            self.log.format = match format.to_lowercase().as_str() {
                "pretty" => LogFormat::Pretty,
                _ => LogFormat::Json,
            };
        }

        // Service configuration
        if let Ok(name) = std::env::var("CURRENCY_SERVICE_NAME") {
            self.service_name = name;
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // Validate gRPC address
        self.grpc.socket_addr()?;

        // Validate HTTP address
        self.http.socket_addr()?;

        // Validate log level
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log.level.to_lowercase().as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "log.level".to_string(),
                message: format!(
                    "invalid log level '{}', must be one of: {:?}",
                    self.log.level, valid_levels
                ),
            });
        }

        // Validate URLs
        if self.rates.base_url.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "rates.base_url".to_string(),
                message: "rate source URL cannot be empty".to_string(),
            });
        }
        if self.downstream.base_url.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "downstream.base_url".to_string(),
                message: "downstream URL cannot be empty".to_string(),
            });
        }

        Ok(())
    }
}

// ============================================================================
// Default Value Functions
// ============================================================================

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_grpc_port() -> u16 {
    7000
}

fn default_http_port() -> u16 {
    7001
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_rate_source_url() -> String {
    "https://api.exchangeratesapi.io".to_string()
}

fn default_downstream_url() -> String {
    "http://127.0.0.1:7001".to_string()
}

fn default_timeout_ms() -> u64 {
    5000
}

fn default_service_name() -> String {
    "currencyservice".to_string()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn app_config_default() {
        let config = AppConfig::default();
        assert_eq!(config.grpc.port, 7000);
        assert_eq!(config.http.port, 7001);
        assert_eq!(config.log.level, "info");
        assert_eq!(config.rates.mode, RateSourceMode::Live);
    }

    #[test]
    fn grpc_config_socket_addr() {
        let config = GrpcConfig::default();
        let addr = config.socket_addr().unwrap();
        assert_eq!(addr.port(), 7000);
    }

    #[test]
    fn http_config_socket_addr() {
        let config = HttpConfig::default();
        let addr = config.socket_addr().unwrap();
        assert_eq!(addr.port(), 7001);
    }

    #[test]
    fn log_format_default() {
        let format = LogFormat::default();
        assert_eq!(format, LogFormat::Json);
    }

    #[test]
    fn app_config_validate_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn app_config_validate_invalid_log_level() {
        let mut config = AppConfig::default();
        config.log.level = "invalid".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn app_config_validate_empty_rate_source_url() {
        let mut config = AppConfig::default();
        config.rates.base_url = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn app_config_validate_empty_downstream_url() {
        let mut config = AppConfig::default();
        config.downstream.base_url = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn grpc_config_invalid_address() {
        let config = GrpcConfig {
            host: "invalid host with spaces".to_string(),
            ..Default::default()
        };
        assert!(config.socket_addr().is_err());
    }

    #[test]
    fn rate_source_mode_from_toml() {
        let config: AppConfig = toml::from_str(
            r#"
            [rates]
            mode = "static"
            "#,
        )
        .unwrap();
        assert_eq!(config.rates.mode, RateSourceMode::Static);
    }

    #[test]
    fn downstream_config_default() {
        let config = DownstreamConfig::default();
        assert_eq!(config.base_url, "http://127.0.0.1:7001");
        assert_eq!(config.timeout_ms, 5000);
    }
}
