//! Configuration management for the staticguard server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables, configuration files, or defaults.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{info, warn};

/// Main configuration structure for the server.
///
/// This struct contains all configurable aspects of the server, organized
/// by domain for clarity and maintainability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// HTTP listener configuration.
    pub http: HttpConfig,

    /// Security and path containment configuration.
    pub security: SecurityConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,

    /// Whether to include timestamps in log output.
    pub with_timestamps: bool,
}

/// HTTP listener configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Host address to bind to.
    pub host: String,

    /// Port number to listen on.
    pub port: u16,

    /// Enable CORS for browser clients.
    pub enable_cors: bool,
}

/// Configuration for security and path containment.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SecurityConfig {
    /// Base directory that all served files must resolve under.
    /// Trusted operator configuration, never derived from request input.
    /// If None, the server refuses to start.
    pub base_dir: Option<PathBuf>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            enable_cors: false,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "staticguard".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                with_timestamps: true,
            },
            http: HttpConfig::default(),
            security: SecurityConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Environment variables are expected to be prefixed with `GUARD_`.
    /// For example: `GUARD_BASE_DIR`, `GUARD_LOG_LEVEL`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("GUARD_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("GUARD_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(host) = std::env::var("GUARD_HTTP_HOST") {
            config.http.host = host;
        }

        if let Ok(port) = std::env::var("GUARD_HTTP_PORT") {
            match port.parse() {
                Ok(port) => config.http.port = port,
                Err(_) => warn!("Ignoring invalid GUARD_HTTP_PORT value: {}", port),
            }
        }

        if let Ok(cors) = std::env::var("GUARD_HTTP_CORS") {
            config.http.enable_cors = cors.to_lowercase() != "false" && cors != "0";
        }

        // Load security configuration
        if let Ok(base_dir) = std::env::var("GUARD_BASE_DIR") {
            config.security.base_dir = Some(PathBuf::from(base_dir));
            info!(
                "Path containment enabled: base directory set to {:?}",
                config.security.base_dir
            );
        } else {
            warn!("GUARD_BASE_DIR not set - the server cannot serve files without it");
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_base_dir_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("GUARD_BASE_DIR", "/srv/static/images");
        }
        let config = Config::from_env();
        assert_eq!(
            config.security.base_dir.as_deref(),
            Some(std::path::Path::new("/srv/static/images"))
        );
        unsafe {
            std::env::remove_var("GUARD_BASE_DIR");
        }
    }

    #[test]
    fn test_base_dir_absent_by_default() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::remove_var("GUARD_BASE_DIR");
        }
        let config = Config::from_env();
        assert!(config.security.base_dir.is_none());
    }

    #[test]
    fn test_invalid_port_falls_back_to_default() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("GUARD_HTTP_PORT", "not-a-port");
        }
        let config = Config::from_env();
        assert_eq!(config.http.port, 8080);
        unsafe {
            std::env::remove_var("GUARD_HTTP_PORT");
        }
    }

    #[test]
    fn test_cors_disabled_by_default() {
        let config = Config::default();
        assert!(!config.http.enable_cors);
    }
}
