use std::time::Duration;

use crate::auth::{Credential, parse_credentials};
use crate::core::ServerError;

/// Server configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | HTTP_HOST | 0.0.0.0 | bind address |
/// | HTTP_PORT | 4000 | HTTP port |
/// | DATABASE_PATH | db.sqlite | SQLite file, relative to the working directory |
/// | DB_MAX_CONNECTIONS | 5 | pool size |
/// | DB_BUSY_TIMEOUT_MS | 5000 | how long a write waits on a locked database |
/// | LOG_LEVEL | info | default filter when RUST_LOG is unset |
/// | LOG_DIR | - | enables daily rolling log files |
/// | ENVIRONMENT | development | environment name |
/// | DIRECTORY_CREDENTIALS | - | `user:pass,user:pass` replacing the built-in login set |
///
/// # Example
///
/// ```ignore
/// HTTP_PORT=8080 DATABASE_PATH=data/directory.sqlite cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub http_port: u16,
    pub database_path: String,
    pub db_max_connections: u32,
    pub db_busy_timeout_ms: u64,
    pub log_level: String,
    pub log_dir: Option<String>,
    /// development | staging | production
    pub environment: String,
    /// Login credential set; `None` means the built-in defaults
    pub credentials: Option<Vec<Credential>>,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Unset variables fall back to [`Config::default`]. A malformed
    /// `DIRECTORY_CREDENTIALS` value is an error; a malformed number is
    /// ignored like in the rest of the stack.
    pub fn from_env() -> Result<Self, ServerError> {
        let defaults = Self::default();
        let credentials = match std::env::var("DIRECTORY_CREDENTIALS") {
            Ok(raw) if !raw.trim().is_empty() => Some(
                parse_credentials(&raw)
                    .map_err(|e| ServerError::Config(format!("DIRECTORY_CREDENTIALS: {e}")))?,
            ),
            _ => None,
        };

        Ok(Self {
            host: std::env::var("HTTP_HOST").unwrap_or(defaults.host),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.http_port),
            database_path: std::env::var("DATABASE_PATH").unwrap_or(defaults.database_path),
            db_max_connections: std::env::var("DB_MAX_CONNECTIONS")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|n| *n > 0)
                .unwrap_or(defaults.db_max_connections),
            db_busy_timeout_ms: std::env::var("DB_BUSY_TIMEOUT_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.db_busy_timeout_ms),
            log_level: std::env::var("LOG_LEVEL").unwrap_or(defaults.log_level),
            log_dir: std::env::var("LOG_DIR").ok().filter(|s| !s.is_empty()),
            environment: std::env::var("ENVIRONMENT").unwrap_or(defaults.environment),
            credentials,
        })
    }

    /// Override the database location and port
    ///
    /// Used by tests and the maintenance tool
    pub fn with_overrides(database_path: impl Into<String>, http_port: u16) -> Self {
        Self {
            database_path: database_path.into(),
            http_port,
            ..Self::default()
        }
    }

    pub fn busy_timeout(&self) -> Duration {
        Duration::from_millis(self.db_busy_timeout_ms)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.http_port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            http_port: 4000,
            database_path: "db.sqlite".into(),
            db_max_connections: 5,
            db_busy_timeout_ms: 5000,
            log_level: "info".into(),
            log_dir: None,
            environment: "development".into(),
            credentials: None,
        }
    }
}
