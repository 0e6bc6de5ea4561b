//! Application configuration
//!
//! Validation boundaries for note input, plus the runtime server settings
//! read from the environment at startup.

use crate::error::{AppError, Result};
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

// ===== Note Validation Limits =====

/// Minimum note name length in characters, after trimming
pub const NAME_MIN_LENGTH: usize = 2;
/// Maximum note name length in characters, after trimming
pub const NAME_MAX_LENGTH: usize = 80;

/// Minimum alias length in characters, after sanitizing
pub const ALIAS_MIN_LENGTH: usize = 2;
/// Maximum alias length in characters, after sanitizing
pub const ALIAS_MAX_LENGTH: usize = 30;

/// Maximum number of aliases a single note may be created with
pub const MAX_ALIASES: usize = 50;

// ===== Server Defaults =====

pub const DEFAULT_DB_PATH: &str = "./database.db";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 7070;

/// Runtime settings for the HTTP server.
///
/// Environment variables:
///   SIMPLENOTES_DB_PATH      - SQLite database file (default: ./database.db)
///   SIMPLENOTES_HOST         - bind address (default: 0.0.0.0)
///   SIMPLENOTES_PORT         - bind port (default: 7070)
///   SIMPLENOTES_CORS_ORIGINS - comma-separated allowed origins (default: any)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub database_path: PathBuf,
    pub bind_addr: SocketAddr,
    pub cors_origins: Option<Vec<String>>,
}

impl ServerConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_path = lookup("SIMPLENOTES_DB_PATH")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DB_PATH));

        let host = lookup("SIMPLENOTES_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let host: IpAddr = host
            .trim()
            .parse()
            .map_err(|e| AppError::Config(format!("Invalid SIMPLENOTES_HOST '{}': {}", host, e)))?;

        let port = match lookup("SIMPLENOTES_PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|e| {
                AppError::Config(format!("Invalid SIMPLENOTES_PORT '{}': {}", raw, e))
            })?,
            None => DEFAULT_PORT,
        };

        let cors_origins = lookup("SIMPLENOTES_CORS_ORIGINS")
            .map(|raw| {
                raw.split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect::<Vec<_>>()
            })
            .filter(|origins| !origins.is_empty());

        Ok(Self {
            database_path,
            bind_addr: SocketAddr::new(host, port),
            cors_origins,
        })
    }
}
