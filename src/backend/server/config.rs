/**
 * Server Configuration
 *
 * This module handles loading and validation of server configuration and
 * opening the SQLite store.
 *
 * # Configuration Sources
 *
 * Configuration is read from environment variables (a `.env` file is loaded
 * by the binary first), with defaults suited to local development:
 *
 * | Variable                   | Default                          |
 * |----------------------------|----------------------------------|
 * | `HOST`                     | `0.0.0.0`                        |
 * | `PORT`                     | `8080`                           |
 * | `DATABASE_URL`             | `sqlite://blogwaka.db?mode=rwc`  |
 * | `DATABASE_MAX_CONNECTIONS` | `5`                              |
 * | `API_PREFIX`               | `/blogWaka`                      |
 * | `STATIC_DIR`               | `dist`                           |
 * | `SESSION_SECRET`           | `waka`                           |
 * | `SESSION_TTL_SECS`         | `86400`                          |
 * | `BCRYPT_COST`              | `bcrypt::DEFAULT_COST`           |
 *
 * # Error Handling
 *
 * Unlike optional services, the store is required: failing to open it or to
 * migrate it is an error the binary exits on.
 */

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr;

use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use thiserror::Error;

use crate::backend::error::BackendError;

const DEFAULT_DATABASE_URL: &str = "sqlite://blogwaka.db?mode=rwc";
const DEFAULT_SESSION_SECRET: &str = "waka";

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
    #[error("API_PREFIX must start with '/': {0:?}")]
    InvalidPrefix(String),
}

/// Runtime configuration of the blog server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind
    pub host: IpAddr,
    /// Port to bind
    pub port: u16,
    /// sqlx connection string of the SQLite store
    pub database_url: String,
    /// Upper bound of the connection pool
    pub max_connections: u32,
    /// Path prefix all API routes are mounted under
    pub api_prefix: String,
    /// Directory holding the compiled single-page application
    pub static_dir: PathBuf,
    /// Key signing the session cookie
    pub session_secret: String,
    /// Session lifetime in seconds
    pub session_ttl_secs: u64,
    /// bcrypt work factor for new password hashes
    pub bcrypt_cost: u32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 8080,
            database_url: DEFAULT_DATABASE_URL.to_string(),
            max_connections: 5,
            api_prefix: "/blogWaka".to_string(),
            static_dir: PathBuf::from("dist"),
            session_secret: DEFAULT_SESSION_SECRET.to_string(),
            session_ttl_secs: 24 * 60 * 60,
            bcrypt_cost: bcrypt::DEFAULT_COST,
        }
    }
}

impl ServerConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    ///
    /// Variables the lookup does not know keep their default.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let session_secret = match lookup("SESSION_SECRET") {
            Some(secret) => secret,
            None => {
                tracing::warn!("SESSION_SECRET not set. Using the development default.");
                defaults.session_secret
            }
        };

        let api_prefix = lookup("API_PREFIX").unwrap_or(defaults.api_prefix);
        if !api_prefix.starts_with('/') {
            return Err(ConfigError::InvalidPrefix(api_prefix));
        }

        Ok(Self {
            host: parse_or(&lookup, "HOST", defaults.host)?,
            port: parse_or(&lookup, "PORT", defaults.port)?,
            database_url: lookup("DATABASE_URL").unwrap_or(defaults.database_url),
            max_connections: parse_or(&lookup, "DATABASE_MAX_CONNECTIONS", defaults.max_connections)?,
            api_prefix,
            static_dir: lookup("STATIC_DIR").map(PathBuf::from).unwrap_or(defaults.static_dir),
            session_secret,
            session_ttl_secs: parse_or(&lookup, "SESSION_TTL_SECS", defaults.session_ttl_secs)?,
            bcrypt_cost: parse_or(&lookup, "BCRYPT_COST", defaults.bcrypt_cost)?,
        })
    }

    /// Socket address the server listens on
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { key, value }),
        None => Ok(default),
    }
}

/// Open the SQLite store and bring its schema up to date
///
/// # Errors
///
/// Returns a store error if the connection pool cannot be created and a
/// migration error if the embedded migrations fail.
pub async fn load_database(database_url: &str, max_connections: u32) -> Result<SqlitePool, BackendError> {
    tracing::info!("Connecting to database...");

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await?;

    tracing::info!("Database connection pool created successfully");

    run_migrations(&pool).await?;
    Ok(pool)
}

/// Apply the embedded migrations under `migrations/`
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), BackendError> {
    tracing::info!("Running database migrations...");
    sqlx::migrate!().run(pool).await?;
    tracing::info!("Database migrations completed successfully");
    Ok(())
}
