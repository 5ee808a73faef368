//! Service configuration loaded from environment variables.
//!
//! Follows 12-factor style: all settings come from environment variables
//! (or a `.env` file via `dotenvy`), with defaults matching the stock
//! deployment (port 8000, `./database.sqlite`, `./public`).

use std::net::SocketAddr;
use std::path::PathBuf;

/// Top-level service configuration.
///
/// Loaded once at startup via [`TrackerConfig::from_env`].
#[derive(Debug, Clone)]
pub struct TrackerConfig {
    /// Socket address to bind the HTTP server to, assembled from the
    /// `HOST` and `PORT` variables (default `0.0.0.0:8000`).
    pub listen_addr: SocketAddr,

    /// Path of the SQLite database file, created on first run if absent.
    pub database_path: PathBuf,

    /// Maximum number of connections in the SQLite pool.
    pub database_max_connections: u32,

    /// Directory served as the static client fallback.
    pub static_dir: PathBuf,
}

impl TrackerConfig {
    /// Loads configuration from environment variables.
    ///
    /// Falls back to sensible defaults when a variable is not set.
    /// Calls `dotenvy::dotenv().ok()` to optionally load a `.env` file.
    ///
    /// # Errors
    ///
    /// Returns an error if `HOST`/`PORT` do not combine into a parseable
    /// [`SocketAddr`].
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();

        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port: u16 = parse_env("PORT", 8000);
        let listen_addr: SocketAddr = format!("{host}:{port}").parse()?;

        let database_path = PathBuf::from(
            std::env::var("DATABASE_PATH").unwrap_or_else(|_| "./database.sqlite".to_string()),
        );
        let database_max_connections = parse_env("DATABASE_MAX_CONNECTIONS", 5);

        let static_dir =
            PathBuf::from(std::env::var("STATIC_DIR").unwrap_or_else(|_| "./public".to_string()));

        Ok(Self {
            listen_addr,
            database_path,
            database_max_connections,
            static_dir,
        })
    }
}

/// Parses an environment variable as `T`, returning `default` on missing
/// or invalid values.
fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
