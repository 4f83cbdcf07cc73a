//! Server configuration management.
//!
//! Consolidates all environment variable reads and provides validated configuration.

use poker_night::blinds::DEFAULT_BASE_MINUTES;
use std::{
    net::{IpAddr, Ipv4Addr, SocketAddr},
    path::PathBuf,
};

/// Default league file, relative to the working directory
pub const DEFAULT_LEAGUE_PATH: &str = "game.db.json";

/// Default bind address
pub const DEFAULT_BIND: SocketAddr = SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 5000);

/// Longest accepted gap before player minutes are added (one day)
pub const MAX_BLIND_BASE_MINUTES: u64 = 24 * 60;

/// Complete server configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Server bind address
    pub bind: SocketAddr,
    /// League file backing the score store
    pub league_path: PathBuf,
    /// Minutes added to the player count between blind levels
    pub blind_base_minutes: u64,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Arguments
    ///
    /// * `bind_override` - Optional bind address override (from CLI args)
    /// * `league_path_override` - Optional league file override (from CLI args)
    ///
    /// # Errors
    ///
    /// Returns error if a variable is set but cannot be parsed
    pub fn from_env(
        bind_override: Option<SocketAddr>,
        league_path_override: Option<PathBuf>,
    ) -> Result<Self, ConfigError> {
        let bind = match bind_override {
            Some(bind) => bind,
            None => parse_env("SERVER_BIND")?.unwrap_or(DEFAULT_BIND),
        };

        let league_path = league_path_override
            .or_else(|| std::env::var_os("LEAGUE_DB_PATH").map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LEAGUE_PATH));

        let blind_base_minutes = parse_env("BLIND_BASE_MINUTES")?.unwrap_or(DEFAULT_BASE_MINUTES);

        Ok(ServerConfig {
            bind,
            league_path,
            blind_base_minutes,
        })
    }

    /// Validate configuration after loading
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.league_path.as_os_str().is_empty() {
            return Err(ConfigError::Invalid {
                var: "LEAGUE_DB_PATH".to_string(),
                reason: "Must not be empty".to_string(),
            });
        }

        if self.blind_base_minutes == 0 {
            return Err(ConfigError::Invalid {
                var: "BLIND_BASE_MINUTES".to_string(),
                reason: "Must be greater than 0".to_string(),
            });
        }

        if self.blind_base_minutes > MAX_BLIND_BASE_MINUTES {
            return Err(ConfigError::Invalid {
                var: "BLIND_BASE_MINUTES".to_string(),
                reason: format!("Must be at most {MAX_BLIND_BASE_MINUTES}"),
            });
        }

        Ok(())
    }
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration for {var}: {reason}")]
    Invalid { var: String, reason: String },
}

/// Parse an optional environment variable, failing loudly on a bad value
fn parse_env<T>(key: &str) -> Result<Option<T>, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|e: T::Err| ConfigError::Invalid {
                var: key.to_string(),
                reason: format!("{value:?}: {e}"),
            }),
        Err(_) => Ok(None),
    }
}
