//! League error types.

use thiserror::Error;

/// League errors
#[derive(Debug, Error)]
pub enum LeagueError {
    /// No record exists for the player
    #[error("Player not found: {0}")]
    PlayerNotFound(String),

    /// Player names must be non-empty
    #[error("Invalid player name: {0:?}")]
    InvalidName(String),

    /// Persisted league content is not a JSON array of players
    #[error("Problem parsing league: {0}")]
    Parse(#[from] serde_json::Error),

    /// Persisted league parses but breaks a ledger rule
    #[error("Corrupt league: {0}")]
    Corrupt(String),

    /// Backing medium failed to read or write
    #[error("League storage error: {0}")]
    Io(#[from] std::io::Error),
}

impl LeagueError {
    /// Get a client-safe error message
    ///
    /// Storage and parse errors are reduced to a generic message so file paths
    /// and OS error details stay in the server log.
    pub fn client_message(&self) -> String {
        match self {
            LeagueError::Io(_) | LeagueError::Parse(_) | LeagueError::Corrupt(_) => {
                "Internal server error".to_string()
            }
            _ => self.to_string(),
        }
    }

    /// Whether the error is a lookup miss
    pub fn is_not_found(&self) -> bool {
        matches!(self, LeagueError::PlayerNotFound(_))
    }
}

/// Result type for league operations
pub type LeagueResult<T> = Result<T, LeagueError>;
