//! Game session error types.

use super::session::SessionState;
use crate::{blinds::AlertError, league::LeagueError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("game is {actual}, expected {expected}")]
    InvalidState {
        expected: SessionState,
        actual: SessionState,
    },
    #[error("unsupported number of players: {0}")]
    InvalidPlayerCount(usize),
    #[error("blind alerts: {0}")]
    Alert(#[from] AlertError),
    #[error("league: {0}")]
    League(#[from] LeagueError),
}

/// Result type for game session operations
pub type GameResult<T> = Result<T, GameError>;
