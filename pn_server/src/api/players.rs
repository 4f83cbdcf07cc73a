//! Player score handlers.
//!
//! # Examples
//!
//! Read a score:
//! ```bash
//! curl http://localhost:5000/players/Pepper
//! # 20
//! ```
//!
//! Record a win:
//! ```bash
//! curl -X POST http://localhost:5000/players/Pepper
//! ```

use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use log::error;
use poker_night::LeagueError;

use super::AppState;

/// Get a player's win count.
///
/// # Response
///
/// - `200 OK` with the win count as plain text
/// - `404 Not Found` with body `0` when the player has never won
/// - `500 Internal Server Error` when the league cannot be read
pub async fn get_score(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> (StatusCode, String) {
    match state.store.get_score(&name).await {
        Ok(wins) => (StatusCode::OK, wins.to_string()),
        Err(LeagueError::PlayerNotFound(_)) => (StatusCode::NOT_FOUND, "0".to_string()),
        Err(e) => {
            error!("Failed to get score for {}: {}", name, e);
            (StatusCode::INTERNAL_SERVER_ERROR, e.client_message())
        }
    }
}

/// Record a win for a player.
///
/// # Response
///
/// - `202 Accepted` once the win is persisted
/// - `400 Bad Request` for a blank name
/// - `500 Internal Server Error` when the league cannot be written
pub async fn record_win(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> (StatusCode, String) {
    match state.store.record_win(&name).await {
        Ok(()) => (StatusCode::ACCEPTED, String::new()),
        Err(e @ LeagueError::InvalidName(_)) => (StatusCode::BAD_REQUEST, e.client_message()),
        Err(e) => {
            error!("Failed to record win for {}: {}", name, e);
            (StatusCode::INTERNAL_SERVER_ERROR, e.client_message())
        }
    }
}
