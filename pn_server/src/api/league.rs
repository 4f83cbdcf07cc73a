//! League table handler.

use axum::{Json, extract::State, http::StatusCode};
use log::error;
use poker_night::League;

use super::{AppState, ErrorResponse};

/// List every player, most wins first.
///
/// # Response
///
/// Returns `200 OK` with a JSON array (`application/json`):
/// ```json
/// [
///   { "Name": "Chris", "Wins": 33 },
///   { "Name": "Cleo", "Wins": 10 }
/// ]
/// ```
///
/// Players with the same number of wins come in no particular order.
///
/// # Errors
///
/// - `500 Internal Server Error`: The league could not be read
pub async fn league_table(
    State(state): State<AppState>,
) -> Result<Json<League>, (StatusCode, Json<ErrorResponse>)> {
    match state.store.get_league_table().await {
        Ok(league) => Ok(Json(league)),
        Err(e) => {
            error!("Failed to get league table: {}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: e.client_message(),
                }),
            ))
        }
    }
}
