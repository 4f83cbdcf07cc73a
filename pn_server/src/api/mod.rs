//! HTTP/WebSocket API for the poker night server.
//!
//! # Modules
//!
//! - [`players`]: Per-player win counts (read and record)
//! - [`league`]: The league table as JSON
//! - [`game`]: The browser game page
//! - [`websocket`]: Live channel running one hand per connection
//! - [`request_id`]: Request ID propagation for log correlation
//!
//! # Endpoints Overview
//!
//! ```text
//! GET  /health                 - Health check
//! GET  /players/{name}         - Win count as plain text (404 if never won)
//! POST /players/{name}         - Record a win (202)
//! GET  /league                 - League table, most wins first
//! GET  /game                   - Game page
//! GET  /ws                     - WebSocket: player count, then winner
//! ```
//!
//! # Example Usage
//!
//! ```rust,no_run
//! use pn_server::api::{create_router, AppState};
//! use poker_night::{BlindScheduler, InMemoryStore, blinds::TimerAlerter};
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let state = AppState::new(
//!     Arc::new(InMemoryStore::new()),
//!     BlindScheduler::new(Arc::new(TimerAlerter)),
//! );
//!
//! let app = create_router(state);
//!
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:5000").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # CORS
//!
//! CORS is configured permissively; the game page may be served from elsewhere.

pub mod game;
pub mod league;
pub mod players;
pub mod request_id;
pub mod websocket;

use axum::{
    Router,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::get,
};
use poker_night::{BlindScheduler, ScoreStore};
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

/// Application state shared across all HTTP handlers and WebSocket connections.
///
/// Cloned for each request (cheap due to Arc wrappers).
#[derive(Clone)]
pub struct AppState {
    /// The league every front-end records into
    pub store: Arc<dyn ScoreStore>,
    /// Blind scheduler handed to each live game session
    pub scheduler: BlindScheduler,
}

impl AppState {
    pub fn new(store: Arc<dyn ScoreStore>, scheduler: BlindScheduler) -> Self {
        Self { store, scheduler }
    }
}

/// Error body for failed requests
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Create the complete API router with all endpoints and middleware.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route(
            "/players/{name}",
            get(players::get_score).post(players::record_win),
        )
        .route("/league", get(league::league_table))
        .route("/game", get(game::game_page))
        .route("/ws", get(websocket::websocket_handler))
        .layer(axum::middleware::from_fn(request_id::request_id_middleware))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Health check endpoint for monitoring and load balancers.
///
/// # Example
///
/// ```bash
/// curl http://localhost:5000/health
/// # {"status":"healthy","version":"0.1.0","timestamp":"2026-10-14T10:30:00Z"}
/// ```
async fn health_check() -> impl IntoResponse {
    let response = json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    (StatusCode::OK, Json(response))
}
