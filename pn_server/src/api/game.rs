//! Browser game page.

use axum::response::Html;

const GAME_PAGE: &str = include_str!("../../assets/game.html");

/// Serve the game page, which drives a hand over `/ws`.
pub async fn game_page() -> Html<&'static str> {
    Html(GAME_PAGE)
}
