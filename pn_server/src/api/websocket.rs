//! WebSocket handler running one hand per connection.
//!
//! # Connection Flow
//!
//! 1. Client connects via `GET /ws`
//! 2. Client sends the number of players as a text message
//! 3. Server starts a [`GameSession`] whose blind alerts are pushed to the
//!    client as text messages
//! 4. Client sends the winner's name; the win is recorded and the connection
//!    closes
//!
//! A player count that does not parse gets an error message and the
//! connection closes. A winner that cannot be recorded gets an error message
//! and the client may send the name again.
//!
//! # Example
//!
//! ```javascript
//! const ws = new WebSocket('ws://localhost:5000/ws');
//!
//! ws.onopen = () => ws.send('7');
//! ws.onmessage = (event) => console.log(event.data); // "Blind is now 100\n"
//!
//! // Later
//! ws.send('Ruth');
//! ```

use axum::{
    extract::{
        State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    response::Response,
};
use futures_util::{SinkExt, StreamExt, stream::SplitStream};
use log::{error, info, warn};
use poker_night::{
    Game, GameError, GameSession,
    blinds::AlertDestination,
    cli::{BAD_PLAYER_INPUT, BAD_WINNER_INPUT, parse_player_count},
};

use super::{AppState, request_id::RequestId};

const WINNER_NOT_RECORDED: &str = "Could not record winner, please try again\n";

/// Upgrade HTTP connection to WebSocket for a live hand.
///
/// # Response
///
/// Upgrades the connection to the WebSocket protocol (101 Switching Protocols).
pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    request_id: RequestId,
    State(state): State<AppState>,
) -> Response {
    ws.on_upgrade(move |socket| handle_socket(socket, request_id, state))
}

/// Handle an established WebSocket connection.
///
/// A send task forwards everything written to the connection's
/// [`AlertDestination`] (blind alerts and error text) to the client. It ends
/// once the game and every pending alert have let go of the destination, then
/// closes the socket.
async fn handle_socket(socket: WebSocket, request_id: RequestId, state: AppState) {
    let (mut sender, mut receiver) = socket.split();
    let (destination, mut outbound) = AlertDestination::channel();

    info!("WebSocket connected: request={}", request_id.as_str());

    let send_task = tokio::spawn(async move {
        while let Some(text) = outbound.recv().await {
            if sender.send(Message::Text(text.into())).await.is_err() {
                break;
            }
        }
        let _ = sender.send(Message::Close(None)).await;
    });

    let mut game = GameSession::new(state.scheduler.clone(), state.store.clone());
    run_hand(&mut game, &mut receiver, &destination, &request_id).await;

    // Dropping the session cancels outstanding alerts, which releases their
    // destination clones and lets the send task finish.
    drop(game);
    drop(destination);

    if let Err(e) = send_task.await {
        error!("WebSocket send task failed: {}", e);
    }

    info!("WebSocket disconnected: request={}", request_id.as_str());
}

async fn run_hand(
    game: &mut GameSession,
    receiver: &mut SplitStream<WebSocket>,
    destination: &AlertDestination,
    request_id: &RequestId,
) {
    let Some(count) = next_text(receiver).await else {
        return;
    };
    let Some(number_of_players) = parse_player_count(&count) else {
        warn!("Bad player count {:?}: request={}", count, request_id.as_str());
        let _ = destination.write(BAD_PLAYER_INPUT);
        return;
    };

    match game.start(number_of_players, destination.clone()) {
        Ok(()) => {}
        Err(GameError::InvalidPlayerCount(n)) => {
            warn!("Game refused {} players: request={}", n, request_id.as_str());
            let _ = destination.write(BAD_PLAYER_INPUT);
            return;
        }
        Err(e) => {
            error!("Failed to start game: {}", e);
            let _ = destination.write(format!("Could not start game: {e}\n"));
            return;
        }
    }
    info!(
        "Game started with {} players: request={}",
        number_of_players,
        request_id.as_str()
    );

    while let Some(text) = next_text(receiver).await {
        let winner = text.trim();
        if winner.is_empty() {
            let _ = destination.write(BAD_WINNER_INPUT);
            continue;
        }

        match game.finish(winner).await {
            Ok(()) => return,
            Err(e) => {
                error!("Failed to record winner {}: {}", winner, e);
                let _ = destination.write(WINNER_NOT_RECORDED);
            }
        }
    }

    info!("Client left before a winner was declared: request={}", request_id.as_str());
}

/// Next text message from the client, or `None` once the connection closes
async fn next_text(receiver: &mut SplitStream<WebSocket>) -> Option<String> {
    while let Some(msg) = receiver.next().await {
        match msg {
            Ok(Message::Text(text)) => return Some(text.as_str().to_string()),
            Ok(Message::Close(_)) => return None,
            Ok(_) => {}
            Err(e) => {
                warn!("WebSocket error: {}", e);
                return None;
            }
        }
    }
    None
}
