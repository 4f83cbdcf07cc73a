//! # Poker Night
//!
//! A league tracker and blind timer for a home poker game.
//!
//! Every hand starts with the number of players at the table. The blinds then
//! climb on a schedule derived from that count, and when the hand ends the
//! winner's tally in the league goes up by one. The league survives restarts
//! in a single JSON file.
//!
//! ## Core Modules
//!
//! - [`league`]: The league ledger and the stores that own it
//! - [`blinds`]: Blind schedule computation and timed alerts
//! - [`game`]: The per-hand session state machine
//! - [`cli`]: Terminal prompt loop driving a session
//!
//! ## Example
//!
//! ```
//! use poker_night::{BlindScheduler, Game, GameSession, InMemoryStore, ScoreStore};
//! use poker_night::blinds::{AlertDestination, TimerAlerter};
//! use std::sync::Arc;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let store = Arc::new(InMemoryStore::new());
//! let scheduler = BlindScheduler::new(Arc::new(TimerAlerter));
//!
//! let mut game = GameSession::new(scheduler, store.clone());
//! let (destination, _alerts) = AlertDestination::channel();
//! game.start(5, destination)?;
//! game.finish("Chris").await?;
//!
//! assert_eq!(store.get_score("Chris").await?, 1);
//! # Ok(())
//! # }
//! ```

/// Blind schedules and alerting.
pub mod blinds;
pub use blinds::{BlindAlerter, BlindScheduler};

/// Terminal front-end.
pub mod cli;

/// Per-hand game sessions.
pub mod game;
pub use game::{Game, GameError, GameSession};

/// League ledger and score stores.
pub mod league;
pub use league::{FileSystemStore, InMemoryStore, League, LeagueError, Player, ScoreStore};
