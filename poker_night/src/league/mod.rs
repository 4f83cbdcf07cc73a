//! League module tracking player wins.
//!
//! This module implements:
//! - The [`League`] ledger of `{Name, Wins}` records and its JSON encoding
//! - The [`ScoreStore`] capability shared by every front-end
//! - An in-memory store and a file-backed store with full rewrites
//!
//! ## Example
//!
//! ```no_run
//! use poker_night::league::{FileSystemStore, ScoreStore};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = FileSystemStore::from_path("game.db.json")?;
//!
//!     store.record_win("Chris").await?;
//!     println!("Chris has {} wins", store.get_score("Chris").await?);
//!
//!     for player in store.get_league_table().await?.iter() {
//!         println!("{}: {}", player.name, player.wins);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod errors;
pub mod file_store;
pub mod medium;
pub mod models;
pub mod store;

pub use errors::{LeagueError, LeagueResult};
pub use file_store::FileSystemStore;
pub use medium::Medium;
pub use models::{League, Player};
pub use store::{InMemoryStore, ScoreStore};
