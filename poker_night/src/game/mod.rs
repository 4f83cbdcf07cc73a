//! Game sessions: one hand from player count to declared winner.
//!
//! A session moves `Idle -> Started -> Finished`. Starting arms the blind
//! levels; finishing cancels the levels that have not fired and records the
//! winner in the league.

pub mod errors;
pub mod session;

pub use errors::{GameError, GameResult};
pub use session::{Game, GameSession, SessionState};
