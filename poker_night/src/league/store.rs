//! Score store capability and the in-memory implementation.

use super::{
    errors::{LeagueError, LeagueResult},
    models::League,
};
use async_trait::async_trait;
use tokio::sync::Mutex;

/// Authoritative accessor for one league.
///
/// Implementations serialize all mutations: two `record_win` calls never
/// interleave their read-modify-write.
#[async_trait]
pub trait ScoreStore: Send + Sync {
    /// Record one win for `name`
    ///
    /// # Errors
    ///
    /// * `LeagueError::InvalidName` - Name is empty
    /// * `LeagueError::Io` - The league could not be persisted
    async fn record_win(&self, name: &str) -> LeagueResult<()>;

    /// Current wins for `name`
    ///
    /// # Errors
    ///
    /// * `LeagueError::PlayerNotFound` - No win was ever recorded for `name`
    async fn get_score(&self, name: &str) -> LeagueResult<u64>;

    /// The full league, ordered by descending wins
    async fn get_league_table(&self) -> LeagueResult<League>;
}

pub(crate) fn validate_name(name: &str) -> LeagueResult<()> {
    if name.trim().is_empty() {
        return Err(LeagueError::InvalidName(name.to_string()));
    }
    Ok(())
}

/// Store that keeps the league in process memory only
#[derive(Debug, Default)]
pub struct InMemoryStore {
    league: Mutex<League>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with `league`
    pub fn with_league(league: League) -> Self {
        Self {
            league: Mutex::new(league),
        }
    }
}

#[async_trait]
impl ScoreStore for InMemoryStore {
    async fn record_win(&self, name: &str) -> LeagueResult<()> {
        validate_name(name)?;
        let wins = self.league.lock().await.record_win(name);
        log::debug!("Recorded win for {} (now {})", name, wins);
        Ok(())
    }

    async fn get_score(&self, name: &str) -> LeagueResult<u64> {
        self.league
            .lock()
            .await
            .find(name)
            .map(|p| p.wins)
            .ok_or_else(|| LeagueError::PlayerNotFound(name.to_string()))
    }

    async fn get_league_table(&self) -> LeagueResult<League> {
        Ok(self.league.lock().await.sorted_by_wins())
    }
}
