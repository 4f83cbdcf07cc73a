//! File-backed score store.

use super::{
    errors::{LeagueError, LeagueResult},
    medium::Medium,
    models::League,
    store::{ScoreStore, validate_name},
};
use async_trait::async_trait;
use std::{fs::File, fs::OpenOptions, path::Path};
use tokio::{
    runtime::{Handle, RuntimeFlavor},
    sync::Mutex,
};

const EMPTY_LEAGUE: &[u8] = b"[]";

struct Inner<M> {
    league: League,
    medium: M,
}

/// Score store persisting the whole league to a [`Medium`] after every win.
///
/// The league and its medium share one lock, so a write is never observed
/// half-applied.
pub struct FileSystemStore<M: Medium = File> {
    inner: Mutex<Inner<M>>,
}

impl FileSystemStore<File> {
    /// Open (or create) the league file at `path`
    ///
    /// # Errors
    ///
    /// * `LeagueError::Io` - The file could not be opened or initialized
    /// * `LeagueError::Parse` - The file holds something other than a league
    /// * `LeagueError::Corrupt` - The league repeats or blanks a name
    pub fn from_path(path: impl AsRef<Path>) -> LeagueResult<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(path)?;

        let store = Self::new(file)?;
        log::info!("Loaded league from {}", path.display());
        Ok(store)
    }
}

impl<M: Medium> FileSystemStore<M> {
    /// Load the league held by `medium`.
    ///
    /// A zero-length medium is initialized to an empty league before reading.
    ///
    /// # Errors
    ///
    /// * `LeagueError::Io` - The medium could not be read or initialized
    /// * `LeagueError::Parse` - The content is malformed; nothing is discarded
    /// * `LeagueError::Corrupt` - The league repeats or blanks a name
    pub fn new(mut medium: M) -> LeagueResult<Self> {
        let mut bytes = medium.read_all()?;
        if bytes.is_empty() {
            medium.rewrite(EMPTY_LEAGUE)?;
            bytes = EMPTY_LEAGUE.to_vec();
        }

        let league = League::decode(&bytes)?;
        log::debug!("League holds {} player(s)", league.len());

        Ok(Self {
            inner: Mutex::new(Inner { league, medium }),
        })
    }

    /// Consume the store, returning its medium
    pub fn into_inner(self) -> M {
        self.inner.into_inner().medium
    }
}

/// Run blocking medium I/O without stalling other tasks on a multi-threaded
/// runtime. The current-thread runtime has no other worker to hand off to.
fn blocking<T>(f: impl FnOnce() -> T) -> T {
    match Handle::try_current().map(|h| h.runtime_flavor()) {
        Ok(RuntimeFlavor::MultiThread) => tokio::task::block_in_place(f),
        _ => f(),
    }
}

#[async_trait]
impl<M: Medium> ScoreStore for FileSystemStore<M> {
    async fn record_win(&self, name: &str) -> LeagueResult<()> {
        validate_name(name)?;

        let mut inner = self.inner.lock().await;

        // Only adopt the new league once it is on the medium
        let mut next = inner.league.clone();
        let wins = next.record_win(name);
        let bytes = next.encode()?;
        if let Err(e) = blocking(|| inner.medium.rewrite(&bytes)) {
            log::warn!("Failed to persist win for {}: {}", name, e);
            return Err(LeagueError::Io(e));
        }
        inner.league = next;

        log::debug!("Recorded win for {} (now {})", name, wins);
        Ok(())
    }

    async fn get_score(&self, name: &str) -> LeagueResult<u64> {
        self.inner
            .lock()
            .await
            .league
            .find(name)
            .map(|p| p.wins)
            .ok_or_else(|| LeagueError::PlayerNotFound(name.to_string()))
    }

    async fn get_league_table(&self) -> LeagueResult<League> {
        Ok(self.inner.lock().await.league.sorted_by_wins())
    }
}
