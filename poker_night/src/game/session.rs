//! Texas Hold'em session state machine.

use super::errors::{GameError, GameResult};
use crate::{
    blinds::{AlertDestination, BlindSchedule, BlindScheduler},
    league::ScoreStore,
};
use async_trait::async_trait;
use std::{fmt, sync::Arc};

/// Lifecycle of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Started,
    Finished,
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionState::Idle => write!(f, "idle"),
            SessionState::Started => write!(f, "started"),
            SessionState::Finished => write!(f, "finished"),
        }
    }
}

/// What a front-end drives: start a hand, then declare its winner.
#[async_trait]
pub trait Game: Send {
    /// Start a hand, sending blind alerts to `to`
    fn start(&mut self, number_of_players: usize, to: AlertDestination) -> GameResult<()>;

    /// Declare the winner of the hand
    async fn finish(&mut self, winner: &str) -> GameResult<()>;
}

/// One hand of Texas Hold'em.
///
/// The session shares its scheduler and store with other sessions; it only
/// owns the blind schedule of its own hand. Dropping a started session cancels
/// the alerts that have not fired yet.
pub struct GameSession {
    scheduler: BlindScheduler,
    store: Arc<dyn ScoreStore>,
    state: SessionState,
    schedule: Option<BlindSchedule>,
}

impl GameSession {
    pub fn new(scheduler: BlindScheduler, store: Arc<dyn ScoreStore>) -> Self {
        Self {
            scheduler,
            store,
            state: SessionState::Idle,
            schedule: None,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Blind levels of the current hand, if one was started
    pub fn schedule(&self) -> Option<&BlindSchedule> {
        self.schedule.as_ref()
    }

    fn expect_state(&self, expected: SessionState) -> GameResult<()> {
        if self.state != expected {
            return Err(GameError::InvalidState {
                expected,
                actual: self.state,
            });
        }
        Ok(())
    }
}

#[async_trait]
impl Game for GameSession {
    fn start(&mut self, number_of_players: usize, to: AlertDestination) -> GameResult<()> {
        self.expect_state(SessionState::Idle)?;
        if !self.scheduler.accepts(number_of_players) {
            return Err(GameError::InvalidPlayerCount(number_of_players));
        }

        self.schedule = Some(self.scheduler.start(number_of_players, to)?);
        self.state = SessionState::Started;
        Ok(())
    }

    async fn finish(&mut self, winner: &str) -> GameResult<()> {
        self.expect_state(SessionState::Started)?;

        // A failed write leaves the hand running so the winner can be re-sent
        self.store.record_win(winner).await?;

        if let Some(schedule) = &self.schedule {
            schedule.cancel_all();
        }
        self.state = SessionState::Finished;
        log::info!("Hand finished, {} wins", winner);
        Ok(())
    }
}
