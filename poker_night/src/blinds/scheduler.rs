//! Arms a hand's blind levels through an alerter.

use super::{
    alerter::{AlertDestination, AlertError, BlindAlerter},
    schedule::{DEFAULT_BASE_MINUTES, ScheduledAlert, blind_schedule, level_increment},
};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// Computes a hand's blind levels and hands each one to a [`BlindAlerter`]
#[derive(Clone)]
pub struct BlindScheduler {
    alerter: Arc<dyn BlindAlerter>,
    base_minutes: u64,
}

impl BlindScheduler {
    pub fn new(alerter: Arc<dyn BlindAlerter>) -> Self {
        Self {
            alerter,
            base_minutes: DEFAULT_BASE_MINUTES,
        }
    }

    /// Use `base_minutes` instead of [`DEFAULT_BASE_MINUTES`]
    pub fn with_base_minutes(mut self, base_minutes: u64) -> Self {
        self.base_minutes = base_minutes;
        self
    }

    pub fn base_minutes(&self) -> u64 {
        self.base_minutes
    }

    /// Whether a hand of `number_of_players` gets a full schedule
    pub fn accepts(&self, number_of_players: usize) -> bool {
        number_of_players > 0 && level_increment(self.base_minutes, number_of_players).is_some()
    }

    /// Arm every blind level for a hand of `number_of_players`.
    ///
    /// Returns as soon as the alerts are armed. They stay armed until the
    /// returned [`BlindSchedule`] is cancelled or dropped.
    ///
    /// # Errors
    ///
    /// * `AlertError` - The alerter refused a level; levels armed before it are
    ///   cancelled
    pub fn start(
        &self,
        number_of_players: usize,
        to: AlertDestination,
    ) -> Result<BlindSchedule, AlertError> {
        let alerts = blind_schedule(self.base_minutes, number_of_players);
        let cancel = CancellationToken::new();

        for alert in &alerts {
            if let Err(e) = self.alerter.schedule_alert_at(
                alert.at,
                alert.amount,
                to.clone(),
                cancel.child_token(),
            ) {
                cancel.cancel();
                return Err(e);
            }
        }

        log::info!(
            "Armed {} blind level(s) for {} player(s)",
            alerts.len(),
            number_of_players
        );

        Ok(BlindSchedule { alerts, cancel })
    }
}

/// The armed levels of one hand
#[derive(Debug)]
pub struct BlindSchedule {
    alerts: Vec<ScheduledAlert>,
    cancel: CancellationToken,
}

impl BlindSchedule {
    pub fn alerts(&self) -> &[ScheduledAlert] {
        &self.alerts
    }

    /// Stop every alert that has not fired yet
    pub fn cancel_all(&self) {
        self.cancel.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }
}

impl Drop for BlindSchedule {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
