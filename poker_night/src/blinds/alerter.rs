//! Alert destinations and the alerters that write to them.

use std::time::Duration;
use thiserror::Error;
use tokio::{runtime::Handle, sync::mpsc};
use tokio_util::sync::CancellationToken;

/// Alert errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AlertError {
    /// Nobody is reading the destination any more
    #[error("Alert destination closed")]
    DestinationClosed,

    /// Timed alerts need a tokio runtime to run on
    #[error("No async runtime available to schedule alerts")]
    NoRuntime,
}

/// Where rendered alert text is delivered.
///
/// Cheap to clone; every clone feeds the same receiver, which the front-end
/// drains to its console or live connection.
#[derive(Debug, Clone)]
pub struct AlertDestination {
    tx: mpsc::UnboundedSender<String>,
}

impl AlertDestination {
    /// Create a destination and the receiver its alerts arrive on
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<String>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    /// Deliver `text`
    ///
    /// # Errors
    ///
    /// * `AlertError::DestinationClosed` - The receiver was dropped
    pub fn write(&self, text: impl Into<String>) -> Result<(), AlertError> {
        self.tx
            .send(text.into())
            .map_err(|_| AlertError::DestinationClosed)
    }

    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

/// Text shown when the blinds reach `amount`
pub fn render_alert(amount: u32) -> String {
    format!("Blind is now {amount}\n")
}

/// Arms a single blind alert.
///
/// Implementations must return without waiting for `at` to elapse, and must
/// not deliver the alert once `cancel` is cancelled.
pub trait BlindAlerter: Send + Sync {
    fn schedule_alert_at(
        &self,
        at: Duration,
        amount: u32,
        to: AlertDestination,
        cancel: CancellationToken,
    ) -> Result<(), AlertError>;
}

/// Alerter that sleeps on a tokio timer per alert
#[derive(Debug, Default, Clone, Copy)]
pub struct TimerAlerter;

impl BlindAlerter for TimerAlerter {
    fn schedule_alert_at(
        &self,
        at: Duration,
        amount: u32,
        to: AlertDestination,
        cancel: CancellationToken,
    ) -> Result<(), AlertError> {
        let handle = Handle::try_current().map_err(|_| AlertError::NoRuntime)?;

        handle.spawn(async move {
            tokio::select! {
                biased;
                _ = cancel.cancelled() => {
                    log::debug!("Blind alert for {} cancelled", amount);
                }
                _ = tokio::time::sleep(at) => {
                    if let Err(e) = to.write(render_alert(amount)) {
                        log::warn!("Failed to deliver blind alert for {}: {}", amount, e);
                    }
                }
            }
        });

        Ok(())
    }
}
