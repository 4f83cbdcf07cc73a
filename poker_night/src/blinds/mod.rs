//! Blind schedule computation and timed blind-increase alerts.
//!
//! A hand's blinds climb through [`BLIND_AMOUNTS`]. The first level applies
//! immediately and each later level arrives `base_minutes + players` minutes
//! after the previous one, so with five base minutes and seven players the
//! blinds rise every twelve minutes.
//!
//! - [`blind_schedule`] computes the levels
//! - [`BlindScheduler`] arms one dispatch per level through a [`BlindAlerter`]
//! - [`TimerAlerter`] is the tokio-timer alerter used by the front-ends
//!
//! ## Example
//!
//! ```no_run
//! use poker_night::blinds::{AlertDestination, BlindScheduler, TimerAlerter};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let scheduler = BlindScheduler::new(Arc::new(TimerAlerter));
//!     let (destination, mut alerts) = AlertDestination::channel();
//!
//!     let schedule = scheduler.start(7, destination)?;
//!     println!("{} levels armed", schedule.alerts().len());
//!
//!     while let Some(text) = alerts.recv().await {
//!         print!("{text}");
//!     }
//!     Ok(())
//! }
//! ```

pub mod alerter;
pub mod schedule;
pub mod scheduler;

pub use alerter::{AlertDestination, AlertError, BlindAlerter, TimerAlerter, render_alert};
pub use schedule::{
    BLIND_AMOUNTS, DEFAULT_BASE_MINUTES, ScheduledAlert, blind_schedule, level_increment,
};
pub use scheduler::{BlindSchedule, BlindScheduler};
