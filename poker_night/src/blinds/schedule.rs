//! Pure blind schedule computation.

use std::{fmt, time::Duration};

/// Blind values in the order they are reached
pub const BLIND_AMOUNTS: [u32; 11] = [100, 200, 300, 400, 500, 600, 800, 1000, 2000, 4000, 8000];

/// Minutes added to the player count to get the time between levels
pub const DEFAULT_BASE_MINUTES: u64 = 5;

/// One blind increase, relative to the start of the hand
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledAlert {
    pub at: Duration,
    pub amount: u32,
}

impl fmt::Display for ScheduledAlert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} chips at {}m", self.amount, self.at.as_secs() / 60)
    }
}

/// Time between blind levels, or `None` when it cannot be represented.
///
/// `None` also covers a last level whose offset would overflow, so every
/// `Some` increment yields a full schedule.
///
/// # Examples
///
/// ```
/// use poker_night::blinds::level_increment;
/// use std::time::Duration;
///
/// assert_eq!(level_increment(5, 7), Some(Duration::from_secs(12 * 60)));
/// assert_eq!(level_increment(5, usize::MAX), None);
/// ```
pub fn level_increment(base_minutes: u64, number_of_players: usize) -> Option<Duration> {
    let minutes = base_minutes.checked_add(u64::try_from(number_of_players).ok()?)?;
    let increment = Duration::from_secs(minutes.checked_mul(60)?);
    let last_step = u32::try_from(BLIND_AMOUNTS.len() - 1).ok()?;
    increment.checked_mul(last_step)?;
    Some(increment)
}

/// Compute the blind levels for a hand.
///
/// The first level is at offset zero and each following level is
/// `base_minutes + number_of_players` minutes later. Zero players is a
/// degenerate hand with no levels at all, and so is a count too large for
/// [`level_increment`].
///
/// # Examples
///
/// ```
/// use poker_night::blinds::blind_schedule;
/// use std::time::Duration;
///
/// let alerts = blind_schedule(5, 7);
/// assert_eq!(alerts.len(), 11);
/// assert_eq!(alerts[1].at, Duration::from_secs(12 * 60));
/// assert_eq!(alerts[1].amount, 200);
/// ```
pub fn blind_schedule(base_minutes: u64, number_of_players: usize) -> Vec<ScheduledAlert> {
    if number_of_players == 0 {
        return Vec::new();
    }
    let Some(increment) = level_increment(base_minutes, number_of_players) else {
        return Vec::new();
    };

    BLIND_AMOUNTS
        .iter()
        .zip(0u32..)
        .map(|(&amount, step)| ScheduledAlert {
            at: increment * step,
            amount,
        })
        .collect()
}
