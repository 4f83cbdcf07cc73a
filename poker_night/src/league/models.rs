//! League ledger models and their on-disk JSON shape.

use super::errors::{LeagueError, LeagueResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A single league record
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    /// Unique, case-sensitive player name
    #[serde(rename = "Name")]
    pub name: String,

    /// Number of recorded wins
    #[serde(rename = "Wins")]
    pub wins: u64,
}

impl Player {
    pub fn new(name: impl Into<String>, wins: u64) -> Self {
        Self {
            name: name.into(),
            wins,
        }
    }
}

/// Ordered collection of players, in insertion order.
///
/// Serializes as a plain JSON array: `[{"Name": "Cleo", "Wins": 10}]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct League(Vec<Player>);

impl League {
    /// Create an empty league
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Decode a league from its persisted bytes.
    ///
    /// Zero-length (or whitespace-only) input is an empty league, so a freshly
    /// created backing file loads cleanly.
    ///
    /// # Errors
    ///
    /// * `LeagueError::Parse` - Content is not a JSON array of players
    /// * `LeagueError::Corrupt` - A name is blank or appears more than once
    pub fn decode(bytes: &[u8]) -> LeagueResult<Self> {
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::new());
        }
        let league: Self = serde_json::from_slice(bytes)?;
        league.check_names()?;
        Ok(league)
    }

    fn check_names(&self) -> LeagueResult<()> {
        let mut seen = HashSet::with_capacity(self.0.len());
        for player in &self.0 {
            if player.name.trim().is_empty() {
                return Err(LeagueError::Corrupt(format!(
                    "blank player name {:?}",
                    player.name
                )));
            }
            if !seen.insert(player.name.as_str()) {
                return Err(LeagueError::Corrupt(format!(
                    "duplicate player {:?}",
                    player.name
                )));
            }
        }
        Ok(())
    }

    /// Encode the league into its persisted bytes
    pub fn encode(&self) -> LeagueResult<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }

    /// First player whose name matches exactly
    pub fn find(&self, name: &str) -> Option<&Player> {
        self.0.iter().find(|p| p.name == name)
    }

    fn find_mut(&mut self, name: &str) -> Option<&mut Player> {
        self.0.iter_mut().find(|p| p.name == name)
    }

    /// Add one win for `name`, appending a new record on a first win.
    ///
    /// Returns the player's new win count.
    pub fn record_win(&mut self, name: &str) -> u64 {
        match self.find_mut(name) {
            Some(player) => {
                player.wins += 1;
                player.wins
            }
            None => {
                self.0.push(Player::new(name, 1));
                1
            }
        }
    }

    /// Copy of the league ordered by descending wins.
    ///
    /// Players with equal wins keep no particular order.
    pub fn sorted_by_wins(&self) -> Self {
        let mut players = self.0.clone();
        players.sort_unstable_by(|a, b| b.wins.cmp(&a.wins));
        Self(players)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Player> {
        self.0.iter()
    }

    pub fn into_players(self) -> Vec<Player> {
        self.0
    }
}

impl From<Vec<Player>> for League {
    fn from(players: Vec<Player>) -> Self {
        Self(players)
    }
}

impl FromIterator<Player> for League {
    fn from_iter<I: IntoIterator<Item = Player>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for League {
    type Item = Player;
    type IntoIter = std::vec::IntoIter<Player>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a League {
    type Item = &'a Player;
    type IntoIter = std::slice::Iter<'a, Player>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
