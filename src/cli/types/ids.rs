//! Identity types for players.

use crate::error::{LineupError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for a player's row id in the source roster.
///
/// Every pseudo-position copy of a player carries the same id.
///
/// # Examples
///
/// ```rust
/// use lineup_optimizer::PlayerId;
///
/// let id: PlayerId = "38410".parse().unwrap();
/// assert_eq!(id.as_u64(), 38410);
/// assert_eq!(id.to_string(), "38410");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u64);

impl PlayerId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PlayerId {
    type Err = LineupError;

    fn from_str(s: &str) -> Result<Self> {
        s.trim()
            .parse()
            .map(Self)
            .map_err(|_| LineupError::invalid_request(format!("invalid player id {s:?}")))
    }
}

/// Physical identity of a player: name plus team.
///
/// Two pool entries with equal keys are the same human, no matter which
/// slot they are tagged with. Uniqueness, exclusion and exposure are all
/// counted on this key, never on the decision-variable index.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerKey {
    name: String,
    team: String,
}

impl PlayerKey {
    pub fn new(name: &str, team: &str) -> Self {
        Self {
            name: name.trim().to_lowercase(),
            team: team.trim().to_uppercase(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn team(&self) -> &str {
        &self.team
    }
}

impl fmt::Display for PlayerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.team)
    }
}
