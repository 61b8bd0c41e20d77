//! Structured game matchups.

use crate::error::{LineupError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One game: the away team visits the home team.
///
/// Parsed from strings such as `"NYG@DAL"`, `"NYG @ DAL"` or the
/// salary-export form `"NYG@DAL 10/13/2024 08:20PM ET"`.
///
/// # Examples
///
/// ```rust
/// use lineup_optimizer::roster::Matchup;
///
/// let game: Matchup = "NYG@DAL 10/13/2024 08:20PM ET".parse().unwrap();
/// assert_eq!(game.opponent_of("dal"), Some("NYG"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Matchup {
    pub away: String,
    pub home: String,
}

impl Matchup {
    pub fn new(away: &str, home: &str) -> Self {
        Self {
            away: away.trim().to_uppercase(),
            home: home.trim().to_uppercase(),
        }
    }

    /// The team `team` plays against in this game, or `None` if it isn't playing.
    pub fn opponent_of(&self, team: &str) -> Option<&str> {
        let team = team.trim();
        if team.eq_ignore_ascii_case(&self.away) {
            Some(&self.home)
        } else if team.eq_ignore_ascii_case(&self.home) {
            Some(&self.away)
        } else {
            None
        }
    }
}

impl fmt::Display for Matchup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.away, self.home)
    }
}

fn is_team_abbrev(s: &str) -> bool {
    !s.is_empty() && s.len() <= 4 && s.chars().all(|c| c.is_ascii_alphabetic())
}

impl FromStr for Matchup {
    type Err = LineupError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || LineupError::InvalidMatchup {
            matchup: s.to_string(),
        };

        let (left, right) = s.split_once('@').ok_or_else(invalid)?;
        let away = left.split_whitespace().last().ok_or_else(invalid)?;
        let home = right.split_whitespace().next().ok_or_else(invalid)?;

        if !is_team_abbrev(away) || !is_team_abbrev(home) || away.eq_ignore_ascii_case(home) {
            return Err(invalid());
        }

        Ok(Self::new(away, home))
    }
}
