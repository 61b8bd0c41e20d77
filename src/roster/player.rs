//! Raw and typed player records.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::matchup::Matchup;
use crate::cli::types::{InjuryStatus, PlayerId, PlayerKey, Position, Slot};

/// Accept either a JSON number or a string, keeping the textual form for parsing later.
fn de_lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Value = Deserialize::deserialize(deserializer)?;
    Ok(match raw {
        Value::Null => String::new(),
        Value::String(s) => s,
        other => other.to_string(),
    })
}

/// A roster row as supplied by the caller, before any validation.
///
/// Column names of the common salary export are accepted as aliases.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RawPlayer {
    #[serde(alias = "ID", deserialize_with = "de_lenient_string", default)]
    pub id: String,
    #[serde(alias = "Name", default)]
    pub name: String,
    #[serde(alias = "TeamAbbrev", alias = "Team", default)]
    pub team: String,
    #[serde(alias = "Opponent", default)]
    pub opponent: Option<String>,
    #[serde(alias = "Game Info", alias = "GameInfo", default)]
    pub matchup: Option<String>,
    #[serde(alias = "Position", default)]
    pub position: String,
    #[serde(alias = "Salary", deserialize_with = "de_lenient_string", default)]
    pub salary: String,
    #[serde(alias = "Projection", deserialize_with = "de_lenient_string", default)]
    pub projection: String,
    #[serde(alias = "Status", default)]
    pub status: Option<String>,
}

/// Points per thousand dollars of salary, rounded to two decimals.
pub fn compute_value(projection: f64, salary: u32) -> f64 {
    if salary == 0 {
        return 0.0;
    }
    let raw = projection / (f64::from(salary) / 1000.0);
    (raw * 100.0).round() / 100.0
}

/// A validated player with its derived value.
///
/// The projection used by the optimizer is `base + boost + star`, never
/// negative. Every setter recomputes the value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub team: String,
    pub opponent: Option<String>,
    pub matchup: Option<Matchup>,
    pub position: Position,
    pub salary: u32,
    pub status: InjuryStatus,
    base_projection: f64,
    boost: f64,
    star: f64,
    value: f64,
}

impl Player {
    pub fn new(
        id: PlayerId,
        name: &str,
        team: &str,
        position: Position,
        salary: u32,
        projection: f64,
    ) -> Self {
        let mut player = Self {
            id,
            name: name.trim().to_string(),
            team: team.trim().to_uppercase(),
            opponent: None,
            matchup: None,
            position,
            salary,
            status: InjuryStatus::Healthy,
            base_projection: projection.max(0.0),
            boost: 0.0,
            star: 0.0,
            value: 0.0,
        };
        player.recompute_value();
        player
    }

    pub fn with_opponent(mut self, opponent: &str) -> Self {
        self.opponent = Some(opponent.trim().to_uppercase());
        self
    }

    /// Attach a matchup and derive the opponent from it.
    pub fn with_matchup(mut self, matchup: Matchup) -> Self {
        if let Some(opponent) = matchup.opponent_of(&self.team) {
            self.opponent = Some(opponent.to_string());
        }
        self.matchup = Some(matchup);
        self
    }

    pub fn with_status(mut self, status: InjuryStatus) -> Self {
        self.status = status;
        self
    }

    pub fn key(&self) -> PlayerKey {
        PlayerKey::new(&self.name, &self.team)
    }

    /// Projection fed to the optimizer, adjustments included.
    pub fn projection(&self) -> f64 {
        (self.base_projection + self.boost + self.star).max(0.0)
    }

    pub fn base_projection(&self) -> f64 {
        self.base_projection
    }

    pub fn boost(&self) -> f64 {
        self.boost
    }

    pub fn star(&self) -> f64 {
        self.star
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Manual projection edit.
    pub fn set_projection(&mut self, projection: f64) {
        self.base_projection = projection.max(0.0);
        self.recompute_value();
    }

    pub fn set_boost(&mut self, boost: f64) {
        self.boost = boost;
        self.recompute_value();
    }

    pub fn set_star(&mut self, star: f64) {
        self.star = star;
        self.recompute_value();
    }

    fn recompute_value(&mut self) {
        self.value = compute_value(self.projection(), self.salary);
    }
}

/// One decision variable: a player tagged with the slot it may fill.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerCopy {
    pub player: Player,
    pub slot: Slot,
}

impl PlayerCopy {
    pub fn new(player: Player, slot: Slot) -> Self {
        Self { player, slot }
    }

    pub fn key(&self) -> PlayerKey {
        self.player.key()
    }
}
