//! Turn raw roster rows into typed players.

use tracing::warn;

use super::matchup::Matchup;
use super::player::{Player, RawPlayer};
use crate::cli::types::{InjuryStatus, PlayerId, Position};
use crate::error::{LineupError, Result};

/// Result of normalizing a whole roster: the good players plus every rejected row.
#[derive(Debug, Default)]
pub struct Normalized {
    pub players: Vec<Player>,
    pub rejected: Vec<LineupError>,
}

fn malformed(index: usize, field: &str, value: &str) -> LineupError {
    LineupError::MalformedRecord {
        index,
        field: field.to_string(),
        value: value.to_string(),
    }
}

fn parse_salary(index: usize, raw: &str) -> Result<u32> {
    match raw.trim().parse::<u32>() {
        Ok(salary) if salary > 0 => Ok(salary),
        _ => Err(malformed(index, "salary", raw)),
    }
}

fn parse_projection(index: usize, raw: &str) -> Result<f64> {
    match raw.trim().parse::<f64>() {
        Ok(points) if points.is_finite() && points >= 0.0 => Ok(points),
        _ => Err(malformed(index, "projection", raw)),
    }
}

/// Validate a single row. `index` is the row's position in the input and is
/// only used for error reporting.
pub fn normalize_record(index: usize, raw: &RawPlayer) -> Result<Player> {
    let id: PlayerId = raw.id.parse().map_err(|_| malformed(index, "id", &raw.id))?;

    if raw.name.trim().is_empty() {
        return Err(malformed(index, "name", &raw.name));
    }
    if raw.team.trim().is_empty() {
        return Err(malformed(index, "team", &raw.team));
    }

    let position: Position = raw
        .position
        .parse()
        .map_err(|_| malformed(index, "position", &raw.position))?;
    let salary = parse_salary(index, &raw.salary)?;
    let projection = parse_projection(index, &raw.projection)?;

    let mut player = Player::new(id, &raw.name, &raw.team, position, salary, projection);

    if let Some(status) = raw.status.as_deref() {
        player = player.with_status(InjuryStatus::from_designation(status));
    }

    if let Some(game) = raw.matchup.as_deref().filter(|s| !s.trim().is_empty()) {
        match game.parse::<Matchup>() {
            Ok(matchup) => player = player.with_matchup(matchup),
            Err(e) => warn!(index, player = %player.name, "ignoring matchup: {}", e),
        }
    }

    // An explicit opponent column wins over the one derived from the matchup
    if let Some(opponent) = raw.opponent.as_deref().filter(|s| !s.trim().is_empty()) {
        player = player.with_opponent(opponent);
    }

    Ok(player)
}

/// Normalize every row, dropping (and reporting) the malformed ones.
pub fn normalize(raw_players: &[RawPlayer]) -> Normalized {
    let mut out = Normalized::default();

    for (index, raw) in raw_players.iter().enumerate() {
        match normalize_record(index, raw) {
            Ok(player) => out.players.push(player),
            Err(e) => {
                warn!("dropping record: {}", e);
                out.rejected.push(e);
            }
        }
    }

    out
}
