//! Pre-expansion eligibility filter.

use tracing::debug;

use super::player::Player;
use crate::config::EligibilityConfig;

/// True if the player clears the projection floor for its position and status filter.
pub fn is_eligible(player: &Player, config: &EligibilityConfig) -> bool {
    player.projection() >= config.floor_for(player.position)
        && !config.excluded_statuses.contains(&player.status)
}

/// Drop players below their projection floor or with an excluded status.
pub fn filter_eligible(players: Vec<Player>, config: &EligibilityConfig) -> Vec<Player> {
    let before = players.len();
    let kept: Vec<Player> = players
        .into_iter()
        .filter(|p| is_eligible(p, config))
        .collect();
    debug!(before, after = kept.len(), "applied eligibility filter");
    kept
}
