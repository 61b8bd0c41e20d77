//! Pseudo-position expansion.

use super::player::{Player, PlayerCopy};
use crate::config::PseudoPositionMap;

/// Emit one copy of every player per slot that the player's position maps to.
///
/// Copies keep the player's identity, so uniqueness and exposure treat them
/// as one human. Players whose position has no mapping produce no copies.
/// Output order is player order, then mapping order.
pub fn expand_pseudo_positions(players: &[Player], mapping: &PseudoPositionMap) -> Vec<PlayerCopy> {
    players
        .iter()
        .flat_map(|player| {
            mapping
                .targets(player.position)
                .iter()
                .map(move |slot| PlayerCopy::new(player.clone(), *slot))
        })
        .collect()
}
