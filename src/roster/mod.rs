//! Roster model: raw rows to typed players to slot-tagged copies.
//!
//! - `player`: raw and typed player records, value metric
//! - `matchup`: structured `away@home` games
//! - `normalize`: row validation
//! - `eligibility`: projection floors and status filter
//! - `expand`: pseudo-position copies

pub mod eligibility;
pub mod expand;
pub mod matchup;
pub mod normalize;
pub mod player;


pub use eligibility::{filter_eligible, is_eligible};
pub use expand::expand_pseudo_positions;
pub use matchup::Matchup;
pub use normalize::{normalize, normalize_record, Normalized};
pub use player::{compute_value, Player, PlayerCopy, RawPlayer};

use crate::config::EngineConfig;

/// Eligibility filter followed by pseudo-position expansion. Copies for
/// slots outside the configured schema are dropped.
pub fn prepare_pool(players: Vec<Player>, config: &EngineConfig) -> Vec<PlayerCopy> {
    let eligible = filter_eligible(players, &config.eligibility);
    expand_pseudo_positions(&eligible, &config.pseudo_positions)
        .into_iter()
        .filter(|copy| config.slots.contains(copy.slot))
        .collect()
}
