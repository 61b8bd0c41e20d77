//! Per-batch accumulated state.

use std::collections::{BTreeSet, HashMap, HashSet};

use super::lineup::Lineup;
use crate::cli::types::{PlayerId, PlayerKey};
use crate::config::EngineConfig;
use crate::roster::PlayerCopy;

/// State carried between iterations of one batch request: produced
/// lineups, their exclusion sets and per-player appearance counts.
///
/// Owned by a single batch; independent batches never share one.
#[derive(Debug, Default)]
pub struct OptimizationSession {
    lineup_count: usize,
    exclusions: Vec<BTreeSet<PlayerKey>>,
    appearances: HashMap<PlayerKey, usize>,
    lineups: Vec<Lineup>,
    iterations: usize,
}

impl OptimizationSession {
    pub fn new(lineup_count: usize) -> Self {
        Self {
            lineup_count,
            ..Self::default()
        }
    }

    pub fn lineup_count(&self) -> usize {
        self.lineup_count
    }

    pub fn produced(&self) -> usize {
        self.lineups.len()
    }

    pub fn is_done(&self) -> bool {
        self.produced() >= self.lineup_count
    }

    pub fn iterations(&self) -> usize {
        self.iterations
    }

    pub fn begin_iteration(&mut self) {
        self.iterations += 1;
    }

    pub fn exclusions(&self) -> &[BTreeSet<PlayerKey>] {
        &self.exclusions
    }

    pub fn appearances(&self, key: &PlayerKey) -> usize {
        self.appearances.get(key).copied().unwrap_or(0)
    }

    /// Pool for the next solve: disabled players and players already at
    /// their exposure ceiling are removed.
    pub fn working_pool(
        &self,
        pool: &[PlayerCopy],
        disabled: &HashSet<PlayerId>,
        config: &EngineConfig,
    ) -> Vec<PlayerCopy> {
        pool.iter()
            .filter(|copy| !disabled.contains(&copy.player.id))
            .filter(|copy| {
                let cap = config.exposure_cap(copy.player.position, self.lineup_count);
                self.appearances(&copy.key()) < cap
            })
            .cloned()
            .collect()
    }

    /// Accept a lineup: remember it for exclusion and bump exposure counters.
    pub fn record(&mut self, lineup: Lineup) {
        let keys = lineup.keys();
        for key in &keys {
            *self.appearances.entry(key.clone()).or_insert(0) += 1;
        }
        self.exclusions.push(keys);
        self.lineups.push(lineup);
    }

    pub fn lineups(&self) -> &[Lineup] {
        &self.lineups
    }

    pub fn into_lineups(self) -> Vec<Lineup> {
        self.lineups
    }
}
