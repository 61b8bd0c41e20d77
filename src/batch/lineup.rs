//! Produced lineups and their validation.

use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

use crate::cli::types::{PlayerKey, Position, Slot};
use crate::config::EngineConfig;
use crate::model::LineupModel;
use crate::roster::{Player, PlayerCopy};
use crate::solver::Solution;

/// One filled slot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineupSlot {
    pub slot: Slot,
    pub player: Player,
}

/// A complete assignment of one player per schema slot, in schema order.
///
/// Immutable once built; totals are derived on demand.
#[derive(Debug, Clone, PartialEq)]
pub struct Lineup {
    slots: Vec<LineupSlot>,
}

impl Lineup {
    /// Assemble a lineup from a solver assignment.
    ///
    /// Returns `None` unless every schema slot is filled by exactly one
    /// selected copy, no physical player repeats, each player fits the slot it fills
    /// and the salary cap holds.
    pub fn from_solution(
        pool: &[PlayerCopy],
        model: &LineupModel,
        solution: &Solution,
        config: &EngineConfig,
    ) -> Option<Self> {
        if !solution.is_feasible() || solution.values.len() != model.num_vars() {
            return None;
        }

        let selected: Vec<&PlayerCopy> = solution
            .selected()
            .map(|var| &pool[model.vars[var]])
            .collect();
        if selected.len() != config.slots.len() {
            return None;
        }

        let mut slots = Vec::with_capacity(config.slots.len());
        for slot in config.slots.slots() {
            let mut filling = selected.iter().filter(|c| c.slot == *slot);
            let copy = filling.next()?;
            if filling.next().is_some() {
                return None;
            }
            slots.push(LineupSlot {
                slot: *slot,
                player: copy.player.clone(),
            });
        }

        let lineup = Self { slots };
        lineup.is_valid(config).then_some(lineup)
    }

    /// Build directly from slot/player pairs. No validation is done here.
    pub fn from_slots(slots: Vec<LineupSlot>) -> Self {
        Self { slots }
    }

    pub fn slots(&self) -> &[LineupSlot] {
        &self.slots
    }

    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.slots.iter().map(|s| &s.player)
    }

    pub fn total_salary(&self) -> u32 {
        self.players().map(|p| p.salary).sum()
    }

    pub fn total_projection(&self) -> f64 {
        self.players().map(Player::projection).sum()
    }

    /// Physical players in this lineup.
    pub fn keys(&self) -> BTreeSet<PlayerKey> {
        self.players().map(Player::key).collect()
    }

    pub fn contains(&self, key: &PlayerKey) -> bool {
        self.players().any(|p| p.key() == *key)
    }

    /// Schema order and size, slot eligibility, distinct players, salary cap.
    pub fn is_valid(&self, config: &EngineConfig) -> bool {
        let schema_matches = self.slots.len() == config.slots.len()
            && self
                .slots
                .iter()
                .zip(config.slots.slots())
                .all(|(filled, slot)| filled.slot == *slot && slot.accepts(filled.player.position));

        schema_matches
            && self.keys().len() == self.slots.len()
            && self.total_salary() <= config.salary_cap
    }
}

impl Serialize for Lineup {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("Lineup", 3)?;
        state.serialize_field("slots", &self.slots)?;
        state.serialize_field("total_projection", &self.total_projection())?;
        state.serialize_field("total_salary", &self.total_salary())?;
        state.end()
    }
}

/// How often one physical player appears across a set of lineups.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Exposure {
    pub name: String,
    pub team: String,
    pub position: Position,
    pub count: usize,
    pub rate: f64,
}

/// Per-player appearance counts, most used first (ties by name).
pub fn exposure_report(lineups: &[Lineup]) -> Vec<Exposure> {
    let mut counts: BTreeMap<PlayerKey, (&Player, usize)> = BTreeMap::new();
    for player in lineups.iter().flat_map(Lineup::players) {
        counts.entry(player.key()).or_insert((player, 0)).1 += 1;
    }

    let total = lineups.len().max(1) as f64;
    let mut report: Vec<Exposure> = counts
        .into_values()
        .map(|(player, count)| Exposure {
            name: player.name.clone(),
            team: player.team.clone(),
            position: player.position,
            count,
            rate: count as f64 / total,
        })
        .collect();
    report.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.name.cmp(&b.name)));
    report
}
