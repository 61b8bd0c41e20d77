//! Translate a player pool plus accumulated batch state into a `LineupModel`.

use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use super::problem::{ConstraintKind, LineupModel, LinearConstraint};
use super::strategy::strategy_constraints;
use crate::cli::types::PlayerKey;
use crate::config::EngineConfig;
use crate::error::{LineupError, Result};
use crate::roster::PlayerCopy;

/// Build the integer program for one solve.
///
/// `pool` must already be exposure- and disabled-filtered. `exclusions` holds
/// the physical players of every lineup produced earlier in the batch; each
/// becomes a constraint forcing at least one different player.
///
/// Copies tagged with a slot outside the schema get no variable. Fails with
/// `InfeasiblePool` before any solve when a slot has no candidate or the
/// pool has fewer distinct players than slots.
pub fn build_model(
    pool: &[PlayerCopy],
    exclusions: &[BTreeSet<PlayerKey>],
    config: &EngineConfig,
) -> Result<LineupModel> {
    let schema = &config.slots;
    let slot_count = schema.len();

    let vars: Vec<usize> = pool
        .iter()
        .enumerate()
        .filter(|(_, copy)| schema.contains(copy.slot))
        .map(|(i, _)| i)
        .collect();
    let copies: Vec<&PlayerCopy> = vars.iter().map(|&i| &pool[i]).collect();

    for slot in schema.slots() {
        if !copies.iter().any(|c| c.slot == *slot) {
            return Err(LineupError::InfeasiblePool {
                reason: format!("no eligible {slot} candidates"),
            });
        }
    }

    // Variable numbers per physical player
    let mut by_key: BTreeMap<PlayerKey, Vec<usize>> = BTreeMap::new();
    for (var, copy) in copies.iter().enumerate() {
        by_key.entry(copy.key()).or_default().push(var);
    }
    if by_key.len() < slot_count {
        return Err(LineupError::InfeasiblePool {
            reason: format!(
                "{} distinct players cannot fill {} slots",
                by_key.len(),
                slot_count
            ),
        });
    }

    let objective: Vec<f64> = copies.iter().map(|c| c.player.projection()).collect();
    let mut constraints = Vec::new();

    constraints.push(LinearConstraint::leq(
        ConstraintKind::Budget,
        copies
            .iter()
            .enumerate()
            .map(|(var, c)| (var, f64::from(c.player.salary)))
            .collect(),
        f64::from(config.salary_cap),
    ));

    for slot in schema.slots() {
        let terms = copies
            .iter()
            .enumerate()
            .filter(|(_, c)| c.slot == *slot)
            .map(|(var, _)| (var, 1.0))
            .collect();
        constraints.push(LinearConstraint::eq(ConstraintKind::Slot, terms, 1.0));
    }

    // Implied by the slot rows; kept so the total can't drift if those change
    constraints.push(LinearConstraint::eq(
        ConstraintKind::TotalSelected,
        (0..copies.len()).map(|var| (var, 1.0)).collect(),
        slot_count as f64,
    ));

    for group in by_key.values().filter(|group| group.len() > 1) {
        constraints.push(LinearConstraint::leq(
            ConstraintKind::Uniqueness,
            group.iter().map(|&var| (var, 1.0)).collect(),
            1.0,
        ));
    }

    for lineup in exclusions {
        // A lineup with a player no longer in the pool can't be rebuilt anyway
        if !lineup.iter().all(|key| by_key.contains_key(key)) {
            continue;
        }
        let terms = lineup
            .iter()
            .flat_map(|key| by_key[key].iter().map(|&var| (var, 1.0)))
            .collect();
        constraints.push(LinearConstraint::leq(
            ConstraintKind::Exclusion,
            terms,
            lineup.len().saturating_sub(1) as f64,
        ));
    }

    constraints.extend(strategy_constraints(&copies, &config.strategy));

    let model = LineupModel {
        vars,
        objective,
        constraints,
    };

    debug!(
        vars = model.num_vars(),
        constraints = model.constraints.len(),
        exclusions = model.count(ConstraintKind::Exclusion),
        "built lineup model"
    );

    Ok(model)
}
