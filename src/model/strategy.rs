//! Stacking, anti-stacking and smart-defense constraints.
//!
//! All functions take the model's variables as player copies indexed by
//! variable number.

use super::problem::{ConstraintKind, LinearConstraint};
use crate::cli::types::Position;
use crate::config::StrategyFlags;
use crate::roster::PlayerCopy;

/// Every enabled strategy rule, in a fixed order.
pub fn strategy_constraints(copies: &[&PlayerCopy], flags: &StrategyFlags) -> Vec<LinearConstraint> {
    let mut out = Vec::new();
    if flags.qb_stacking {
        out.extend(qb_stacking(copies));
    }
    if flags.anti_stack_rb_qb {
        out.extend(same_team_pairs(copies, ConstraintKind::AntiStackRbQb, |a, b| {
            either_way(a, b, |x, y| x == Position::RB && y == Position::QB)
        }));
    }
    if flags.anti_stack_rb_wr_te {
        out.extend(same_team_pairs(copies, ConstraintKind::AntiStackRbWrTe, |a, b| {
            either_way(a, b, |x, y| x == Position::RB && y.is_receiver())
        }));
    }
    if flags.anti_stack_te {
        out.extend(same_team_pairs(copies, ConstraintKind::AntiStackTe, |a, b| {
            either_way(a, b, |x, y| {
                x == Position::TE && y != Position::QB && y != Position::DST
            })
        }));
    }
    if flags.smart_defense {
        out.extend(smart_defense(copies));
    }
    out
}

fn either_way(a: Position, b: Position, rule: impl Fn(Position, Position) -> bool) -> bool {
    rule(a, b) || rule(b, a)
}

/// A selected quarterback requires at least one same-team WR or TE:
/// `sum(x[receivers of team]) - x[qb] >= 0`.
///
/// A quarterback with no same-team receiver in the pool can't be selected.
pub fn qb_stacking(copies: &[&PlayerCopy]) -> Vec<LinearConstraint> {
    copies
        .iter()
        .enumerate()
        .filter(|(_, c)| c.player.position == Position::QB)
        .map(|(qb, qb_copy)| {
            let mut terms: Vec<(usize, f64)> = copies
                .iter()
                .enumerate()
                .filter(|(_, c)| c.player.position.is_receiver() && c.player.team == qb_copy.player.team)
                .map(|(var, _)| (var, 1.0))
                .collect();
            terms.push((qb, -1.0));
            LinearConstraint::geq(ConstraintKind::QbStack, terms, 0.0)
        })
        .collect()
}

/// Cap every same-team pair of distinct players matching `offends` at one selection.
pub fn same_team_pairs(
    copies: &[&PlayerCopy],
    kind: ConstraintKind,
    offends: impl Fn(Position, Position) -> bool,
) -> Vec<LinearConstraint> {
    let mut out = Vec::new();
    for (a, first) in copies.iter().enumerate() {
        for (b, second) in copies.iter().enumerate().skip(a + 1) {
            if first.player.team != second.player.team
                || !offends(first.player.position, second.player.position)
                || first.key() == second.key()
            {
                continue;
            }
            out.push(LinearConstraint::at_most_one_of(kind, a, b));
        }
    }
    out
}

/// A defense and any offensive player it faces are never selected together.
pub fn smart_defense(copies: &[&PlayerCopy]) -> Vec<LinearConstraint> {
    let mut out = Vec::new();
    for (dst, defense) in copies.iter().enumerate() {
        if defense.player.position != Position::DST {
            continue;
        }
        for (var, copy) in copies.iter().enumerate() {
            let facing = copy.player.position.is_offensive()
                && copy.player.opponent.as_deref() == Some(defense.player.team.as_str());
            if facing {
                out.push(LinearConstraint::at_most_one_of(
                    ConstraintKind::SmartDefense,
                    dst,
                    var,
                ));
            }
        }
    }
    out
}
