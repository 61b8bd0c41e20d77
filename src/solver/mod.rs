//! MILP solver seam.
//!
//! The engine never solves integer programs itself. It hands a
//! [`LineupModel`] to a [`LineupSolver`] and reads back a 0/1 assignment.
//! [`MilpSolver`] is the bundled `good_lp` backend; tests and callers can
//! substitute their own implementation.

pub mod milp;


pub use milp::MilpSolver;

use crate::error::Result;
use crate::model::LineupModel;

/// Termination status of a solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolutionStatus {
    Optimal,
    Infeasible,
}

/// 0/1 value per model variable.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    pub status: SolutionStatus,
    pub values: Vec<bool>,
}

impl Solution {
    pub fn optimal(values: Vec<bool>) -> Self {
        Self {
            status: SolutionStatus::Optimal,
            values,
        }
    }

    pub fn infeasible() -> Self {
        Self {
            status: SolutionStatus::Infeasible,
            values: Vec::new(),
        }
    }

    pub fn is_feasible(&self) -> bool {
        self.status == SolutionStatus::Optimal
    }

    /// Model variable numbers set to 1.
    pub fn selected(&self) -> impl Iterator<Item = usize> + '_ {
        self.values
            .iter()
            .enumerate()
            .filter(|(_, on)| **on)
            .map(|(var, _)| var)
    }
}

/// Binary integer program solver.
///
/// Implementations must be thread-safe so independent batches can share one.
pub trait LineupSolver: Send + Sync {
    /// Solver name for logging.
    fn name(&self) -> &'static str;

    /// Maximise the model's objective. Infeasibility is a normal outcome,
    /// reported through [`SolutionStatus`]; `Err` means the backend failed.
    fn solve(&self, model: &LineupModel) -> Result<Solution>;
}
