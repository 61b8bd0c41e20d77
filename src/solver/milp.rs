//! `good_lp` backed solver.
//!
//! Uses the pure-Rust microlp backend by default; build with the `highs`
//! feature to use HiGHS instead.

#[cfg(feature = "highs")]
use good_lp::solvers::highs::highs as backend;
#[cfg(not(feature = "highs"))]
use good_lp::solvers::microlp::microlp as backend;
use good_lp::{
    constraint, variable, variables, Expression, ResolutionError, Solution as _, SolverModel,
    Variable,
};

use super::{LineupSolver, Solution};
use crate::error::{LineupError, Result};
use crate::model::{LineupModel, Sense};

/// Mixed-integer solver over `good_lp`.
#[derive(Debug, Default, Clone, Copy)]
pub struct MilpSolver;

impl MilpSolver {
    pub fn new() -> Self {
        Self
    }
}

impl LineupSolver for MilpSolver {
    fn name(&self) -> &'static str {
        if cfg!(feature = "highs") {
            "highs"
        } else {
            "microlp"
        }
    }

    fn solve(&self, model: &LineupModel) -> Result<Solution> {
        if model.num_vars() == 0 {
            return Ok(Solution::optimal(Vec::new()));
        }

        let mut vars = variables!();
        let xs: Vec<Variable> = (0..model.num_vars())
            .map(|_| vars.add(variable().binary()))
            .collect();

        let objective: Expression = model
            .objective
            .iter()
            .zip(&xs)
            .map(|(coef, x)| *coef * *x)
            .sum();

        let mut problem = vars.maximise(objective).using(backend);

        for c in &model.constraints {
            let lhs: Expression = c.terms.iter().map(|&(var, coef)| coef * xs[var]).sum();
            let rhs = c.rhs;
            problem = match c.sense {
                Sense::LessEqual => problem.with(constraint!(lhs <= rhs)),
                Sense::GreaterEqual => problem.with(constraint!(lhs >= rhs)),
                Sense::Equal => problem.with(constraint!(lhs == rhs)),
            };
        }

        match problem.solve() {
            Ok(solution) => Ok(Solution::optimal(
                xs.iter().map(|x| solution.value(*x) > 0.5).collect(),
            )),
            Err(ResolutionError::Infeasible) => Ok(Solution::infeasible()),
            Err(e) => Err(LineupError::Solver {
                message: e.to_string(),
            }),
        }
    }
}
