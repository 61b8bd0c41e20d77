//! Binary integer program representation.
//!
//! Represents a maximization problem of the form:
//!
//! ```text
//! maximize    c^T * x
//! subject to  sparse linear constraints
//!             x in {0, 1}
//! ```

use std::fmt;

/// Direction of a linear constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sense {
    LessEqual,
    GreaterEqual,
    Equal,
}

/// What a constraint encodes. Used for logging and inspection only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConstraintKind {
    Budget,
    Slot,
    TotalSelected,
    Uniqueness,
    Exclusion,
    QbStack,
    AntiStackRbQb,
    AntiStackRbWrTe,
    AntiStackTe,
    SmartDefense,
}

impl fmt::Display for ConstraintKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ConstraintKind::Budget => "budget",
            ConstraintKind::Slot => "slot",
            ConstraintKind::TotalSelected => "total",
            ConstraintKind::Uniqueness => "uniqueness",
            ConstraintKind::Exclusion => "exclusion",
            ConstraintKind::QbStack => "qb-stack",
            ConstraintKind::AntiStackRbQb => "anti-stack-rb-qb",
            ConstraintKind::AntiStackRbWrTe => "anti-stack-rb-wr-te",
            ConstraintKind::AntiStackTe => "anti-stack-te",
            ConstraintKind::SmartDefense => "smart-defense",
        };
        write!(f, "{}", s)
    }
}

/// Sparse linear constraint `sum(coef * x[var]) <sense> rhs`.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearConstraint {
    pub kind: ConstraintKind,
    pub terms: Vec<(usize, f64)>,
    pub sense: Sense,
    pub rhs: f64,
}

impl LinearConstraint {
    pub fn leq(kind: ConstraintKind, terms: Vec<(usize, f64)>, rhs: f64) -> Self {
        Self {
            kind,
            terms,
            sense: Sense::LessEqual,
            rhs,
        }
    }

    pub fn geq(kind: ConstraintKind, terms: Vec<(usize, f64)>, rhs: f64) -> Self {
        Self {
            kind,
            terms,
            sense: Sense::GreaterEqual,
            rhs,
        }
    }

    pub fn eq(kind: ConstraintKind, terms: Vec<(usize, f64)>, rhs: f64) -> Self {
        Self {
            kind,
            terms,
            sense: Sense::Equal,
            rhs,
        }
    }

    /// `x[a] + x[b] <= 1`
    pub fn at_most_one_of(kind: ConstraintKind, a: usize, b: usize) -> Self {
        Self::leq(kind, vec![(a, 1.0), (b, 1.0)], 1.0)
    }

    /// Evaluate the left-hand side against a 0/1 assignment.
    pub fn lhs(&self, values: &[bool]) -> f64 {
        self.terms
            .iter()
            .filter(|(var, _)| values.get(*var).copied().unwrap_or(false))
            .map(|(_, coef)| coef)
            .sum()
    }

    pub fn is_satisfied(&self, values: &[bool]) -> bool {
        const EPS: f64 = 1e-6;
        let lhs = self.lhs(values);
        match self.sense {
            Sense::LessEqual => lhs <= self.rhs + EPS,
            Sense::GreaterEqual => lhs >= self.rhs - EPS,
            Sense::Equal => (lhs - self.rhs).abs() <= EPS,
        }
    }
}

/// One solve's worth of model: binary variables over a subset of the pool.
#[derive(Debug, Clone, Default)]
pub struct LineupModel {
    /// Pool index of the player copy behind each variable.
    pub vars: Vec<usize>,
    /// Projection coefficient per variable; maximised.
    pub objective: Vec<f64>,
    pub constraints: Vec<LinearConstraint>,
}

impl LineupModel {
    pub fn num_vars(&self) -> usize {
        self.vars.len()
    }

    pub fn count(&self, kind: ConstraintKind) -> usize {
        self.constraints.iter().filter(|c| c.kind == kind).count()
    }

    pub fn objective_value(&self, values: &[bool]) -> f64 {
        self.objective
            .iter()
            .zip(values)
            .filter(|(_, selected)| **selected)
            .map(|(coef, _)| coef)
            .sum()
    }

    /// True if the assignment satisfies every constraint.
    pub fn is_feasible(&self, values: &[bool]) -> bool {
        values.len() == self.num_vars() && self.constraints.iter().all(|c| c.is_satisfied(values))
    }
}
