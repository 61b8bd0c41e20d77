//! Constraint builder: player pool to binary integer program.
//!
//! - `problem`: model representation, independent of any solver backend
//! - `builder`: roster, budget, uniqueness and exclusion constraints
//! - `strategy`: optional stacking and defense rules

pub mod builder;
pub mod problem;
pub mod strategy;


pub use builder::build_model;
pub use problem::{ConstraintKind, LineupModel, LinearConstraint, Sense};
