//! Daily Fantasy Football Lineup Optimizer Library
//!
//! Builds salary-capped daily fantasy lineups by repeatedly solving a binary
//! integer program over a player pool, excluding each produced lineup from the
//! next solve so every lineup in a batch is distinct.
//!
//! ## Features
//!
//! - **Roster Model**: Normalize raw slate rows, filter by projection floor and
//!   injury status, and expand players into slot-tagged pseudo-position copies
//! - **Constraint Builder**: Salary cap, slot fill, player uniqueness, lineup
//!   exclusion and optional stacking strategies
//! - **Pluggable Solver**: `LineupSolver` trait with a `good_lp` backend
//! - **Batch Generation**: Up to 200 distinct lineups per request with
//!   per-position exposure ceilings and cooperative cancellation
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use lineup_optimizer::{
//!     batch::{BatchGenerator, BatchRequest, CancelToken},
//!     roster::{prepare_pool, Player},
//!     solver::MilpSolver,
//!     EngineConfig, PlayerId, Position,
//! };
//!
//! # fn example() -> lineup_optimizer::Result<()> {
//! let config = EngineConfig::default();
//! let players = vec![
//!     Player::new(PlayerId::new(1), "Josh Allen", "BUF", Position::QB, 8200, 24.1),
//!     // ... the rest of the slate
//! ];
//!
//! let pool = prepare_pool(players, &config);
//! let outcome = BatchGenerator::new(&MilpSolver::new(), &config)
//!     .generate(&BatchRequest::new(pool, 20), &CancelToken::new())?;
//!
//! for lineup in &outcome.lineups {
//!     println!("{:.2} pts / ${}", lineup.total_projection(), lineup.total_salary());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Point at a config file without passing `--config` every time:
//! ```bash
//! export LINEUP_OPTIMIZER_CONFIG=~/dfs/main-slate.toml
//! ```

pub mod batch;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod roster;
pub mod solver;

// Re-export commonly used types
pub use cli::types::{InjuryStatus, PlayerId, PlayerKey, Position, Slot, SlotSchema};
pub use config::{EngineConfig, StrategyFlags};
pub use error::{LineupError, Result};

pub const CONFIG_ENV_VAR: &str = "LINEUP_OPTIMIZER_CONFIG";
