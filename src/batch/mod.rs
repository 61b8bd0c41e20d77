//! Batch generator.
//!
//! Orchestrates repeated build/solve cycles. Each produced lineup becomes
//! an exclusion constraint for the next cycle and bumps the exposure
//! counters that shrink the working pool. The fold is sequential by nature;
//! only independent batches run in parallel.

pub mod generator;
pub mod lineup;
pub mod session;


pub use generator::{
    run_independent, BatchGenerator, BatchOutcome, BatchRequest, BatchState, CancelToken,
};
pub use lineup::{exposure_report, Exposure, Lineup, LineupSlot};
pub use session::OptimizationSession;
