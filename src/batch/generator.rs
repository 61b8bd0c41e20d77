//! Batch generator: repeated build/solve cycles over one session.

use std::collections::HashSet;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use rayon::prelude::*;
use tracing::{debug, info, warn};

use super::lineup::Lineup;
use super::session::OptimizationSession;
use crate::cli::types::PlayerId;
use crate::config::EngineConfig;
use crate::error::{LineupError, Result};
use crate::model::build_model;
use crate::roster::PlayerCopy;
use crate::solver::LineupSolver;

/// Cooperative cancellation flag, checked before every solve.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Lifecycle of a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchState {
    Idle,
    Running,
    Completed,
    Aborted,
}

impl fmt::Display for BatchState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BatchState::Idle => "idle",
            BatchState::Running => "running",
            BatchState::Completed => "completed",
            BatchState::Aborted => "aborted",
        };
        write!(f, "{}", s)
    }
}

/// A generate-N-lineups request.
#[derive(Debug, Clone)]
pub struct BatchRequest {
    /// Expanded, eligibility-filtered pool.
    pub pool: Vec<PlayerCopy>,
    /// Players to leave out of every lineup, all copies included.
    pub disabled: HashSet<PlayerId>,
    pub lineup_count: usize,
}

impl BatchRequest {
    pub fn new(pool: Vec<PlayerCopy>, lineup_count: usize) -> Self {
        Self {
            pool,
            disabled: HashSet::new(),
            lineup_count,
        }
    }

    pub fn with_disabled(mut self, disabled: impl IntoIterator<Item = PlayerId>) -> Self {
        self.disabled.extend(disabled);
        self
    }
}

/// Terminal result of a batch. Lineups produced before an abort are kept.
#[derive(Debug)]
pub struct BatchOutcome {
    pub lineups: Vec<Lineup>,
    /// Solver calls made.
    pub iterations: usize,
    pub requested: usize,
    pub state: BatchState,
    /// Why the batch stopped early; `None` when completed.
    pub reason: Option<LineupError>,
}

impl BatchOutcome {
    pub fn produced(&self) -> usize {
        self.lineups.len()
    }

    pub fn is_complete(&self) -> bool {
        self.state == BatchState::Completed
    }

    /// All lineups, or the abort reason if the batch stopped short.
    pub fn into_result(self) -> Result<Vec<Lineup>> {
        match self.reason {
            Some(reason) => Err(reason),
            None => Ok(self.lineups),
        }
    }
}

/// Drives one batch at a time against an injected solver.
pub struct BatchGenerator<'a, S: LineupSolver + ?Sized> {
    solver: &'a S,
    config: &'a EngineConfig,
    state: BatchState,
}

impl<'a, S: LineupSolver + ?Sized> BatchGenerator<'a, S> {
    pub fn new(solver: &'a S, config: &'a EngineConfig) -> Self {
        Self {
            solver,
            config,
            state: BatchState::Idle,
        }
    }

    pub fn state(&self) -> BatchState {
        self.state
    }

    fn validate(&self, request: &BatchRequest) -> Result<()> {
        let max = self.config.max_lineups;
        if request.lineup_count == 0 || request.lineup_count > max {
            return Err(LineupError::invalid_request(format!(
                "lineup count {} outside 1..={max}",
                request.lineup_count
            )));
        }
        if !request
            .pool
            .iter()
            .any(|copy| !request.disabled.contains(&copy.player.id))
        {
            return Err(LineupError::invalid_request("no eligible players in pool"));
        }
        Ok(())
    }

    /// Produce up to `request.lineup_count` distinct lineups.
    ///
    /// Invalid requests fail with `InvalidRequest` and leave the generator
    /// idle. Every other failure ends the batch as `Aborted` with the
    /// lineups produced so far and the reason attached.
    pub fn generate(&mut self, request: &BatchRequest, cancel: &CancelToken) -> Result<BatchOutcome> {
        self.validate(request)?;
        self.state = BatchState::Running;

        info!(
            requested = request.lineup_count,
            pool = request.pool.len(),
            disabled = request.disabled.len(),
            solver = self.solver.name(),
            "starting lineup batch"
        );

        let mut session = OptimizationSession::new(request.lineup_count);
        let reason = loop {
            if session.is_done() {
                break None;
            }
            match self.step(&mut session, request, cancel) {
                Ok(lineup) => {
                    debug!(
                        lineup = session.produced() + 1,
                        points = lineup.total_projection(),
                        salary = lineup.total_salary(),
                        "lineup accepted"
                    );
                    session.record(lineup);
                }
                Err(reason) => break Some(reason),
            }
        };

        let iterations = session.iterations();
        let lineups = session.into_lineups();
        self.state = if reason.is_some() {
            BatchState::Aborted
        } else {
            BatchState::Completed
        };

        match &reason {
            Some(e) => warn!(produced = lineups.len(), iterations, "batch aborted: {}", e),
            None => info!(produced = lineups.len(), iterations, "batch completed"),
        }

        Ok(BatchOutcome {
            lineups,
            iterations,
            requested: request.lineup_count,
            state: self.state,
            reason,
        })
    }

    /// One build/solve cycle. Never retries.
    fn step(
        &self,
        session: &mut OptimizationSession,
        request: &BatchRequest,
        cancel: &CancelToken,
    ) -> Result<Lineup> {
        let produced = session.produced();
        if cancel.is_cancelled() {
            return Err(LineupError::Cancelled { produced });
        }

        let pool = session.working_pool(&request.pool, &request.disabled, self.config);
        // Once lineups exist, a pool drained by exposure caps ends the batch short
        let model = build_model(&pool, session.exclusions(), self.config).map_err(|e| match e {
            LineupError::InfeasiblePool { reason } if produced > 0 => {
                debug!(produced, "pool exhausted: {}", reason);
                LineupError::IncompleteLineup { produced }
            }
            other => other,
        })?;

        session.begin_iteration();
        let solution = self.solver.solve(&model)?;
        if !solution.is_feasible() || !model.is_feasible(&solution.values) {
            return Err(LineupError::IncompleteLineup { produced });
        }

        Lineup::from_solution(&pool, &model, &solution, self.config)
            .ok_or(LineupError::IncompleteLineup { produced })
    }
}

/// Run independent batch requests in parallel, each with its own session.
pub fn run_independent<S: LineupSolver + ?Sized>(
    solver: &S,
    config: &EngineConfig,
    requests: &[BatchRequest],
) -> Vec<Result<BatchOutcome>> {
    requests
        .par_iter()
        .map(|request| BatchGenerator::new(solver, config).generate(request, &CancelToken::new()))
        .collect()
}
