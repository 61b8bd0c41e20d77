//! The `generate` command: build a batch of distinct lineups.

use serde::Serialize;
use std::collections::HashSet;
use std::path::PathBuf;

use super::common::{apply_strategy_args, format_salary, load_players};
use crate::{
    batch::{exposure_report, BatchGenerator, BatchOutcome, BatchRequest, CancelToken, Exposure, Lineup},
    cli::StrategyArgs,
    config::EngineConfig,
    roster::{prepare_pool, Player},
    solver::{LineupSolver, MilpSolver},
    PlayerId, Result,
};

/// Parameters for the generate command
#[derive(Debug)]
pub struct GenerateParams {
    pub players: PathBuf,
    pub count: Option<usize>,
    pub salary_cap: Option<u32>,
    pub disabled: Vec<PlayerId>,
    pub strategy: StrategyArgs,
    pub as_json: bool,
    pub show_exposure: bool,
}

/// JSON shape of a finished batch.
#[derive(Debug, Serialize)]
pub struct BatchReport<'a> {
    pub requested: usize,
    pub produced: usize,
    pub state: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    pub lineups: &'a [Lineup],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exposure: Option<Vec<Exposure>>,
}

impl<'a> BatchReport<'a> {
    pub fn new(outcome: &'a BatchOutcome, show_exposure: bool) -> Self {
        Self {
            requested: outcome.requested,
            produced: outcome.produced(),
            state: outcome.state.to_string(),
            reason: outcome.reason.as_ref().map(ToString::to_string),
            lineups: &outcome.lineups,
            exposure: show_exposure.then(|| exposure_report(&outcome.lineups)),
        }
    }
}

/// Apply command-line overrides to the loaded config and re-validate it.
pub fn apply_overrides(config: &mut EngineConfig, params: &GenerateParams) -> Result<()> {
    if let Some(count) = params.count {
        config.lineup_count = count;
    }
    if let Some(cap) = params.salary_cap {
        config.salary_cap = cap;
    }
    apply_strategy_args(config, &params.strategy);
    config.validate()
}

/// Run one batch over an already-normalized slate.
pub fn generate_lineups<S: LineupSolver + ?Sized>(
    solver: &S,
    players: Vec<Player>,
    disabled: &[PlayerId],
    config: &EngineConfig,
) -> Result<BatchOutcome> {
    let pool = prepare_pool(players, config);
    let request = BatchRequest::new(pool, config.lineup_count)
        .with_disabled(disabled.iter().copied().collect::<HashSet<_>>());

    BatchGenerator::new(solver, config).generate(&request, &CancelToken::new())
}

/// Handle the generate command.
///
/// Prints whatever was produced, then fails with the abort reason if the
/// batch stopped short.
pub fn handle_generate(params: GenerateParams, mut config: EngineConfig) -> Result<()> {
    apply_overrides(&mut config, &params)?;
    let players = load_players(&params.players)?;
    let outcome = generate_lineups(&MilpSolver::new(), players, &params.disabled, &config)?;

    if params.as_json {
        let report = BatchReport::new(&outcome, params.show_exposure);
        println!("{}", serde_json::to_string_pretty(&report)?); // tarpaulin::skip
    } else {
        print!("{}", render_outcome(&outcome, params.show_exposure)); // tarpaulin::skip
    }

    match outcome.reason {
        Some(reason) => Err(reason),
        None => Ok(()),
    }
}

/// Text rendering of one lineup.
pub fn render_lineup(index: usize, lineup: &Lineup) -> String {
    let mut out = format!(
        "Lineup {}: {:.2} pts, {}\n",
        index + 1,
        lineup.total_projection(),
        format_salary(lineup.total_salary())
    );
    for filled in lineup.slots() {
        let player = &filled.player;
        out.push_str(&format!(
            "  {:<5} {:<24} {:<4} {:>8} {:>7.2}\n",
            filled.slot.to_string(),
            player.name,
            player.team,
            format_salary(player.salary),
            player.projection()
        ));
    }
    out
}

/// Text rendering of a whole batch.
pub fn render_outcome(outcome: &BatchOutcome, show_exposure: bool) -> String {
    let mut out = String::new();
    for (i, lineup) in outcome.lineups.iter().enumerate() {
        out.push_str(&render_lineup(i, lineup));
        out.push('\n');
    }

    out.push_str(&format!(
        "{} of {} lineups ({})\n",
        outcome.produced(),
        outcome.requested,
        outcome.state
    ));

    if show_exposure && !outcome.lineups.is_empty() {
        out.push_str("\nExposure:\n");
        for exposure in exposure_report(&outcome.lineups) {
            out.push_str(&format!(
                "  {:<24} {:<4} {:<3} {:>3} {:>5.0}%\n",
                exposure.name,
                exposure.team,
                exposure.position.to_string(),
                exposure.count,
                exposure.rate * 100.0
            ));
        }
    }
    out
}
