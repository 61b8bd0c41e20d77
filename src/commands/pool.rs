//! The `pool` command: show the eligible player pool.

use std::path::PathBuf;

use super::common::{format_salary, load_players};
use crate::{
    config::EngineConfig,
    roster::{filter_eligible, Player},
    Position, Result,
};

/// Parameters for the pool command
#[derive(Debug)]
pub struct PoolParams {
    pub players: PathBuf,
    pub positions: Option<Vec<Position>>,
    pub as_json: bool,
}

/// Eligible players, optionally limited to some positions, best value first.
pub fn eligible_pool(
    players: Vec<Player>,
    positions: Option<&[Position]>,
    config: &EngineConfig,
) -> Vec<Player> {
    let mut pool: Vec<Player> = filter_eligible(players, &config.eligibility)
        .into_iter()
        .filter(|p| positions.map_or(true, |wanted| wanted.contains(&p.position)))
        .collect();

    pool.sort_by(|a, b| {
        b.value()
            .total_cmp(&a.value())
            .then_with(|| b.projection().total_cmp(&a.projection()))
            .then_with(|| a.name.cmp(&b.name))
    });
    pool
}

/// Handle the pool command
pub fn handle_pool(params: PoolParams, config: &EngineConfig) -> Result<()> {
    let players = load_players(&params.players)?;
    let pool = eligible_pool(players, params.positions.as_deref(), config);

    if params.as_json {
        println!("{}", serde_json::to_string_pretty(&pool)?); // tarpaulin::skip
        return Ok(());
    }

    for player in &pool {
        // tarpaulin::skip - console output
        println!("{}", render_player(player));
    }
    Ok(())
}

pub fn render_player(player: &Player) -> String {
    format!(
        "{:>8} {:<24} {:<4} {:<3} {:>8} {:>7.2} {:>6.2}",
        player.id.to_string(),
        player.name,
        player.team,
        player.position.to_string(),
        format_salary(player.salary),
        player.projection(),
        player.value()
    )
}
