//! Common helpers shared across commands.

use std::fs;
use std::path::Path;

use tracing::{info, warn};

use crate::{
    cli::StrategyArgs,
    config::EngineConfig,
    roster::{normalize, Player, RawPlayer},
    Result,
};

/// Read a slate file and normalize its rows.
///
/// Malformed rows are logged and skipped; only an unreadable file or invalid
/// JSON fails the command.
pub fn load_players(path: &Path) -> Result<Vec<Player>> {
    let contents = fs::read_to_string(path)?;
    parse_players(&contents)
}

/// Parse a JSON array of player rows.
pub fn parse_players(contents: &str) -> Result<Vec<Player>> {
    let raw: Vec<RawPlayer> = serde_json::from_str(contents)?;
    let normalized = normalize(&raw);

    if !normalized.rejected.is_empty() {
        warn!(
            rejected = normalized.rejected.len(),
            "some player rows were skipped"
        );
    }
    info!(players = normalized.players.len(), "loaded slate");

    Ok(normalized.players)
}

/// Turn on every strategy flag set on the command line.
pub fn apply_strategy_args(config: &mut EngineConfig, args: &StrategyArgs) {
    let strategy = &mut config.strategy;
    strategy.qb_stacking |= args.qb_stacking;
    strategy.smart_defense |= args.smart_defense;
    strategy.anti_stack_rb_qb |= args.anti_stack_rb_qb;
    strategy.anti_stack_rb_wr_te |= args.anti_stack_rb_wr_te;
    strategy.anti_stack_te |= args.anti_stack_te;
}

/// `$49,800` style salary.
pub fn format_salary(salary: u32) -> String {
    let digits = salary.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    format!("${out}")
}
