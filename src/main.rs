//! Entry point: parse CLI and dispatch to command handlers.

use anyhow::Context;
use clap::Parser;
use lineup_optimizer::{
    cli::{Commands, LineupOptimizer},
    commands::{handle_generate, handle_pool, GenerateParams, PoolParams},
    config::load_config,
};

/// Run the CLI.
fn main() -> anyhow::Result<()> {
    let app = LineupOptimizer::parse();

    let config = load_config(app.config_path()).context("failed to load engine config")?;
    config.logging.init();

    match app.command {
        Commands::Generate {
            input,
            count,
            salary_cap,
            disabled,
            strategy,
            exposure,
        } => handle_generate(
            GenerateParams {
                players: input.players,
                count,
                salary_cap,
                disabled,
                strategy,
                as_json: input.json,
                show_exposure: exposure,
            },
            config,
        )
        .context("lineup generation failed")?,

        Commands::Pool { input, positions } => handle_pool(
            PoolParams {
                players: input.players,
                positions,
                as_json: input.json,
            },
            &config,
        )
        .context("failed to show player pool")?,
    }

    Ok(())
}
