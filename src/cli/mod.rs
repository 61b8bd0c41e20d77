//! CLI argument definitions and parsing.

pub mod types;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use types::{PlayerId, Position};

/// Input arguments shared between commands
#[derive(Debug, Args)]
pub struct CommonInput {
    /// Slate file: a JSON array of player rows.
    #[clap(long)]
    pub players: PathBuf,

    /// Engine config TOML (or set `LINEUP_OPTIMIZER_CONFIG` env var).
    #[clap(long, short)]
    pub config: Option<PathBuf>,

    /// Output results as JSON instead of text lines.
    #[clap(long)]
    pub json: bool,
}

/// Strategy toggles. Each flag switches a rule on over the config file.
#[derive(Debug, Default, Args)]
pub struct StrategyArgs {
    /// Pair every quarterback with a same-team WR or TE.
    #[clap(long)]
    pub qb_stacking: bool,

    /// Never start a defense against offensive players it is facing.
    #[clap(long)]
    pub smart_defense: bool,

    /// Never pair a running back with a same-team quarterback.
    #[clap(long)]
    pub anti_stack_rb_qb: bool,

    /// Never pair a running back with a same-team WR or TE.
    #[clap(long)]
    pub anti_stack_rb_wr_te: bool,

    /// Never pair a tight end with another same-team non-QB player (kickers included).
    #[clap(long)]
    pub anti_stack_te: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a batch of distinct lineups.
    ///
    /// Each lineup is the best one left once every earlier lineup of the
    /// batch has been excluded.
    Generate {
        #[clap(flatten)]
        input: CommonInput,

        /// Number of lineups (1-200). Defaults to the config's `lineup_count`.
        #[clap(long, short = 'n')]
        count: Option<usize>,

        /// Override the salary cap.
        #[clap(long)]
        salary_cap: Option<u32>,

        /// Leave a player out of every lineup (repeatable): `--disable 101 --disable 102`.
        #[clap(long = "disable")]
        disabled: Vec<PlayerId>,

        #[clap(flatten)]
        strategy: StrategyArgs,

        /// Print per-player exposure after the lineups.
        #[clap(long)]
        exposure: bool,
    },

    /// Show the eligible player pool sorted by value.
    Pool {
        #[clap(flatten)]
        input: CommonInput,

        /// Filter by position (repeatable): `-p QB -p RB`.
        #[clap(short = 'p', long = "position")]
        positions: Option<Vec<Position>>,
    },
}

#[derive(Debug, Parser)]
#[clap(
    name = "lineup-optimizer",
    about = "Daily fantasy football lineup optimizer"
)]
pub struct LineupOptimizer {
    #[clap(subcommand)]
    pub command: Commands,
}

impl LineupOptimizer {
    /// Config path given on the command line, if any.
    pub fn config_path(&self) -> Option<PathBuf> {
        match &self.command {
            Commands::Generate { input, .. } | Commands::Pool { input, .. } => {
                input.config.clone()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_generate() {
        let app = LineupOptimizer::try_parse_from([
            "lineup-optimizer",
            "generate",
            "--players",
            "slate.json",
            "-n",
            "20",
            "--salary-cap",
            "60000",
            "--disable",
            "101",
            "--disable",
            "102",
            "--qb-stacking",
            "--smart-defense",
            "--json",
        ])
        .unwrap();

        match app.command {
            Commands::Generate {
                input,
                count,
                salary_cap,
                disabled,
                strategy,
                exposure,
            } => {
                assert_eq!(input.players, PathBuf::from("slate.json"));
                assert!(input.json);
                assert_eq!(count, Some(20));
                assert_eq!(salary_cap, Some(60_000));
                assert_eq!(disabled, vec![PlayerId::new(101), PlayerId::new(102)]);
                assert!(strategy.qb_stacking);
                assert!(strategy.smart_defense);
                assert!(!strategy.anti_stack_te);
                assert!(!exposure);
            }
            other => panic!("expected generate, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_pool_positions() {
        let app = LineupOptimizer::try_parse_from([
            "lineup-optimizer",
            "pool",
            "--players",
            "slate.json",
            "-c",
            "dfs.toml",
            "-p",
            "QB",
            "-p",
            "D/ST",
        ])
        .unwrap();

        assert_eq!(app.config_path(), Some(PathBuf::from("dfs.toml")));
        match app.command {
            Commands::Pool { positions, .. } => {
                assert_eq!(positions, Some(vec![Position::QB, Position::DST]));
            }
            other => panic!("expected pool, got {other:?}"),
        }
    }

    #[test]
    fn test_players_required() {
        assert!(LineupOptimizer::try_parse_from(["lineup-optimizer", "generate"]).is_err());
    }

    #[test]
    fn test_bad_player_id_rejected() {
        let result = LineupOptimizer::try_parse_from([
            "lineup-optimizer",
            "generate",
            "--players",
            "slate.json",
            "--disable",
            "abc",
        ]);
        assert!(result.is_err());
    }
}
