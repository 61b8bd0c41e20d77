//! Error types for the lineup optimizer

use thiserror::Error;


pub type Result<T> = std::result::Result<T, LineupError>;

#[derive(Error, Debug)]
pub enum LineupError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config parsing failed: {0}")]
    Toml(#[from] toml::de::Error),

    /// A player row could not be turned into a typed player. The row is dropped.
    #[error("Malformed player record #{index}: {field} = {value:?}")]
    MalformedRecord {
        index: usize,
        field: String,
        value: String,
    },

    #[error("Invalid lineup request: {reason}")]
    InvalidRequest { reason: String },

    #[error("Infeasible player pool: {reason}")]
    InfeasiblePool { reason: String },

    #[error("Solver could not complete a lineup; {produced} lineup(s) produced")]
    IncompleteLineup { produced: usize },

    #[error("Batch cancelled after {produced} lineup(s)")]
    Cancelled { produced: usize },

    #[error("Invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    #[error("Invalid position: {position}")]
    InvalidPosition { position: String },

    #[error("Invalid lineup slot: {slot}")]
    InvalidSlot { slot: String },

    #[error("Invalid matchup: {matchup:?}")]
    InvalidMatchup { matchup: String },

    #[error("Solver error: {message}")]
    Solver { message: String },
}

impl LineupError {
    /// Number of lineups that were completed before a batch-terminating error.
    pub fn produced(&self) -> Option<usize> {
        match self {
            LineupError::IncompleteLineup { produced } | LineupError::Cancelled { produced } => {
                Some(*produced)
            }
            _ => None,
        }
    }

    pub fn invalid_request(reason: impl Into<String>) -> Self {
        LineupError::InvalidRequest {
            reason: reason.into(),
        }
    }

    pub fn invalid_config(reason: impl Into<String>) -> Self {
        LineupError::InvalidConfig {
            reason: reason.into(),
        }
    }
}
