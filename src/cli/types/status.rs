//! Player availability status.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Injury designation carried on a roster row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum InjuryStatus {
    #[default]
    Healthy,
    Questionable,
    Doubtful,
    Out,
}

impl InjuryStatus {
    /// Lenient parse of the free-form status column. Unknown or blank means healthy.
    pub fn from_designation(s: &str) -> Self {
        match s.trim().to_uppercase().as_str() {
            "Q" | "QUESTIONABLE" => InjuryStatus::Questionable,
            "D" | "DOUBTFUL" => InjuryStatus::Doubtful,
            "O" | "OUT" | "IR" => InjuryStatus::Out,
            _ => InjuryStatus::Healthy,
        }
    }
}

impl fmt::Display for InjuryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            InjuryStatus::Healthy => "Healthy",
            InjuryStatus::Questionable => "Questionable",
            InjuryStatus::Doubtful => "Doubtful",
            InjuryStatus::Out => "Out",
        };
        write!(f, "{}", s)
    }
}
