//! Engine configuration.
//!
//! Loaded from a TOML file; every table is optional and falls back to the
//! classic nine-slot, $50,000 contest.
//!
//! ```toml
//! salary_cap = 50000
//! lineup_count = 20
//! slots = ["QB", "RB1", "RB2", "WR1", "WR2", "WR3", "TE", "FLEX", "DST"]
//!
//! [max_exposure]
//! QB = 0.33
//!
//! [strategy]
//! qb_stacking = true
//! smart_defense = true
//!
//! [eligibility]
//! skill_floor = 10.0
//! defense_floor = 5.0
//! excluded_statuses = ["OUT"]
//!
//! [logging]
//! level = "info"
//! format = "pretty"
//! ```

use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::types::{InjuryStatus, Position, Slot, SlotSchema};
use crate::error::{LineupError, Result};
use crate::logging::LoggingConfig;
use crate::CONFIG_ENV_VAR;


/// Hard ceiling on lineups per batch request.
pub const MAX_LINEUPS: usize = 200;

/// Independently toggleable co-occurrence rules.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StrategyFlags {
    /// A selected quarterback must be paired with a same-team WR or TE.
    pub qb_stacking: bool,
    /// Never pair a running back with a same-team quarterback.
    pub anti_stack_rb_qb: bool,
    /// Never pair a running back with a same-team WR or TE.
    pub anti_stack_rb_wr_te: bool,
    /// Never pair a tight end with any other same-team player except the
    /// quarterback and the defense. Kickers count.
    pub anti_stack_te: bool,
    /// Never start a defense against offensive players it is facing.
    pub smart_defense: bool,
}

/// Pre-expansion pool filter.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct EligibilityConfig {
    /// Minimum projection for QB/RB/WR/TE.
    pub skill_floor: f64,
    /// Minimum projection for DST/K.
    pub defense_floor: f64,
    pub excluded_statuses: Vec<InjuryStatus>,
}

impl EligibilityConfig {
    pub fn floor_for(&self, position: Position) -> f64 {
        if position.is_defense_like() {
            self.defense_floor
        } else {
            self.skill_floor
        }
    }

    /// No floors and no status exclusions.
    pub fn permissive() -> Self {
        Self {
            skill_floor: 0.0,
            defense_floor: 0.0,
            excluded_statuses: Vec::new(),
        }
    }
}

impl Default for EligibilityConfig {
    fn default() -> Self {
        Self {
            skill_floor: 10.0,
            defense_floor: 5.0,
            excluded_statuses: vec![InjuryStatus::Out],
        }
    }
}

/// Which lineup slots each base position is copied into.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct PseudoPositionMap(BTreeMap<Position, Vec<Slot>>);

impl PseudoPositionMap {
    pub fn new(mapping: BTreeMap<Position, Vec<Slot>>) -> Self {
        Self(mapping)
    }

    pub fn targets(&self, position: Position) -> &[Slot] {
        self.0.get(&position).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Position, &Vec<Slot>)> {
        self.0.iter()
    }
}

impl Default for PseudoPositionMap {
    fn default() -> Self {
        let mut mapping = BTreeMap::new();
        mapping.insert(Position::QB, vec![Slot::QB]);
        mapping.insert(Position::RB, vec![Slot::RB1, Slot::RB2, Slot::FLEX]);
        mapping.insert(
            Position::WR,
            vec![Slot::WR1, Slot::WR2, Slot::WR3, Slot::FLEX],
        );
        mapping.insert(Position::TE, vec![Slot::TE, Slot::FLEX]);
        mapping.insert(Position::DST, vec![Slot::DST]);
        mapping.insert(Position::K, vec![Slot::K]);
        Self(mapping)
    }
}

/// Everything the engine needs besides the player pool.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub salary_cap: u32,
    pub lineup_count: usize,
    pub max_lineups: usize,
    pub slots: SlotSchema,
    pub pseudo_positions: PseudoPositionMap,
    /// Per position class; a class that isn't listed is uncapped.
    pub max_exposure: BTreeMap<Position, f64>,
    pub strategy: StrategyFlags,
    pub eligibility: EligibilityConfig,
    pub logging: LoggingConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            salary_cap: 50_000,
            lineup_count: 1,
            max_lineups: MAX_LINEUPS,
            slots: SlotSchema::default(),
            pseudo_positions: PseudoPositionMap::default(),
            max_exposure: BTreeMap::new(),
            strategy: StrategyFlags::default(),
            eligibility: EligibilityConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl EngineConfig {
    /// Load and validate a TOML config file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::parse_toml(&contents)
    }

    pub fn parse_toml(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.salary_cap == 0 {
            return Err(LineupError::invalid_config("salary_cap must be positive"));
        }
        if self.slots.is_empty() {
            return Err(LineupError::invalid_config("slot schema is empty"));
        }
        if let Some(slot) = self.slots.duplicate() {
            return Err(LineupError::invalid_config(format!(
                "slot {slot} appears more than once"
            )));
        }
        if self.max_lineups == 0 || self.max_lineups > MAX_LINEUPS {
            return Err(LineupError::invalid_config(format!(
                "max_lineups must be within 1..={MAX_LINEUPS}"
            )));
        }
        if self.lineup_count == 0 || self.lineup_count > self.max_lineups {
            return Err(LineupError::invalid_config(format!(
                "lineup_count must be within 1..={}",
                self.max_lineups
            )));
        }
        for (position, exposure) in &self.max_exposure {
            if !(*exposure > 0.0 && *exposure <= 1.0) {
                return Err(LineupError::invalid_config(format!(
                    "max_exposure for {position} must be within (0, 1], got {exposure}"
                )));
            }
        }
        for (position, slots) in self.pseudo_positions.iter() {
            if let Some(slot) = slots.iter().find(|slot| !slot.accepts(*position)) {
                return Err(LineupError::invalid_config(format!(
                    "{position} cannot be copied into slot {slot}"
                )));
            }
        }
        Ok(())
    }

    /// Exposure ceiling for a position class as a fraction of the batch.
    pub fn exposure_for(&self, position: Position) -> f64 {
        self.max_exposure.get(&position).copied().unwrap_or(1.0)
    }

    /// Maximum number of lineups out of `lineup_count` a single player of
    /// `position` may appear in: `ceil(max_exposure * lineup_count)`.
    pub fn exposure_cap(&self, position: Position, lineup_count: usize) -> usize {
        let limit = self.exposure_for(position) * lineup_count as f64;
        // Absorb float noise so 0.5 * 4 stays 2 rather than 3
        (limit - 1e-9).ceil().max(0.0) as usize
    }
}

/// Default config location: `<config_dir>/lineup-optimizer/config.toml`.
pub fn default_config_path() -> PathBuf {
    let base = dirs::config_dir().unwrap_or_else(|| {
        let mut home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.push(".config");
        home
    });
    base.join("lineup-optimizer").join("config.toml")
}

/// Resolve which config file to read.
///
/// An explicit path wins, then the `LINEUP_OPTIMIZER_CONFIG` environment
/// variable, then the default location if a file exists there. `None` means
/// built-in defaults.
pub fn resolve_config_path(explicit: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path);
    }
    if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
        if !path.trim().is_empty() {
            return Some(PathBuf::from(path));
        }
    }
    let default = default_config_path();
    default.exists().then_some(default)
}

/// Load the resolved config, or defaults when no file is configured.
pub fn load_config(explicit: Option<PathBuf>) -> Result<EngineConfig> {
    match resolve_config_path(explicit) {
        Some(path) => EngineConfig::load(&path),
        None => Ok(EngineConfig::default()),
    }
}
