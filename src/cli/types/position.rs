//! Roster positions and lineup slots.

use crate::error::LineupError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Real roster position of a player.
///
/// This is also the "position class" used for exposure limits and
/// eligibility floors.
///
/// # Examples
///
/// ```rust
/// use lineup_optimizer::Position;
///
/// let dst: Position = "D/ST".parse().unwrap();
/// assert_eq!(dst, Position::DST);
/// assert_eq!(dst.to_string(), "DST");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Position {
    QB,
    RB,
    WR,
    TE,
    DST,
    K,
}

impl Position {
    pub const ALL: [Position; 6] = [
        Position::QB,
        Position::RB,
        Position::WR,
        Position::TE,
        Position::DST,
        Position::K,
    ];

    /// Defense and kicker are scored on a lower projection floor than skill players.
    pub fn is_defense_like(&self) -> bool {
        matches!(self, Position::DST | Position::K)
    }

    /// Positions a defense is penalised by when facing them.
    pub fn is_offensive(&self) -> bool {
        matches!(
            self,
            Position::QB | Position::RB | Position::WR | Position::TE
        )
    }

    /// Pass catchers used for quarterback stacking.
    pub fn is_receiver(&self) -> bool {
        matches!(self, Position::WR | Position::TE)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Position::QB => "QB",
            Position::RB => "RB",
            Position::WR => "WR",
            Position::TE => "TE",
            Position::DST => "DST",
            Position::K => "K",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Position {
    type Err = LineupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "QB" => Ok(Position::QB),
            "RB" => Ok(Position::RB),
            "WR" => Ok(Position::WR),
            "TE" => Ok(Position::TE),
            "DST" | "D/ST" | "DEF" | "D" => Ok(Position::DST),
            "K" | "PK" => Ok(Position::K),
            _ => Err(LineupError::InvalidPosition {
                position: s.to_string(),
            }),
        }
    }
}

/// A named slot in the lineup schema.
///
/// Numbered slots (`RB1`, `RB2`, `WR1`..`WR3`) are the pseudo-positions a
/// player copy is tagged with during pool expansion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Slot {
    QB,
    RB1,
    RB2,
    WR1,
    WR2,
    WR3,
    TE,
    FLEX,
    DST,
    K,
}

impl Slot {
    /// Base positions allowed to fill this slot.
    pub fn eligible_positions(&self) -> &'static [Position] {
        match self {
            Slot::QB => &[Position::QB],
            Slot::RB1 | Slot::RB2 => &[Position::RB],
            Slot::WR1 | Slot::WR2 | Slot::WR3 => &[Position::WR],
            Slot::TE => &[Position::TE],
            Slot::FLEX => &[Position::RB, Position::WR, Position::TE],
            Slot::DST => &[Position::DST],
            Slot::K => &[Position::K],
        }
    }

    pub fn accepts(&self, position: Position) -> bool {
        self.eligible_positions().contains(&position)
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Slot::QB => "QB",
            Slot::RB1 => "RB1",
            Slot::RB2 => "RB2",
            Slot::WR1 => "WR1",
            Slot::WR2 => "WR2",
            Slot::WR3 => "WR3",
            Slot::TE => "TE",
            Slot::FLEX => "FLEX",
            Slot::DST => "DST",
            Slot::K => "K",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Slot {
    type Err = LineupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "QB" => Ok(Slot::QB),
            "RB1" => Ok(Slot::RB1),
            "RB2" => Ok(Slot::RB2),
            "WR1" => Ok(Slot::WR1),
            "WR2" => Ok(Slot::WR2),
            "WR3" => Ok(Slot::WR3),
            "TE" => Ok(Slot::TE),
            "FLEX" => Ok(Slot::FLEX),
            "DST" | "D/ST" | "DEF" => Ok(Slot::DST),
            "K" => Ok(Slot::K),
            _ => Err(LineupError::InvalidSlot {
                slot: s.to_string(),
            }),
        }
    }
}

/// Ordered set of slots a lineup must fill, one player each.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SlotSchema(Vec<Slot>);

impl SlotSchema {
    pub fn new(slots: Vec<Slot>) -> Self {
        Self(slots)
    }

    pub fn slots(&self) -> &[Slot] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, slot: Slot) -> bool {
        self.0.contains(&slot)
    }

    /// First slot that appears more than once, if any.
    pub fn duplicate(&self) -> Option<Slot> {
        self.0
            .iter()
            .enumerate()
            .find(|(i, slot)| self.0[..*i].contains(slot))
            .map(|(_, slot)| *slot)
    }
}

impl Default for SlotSchema {
    /// Classic nine-slot football schema.
    fn default() -> Self {
        Self(vec![
            Slot::QB,
            Slot::RB1,
            Slot::RB2,
            Slot::WR1,
            Slot::WR2,
            Slot::WR3,
            Slot::TE,
            Slot::FLEX,
            Slot::DST,
        ])
    }
}
