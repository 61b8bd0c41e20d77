//! Type-safe wrappers and enums shared by the CLI and the engine.

pub mod ids;
pub mod position;
pub mod status;

pub use ids::{PlayerId, PlayerKey};
pub use position::{Position, Slot, SlotSchema};
pub use status::InjuryStatus;
