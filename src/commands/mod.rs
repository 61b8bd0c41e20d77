//! Command implementations for the lineup optimizer CLI

pub mod common;
pub mod generate;
pub mod pool;


pub use generate::{handle_generate, GenerateParams};
pub use pool::{handle_pool, PoolParams};
