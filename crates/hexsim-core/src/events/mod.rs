//! Simulation Events
//!
//! Everything that happened during the last tick.

pub mod types;

pub use types::*;
