//! ECS Components
//!
//! Hex coordinates, grid resources, behavior capabilities and agents.

pub mod hex;
pub mod world;
pub mod behavior;
pub mod agent;

pub use hex::*;
pub use world::*;
pub use behavior::*;
pub use agent::*;
