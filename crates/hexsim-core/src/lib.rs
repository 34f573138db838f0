//! Hex-grid predator/prey simulation
//!
//! Predators, prey, food and scent trails live on a bounded hex grid and
//! advance together in ticks. See [`Ecosystem`] for the entry point.

use bevy_ecs::prelude::*;
use rand::rngs::SmallRng;

pub mod components;
pub mod systems;
pub mod events;
pub mod setup;
pub mod output;
pub mod config;
pub mod error;
pub mod ecosystem;

pub use components::*;
pub use config::Config;
pub use ecosystem::Ecosystem;
pub use error::{ConfigError, EcosystemError};
pub use events::{EcoEvent, EventKind};
pub use output::Census;

/// Seeded random number generator resource
#[derive(Resource)]
pub struct SimRng(pub SmallRng);

/// Create an empty world of `size` x `size` cells
pub fn new_world(size: i32) -> Result<Ecosystem, EcosystemError> {
    Ecosystem::new(size)
}

/// Advance the world by one tick
pub fn tick(world: &mut Ecosystem) {
    world.tick();
}
