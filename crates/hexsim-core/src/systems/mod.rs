//! ECS Systems
//!
//! The four phases of a tick, run in order: move, interact, spawn, commit.

use bevy_ecs::prelude::*;
use bevy_ecs::schedule::ExecutorKind;

use crate::components::agent::AgentId;

pub mod movement;
pub mod interaction;
pub mod emission;
pub mod commit;

pub use movement::move_agents;
pub use interaction::resolve_encounters;
pub use emission::{emit_agents, SpawnQueue};
pub use commit::{commit_population, AgentIndex, IdAllocator};

/// Build the per-tick schedule. Systems are chained and run on one thread so
/// the order of random draws is fixed for a given seed.
pub fn build_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    schedule.set_executor_kind(ExecutorKind::SingleThreaded);
    schedule.add_systems(
        (
            move_agents,
            resolve_encounters,
            emit_agents,
            commit_population,
        )
            .chain(),
    );
    schedule
}

/// Entities sorted by agent id, i.e. by insertion order
pub(crate) fn in_id_order<'a>(
    agents: impl Iterator<Item = (Entity, &'a AgentId)>,
) -> Vec<(AgentId, Entity)> {
    let mut order: Vec<_> = agents.map(|(entity, id)| (*id, entity)).collect();
    order.sort_unstable();
    order
}
