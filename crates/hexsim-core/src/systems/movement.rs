//! Movement System
//!
//! Every mobile agent steps once toward its goal. Movement never looks at
//! other agents, so the order agents move in cannot bias where they end up.

use bevy_ecs::prelude::*;
use tracing::debug;

use super::in_id_order;
use crate::components::agent::{Agent, AgentId};
use crate::components::world::{Clock, HexGrid};
use crate::events::{EventKind, TickEvents};
use crate::SimRng;

/// System: Step mobile agents and apply their arrival policy
///
/// Agents are visited in id order so goal re-rolls draw from the RNG in a
/// fixed sequence.
pub fn move_agents(
    grid: Res<HexGrid>,
    clock: Res<Clock>,
    mut rng: ResMut<SimRng>,
    mut events: ResMut<TickEvents>,
    mut query: Query<(Entity, &AgentId, &mut Agent)>,
) {
    let order = in_id_order(query.iter().map(|(entity, id, _)| (entity, id)));

    for (id, entity) in order {
        let Ok((_, _, mut agent)) = query.get_mut(entity) else {
            continue;
        };
        if let Some(at) = agent.advance(&grid, &mut rng.0) {
            debug!(agent = %id, kind = %agent.kind(), %at, "reached goal");
            events.push(clock.current_tick, EventKind::GoalReached { agent: id, at });
        }
    }
}
