//! Emission System
//!
//! Emitters roll once per tick and queue their offspring. Nothing joins the
//! population until the commit phase.

use bevy_ecs::prelude::*;
use tracing::debug;

use crate::components::agent::{Agent, AgentId};
use crate::components::world::HexGrid;
use crate::SimRng;

/// Resource: Offspring waiting to be added at commit, with their parent
#[derive(Resource, Debug, Default)]
pub struct SpawnQueue {
    pub pending: Vec<(Option<AgentId>, Agent)>,
}

impl SpawnQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, parent: Option<AgentId>, agent: Agent) {
        self.pending.push((parent, agent));
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

/// System: Roll every live emitter and queue what it produces
pub fn emit_agents(
    grid: Res<HexGrid>,
    mut rng: ResMut<SimRng>,
    mut queue: ResMut<SpawnQueue>,
    query: Query<(&AgentId, &Agent)>,
) {
    let mut emitters: Vec<(&AgentId, &Agent)> = query
        .iter()
        .filter(|(_, agent)| agent.emitter().is_some())
        .collect();
    emitters.sort_unstable_by_key(|(id, _)| **id);

    for (id, agent) in emitters {
        if let Some(child) = agent.emit(&grid, &mut rng.0) {
            debug!(parent = %id, kind = %child.kind(), at = %child.position(), "emitted");
            queue.push(Some(*id), child);
        }
    }
}
