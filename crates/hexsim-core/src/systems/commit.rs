//! Commit System
//!
//! Brings the population in line with the alive flags: dead agents leave,
//! queued offspring arrive with fresh ids.

use bevy_ecs::prelude::*;
use std::collections::BTreeMap;
use tracing::debug;

use super::emission::SpawnQueue;
use super::in_id_order;
use crate::components::agent::{Agent, AgentId};
use crate::components::world::Clock;
use crate::events::{EventKind, TickEvents};

/// Resource: Hands out agent ids in insertion order. Ids are never reused.
#[derive(Resource, Debug, Default)]
pub struct IdAllocator {
    next: u64,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allocate(&mut self) -> AgentId {
        let id = AgentId(self.next);
        self.next += 1;
        id
    }
}

/// Resource: Entity of every live agent, keyed by id
#[derive(Resource, Debug, Default)]
pub struct AgentIndex {
    entities: BTreeMap<AgentId, Entity>,
}

impl AgentIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: AgentId, entity: Entity) {
        self.entities.insert(id, entity);
    }

    pub fn remove(&mut self, id: AgentId) -> Option<Entity> {
        self.entities.remove(&id)
    }

    pub fn get(&self, id: AgentId) -> Option<Entity> {
        self.entities.get(&id).copied()
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Ids and entities in ascending id order
    pub fn iter(&self) -> impl Iterator<Item = (AgentId, Entity)> + '_ {
        self.entities.iter().map(|(id, entity)| (*id, *entity))
    }
}

/// System: Despawn dead agents, then spawn queued offspring
pub fn commit_population(
    mut commands: Commands,
    clock: Res<Clock>,
    mut ids: ResMut<IdAllocator>,
    mut index: ResMut<AgentIndex>,
    mut queue: ResMut<SpawnQueue>,
    mut events: ResMut<TickEvents>,
    query: Query<(Entity, &AgentId, &Agent)>,
) {
    let tick = clock.current_tick;

    let dead = in_id_order(
        query
            .iter()
            .filter(|(_, _, agent)| !agent.is_alive())
            .map(|(entity, id, _)| (entity, id)),
    );
    for (id, entity) in dead {
        let Ok((_, _, agent)) = query.get(entity) else {
            continue;
        };
        debug!(agent = %id, kind = %agent.kind(), "removed");
        events.push(
            tick,
            EventKind::Removed {
                agent: id,
                kind: agent.kind(),
                at: agent.position(),
            },
        );
        commands.entity(entity).despawn();
        index.remove(id);
    }

    for (parent, agent) in queue.pending.drain(..) {
        let id = ids.allocate();
        events.push(
            tick,
            EventKind::Spawned {
                agent: id,
                kind: agent.kind(),
                parent,
                at: agent.position(),
            },
        );
        let entity = commands.spawn((id, agent)).id();
        index.insert(id, entity);
    }
}
