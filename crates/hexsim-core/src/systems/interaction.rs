//! Interaction System
//!
//! Resolves encounters between agents that share a cell. Every agent is
//! snapshotted once after movement; reactions are dispatched against that
//! snapshot, so an agent that dies partway through still triggers and
//! receives the rest of its cell's reactions this tick. Removal happens in
//! the commit phase.

use bevy_ecs::prelude::*;
use std::collections::BTreeMap;
use tracing::debug;

use crate::components::agent::{Agent, AgentId, Encountered, Outcome};
use crate::components::hex::Hex;
use crate::components::world::Clock;
use crate::events::{EventKind, TickEvents};

/// One agent as seen by the others in its cell
#[derive(Debug, Clone, Copy)]
struct Presence {
    entity: Entity,
    id: AgentId,
    seen_as: Encountered,
}

/// System: Dispatch reactions for every pair of co-located agents
///
/// Within a cell, pairs are visited in id order and each pair reacts in both
/// directions, lower id first. When a follower meets several scents, the
/// highest-id scent is applied last and its origin becomes the goal.
pub fn resolve_encounters(
    clock: Res<Clock>,
    mut events: ResMut<TickEvents>,
    mut query: Query<(Entity, &AgentId, &mut Agent)>,
) {
    let mut cells: BTreeMap<Hex, Vec<Presence>> = BTreeMap::new();
    for (entity, id, agent) in query.iter() {
        cells.entry(agent.position()).or_default().push(Presence {
            entity,
            id: *id,
            seen_as: agent.as_encountered(),
        });
    }

    for occupants in cells.values_mut() {
        if occupants.len() < 2 {
            continue;
        }
        occupants.sort_by_key(|p| p.id);

        for (i, first) in occupants.iter().enumerate() {
            for second in &occupants[i + 1..] {
                react(&mut query, first, second, clock.current_tick, &mut events);
                react(&mut query, second, first, clock.current_tick, &mut events);
            }
        }
    }
}

fn react(
    query: &mut Query<(Entity, &AgentId, &mut Agent)>,
    actor: &Presence,
    other: &Presence,
    tick: u64,
    events: &mut TickEvents,
) {
    let Ok((_, _, mut agent)) = query.get_mut(actor.entity) else {
        return;
    };
    let outcome = agent.encounter(&other.seen_as);
    if outcome == Outcome::Unaffected {
        return;
    }

    debug!(agent = %actor.id, other = %other.id, ?outcome, "encounter");
    events.push(
        tick,
        EventKind::Reacted {
            agent: actor.id,
            to: other.id,
            to_kind: other.seen_as.kind(),
            outcome,
        },
    );
}
