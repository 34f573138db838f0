//! Event Types

use bevy_ecs::prelude::*;
use serde::Serialize;

use crate::components::agent::{AgentId, Kind, Outcome};
use crate::components::hex::Hex;

/// What happened
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EventKind {
    /// A mobile agent stood on its goal after moving
    GoalReached { agent: AgentId, at: Hex },
    /// An agent reacted to another in its cell
    Reacted {
        agent: AgentId,
        to: AgentId,
        to_kind: Kind,
        outcome: Outcome,
    },
    /// An offspring joined the population
    Spawned {
        agent: AgentId,
        kind: Kind,
        parent: Option<AgentId>,
        at: Hex,
    },
    /// A dead agent left the population
    Removed { agent: AgentId, kind: Kind, at: Hex },
}

/// A single simulation event
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EcoEvent {
    pub tick: u64,
    #[serde(flatten)]
    pub kind: EventKind,
}

/// Resource: Events generated during the current tick
#[derive(Resource, Debug, Default)]
pub struct TickEvents {
    pub events: Vec<EcoEvent>,
}

impl TickEvents {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, tick: u64, kind: EventKind) {
        self.events.push(EcoEvent { tick, kind });
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn goal_reached_by(&self, agent: AgentId) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e.kind, EventKind::GoalReached { agent: a, .. } if a == agent))
            .count()
    }

    pub fn spawned_count(&self, kind: Kind) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e.kind, EventKind::Spawned { kind: k, .. } if k == kind))
            .count()
    }

    pub fn removed(&self) -> impl Iterator<Item = AgentId> + '_ {
        self.events.iter().filter_map(|e| match e.kind {
            EventKind::Removed { agent, .. } => Some(agent),
            _ => None,
        })
    }
}
