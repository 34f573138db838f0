//! Ecosystem
//!
//! Owns the ECS world and the tick schedule, and is the only way the
//! population changes outside of a tick.

use bevy_ecs::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::fmt;
use tracing::info;

use crate::components::agent::{Agent, AgentId};
use crate::components::hex::Hex;
use crate::components::world::{Clock, HexGrid};
use crate::config::Config;
use crate::error::EcosystemError;
use crate::events::{EcoEvent, TickEvents};
use crate::output::{render, Census};
use crate::setup;
use crate::systems::{self, AgentIndex, IdAllocator, SpawnQueue};
use crate::SimRng;

/// A hex world and everything living in it
pub struct Ecosystem {
    world: World,
    schedule: Schedule,
}

impl Ecosystem {
    /// Empty world with seed 0
    pub fn new(size: i32) -> Result<Self, EcosystemError> {
        Self::with_seed(size, 0)
    }

    /// Empty world with the given seed
    pub fn with_seed(size: i32, seed: u64) -> Result<Self, EcosystemError> {
        let grid = HexGrid::new(size)?;

        let mut world = World::new();
        world.insert_resource(grid);
        world.insert_resource(SimRng(SmallRng::seed_from_u64(seed)));
        world.insert_resource(Clock::default());
        world.insert_resource(TickEvents::new());
        world.insert_resource(SpawnQueue::new());
        world.insert_resource(IdAllocator::new());
        world.insert_resource(AgentIndex::new());

        Ok(Self {
            world,
            schedule: systems::build_schedule(),
        })
    }

    /// World described by `config`, with its initial population placed
    pub fn from_config(config: &Config) -> Result<Self, EcosystemError> {
        config.validate()?;
        let mut ecosystem = Self::with_seed(config.world.size, config.world.seed)?;
        setup::populate(&mut ecosystem, &config.population, config.emission.scent_rate)?;
        info!(
            size = config.world.size,
            seed = config.world.seed,
            census = %ecosystem.census(),
            "ecosystem created"
        );
        Ok(ecosystem)
    }

    /// Run one tick: move, interact, spawn, commit
    pub fn tick(&mut self) {
        self.world.resource_mut::<Clock>().advance_tick();
        self.world.resource_mut::<TickEvents>().clear();
        self.schedule.run(&mut self.world);
    }

    pub fn grid(&self) -> HexGrid {
        *self.world.resource::<HexGrid>()
    }

    pub fn current_tick(&self) -> u64 {
        self.world.resource::<Clock>().current_tick
    }

    /// Events from the most recent tick
    pub fn events(&self) -> &[EcoEvent] {
        &self.world.resource::<TickEvents>().events
    }

    pub fn tick_events(&self) -> &TickEvents {
        self.world.resource::<TickEvents>()
    }

    /// Live agents in insertion order
    pub fn population(&self) -> Vec<(AgentId, &Agent)> {
        self.world
            .resource::<AgentIndex>()
            .iter()
            .filter_map(|(id, entity)| Some((id, self.world.get::<Agent>(entity)?)))
            .collect()
    }

    pub fn get(&self, id: AgentId) -> Option<&Agent> {
        let entity = self.world.resource::<AgentIndex>().get(id)?;
        self.world.get::<Agent>(entity)
    }

    pub fn contains(&self, id: AgentId) -> bool {
        self.world.resource::<AgentIndex>().get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.world.resource::<AgentIndex>().len()
    }

    pub fn is_empty(&self) -> bool {
        self.world.resource::<AgentIndex>().is_empty()
    }

    /// Insert an agent, returning its new id. Its position, goal and origin
    /// must all lie on the grid.
    pub fn add(&mut self, agent: Agent) -> Result<AgentId, EcosystemError> {
        let grid = self.grid();
        let coordinates = [Some(agent.position()), agent.goal(), agent.origin()];
        if let Some(at) = coordinates
            .into_iter()
            .flatten()
            .find(|hex| !grid.contains(*hex))
        {
            return Err(EcosystemError::OutOfBounds { at });
        }

        let id = self.world.resource_mut::<IdAllocator>().allocate();
        let entity = self.world.spawn((id, agent)).id();
        self.world.resource_mut::<AgentIndex>().insert(id, entity);
        Ok(id)
    }

    /// Take an agent out of the world
    pub fn remove(&mut self, id: AgentId) -> Option<Agent> {
        let entity = self.world.resource_mut::<AgentIndex>().remove(id)?;
        let agent = self.world.entity_mut(entity).take::<Agent>();
        self.world.despawn(entity);
        agent
    }

    /// Uniformly random cell, drawn from the world's RNG
    pub fn random_cell(&mut self) -> Hex {
        let grid = self.grid();
        grid.random_cell(&mut self.world.resource_mut::<SimRng>().0)
    }

    /// Uniformly random cell of the outer ring, drawn from the world's RNG
    pub fn random_border_cell(&mut self) -> Hex {
        let grid = self.grid();
        grid.random_border_cell(&mut self.world.resource_mut::<SimRng>().0)
    }

    pub fn census(&self) -> Census {
        Census::from_agents(self.population().into_iter().map(|(_, agent)| agent))
    }

    /// Row-major symbol grid; see [`render::render_grid`]
    pub fn render(&self) -> Vec<Vec<char>> {
        render::render_grid(
            &self.grid(),
            self.population().into_iter().map(|(_, agent)| agent),
        )
    }
}

impl fmt::Display for Ecosystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render::render_text(&self.render()))
    }
}

impl fmt::Debug for Ecosystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ecosystem")
            .field("grid", &self.grid())
            .field("tick", &self.current_tick())
            .field("census", &self.census())
            .finish()
    }
}
