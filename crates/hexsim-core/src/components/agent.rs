//! Agent Components
//!
//! The four agent variants and the dispatch that runs when two of them meet.
//! Each variant holds its location plus exactly the capabilities it is built
//! from; see the `REACTIONS` table on each for how it responds to others.

use bevy_ecs::prelude::*;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::behavior::{Emission, Emitter, GoalReached, Mobile, Mortal, Reaction, Reactions};
use super::hex::Hex;
use super::world::HexGrid;

/// Unique identifier for an agent, allocated in insertion order
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AgentId(pub u64);

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The variant of an agent, without its state
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Kind {
    Predator,
    Prey,
    Food,
    Scent,
}

impl Kind {
    pub const ALL: [Kind; 4] = [Kind::Predator, Kind::Prey, Kind::Food, Kind::Scent];

    /// Character shown for this kind on the rendered grid
    pub fn symbol(&self) -> char {
        match self {
            Kind::Predator => 'P',
            Kind::Prey => 'p',
            Kind::Food => '*',
            Kind::Scent => 'x',
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Kind::Predator => "predator",
            Kind::Prey => "prey",
            Kind::Food => "food",
            Kind::Scent => "scent",
        };
        f.write_str(name)
    }
}

/// How an agent appears to the others sharing its cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encountered {
    Predator,
    Prey,
    Food,
    Scent { origin: Hex },
}

impl Encountered {
    pub fn kind(&self) -> Kind {
        match self {
            Encountered::Predator => Kind::Predator,
            Encountered::Prey => Kind::Prey,
            Encountered::Food => Kind::Food,
            Encountered::Scent { .. } => Kind::Scent,
        }
    }
}

/// Effect of one reaction on the reacting agent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Unaffected,
    Died,
    Followed { goal: Hex },
}

/// Roams the grid, never dies, chases scents
#[derive(Debug, Clone, PartialEq)]
pub struct Predator {
    location: Hex,
    motion: Mobile,
}

impl Predator {
    pub const REACTIONS: Reactions = Reactions {
        on_predator: Reaction::Ignore,
        on_prey: Reaction::Ignore,
        on_scent: Reaction::FollowScent,
    };

    pub fn new(location: Hex, goal: Hex) -> Self {
        Self {
            location,
            motion: Mobile::new(goal, GoalReached::Wander),
        }
    }
}

/// Roams the grid, chases scents, dies when caught by a predator
#[derive(Debug, Clone, PartialEq)]
pub struct Prey {
    location: Hex,
    motion: Mobile,
    life: Mortal,
}

impl Prey {
    pub const REACTIONS: Reactions = Reactions {
        on_predator: Reaction::Die,
        on_prey: Reaction::Ignore,
        on_scent: Reaction::FollowScent,
    };

    pub fn new(location: Hex, goal: Hex) -> Self {
        Self {
            location,
            motion: Mobile::new(goal, GoalReached::Wander),
            life: Mortal::new(),
        }
    }
}

/// Stationary; gives off scents and is eaten by prey
#[derive(Debug, Clone, PartialEq)]
pub struct Food {
    location: Hex,
    life: Mortal,
    emitter: Emitter,
}

impl Food {
    pub const DEFAULT_SCENT_RATE: u32 = 5;

    pub const REACTIONS: Reactions = Reactions {
        on_predator: Reaction::Ignore,
        on_prey: Reaction::Die,
        on_scent: Reaction::Ignore,
    };

    pub fn new(location: Hex, scent_rate: u32) -> Self {
        Self {
            location,
            life: Mortal::new(),
            emitter: Emitter::new(scent_rate, Emission::ScentAtSelf),
        }
    }
}

/// Drifts from where it was emitted to a border cell, then dies
#[derive(Debug, Clone, PartialEq)]
pub struct Scent {
    location: Hex,
    origin: Hex,
    motion: Mobile,
    life: Mortal,
}

impl Scent {
    pub const REACTIONS: Reactions = Reactions::IGNORE_ALL;

    pub fn new(origin: Hex, goal: Hex) -> Self {
        Self {
            location: origin,
            origin,
            motion: Mobile::new(goal, GoalReached::Dissipate),
            life: Mortal::new(),
        }
    }

    pub fn origin(&self) -> Hex {
        self.origin
    }
}

/// Component: an agent and all of its state
#[derive(Component, Debug, Clone, PartialEq)]
pub enum Agent {
    Predator(Predator),
    Prey(Prey),
    Food(Food),
    Scent(Scent),
}

impl Agent {
    pub fn predator(location: Hex, goal: Hex) -> Self {
        Agent::Predator(Predator::new(location, goal))
    }

    pub fn prey(location: Hex, goal: Hex) -> Self {
        Agent::Prey(Prey::new(location, goal))
    }

    pub fn food(location: Hex, scent_rate: u32) -> Self {
        Agent::Food(Food::new(location, scent_rate))
    }

    pub fn scent(origin: Hex, goal: Hex) -> Self {
        Agent::Scent(Scent::new(origin, goal))
    }

    pub fn kind(&self) -> Kind {
        match self {
            Agent::Predator(_) => Kind::Predator,
            Agent::Prey(_) => Kind::Prey,
            Agent::Food(_) => Kind::Food,
            Agent::Scent(_) => Kind::Scent,
        }
    }

    pub fn symbol(&self) -> char {
        self.kind().symbol()
    }

    pub fn position(&self) -> Hex {
        match self {
            Agent::Predator(a) => a.location,
            Agent::Prey(a) => a.location,
            Agent::Food(a) => a.location,
            Agent::Scent(a) => a.location,
        }
    }

    /// Where the agent is heading; `None` for stationary agents
    pub fn goal(&self) -> Option<Hex> {
        self.mobile().map(Mobile::goal)
    }

    /// Where a scent was emitted
    pub fn origin(&self) -> Option<Hex> {
        match self {
            Agent::Scent(s) => Some(s.origin),
            _ => None,
        }
    }

    pub fn is_alive(&self) -> bool {
        match self {
            Agent::Predator(_) => true,
            Agent::Prey(a) => a.life.is_alive(),
            Agent::Food(a) => a.life.is_alive(),
            Agent::Scent(a) => a.life.is_alive(),
        }
    }

    pub fn mobile(&self) -> Option<&Mobile> {
        match self {
            Agent::Predator(a) => Some(&a.motion),
            Agent::Prey(a) => Some(&a.motion),
            Agent::Scent(a) => Some(&a.motion),
            Agent::Food(_) => None,
        }
    }

    pub fn mobile_mut(&mut self) -> Option<&mut Mobile> {
        match self {
            Agent::Predator(a) => Some(&mut a.motion),
            Agent::Prey(a) => Some(&mut a.motion),
            Agent::Scent(a) => Some(&mut a.motion),
            Agent::Food(_) => None,
        }
    }

    fn mortal_mut(&mut self) -> Option<&mut Mortal> {
        match self {
            Agent::Predator(_) => None,
            Agent::Prey(a) => Some(&mut a.life),
            Agent::Food(a) => Some(&mut a.life),
            Agent::Scent(a) => Some(&mut a.life),
        }
    }

    pub fn emitter(&self) -> Option<&Emitter> {
        match self {
            Agent::Food(a) => Some(&a.emitter),
            _ => None,
        }
    }

    pub fn reactions(&self) -> Reactions {
        match self {
            Agent::Predator(_) => Predator::REACTIONS,
            Agent::Prey(_) => Prey::REACTIONS,
            Agent::Food(_) => Food::REACTIONS,
            Agent::Scent(_) => Scent::REACTIONS,
        }
    }

    pub fn as_encountered(&self) -> Encountered {
        match self {
            Agent::Predator(_) => Encountered::Predator,
            Agent::Prey(_) => Encountered::Prey,
            Agent::Food(_) => Encountered::Food,
            Agent::Scent(s) => Encountered::Scent { origin: s.origin },
        }
    }

    /// Clears the alive flag. Returns true if the agent was alive before.
    pub fn kill(&mut self) -> bool {
        match self.mortal_mut() {
            Some(life) => {
                let was_alive = life.is_alive();
                life.kill();
                was_alive
            }
            None => false,
        }
    }

    /// React to sharing a cell with `other`, mutating only this agent
    pub fn encounter(&mut self, other: &Encountered) -> Outcome {
        let table = self.reactions();
        let reaction = match other {
            Encountered::Predator => table.on_predator,
            Encountered::Prey => table.on_prey,
            Encountered::Scent { .. } => table.on_scent,
            Encountered::Food => Reaction::Ignore,
        };

        match (reaction, other) {
            (Reaction::Ignore, _) => Outcome::Unaffected,
            (Reaction::Die, _) => {
                if self.kill() {
                    Outcome::Died
                } else {
                    Outcome::Unaffected
                }
            }
            (Reaction::FollowScent, Encountered::Scent { origin }) => match self.mobile_mut() {
                Some(motion) => {
                    motion.set_goal(*origin);
                    Outcome::Followed { goal: *origin }
                }
                None => Outcome::Unaffected,
            },
            (Reaction::FollowScent, _) => Outcome::Unaffected,
        }
    }

    /// Take one step toward the goal and apply the arrival policy.
    /// Returns the cell if the agent arrived this step.
    pub fn advance(&mut self, grid: &HexGrid, rng: &mut impl Rng) -> Option<Hex> {
        let (at, policy) = {
            let (location, motion) = match self {
                Agent::Predator(a) => (&mut a.location, &a.motion),
                Agent::Prey(a) => (&mut a.location, &a.motion),
                Agent::Scent(a) => (&mut a.location, &a.motion),
                Agent::Food(_) => return None,
            };
            if !motion.step(location) {
                return None;
            }
            (*location, motion.on_arrival())
        };

        match policy {
            GoalReached::Wander => {
                let next = grid.random_cell(rng);
                if let Some(motion) = self.mobile_mut() {
                    motion.set_goal(next);
                }
            }
            GoalReached::Dissipate => {
                self.kill();
            }
        }
        Some(at)
    }

    /// Roll the emitter, if any, and build the offspring on success.
    /// Dead agents never emit.
    pub fn emit(&self, grid: &HexGrid, rng: &mut impl Rng) -> Option<Agent> {
        let emitter = self.emitter()?;
        if !self.is_alive() || !emitter.fires(rng) {
            return None;
        }
        match emitter.emission() {
            Emission::ScentAtSelf => Some(Agent::scent(
                self.position(),
                grid.random_border_cell(rng),
            )),
        }
    }
}

impl fmt::Display for Agent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
