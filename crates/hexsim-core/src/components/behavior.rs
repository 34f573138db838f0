//! Behavior Capabilities
//!
//! Small units of behavior that agent variants are composed from: moving
//! toward a goal, being mortal, emitting offspring, and reacting to other
//! kinds of agent. Policies that would otherwise be callbacks are plain tags
//! interpreted by the simulation systems.

use rand::Rng;

use super::hex::Hex;

/// What a mobile agent does when it arrives at its goal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoalReached {
    /// Pick a new random goal anywhere on the grid
    Wander,
    /// Die on the spot
    Dissipate,
}

/// Capability: walks one step per tick toward a goal
#[derive(Debug, Clone, PartialEq)]
pub struct Mobile {
    goal: Hex,
    on_arrival: GoalReached,
}

impl Mobile {
    pub fn new(goal: Hex, on_arrival: GoalReached) -> Self {
        Self { goal, on_arrival }
    }

    pub fn goal(&self) -> Hex {
        self.goal
    }

    pub fn set_goal(&mut self, goal: Hex) {
        self.goal = goal;
    }

    pub fn on_arrival(&self) -> GoalReached {
        self.on_arrival
    }

    /// Moves `location` one step toward the goal. Returns true when it is
    /// standing on the goal afterwards.
    pub fn step(&self, location: &mut Hex) -> bool {
        location.move_toward(self.goal);
        *location == self.goal
    }
}

/// Capability: can die
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mortal {
    alive: bool,
}

impl Mortal {
    pub fn new() -> Self {
        Self { alive: true }
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn kill(&mut self) {
        self.alive = false;
    }
}

impl Default for Mortal {
    fn default() -> Self {
        Self::new()
    }
}

/// What an emitter produces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emission {
    /// A scent trail starting at the emitter's own cell
    ScentAtSelf,
}

/// Capability: spawns an offspring with probability `1 / rate` each tick
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Emitter {
    rate: u32,
    emission: Emission,
}

impl Emitter {
    /// Panics if `rate` is zero.
    pub fn new(rate: u32, emission: Emission) -> Self {
        assert!(rate > 0, "emitter rate must be positive");
        Self { rate, emission }
    }

    pub fn rate(&self) -> u32 {
        self.rate
    }

    pub fn emission(&self) -> Emission {
        self.emission
    }

    /// One draw of the per-tick emission roll
    pub fn fires(&self, rng: &mut impl Rng) -> bool {
        rng.gen_range(0..self.rate) == 0
    }
}

/// A response to sharing a cell with another agent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reaction {
    Ignore,
    /// Clear the agent's own alive flag
    Die,
    /// Replace the agent's goal with the scent's origin
    FollowScent,
}

/// Reaction table of one agent variant, keyed by the kind encountered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reactions {
    pub on_predator: Reaction,
    pub on_prey: Reaction,
    pub on_scent: Reaction,
}

impl Reactions {
    pub const IGNORE_ALL: Reactions = Reactions {
        on_predator: Reaction::Ignore,
        on_prey: Reaction::Ignore,
        on_scent: Reaction::Ignore,
    };
}
