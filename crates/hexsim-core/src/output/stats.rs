//! Statistics Output
//!
//! Head counts of the live population.

use serde::Serialize;
use std::fmt;

use crate::components::agent::{Agent, Kind};

/// Live agents by kind
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Census {
    pub predators: usize,
    pub prey: usize,
    pub food: usize,
    pub scents: usize,
}

impl Census {
    pub fn from_agents<'a>(agents: impl IntoIterator<Item = &'a Agent>) -> Self {
        let mut census = Census::default();
        for agent in agents {
            census.record(agent.kind());
        }
        census
    }

    pub fn record(&mut self, kind: Kind) {
        match kind {
            Kind::Predator => self.predators += 1,
            Kind::Prey => self.prey += 1,
            Kind::Food => self.food += 1,
            Kind::Scent => self.scents += 1,
        }
    }

    pub fn count(&self, kind: Kind) -> usize {
        match kind {
            Kind::Predator => self.predators,
            Kind::Prey => self.prey,
            Kind::Food => self.food,
            Kind::Scent => self.scents,
        }
    }

    pub fn total(&self) -> usize {
        self.predators + self.prey + self.food + self.scents
    }
}

impl fmt::Display for Census {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = Kind::ALL
            .iter()
            .map(|kind| format!("{}:{}", kind.symbol(), self.count(*kind)))
            .collect();
        write!(f, "{} ({} total)", parts.join(" "), self.total())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::hex::Hex;

    #[test]
    fn test_census_counts() {
        let h = Hex::new(0, 0);
        let agents = vec![
            Agent::predator(h, h),
            Agent::prey(h, h),
            Agent::prey(h, h),
            Agent::food(h, 5),
        ];
        let census = Census::from_agents(&agents);
        assert_eq!(census.predators, 1);
        assert_eq!(census.prey, 2);
        assert_eq!(census.food, 1);
        assert_eq!(census.scents, 0);
        assert_eq!(census.total(), 4);
        assert_eq!(census.to_string(), "P:1 p:2 *:1 x:0 (4 total)");
    }
}
