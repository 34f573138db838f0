//! Agent Spawning
//!
//! Places the starting predators, prey and food at random cells.

use tracing::debug;

use crate::components::agent::{Agent, AgentId};
use crate::config::PopulationConfig;
use crate::ecosystem::Ecosystem;
use crate::error::EcosystemError;

/// Spawn the configured population, predators first, then prey, then food.
/// Mobile agents start with a random goal.
pub fn populate(
    ecosystem: &mut Ecosystem,
    population: &PopulationConfig,
    scent_rate: u32,
) -> Result<Vec<AgentId>, EcosystemError> {
    let mut spawned = Vec::with_capacity(
        population.predators + population.prey + population.food,
    );

    for _ in 0..population.predators {
        let at = ecosystem.random_cell();
        let goal = ecosystem.random_cell();
        spawned.push(ecosystem.add(Agent::predator(at, goal))?);
    }

    for _ in 0..population.prey {
        let at = ecosystem.random_cell();
        let goal = ecosystem.random_cell();
        spawned.push(ecosystem.add(Agent::prey(at, goal))?);
    }

    for _ in 0..population.food {
        let at = ecosystem.random_cell();
        spawned.push(ecosystem.add(Agent::food(at, scent_rate))?);
    }

    debug!(count = spawned.len(), "initial population placed");
    Ok(spawned)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::agent::Kind;

    #[test]
    fn test_populate_counts_and_order() {
        let mut eco = Ecosystem::with_seed(10, 42).unwrap();
        let config = PopulationConfig {
            predators: 2,
            prey: 3,
            food: 4,
        };
        let ids = populate(&mut eco, &config, 5).unwrap();
        assert_eq!(ids.len(), 9);

        let kinds: Vec<Kind> = eco
            .population()
            .into_iter()
            .map(|(_, agent)| agent.kind())
            .collect();
        assert_eq!(&kinds[..2], &[Kind::Predator; 2]);
        assert_eq!(&kinds[2..5], &[Kind::Prey; 3]);
        assert_eq!(&kinds[5..], &[Kind::Food; 4]);

        let grid = eco.grid();
        for (_, agent) in eco.population() {
            assert!(grid.contains(agent.position()));
            if let Some(goal) = agent.goal() {
                assert!(grid.contains(goal));
            }
        }
    }
}
