//! End-to-end tick behavior
//!
//! Each test builds a small world by hand and checks what one or more ticks
//! do to it.

use hexsim_core::{Agent, Config, Ecosystem, EventKind, Hex, HexGrid, Kind};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[test]
fn test_predator_walks_to_goal_and_rerolls_once() {
    let mut eco = Ecosystem::with_seed(12, 3).unwrap();
    let start = Hex::new(2, 3);
    let goal = Hex::new(5, 7);
    let id = eco.add(Agent::predator(start, goal)).unwrap();

    let steps = start.distance(goal);
    assert_eq!(steps, 7);

    let mut arrivals = 0;
    let mut last_distance = steps;
    for _ in 0..steps {
        eco.tick();
        arrivals += eco.tick_events().goal_reached_by(id);

        let predator = eco.get(id).unwrap();
        let d = predator.position().distance(goal);
        assert!(d < last_distance);
        last_distance = d;
    }

    let predator = eco.get(id).unwrap();
    assert_eq!(predator.position(), goal);
    assert_eq!(arrivals, 1);
    assert!(eco.grid().contains(predator.goal().unwrap()));
}

#[test]
fn test_prey_caught_by_predator_is_gone_next_tick() {
    let mut eco = Ecosystem::with_seed(12, 5).unwrap();
    let at = Hex::new(3, 3);
    let predator = eco.add(Agent::predator(at, at)).unwrap();
    let prey = eco.add(Agent::prey(at, at)).unwrap();

    eco.tick();

    assert!(eco.contains(predator));
    assert!(!eco.contains(prey));
    assert!(eco.tick_events().removed().any(|id| id == prey));
    assert!(eco.events().iter().any(|e| matches!(
        e.kind,
        EventKind::Reacted { agent, to, .. } if agent == prey && to == predator
    )));
}

#[test]
fn test_dead_agents_still_interact_within_the_tick() {
    let mut eco = Ecosystem::with_seed(12, 5).unwrap();
    let at = Hex::new(4, 4);
    let predator = eco.add(Agent::predator(at, at)).unwrap();
    let prey = eco.add(Agent::prey(at, at)).unwrap();
    let food = eco.add(Agent::food(at, 1)).unwrap();

    eco.tick();

    assert!(eco.contains(predator));
    assert!(!eco.contains(prey));
    assert!(!eco.contains(food));
    // eaten food does not emit on the tick it dies
    assert_eq!(eco.tick_events().spawned_count(Kind::Scent), 0);
    assert_eq!(eco.len(), 1);
}

#[test]
fn test_food_emission_rate() {
    let mut eco = Ecosystem::with_seed(12, 2024).unwrap();
    let food = eco.add(Agent::food(Hex::new(6, 6), 5)).unwrap();

    let ticks = 10_000;
    let mut emitted = 0;
    for _ in 0..ticks {
        eco.tick();
        emitted += eco.tick_events().spawned_count(Kind::Scent);
    }

    // expected 2000, sd 40
    assert!((1_800..=2_200).contains(&emitted), "emitted {emitted}");
    assert!(eco.contains(food));
}

#[test]
fn test_scent_keeps_origin_and_dies_at_border() {
    let mut eco = Ecosystem::with_seed(12, 8).unwrap();
    let origin = Hex::new(5, 5);
    let goal = Hex::new(0, 5);
    assert!(eco.grid().is_border(goal));
    let id = eco.add(Agent::scent(origin, goal)).unwrap();

    let mut previous = origin;
    for _ in 0..origin.distance(goal) - 1 {
        eco.tick();
        let scent = eco.get(id).unwrap();
        assert_eq!(scent.origin(), Some(origin));
        assert_ne!(scent.position(), previous);
        previous = scent.position();
    }

    eco.tick();
    assert!(!eco.contains(id));
    assert_eq!(eco.tick_events().goal_reached_by(id), 1);
    assert!(eco.tick_events().removed().any(|r| r == id));
}

#[test]
fn test_predator_follows_scent_back_to_origin() {
    let mut eco = Ecosystem::with_seed(12, 13).unwrap();
    let grid = HexGrid::new(12).unwrap();
    let mut rng = SmallRng::seed_from_u64(0);

    // a scent emitted at (8, 3) heading for the top edge, four cells along
    let mut scent = Agent::scent(Hex::new(8, 3), Hex::new(0, 3));
    for _ in 0..4 {
        scent.advance(&grid, &mut rng);
    }
    assert_eq!(scent.position(), Hex::new(4, 3));

    let at = Hex::new(3, 3);
    let predator = eco.add(Agent::predator(at, at)).unwrap();
    eco.add(scent).unwrap();

    eco.tick();

    let predator = eco.get(predator).unwrap();
    assert_eq!(predator.position(), at);
    assert_eq!(predator.goal(), Some(Hex::new(8, 3)));
}

#[test]
fn test_random_cell_stays_in_bounds() {
    let mut eco = Ecosystem::with_seed(12, 77).unwrap();
    let grid = eco.grid();
    for _ in 0..10_000 {
        let cell = eco.random_cell();
        assert!(grid.contains(cell), "{cell} out of bounds");
    }
}

#[test]
fn test_agents_never_leave_the_grid() {
    let config = Config::default();
    let mut eco = Ecosystem::from_config(&config).unwrap();
    let grid = eco.grid();

    for _ in 0..300 {
        eco.tick();
        for (_, agent) in eco.population() {
            assert!(agent.is_alive());
            assert!(grid.contains(agent.position()));
            if let Some(goal) = agent.goal() {
                assert!(grid.contains(goal));
            }
        }
    }
}

#[test]
fn test_population_matches_alive_flags_after_commit() {
    let mut config = Config::default();
    config.population.prey = 20;
    config.population.predators = 6;
    let mut eco = Ecosystem::from_config(&config).unwrap();

    let mut total_removed = 0;
    for _ in 0..200 {
        let before = eco.len();
        eco.tick();
        let removed = eco.tick_events().removed().count();
        let spawned = eco
            .events()
            .iter()
            .filter(|e| matches!(e.kind, EventKind::Spawned { .. }))
            .count();
        assert_eq!(eco.len(), before + spawned - removed);
        total_removed += removed;
    }
    // scents at least have dissipated
    assert!(total_removed > 0);
    assert_eq!(eco.census().predators, 6);
}

#[test]
fn test_rejects_empty_world() {
    assert!(hexsim_core::new_world(0).is_err());
    assert!(hexsim_core::new_world(-4).is_err());

    let mut config = Config::default();
    config.world.size = 0;
    assert!(Ecosystem::from_config(&config).is_err());
}

#[test]
fn test_render_shows_every_kind() {
    let mut eco = hexsim_core::new_world(4).unwrap();
    eco.add(Agent::predator(Hex::new(0, 0), Hex::new(0, 0))).unwrap();
    eco.add(Agent::prey(Hex::new(1, 1), Hex::new(1, 1))).unwrap();
    eco.add(Agent::food(Hex::new(2, 2), 5)).unwrap();
    eco.add(Agent::scent(Hex::new(3, 3), Hex::new(3, 3))).unwrap();

    let cells = eco.render();
    assert_eq!(cells.len(), 4);
    assert_eq!(cells[0][0], 'P');
    assert_eq!(cells[1][1], 'p');
    assert_eq!(cells[2][2], '*');
    assert_eq!(cells[3][3], 'x');
    assert_eq!(cells[0][1], ' ');

    let text = eco.to_string();
    assert_eq!(text.lines().count(), 4);
    assert!(text.lines().next().unwrap().starts_with('P'));
    assert_eq!(text.lines().nth(3).unwrap().trim(), "x");
}
