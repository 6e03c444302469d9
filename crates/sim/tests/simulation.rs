use std::fs;

use game_core::{EntityId, Position, TerrainKind, TileGrid, WorldOracle};
use runtime::AiConfig;
use sim::{SimConfig, Simulation};
use tempfile::TempDir;

fn open_world(width: u32, height: u32) -> TileGrid {
    TileGrid::new(width, height, TerrainKind::Grass).unwrap()
}

#[test]
fn generated_run_keeps_agents_on_walkable_tiles() {
    let config = SimConfig {
        ticks: 200,
        ..SimConfig::default()
    };
    let mut simulation = Simulation::build(&config).unwrap();
    let report = simulation.run(config.ticks);

    assert_eq!(report.ticks, 200);
    assert_eq!(simulation.agents().len(), config.enemies + 1);
    assert!(report.decisions > 0);
    for agent in simulation.agents().iter() {
        assert!(simulation.world().is_walkable_at(agent.position()));
    }
}

#[test]
fn same_seed_same_run() {
    let config = SimConfig {
        seed: 99,
        autopilot: true,
        ..SimConfig::default()
    };

    let mut first = Simulation::build(&config).unwrap();
    let mut second = Simulation::build(&config).unwrap();

    assert_eq!(first.run(300), second.run(300));
    assert_eq!(first.render(), second.render());
}

#[test]
fn enemy_steps_away_from_player_in_view() {
    let mut simulation =
        Simulation::with_world(open_world(12, 12), Position::new(5, 7), AiConfig::default(), 0.1);
    let enemy = simulation.spawn_enemy(Position::new(5, 5));

    simulation.run(3);

    let agent = simulation.agents().get(enemy).unwrap();
    assert!(agent.is_moving());
    assert_eq!(agent.movement().to, Position::new(5, 4));
}

#[test]
fn autopilot_goal_is_reported() {
    let mut simulation =
        Simulation::with_world(open_world(12, 12), Position::new(1, 1), AiConfig::default(), 0.1);
    let player = EntityId::PLAYER;
    simulation.controller_mut(player).unwrap().toggle(Some(true));

    assert!(simulation.assign_goal(player, Position::new(4, 3)));
    let report = simulation.run(200);

    assert_eq!(report.goals_completed, 1);
    assert_eq!(report.goals_unreachable, 0);
    assert!(report.steps >= 5);
}

#[test]
fn unreachable_goal_is_reported() {
    let mut world = open_world(8, 8);
    world.set_tile(6, 6, TerrainKind::Water);
    let mut simulation = Simulation::with_world(world, Position::new(1, 1), AiConfig::default(), 0.1);
    let enemy = simulation.spawn_enemy(Position::new(2, 2));

    assert!(simulation.assign_goal(enemy, Position::new(6, 6)));
    assert!(!simulation.assign_goal(EntityId(42), Position::new(3, 3)));
    let report = simulation.run(3);

    assert_eq!(report.goals_unreachable, 1);
    assert!(simulation.controller(enemy).unwrap().goal().is_none());
}

#[test]
fn render_draws_agents_over_terrain() {
    let mut world = open_world(4, 2);
    world.set_tile(3, 1, TerrainKind::Tree);
    let mut simulation = Simulation::with_world(world, Position::new(0, 0), AiConfig::default(), 0.1);
    simulation.spawn_enemy(Position::new(2, 1));

    assert_eq!(simulation.render(), "@...\n..ET\n");
}

#[test]
fn maps_load_from_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("map.txt");
    fs::write(&path, "......\n.WW...\n......\n").unwrap();

    let config = SimConfig {
        map: Some(path),
        enemies: 1,
        ..SimConfig::default()
    };
    let simulation = Simulation::build(&config).unwrap();

    assert_eq!(simulation.world().tile(1, 1), TerrainKind::Wall);
    assert_eq!(simulation.agents().len(), 2);
}

#[test]
fn missing_map_is_an_error() {
    let config = SimConfig {
        map: Some("/nonexistent/agent-sim/map.txt".into()),
        ..SimConfig::default()
    };

    let error = Simulation::build(&config).err().unwrap();
    assert!(error.to_string().contains("failed to read map"));
}
