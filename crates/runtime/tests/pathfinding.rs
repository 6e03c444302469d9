use game_core::{MapDimensions, Position, TerrainKind, TileGrid, WorldOracle};
use runtime::find_path;

/// Unbounded plane with a closed ring of rock around (20, 20).
struct RingedPlane;

impl RingedPlane {
    fn is_ring(x: i32, y: i32) -> bool {
        let (dx, dy) = ((x - 20).abs(), (y - 20).abs());
        dx.max(dy) == 2
    }
}

impl WorldOracle for RingedPlane {
    fn is_walkable(&self, x: i32, y: i32) -> bool {
        !Self::is_ring(x, y)
    }

    fn wrap_coords(&self, x: i32, y: i32) -> Position {
        Position::new(x, y)
    }
}

#[test]
fn maze_path_is_walkable_and_contiguous() {
    let world = TileGrid::from_ascii(
        "WWWWWWWWW\n\
         W...W...W\n\
         W.W.W.W.W\n\
         W.W...W.W\n\
         W.WWWWW.W\n\
         W.......W\n\
         WWWWWWWWW\n",
    )
    .unwrap();
    let start = Position::new(1, 1);
    let goal = Position::new(7, 1);

    let path = find_path(&world, start, goal);

    assert_eq!(path.last(), Some(&goal));
    let mut previous = start;
    for waypoint in &path {
        assert!(world.is_walkable_at(*waypoint));
        assert_eq!(previous.manhattan_distance(*waypoint), 1);
        previous = *waypoint;
    }
    // Through the middle gap; the bottom corridor is four steps longer.
    assert_eq!(path.len(), 10);
}

#[test]
fn open_grid_paths_match_manhattan_distance() {
    let world = TileGrid::new(12, 12, TerrainKind::Sand).unwrap();
    let start = Position::new(1, 2);

    for goal in [Position::new(4, 4), Position::new(1, 7), Position::new(5, 2)] {
        let path = find_path(&world, start, goal);
        assert_eq!(path.len() as u32, start.manhattan_distance(goal));
        assert_eq!(path.last(), Some(&goal));
    }
}

#[test]
fn raw_goal_coordinates_are_wrapped() {
    let world = TileGrid::new(8, 8, TerrainKind::Grass).unwrap();
    let path = find_path(&world, Position::new(0, 0), Position::new(-1, 0));

    assert_eq!(path, vec![Position::new(7, 0)]);
    assert_eq!(world.bounds(), Some(MapDimensions::new(8, 8)));
}

#[test]
fn unbounded_oracle_routes_around_obstacles() {
    let path = find_path(&RingedPlane, Position::new(15, 20), Position::new(25, 20));
    assert_eq!(path.len(), 10 + 2 * 3);
    assert!(path.iter().all(|p| !RingedPlane::is_ring(p.x, p.y)));
}

#[test]
fn unbounded_oracle_gives_up_on_enclosed_goal() {
    assert!(find_path(&RingedPlane, Position::new(10, 10), Position::new(20, 20)).is_empty());
}
