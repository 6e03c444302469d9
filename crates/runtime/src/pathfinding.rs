//! A* pathfinding over the 4-connected tile grid.
//!
//! Paths are computed once per goal (or when a pursued target moves), never
//! every tick. The search is a pure function of its inputs and keeps no state
//! between calls.
//!
//! Neighbours are generated from raw coordinates and checked with
//! [`WorldOracle::is_walkable`], which owns wrapping. Visited tiles are keyed
//! by their wrapped position so a wrapping world is searched as the finite
//! torus it is.
//!
//! # Tie-breaking
//!
//! Among open nodes with the lowest f-score the one with the lowest heuristic
//! wins, then the one pushed first. Neighbours are pushed in the order right,
//! left, down, up. Together this makes every search reproducible.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

use game_core::{Direction, MapDimensions, Position, WorldOracle};

/// Neighbour expansion order.
const NEIGHBOURS: [Direction; 4] = [
    Direction::Right,
    Direction::Left,
    Direction::Down,
    Direction::Up,
];

/// Expansion cap for oracles that cannot report their bounds.
const UNBOUNDED_EXPANSION_LIMIT: usize = 1 << 16;

/// Manhattan distance, taking the short way around the seam when `bounds`
/// is known. Admissible and consistent for unit-cost 4-connected moves.
pub fn heuristic(a: Position, b: Position, bounds: Option<MapDimensions>) -> u32 {
    let dx = a.x.abs_diff(b.x);
    let dy = a.y.abs_diff(b.y);
    match bounds {
        Some(dims) => dx.min(dims.width.saturating_sub(dx)) + dy.min(dims.height.saturating_sub(dy)),
        None => dx + dy,
    }
}

/// Node in the A* open set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct OpenNode {
    position: Position,
    f_score: u32,
    h_score: u32,
    order: u64,
}

impl Ord for OpenNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse order for min-heap
        other
            .f_score
            .cmp(&self.f_score)
            .then_with(|| other.h_score.cmp(&self.h_score))
            .then_with(|| other.order.cmp(&self.order))
    }
}

impl PartialOrd for OpenNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Finds a shortest path from `start` to `goal`.
///
/// The returned waypoints exclude `start` and end with `goal`, all wrapped
/// into the grid, so its length is the number of steps to take. The result
/// is empty when either endpoint is unwalkable, when the goal cannot be
/// reached, or when `start` and `goal` are already the same tile. Callers
/// that need to tell the last case apart compare the endpoints themselves.
pub fn find_path<W>(world: &W, start: Position, goal: Position) -> Vec<Position>
where
    W: WorldOracle + ?Sized,
{
    if !world.is_walkable_at(start) || !world.is_walkable_at(goal) {
        return Vec::new();
    }

    let bounds = world.bounds();
    let start = world.wrap(start);
    let goal = world.wrap(goal);
    if start == goal {
        return Vec::new();
    }

    let expansion_limit = bounds.map_or(UNBOUNDED_EXPANSION_LIMIT, |dims| dims.area());

    let mut open_set = BinaryHeap::new();
    let mut closed: HashSet<Position> = HashSet::new();
    let mut came_from: HashMap<Position, Position> = HashMap::new();
    let mut g_scores: HashMap<Position, u32> = HashMap::new();
    let mut order = 0u64;

    let h_start = heuristic(start, goal, bounds);
    g_scores.insert(start, 0);
    open_set.push(OpenNode {
        position: start,
        f_score: h_start,
        h_score: h_start,
        order,
    });

    while let Some(current) = open_set.pop() {
        if current.position == goal {
            return reconstruct_path(&came_from, start, goal);
        }
        if !closed.insert(current.position) {
            // Stale entry superseded by a cheaper push.
            continue;
        }
        if closed.len() > expansion_limit {
            tracing::debug!(
                "path search {} -> {} gave up after {} expansions",
                start,
                goal,
                closed.len()
            );
            break;
        }

        let current_g = g_scores.get(&current.position).copied().unwrap_or(u32::MAX);

        for direction in NEIGHBOURS {
            let raw = current.position.step(direction);
            if !world.is_walkable_at(raw) {
                continue;
            }
            let neighbour = world.wrap(raw);
            if closed.contains(&neighbour) {
                continue;
            }

            let tentative_g = current_g.saturating_add(1);
            let neighbour_g = g_scores.get(&neighbour).copied().unwrap_or(u32::MAX);
            if tentative_g < neighbour_g {
                came_from.insert(neighbour, current.position);
                g_scores.insert(neighbour, tentative_g);

                let h_score = heuristic(neighbour, goal, bounds);
                order += 1;
                open_set.push(OpenNode {
                    position: neighbour,
                    f_score: tentative_g + h_score,
                    h_score,
                    order,
                });
            }
        }
    }

    Vec::new()
}

/// Walks `came_from` back from the goal, dropping the start tile.
fn reconstruct_path(
    came_from: &HashMap<Position, Position>,
    start: Position,
    goal: Position,
) -> Vec<Position> {
    let mut path = vec![goal];
    let mut current = goal;
    while let Some(&previous) = came_from.get(&current) {
        if previous == start {
            break;
        }
        path.push(previous);
        current = previous;
    }
    path.reverse();
    path
}
