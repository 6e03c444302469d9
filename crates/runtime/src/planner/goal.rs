use game_core::{Agent, Position, WorldOracle};

use super::Task;
use crate::pathfinding::find_path;

/// A high-level outcome an agent commits to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Goal {
    /// Walk to a tile.
    MoveTo { target: Position },
}

impl Goal {
    pub const fn move_to(target: Position) -> Self {
        Self::MoveTo { target }
    }

    /// Returns `true` if the agent already stands where the goal wants it.
    pub fn is_satisfied(&self, agent: &Agent, world: &dyn WorldOracle) -> bool {
        match self {
            Goal::MoveTo { target } => world.same_tile(agent.position(), *target),
        }
    }
}

/// How the last goal ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GoalOutcome {
    /// The agent reached the goal, or its plan ran to the end.
    Completed,
    /// Planning produced no tasks.
    Unreachable,
    /// The goal was cleared or replaced while tasks were still queued.
    Aborted,
}

/// Turns goals into task lists.
pub struct GoalPlanner;

impl GoalPlanner {
    /// Decomposes `goal` for `agent`.
    ///
    /// `MoveTo` runs the pathfinder once and yields one [`Task::move_step`]
    /// per waypoint. An empty list means there is nothing to do: either no
    /// path exists or the agent is already there. Callers check
    /// [`Goal::is_satisfied`] first to tell the two apart.
    pub fn plan(agent: &Agent, world: &dyn WorldOracle, goal: &Goal) -> Vec<Task> {
        match goal {
            Goal::MoveTo { target } => {
                let path = find_path(world, agent.position(), *target);
                tracing::debug!(
                    "agent {} planned {} steps from {} to {}",
                    agent.id(),
                    path.len(),
                    agent.position(),
                    target
                );
                path.into_iter().map(Task::move_step).collect()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use game_core::{AgentKind, EntityId, TerrainKind, TileGrid};

    use super::*;

    #[test]
    fn move_to_yields_one_task_per_waypoint() {
        let world = TileGrid::new(5, 5, TerrainKind::Grass).unwrap();
        let agent = Agent::new(EntityId(1), AgentKind::Enemy, Position::new(0, 0));

        let tasks = GoalPlanner::plan(&agent, &world, &Goal::move_to(Position::new(2, 2)));
        assert_eq!(tasks.len(), 4);
        assert!(tasks.iter().all(Task::is_well_formed));
    }

    #[test]
    fn unreachable_goal_plans_nothing() {
        let mut world = TileGrid::new(5, 5, TerrainKind::Grass).unwrap();
        world.set_tile(2, 2, TerrainKind::Tree);
        let agent = Agent::new(EntityId(1), AgentKind::Enemy, Position::new(0, 0));

        let goal = Goal::move_to(Position::new(2, 2));
        assert!(GoalPlanner::plan(&agent, &world, &goal).is_empty());
        assert!(!goal.is_satisfied(&agent, &world));
    }

    #[test]
    fn satisfied_goal_compares_wrapped_tiles() {
        let world = TileGrid::new(5, 5, TerrainKind::Grass).unwrap();
        let agent = Agent::new(EntityId(1), AgentKind::Enemy, Position::new(1, 1));

        assert!(Goal::move_to(Position::new(6, -4)).is_satisfied(&agent, &world));
    }
}
