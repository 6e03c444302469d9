//! Blackboard shared by behavior tree nodes during one evaluation.

use std::collections::VecDeque;

use game_core::{Agent, Direction, Position, WorldOracle};
use rand_chacha::ChaCha8Rng;

use crate::config::AiConfig;
use crate::perception::{Perception, PerceptionSystem, Target};
use crate::planner::{Goal, GoalOutcome, TaskScheduler};

/// Per-tick inputs supplied by whoever drives the controllers.
pub struct TickInputs<'a> {
    /// The player, for agents that react to it.
    pub player: Option<Target>,
    /// Whatever the agent should pursue.
    pub target: Option<Target>,
    /// Senses to query. Without them nothing is ever detected.
    pub perception: Option<&'a PerceptionSystem>,
    /// Task queues shared by all controllers.
    pub scheduler: &'a mut TaskScheduler,
}

impl<'a> TickInputs<'a> {
    pub fn new(scheduler: &'a mut TaskScheduler) -> Self {
        Self {
            player: None,
            target: None,
            perception: None,
            scheduler,
        }
    }

    #[must_use]
    pub fn with_player(mut self, player: Target) -> Self {
        self.player = Some(player);
        self
    }

    #[must_use]
    pub fn with_target(mut self, target: Target) -> Self {
        self.target = Some(target);
        self
    }

    #[must_use]
    pub fn with_perception(mut self, perception: &'a PerceptionSystem) -> Self {
        self.perception = Some(perception);
        self
    }

    /// Candidate targets for senses: player first, then target.
    pub(crate) fn targets(&self) -> Vec<Target> {
        let mut targets: Vec<Target> = self.player.into_iter().collect();
        if let Some(target) = self.target.filter(|t| Some(*t) != self.player) {
            targets.push(target);
        }
        targets
    }
}

/// Planning state a controller owns exclusively.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PlanState {
    goal: Option<Goal>,
    /// Tasks for the current goal have been handed to the scheduler.
    planned: bool,
    /// Consecutive decisions where the agent was idle but its next task
    /// could not run.
    stalled_ticks: u32,
    last_outcome: Option<GoalOutcome>,
    /// Remaining pursuit waypoints, next first.
    pursuit: VecDeque<Position>,
    /// Tile the pursuit path was computed for.
    target_last_pos: Option<Position>,
}

impl PlanState {
    pub fn goal(&self) -> Option<&Goal> {
        self.goal.as_ref()
    }

    pub fn last_outcome(&self) -> Option<GoalOutcome> {
        self.last_outcome
    }

    pub fn is_planned(&self) -> bool {
        self.planned
    }

    pub fn stalled_ticks(&self) -> u32 {
        self.stalled_ticks
    }

    pub fn pursuit_path(&self) -> &VecDeque<Position> {
        &self.pursuit
    }

    /// Takes up `goal`, forgetting any previous one.
    pub(crate) fn assign(&mut self, goal: Goal) {
        self.goal = Some(goal);
        self.planned = false;
        self.stalled_ticks = 0;
    }

    pub(crate) fn mark_planned(&mut self) {
        self.planned = true;
        self.stalled_ticks = 0;
    }

    /// Counts a stalled decision and returns the running total.
    pub(crate) fn stall(&mut self) -> u32 {
        self.stalled_ticks += 1;
        self.stalled_ticks
    }

    pub(crate) fn reset_stall(&mut self) {
        self.stalled_ticks = 0;
    }

    /// Drops the goal and records how it ended.
    pub(crate) fn finish(&mut self, outcome: GoalOutcome) {
        if let Some(goal) = self.goal.take() {
            tracing::debug!("goal {:?} ended: {:?}", goal, outcome);
        }
        self.planned = false;
        self.stalled_ticks = 0;
        self.last_outcome = Some(outcome);
    }

    /// Pursuit path is stale when the target left the tile it was planned
    /// for or there is nothing left to follow.
    pub(crate) fn pursuit_is_stale(&self, target_tile: Position) -> bool {
        self.target_last_pos != Some(target_tile) || self.pursuit.is_empty()
    }

    pub(crate) fn set_pursuit(&mut self, target_tile: Position, path: Vec<Position>) {
        self.target_last_pos = Some(target_tile);
        self.pursuit = path.into();
    }

    pub(crate) fn next_waypoint(&self) -> Option<Position> {
        self.pursuit.front().copied()
    }

    pub(crate) fn pop_waypoint(&mut self) {
        self.pursuit.pop_front();
    }

    pub(crate) fn clear_pursuit(&mut self) {
        self.pursuit.clear();
    }
}

/// Context handed to every node of one tree evaluation.
///
/// Nodes read the world and perception through it and act only by queuing
/// directions on [`AiContext::agent`] or driving the scheduler.
pub struct AiContext<'a> {
    pub agent: &'a mut Agent,
    pub world: &'a dyn WorldOracle,
    pub delta_time: f64,
    pub config: &'a AiConfig,
    pub plan: &'a mut PlanState,
    pub scheduler: &'a mut TaskScheduler,
    pub rng: &'a mut ChaCha8Rng,
    pub player: Option<Target>,
    pub target: Option<Target>,
    perception: Perception,
}

impl<'a> AiContext<'a> {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        agent: &'a mut Agent,
        world: &'a dyn WorldOracle,
        delta_time: f64,
        config: &'a AiConfig,
        plan: &'a mut PlanState,
        scheduler: &'a mut TaskScheduler,
        rng: &'a mut ChaCha8Rng,
    ) -> Self {
        Self {
            agent,
            world,
            delta_time,
            config,
            plan,
            scheduler,
            rng,
            player: None,
            target: None,
            perception: Perception::default(),
        }
    }

    #[must_use]
    pub fn with_targets(mut self, player: Option<Target>, target: Option<Target>) -> Self {
        self.player = player;
        self.target = target;
        self
    }

    #[must_use]
    pub fn with_perception(mut self, perception: Perception) -> Self {
        self.perception = perception;
        self
    }

    /// What the agent's senses reported this evaluation.
    pub fn perception(&self) -> &Perception {
        &self.perception
    }

    /// Player was seen or smelled.
    pub fn player_detected(&self) -> bool {
        self.player.is_some_and(|player| {
            self.perception.detected_by(Perception::VISION, player.id)
                || self.perception.detected_by(Perception::SMELL, player.id)
        })
    }

    pub fn target_visible(&self) -> bool {
        self.target
            .is_some_and(|target| self.perception.detected_by(Perception::VISION, target.id))
    }

    /// Queues `direction` if the agent is idle and the tile it leads to is
    /// walkable.
    pub fn try_queue(&mut self, direction: Direction) -> bool {
        if self.agent.is_busy() {
            return false;
        }
        let destination = self.agent.position().step(direction);
        if !self.world.is_walkable_at(destination) {
            return false;
        }
        self.agent.queue_input(direction)
    }
}
