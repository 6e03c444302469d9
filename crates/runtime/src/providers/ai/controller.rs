//! Per-agent decision loop.

use behavior_tree::{Behavior, Status};
use game_core::{Agent, EntityId, WorldOracle};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::context::{AiContext, PlanState, TickInputs};
use super::subtrees::{AiNode, strategies};
use crate::config::AiConfig;
use crate::planner::{Goal, GoalOutcome, TaskScheduler};

/// Drives one agent from a behavior tree.
///
/// The controller is ticked every frame but only evaluates its tree once
/// per [`AiConfig::decision_interval`]. It owns the agent's planning state
/// and a private RNG, so two controllers never share decisions. Toggling a
/// controller off pauses it without forgetting its goal or timer.
pub struct AiController {
    entity: EntityId,
    config: AiConfig,
    enabled: bool,
    decision_timer: f64,
    decisions: u64,
    plan: PlanState,
    rng: ChaCha8Rng,
    tree: AiNode,
}

impl AiController {
    /// Controller running `tree`. The RNG is seeded from the entity id.
    pub fn new(entity: EntityId, config: AiConfig, tree: AiNode, enabled: bool) -> Self {
        Self {
            entity,
            config,
            enabled,
            decision_timer: 0.0,
            decisions: 0,
            plan: PlanState::default(),
            rng: ChaCha8Rng::seed_from_u64(u64::from(entity.0)),
            tree,
        }
    }

    /// Enemy controller, enabled from the start.
    pub fn enemy(entity: EntityId, config: AiConfig) -> Self {
        Self::new(entity, config, strategies::enemy(), true)
    }

    /// Player auto-pilot, disabled until toggled on.
    pub fn player_assist(entity: EntityId, config: AiConfig) -> Self {
        Self::new(entity, config, strategies::player_assist(), false)
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = ChaCha8Rng::seed_from_u64(seed);
        self
    }

    pub fn entity(&self) -> EntityId {
        self.entity
    }

    pub fn config(&self) -> &AiConfig {
        &self.config
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Sets the enabled flag to `force`, or flips it when `None`. Returns the
    /// new state.
    pub fn toggle(&mut self, force: Option<bool>) -> bool {
        self.enabled = force.unwrap_or(!self.enabled);
        tracing::debug!("controller for {} enabled: {}", self.entity, self.enabled);
        self.enabled
    }

    /// Number of tree evaluations so far.
    pub fn decision_count(&self) -> u64 {
        self.decisions
    }

    pub fn plan(&self) -> &PlanState {
        &self.plan
    }

    pub fn goal(&self) -> Option<&Goal> {
        self.plan.goal()
    }

    pub fn last_outcome(&self) -> Option<GoalOutcome> {
        self.plan.last_outcome()
    }

    /// Commits to `goal`. An unfinished previous goal ends as `Aborted` and
    /// its queued tasks are dropped. Planning happens on the next decision.
    pub fn assign_goal(&mut self, goal: Goal, scheduler: &mut TaskScheduler) {
        self.abandon(scheduler);
        tracing::debug!("agent {} takes goal {:?}", self.entity, goal);
        self.plan.assign(goal);
    }

    /// Abandons the current goal, if any, as `Aborted`.
    pub fn clear_goal(&mut self, scheduler: &mut TaskScheduler) {
        self.abandon(scheduler);
    }

    fn abandon(&mut self, scheduler: &mut TaskScheduler) {
        let dropped = scheduler.clear(self.entity);
        if self.plan.goal().is_some() {
            tracing::debug!("agent {} abandons its goal, {} tasks dropped", self.entity, dropped);
            self.plan.finish(GoalOutcome::Aborted);
        }
    }

    /// Per-tick entry point.
    ///
    /// Returns the tree's status when a decision was made this tick, `None`
    /// when the controller is disabled, still waiting for its next decision,
    /// or handed an agent it does not control.
    pub fn update(
        &mut self,
        delta_time: f64,
        agent: &mut Agent,
        world: &dyn WorldOracle,
        inputs: TickInputs<'_>,
    ) -> Option<Status> {
        if !self.enabled {
            return None;
        }
        if agent.id() != self.entity {
            tracing::warn!("controller for {} was handed agent {}", self.entity, agent.id());
            return None;
        }

        self.decision_timer += delta_time;
        if self.decision_timer < self.config.decision_interval {
            return None;
        }
        self.decision_timer = 0.0;
        self.decisions += 1;

        let targets = inputs.targets();
        let perception = inputs
            .perception
            .map(|system| system.perceive(agent, world, delta_time, &targets))
            .unwrap_or_default();

        let mut ctx = AiContext::new(
            agent,
            world,
            delta_time,
            &self.config,
            &mut self.plan,
            inputs.scheduler,
            &mut self.rng,
        )
        .with_targets(inputs.player, inputs.target)
        .with_perception(perception);

        let status = self.tree.tick(&mut ctx);
        tracing::trace!("agent {} decision {}: {:?}", self.entity, self.decisions, status);
        Some(status)
    }
}

impl std::fmt::Debug for AiController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AiController")
            .field("entity", &self.entity)
            .field("enabled", &self.enabled)
            .field("decisions", &self.decisions)
            .field("plan", &self.plan)
            .finish_non_exhaustive()
    }
}
