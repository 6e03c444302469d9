use std::fmt;

use game_core::{Agent, Direction, Position, WorldOracle};

/// Readiness check for a task. Must not mutate anything.
pub type CanExecuteFn = Box<dyn Fn(&Agent, &dyn WorldOracle) -> bool + Send + Sync>;

/// Runs a task once. Returns `true` when the task is done and can be popped.
pub type ExecuteFn = Box<dyn Fn(&mut Agent, &dyn WorldOracle) -> bool + Send + Sync>;

/// One resumable step of a plan.
///
/// A task is a readiness check paired with an action. Tasks assembled from
/// optional parts through [`Task::from_hooks`] may lack one of them; the
/// scheduler drops such tasks instead of letting them block the queue.
pub struct Task {
    label: String,
    can_execute: Option<CanExecuteFn>,
    execute: Option<ExecuteFn>,
}

impl Task {
    pub fn new<C, E>(label: impl Into<String>, can_execute: C, execute: E) -> Self
    where
        C: Fn(&Agent, &dyn WorldOracle) -> bool + Send + Sync + 'static,
        E: Fn(&mut Agent, &dyn WorldOracle) -> bool + Send + Sync + 'static,
    {
        Self {
            label: label.into(),
            can_execute: Some(Box::new(can_execute)),
            execute: Some(Box::new(execute)),
        }
    }

    /// Builds a task from hooks that may be missing.
    pub fn from_hooks(
        label: impl Into<String>,
        can_execute: Option<CanExecuteFn>,
        execute: Option<ExecuteFn>,
    ) -> Self {
        Self {
            label: label.into(),
            can_execute,
            execute,
        }
    }

    /// Single-tile move toward an adjacent `waypoint`.
    ///
    /// Ready once the agent is idle and the waypoint is walkable. Running it
    /// queues the direction that reaches the waypoint and always reports
    /// done: the task is one attempt, not a guarantee the agent arrives.
    pub fn move_step(waypoint: Position) -> Self {
        Self::new(
            format!("move to {waypoint}"),
            move |agent, world| !agent.is_busy() && world.is_walkable_at(waypoint),
            move |agent, world| {
                let from = agent.position();
                let direction = Direction::ALL
                    .into_iter()
                    .find(|&direction| world.same_tile(from.step(direction), waypoint));
                match direction {
                    Some(direction) => {
                        agent.queue_input(direction);
                    }
                    None => tracing::trace!(
                        "agent {} at {} is not next to waypoint {}",
                        agent.id(),
                        from,
                        waypoint
                    ),
                }
                true
            },
        )
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Both hooks are present.
    pub fn is_well_formed(&self) -> bool {
        self.can_execute.is_some() && self.execute.is_some()
    }

    /// `false` for malformed tasks.
    pub fn can_execute(&self, agent: &Agent, world: &dyn WorldOracle) -> bool {
        self.can_execute
            .as_ref()
            .is_some_and(|check| check(agent, world))
    }

    /// Runs the task. Malformed tasks report done without doing anything.
    pub fn execute(&self, agent: &mut Agent, world: &dyn WorldOracle) -> bool {
        match &self.execute {
            Some(run) => run(agent, world),
            None => true,
        }
    }
}

impl fmt::Debug for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Task")
            .field("label", &self.label)
            .field("well_formed", &self.is_well_formed())
            .finish()
    }
}
