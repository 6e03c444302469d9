use std::collections::{BTreeMap, VecDeque};

use game_core::{Agent, Agents, EntityId, WorldOracle};

use super::Task;

/// What one scheduler step did to an agent's queue.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// The agent has no queued tasks.
    Idle,
    /// The head task is not ready; nothing ran.
    Waiting,
    /// The head task ran but is not done yet.
    InProgress,
    /// The head task finished and was popped; `remaining` tasks follow.
    Advanced { remaining: usize },
    /// The last task finished and the agent is no longer tracked.
    Drained,
    /// The head task was malformed and dropped without running.
    DroppedMalformed,
}

/// Per-agent FIFO task queues.
///
/// Each step only looks at the head of a queue. Agents whose queue empties
/// are forgotten, so the scheduler only tracks agents with live plans.
#[derive(Debug, Default)]
pub struct TaskScheduler {
    queues: BTreeMap<EntityId, VecDeque<Task>>,
}

impl TaskScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `tasks` to the agent's queue.
    pub fn add_tasks(&mut self, agent: EntityId, tasks: impl IntoIterator<Item = Task>) {
        let mut tasks = tasks.into_iter().peekable();
        if tasks.peek().is_none() {
            return;
        }
        self.queues.entry(agent).or_default().extend(tasks);
    }

    pub fn has_tasks(&self, agent: EntityId) -> bool {
        self.queues.contains_key(&agent)
    }

    pub fn pending(&self, agent: EntityId) -> usize {
        self.queues.get(&agent).map_or(0, VecDeque::len)
    }

    /// Drops the agent's queue. Returns the number of discarded tasks.
    /// Clearing an untracked agent does nothing.
    pub fn clear(&mut self, agent: EntityId) -> usize {
        self.queues.remove(&agent).map_or(0, |queue| queue.len())
    }

    /// Number of agents with queued tasks.
    pub fn tracked_agents(&self) -> usize {
        self.queues.len()
    }

    /// Runs at most one step of `agent`'s queue.
    pub fn step(&mut self, agent: &mut Agent, world: &dyn WorldOracle) -> StepOutcome {
        let id = agent.id();
        let Some(queue) = self.queues.get_mut(&id) else {
            return StepOutcome::Idle;
        };
        let Some(head) = queue.front() else {
            self.queues.remove(&id);
            return StepOutcome::Idle;
        };

        let outcome = if !head.is_well_formed() {
            tracing::warn!("agent {} dropped malformed task '{}'", id, head.label());
            queue.pop_front();
            StepOutcome::DroppedMalformed
        } else if !head.can_execute(agent, world) {
            tracing::trace!("agent {} waiting on '{}'", id, head.label());
            return StepOutcome::Waiting;
        } else if head.execute(agent, world) {
            tracing::trace!("agent {} finished '{}'", id, head.label());
            queue.pop_front();
            if queue.is_empty() {
                StepOutcome::Drained
            } else {
                StepOutcome::Advanced {
                    remaining: queue.len(),
                }
            }
        } else {
            return StepOutcome::InProgress;
        };

        if queue.is_empty() {
            self.queues.remove(&id);
        }
        outcome
    }

    /// Steps every tracked queue once, in id order.
    ///
    /// Queues of agents missing from `agents` are discarded.
    pub fn update(&mut self, world: &dyn WorldOracle, agents: &mut Agents) {
        let ids: Vec<EntityId> = self.queues.keys().copied().collect();
        for id in ids {
            match agents.get_mut(id) {
                Some(agent) => {
                    self.step(agent, world);
                }
                None => {
                    let dropped = self.clear(id);
                    tracing::debug!("discarded {} tasks of missing agent {}", dropped, id);
                }
            }
        }
    }
}
