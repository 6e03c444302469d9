//! Action nodes for AI behavior trees.
//!
//! Actions are the only nodes with side effects. They queue at most one
//! direction per evaluation, or advance the agent's task queue by one step.

use behavior_tree::{Behavior, Status};
use game_core::Direction;
use rand::Rng;

use crate::config::StallPolicy;
use crate::pathfinding::find_path;
use crate::planner::{GoalOutcome, GoalPlanner, StepOutcome};
use crate::providers::ai::AiContext;

/// Random directions tried by [`Wander`] before giving up.
const WANDER_ATTEMPTS: usize = 4;

/// Works on the assigned goal.
///
/// Plans once when the goal is taken up, then drives the scheduler one step
/// per evaluation. The goal ends as `Completed` when the agent already stands
/// on it or the plan drains, and as `Unreachable` when planning yields
/// nothing. A blocked step is retried on every evaluation unless the
/// configured [`StallPolicy`] asks for a replan.
///
/// Succeeds while the goal is being serviced; fails only when the goal turned
/// out to be unreachable or there is none.
pub struct ServiceGoal;

impl Behavior<AiContext<'_>> for ServiceGoal {
    fn tick(&self, ctx: &mut AiContext) -> Status {
        let Some(goal) = ctx.plan.goal().copied() else {
            return Status::Failure;
        };
        let id = ctx.agent.id();

        if goal.is_satisfied(ctx.agent, ctx.world) {
            ctx.scheduler.clear(id);
            ctx.plan.finish(GoalOutcome::Completed);
            return Status::Success;
        }

        if !ctx.plan.is_planned() {
            let tasks = GoalPlanner::plan(ctx.agent, ctx.world, &goal);
            if tasks.is_empty() {
                ctx.plan.finish(GoalOutcome::Unreachable);
                return Status::Failure;
            }
            ctx.scheduler.clear(id);
            ctx.scheduler.add_tasks(id, tasks);
            ctx.plan.mark_planned();
        }

        match ctx.scheduler.step(ctx.agent, ctx.world) {
            StepOutcome::Drained | StepOutcome::Idle => {
                ctx.plan.finish(GoalOutcome::Completed);
            }
            StepOutcome::Waiting if !ctx.agent.is_busy() => {
                let stalled = ctx.plan.stall();
                if let StallPolicy::Replan { after } = ctx.config.stall_policy {
                    if stalled >= after {
                        tracing::debug!("agent {} replanning after {} stalled decisions", id, stalled);
                        ctx.scheduler.clear(id);
                        ctx.plan.assign(goal);
                    }
                }
            }
            StepOutcome::Waiting
            | StepOutcome::InProgress
            | StepOutcome::Advanced { .. }
            | StepOutcome::DroppedMalformed => ctx.plan.reset_stall(),
        }
        Status::Success
    }
}

/// Steps away from the player along the dominant axis.
///
/// Flees horizontally when `|dx| > |dy|`, vertically otherwise (ties go
/// vertical). Fails when the escape tile is not walkable.
pub struct FleeFromPlayer;

impl Behavior<AiContext<'_>> for FleeFromPlayer {
    fn tick(&self, ctx: &mut AiContext) -> Status {
        let Some(player) = ctx.player else {
            return Status::Failure;
        };

        let here = ctx.agent.position();
        let dx = player.position.x - here.x;
        let dy = player.position.y - here.y;
        let direction = if dx.abs() > dy.abs() {
            if dx > 0 { Direction::Left } else { Direction::Right }
        } else if dy > 0 {
            Direction::Up
        } else {
            Direction::Down
        };

        if ctx.try_queue(direction) {
            tracing::debug!("agent {} flees {} from player at {}", ctx.agent.id(), direction, player.position);
            Status::Success
        } else {
            Status::Failure
        }
    }
}

/// Follows a path to the pursuit target, one waypoint per evaluation.
///
/// The path is recomputed only when the target changed tiles or the path
/// ran out. If the next waypoint is no longer adjacent or walkable the path
/// is discarded and the node fails.
pub struct PursueTarget;

impl Behavior<AiContext<'_>> for PursueTarget {
    fn tick(&self, ctx: &mut AiContext) -> Status {
        let Some(target) = ctx.target else {
            return Status::Failure;
        };

        let here = ctx.agent.position();
        let target_tile = ctx.world.wrap(target.position);
        if ctx.plan.pursuit_is_stale(target_tile) {
            let path = find_path(ctx.world, here, target_tile);
            tracing::debug!("agent {} pursuing {} over {} steps", ctx.agent.id(), target.id, path.len());
            ctx.plan.set_pursuit(target_tile, path);
        }

        let Some(next) = ctx.plan.next_waypoint() else {
            return Status::Failure;
        };
        let world = ctx.world;
        let direction = Direction::ALL
            .into_iter()
            .find(|&direction| world.same_tile(here.step(direction), next));

        match direction {
            Some(direction) if world.is_walkable_at(next) && ctx.agent.queue_input(direction) => {
                ctx.plan.pop_waypoint();
                Status::Success
            }
            _ => {
                ctx.plan.clear_pursuit();
                Status::Failure
            }
        }
    }
}

/// Tries up to four random directions and queues the first walkable one.
pub struct Wander;

impl Behavior<AiContext<'_>> for Wander {
    fn tick(&self, ctx: &mut AiContext) -> Status {
        for _ in 0..WANDER_ATTEMPTS {
            let direction = Direction::ALL[ctx.rng.gen_range(0..Direction::ALL.len())];
            if ctx.try_queue(direction) {
                tracing::trace!("agent {} wanders {}", ctx.agent.id(), direction);
                return Status::Success;
            }
        }
        Status::Failure
    }
}
