//! Condition nodes for AI behavior trees.
//!
//! Condition nodes check the context and return Success or Failure.
//! They never queue inputs or touch the scheduler.

use behavior_tree::{Behavior, Status};

use crate::providers::ai::AiContext;

/// Succeeds while the agent is mid-step or holds a queued input.
///
/// Wrapped in an [`Inverter`](behavior_tree::Inverter) it gates every
/// movement-producing branch, so a controller never queues while busy.
pub struct IsBusy;

impl Behavior<AiContext<'_>> for IsBusy {
    fn tick(&self, ctx: &mut AiContext) -> Status {
        ctx.agent.is_busy().into()
    }
}

/// Succeeds when the controller holds a goal.
pub struct HasGoal;

impl Behavior<AiContext<'_>> for HasGoal {
    fn tick(&self, ctx: &mut AiContext) -> Status {
        ctx.plan.goal().is_some().into()
    }
}

/// Succeeds when the player was seen or smelled this evaluation.
pub struct PlayerDetected;

impl Behavior<AiContext<'_>> for PlayerDetected {
    fn tick(&self, ctx: &mut AiContext) -> Status {
        ctx.player_detected().into()
    }
}

/// Succeeds when the pursuit target is inside the vision cone.
pub struct TargetVisible;

impl Behavior<AiContext<'_>> for TargetVisible {
    fn tick(&self, ctx: &mut AiContext) -> Status {
        ctx.target_visible().into()
    }
}
