//! Basic if-then patterns.
//!
//! Each pattern pairs a gate with one action. Patterns follow the
//! `action_when_condition()` naming convention where a condition applies.

use crate::providers::ai::nodes::{
    FleeFromPlayer, HasGoal, PlayerDetected, PursueTarget, ServiceGoal, TargetVisible, Wander,
};

use super::{AiNode, idle, sequence};

/// Service the assigned goal, if any.
///
/// Not gated on the agent being idle: the scheduler's own readiness check
/// holds the next step back while the agent moves, and the goal still has
/// to claim priority over lower branches meanwhile.
pub fn follow_goal() -> AiNode {
    sequence(vec![Box::new(HasGoal), Box::new(ServiceGoal)])
}

/// Step away from the player when it is seen or smelled.
pub fn flee_when_detected() -> AiNode {
    sequence(vec![idle(), Box::new(PlayerDetected), Box::new(FleeFromPlayer)])
}

/// Walk toward the target while it is in view.
pub fn pursue_visible_target() -> AiNode {
    sequence(vec![idle(), Box::new(TargetVisible), Box::new(PursueTarget)])
}

/// Random step when nothing else applies.
pub fn wander_when_idle() -> AiNode {
    sequence(vec![idle(), Box::new(Wander)])
}
