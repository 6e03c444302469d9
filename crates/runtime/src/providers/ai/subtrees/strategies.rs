//! Complete decision trees for stock controllers.

use super::{AiNode, patterns, selector};

/// Enemy policy: goal, then flee from a detected player, then wander.
pub fn enemy() -> AiNode {
    selector(vec![
        patterns::follow_goal(),
        patterns::flee_when_detected(),
        patterns::wander_when_idle(),
    ])
}

/// Player auto-pilot: goal, then chase a visible target, then wander.
pub fn player_assist() -> AiNode {
    selector(vec![
        patterns::follow_goal(),
        patterns::pursue_visible_target(),
        patterns::wander_when_idle(),
    ])
}
