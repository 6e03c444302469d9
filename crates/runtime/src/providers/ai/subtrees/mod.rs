//! Reusable behavior tree subtrees.
//!
//! Subtrees are organized into two layers:
//!
//! - **Patterns**: one gate plus one action, the smallest reusable units
//! - **Strategies**: complete trees choosing between patterns by priority
//!
//! # Architecture
//!
//! ```text
//! strategies::enemy()
//!     ├─ patterns::follow_goal()
//!     ├─ patterns::flee_when_detected()
//!     └─ patterns::wander_when_idle()
//! ```
//!
//! Selector child order is the priority order, so "flee before wander" is
//! expressed purely by where a pattern sits in its strategy.

pub mod patterns;
pub mod strategies;

use behavior_tree::{Behavior, Inverter, Selector, Sequence};

use super::context::AiContext;
use super::nodes::IsBusy;

/// Boxed node usable with a context of any lifetime.
///
/// All subtree functions return this type for consistency.
pub type AiNode = Box<dyn for<'a> Behavior<AiContext<'a>>>;

pub fn sequence(children: Vec<AiNode>) -> AiNode {
    Box::new(Sequence::new(children))
}

pub fn selector(children: Vec<AiNode>) -> AiNode {
    Box::new(Selector::new(children))
}

/// Succeeds when the agent may queue a new direction.
pub fn idle() -> AiNode {
    let busy: AiNode = Box::new(IsBusy);
    Box::new(Inverter::new(busy))
}
