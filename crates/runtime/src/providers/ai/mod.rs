//! Behavior-tree driven agent controllers.
//!
//! An [`AiController`] owns the planning state of one agent and a behavior
//! tree. Every tick it accumulates time; once the decision interval has
//! passed it perceives, builds an [`AiContext`] and evaluates its tree from
//! the root. Leaves either queue a direction on the agent or drive the
//! agent's task queue one step forward.
//!
//! # Core Components
//!
//! - [`AiController`]: per-agent decision loop, stock enemy and player-assist trees
//! - [`AiContext`]: blackboard handed to every node during one evaluation
//! - [`PlanState`]: the controller's goal, pursuit path and goal outcome
//! - [`nodes`]: conditions and actions over [`AiContext`]
//! - [`subtrees`]: reusable patterns and full strategies

pub mod context;
pub mod controller;
pub mod nodes;
pub mod subtrees;

pub use context::{AiContext, PlanState, TickInputs};
pub use controller::AiController;
pub use subtrees::AiNode;
