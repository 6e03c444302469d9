//! Game-specific behavior tree nodes.
//!
//! This module contains concrete implementations of behavior tree nodes
//! over [`AiContext`](super::AiContext). Nodes are divided into:
//!
//! - `conditions`: Nodes that check agent, plan or perception state
//! - `actions`: Nodes that queue directions or drive the task scheduler

pub mod actions;
pub mod conditions;

pub use actions::*;
pub use conditions::*;
