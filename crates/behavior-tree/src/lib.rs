//! Lightweight behavior tree library for tick-driven agents.
//!
//! This library provides a minimal, deterministic behavior tree implementation
//! for agents that re-decide on a fixed cadence rather than every frame.
//!
//! - **Stateless composites**: Every tick re-evaluates the tree from its root
//! - **No Running state**: Nodes either succeed or fail within the call
//! - **Declaration order**: Children are always visited left to right
//! - **Zero dependencies**: Pure Rust with no external crates
//!
//! # Architecture
//!
//! - [`Behavior`]: Core trait for all nodes
//! - [`Status`]: Success or Failure (no Running state)
//! - Leaf nodes: [`Condition`], [`Action`]
//! - Composite nodes: [`Sequence`], [`Selector`]
//! - Decorator nodes: [`Inverter`]

pub mod behavior;
pub mod composite;
pub mod decorator;
pub mod leaf;
pub mod status;

// Re-export core types for ergonomic API
pub use behavior::Behavior;
pub use composite::{Selector, Sequence};
pub use decorator::Inverter;
pub use leaf::{Action, Condition};
pub use status::Status;
