//! Autonomous agent decision layer.
//!
//! The runtime turns a read-only [`game_core::WorldOracle`] and a set of
//! agents into per-tick movement intents:
//!
//! - [`pathfinding`]: A* over the 4-connected tile grid
//! - [`perception`]: pluggable senses (vision cone, smell radius)
//! - [`planner`]: goal decomposition into resumable tasks and the per-agent
//!   task scheduler
//! - [`providers::ai`]: behavior-tree driven controllers for enemies and the
//!   player auto-pilot
//!
//! Everything here is synchronous. A controller update runs perception, one
//! tree evaluation and at most one scheduler step before returning, and the
//! only effect on an agent is a queued direction.
pub mod config;
pub mod pathfinding;
pub mod perception;
pub mod planner;
pub mod providers;

pub use config::{AiConfig, StallPolicy};
pub use pathfinding::find_path;
pub use perception::{Perception, PerceptionSystem, Sense, SmellSense, Target, VisionSense};
pub use planner::{Goal, GoalOutcome, GoalPlanner, StepOutcome, Task, TaskScheduler};
pub use providers::ai::{AiContext, AiController, AiNode, PlanState, TickInputs};
