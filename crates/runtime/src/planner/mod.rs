//! Goal decomposition and step-wise task execution.
//!
//! A [`Goal`] is turned into an ordered list of [`Task`]s by the
//! [`GoalPlanner`], once, when the goal is taken up. The [`TaskScheduler`]
//! then runs at most one step of each agent's queue per call, so a plan
//! advances across many ticks without ever blocking one.

mod goal;
mod scheduler;
mod task;

pub use goal::{Goal, GoalOutcome, GoalPlanner};
pub use scheduler::{StepOutcome, TaskScheduler};
pub use task::{CanExecuteFn, ExecuteFn, Task};
