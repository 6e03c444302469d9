//! Agent state: identifiers, grid positions, movement and intent queues.
mod agent;
mod common;
mod registry;

pub use agent::{Agent, AgentKind, InputQueue, MovementState};
pub use common::{Direction, EntityId, Position};
pub use registry::Agents;
