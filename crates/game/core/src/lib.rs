//! Tile world and agent movement types shared by the AI runtime and drivers.
//!
//! `game-core` defines the toroidal tile grid, the [`WorldOracle`] contract the
//! decision layer queries, and the per-agent movement state. Agent positions
//! are only ever changed by [`Agent::advance`]; everything else expresses
//! intent through [`Agent::queue_input`].
pub mod config;
pub mod env;
pub mod error;
pub mod state;

pub use config::GameConfig;
pub use env::{MapDimensions, TerrainKind, TileGrid, WorldOracle};
pub use error::GridError;
pub use state::{Agent, AgentKind, Agents, Direction, EntityId, InputQueue, MovementState, Position};
