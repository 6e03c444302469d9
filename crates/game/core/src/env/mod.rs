//! Static world queries consumed by the decision layer.
//!
//! The AI runtime never owns or mutates the world. It only sees it through
//! the [`WorldOracle`] trait, which [`TileGrid`] implements for the toroidal
//! tile map used by the game.
mod map;

pub use map::{MapDimensions, TerrainKind, TileGrid, WorldOracle};
