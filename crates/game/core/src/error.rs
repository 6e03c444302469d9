//! Errors raised while building a tile grid.
//!
//! Grid queries never fail: coordinates wrap, so every lookup lands on a tile.
//! Only construction can be rejected.

/// Errors that occur when constructing a [`crate::TileGrid`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    /// Width or height is zero.
    #[error("grid dimensions must be non-zero (got {width}x{height})")]
    EmptyDimensions { width: u32, height: u32 },

    /// A row of an ASCII map has a different length than the first row.
    #[error("row {row} has {found} tiles, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// An ASCII map contains a symbol with no terrain mapping.
    #[error("unknown tile symbol {symbol:?} at row {row}, column {column}")]
    UnknownSymbol {
        symbol: char,
        row: usize,
        column: usize,
    },

    /// Raw tile data does not match the declared dimensions.
    #[error("expected {expected} tiles for the declared dimensions, got {found}")]
    TileCountMismatch { expected: usize, found: usize },
}
