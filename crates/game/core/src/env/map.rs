use rand::Rng;
use strum::{EnumIter, IntoEnumIterator};

use crate::error::GridError;
use crate::state::Position;

/// Read-only walkability oracle over a wrapping tile grid.
///
/// Implementations must accept raw, out-of-range coordinates and normalise
/// them before lookup; callers never wrap on their behalf. Both queries are
/// pure and expected to be O(1), since they run for every candidate tile of a
/// path search and every wander probe.
pub trait WorldOracle: Send + Sync {
    /// Returns `true` if an agent may stand on the tile at `(x, y)`.
    fn is_walkable(&self, x: i32, y: i32) -> bool;

    /// Normalises `(x, y)` into the grid. Idempotent.
    fn wrap_coords(&self, x: i32, y: i32) -> Position;

    /// Grid size, when the oracle knows it. Lets distance estimates take the
    /// short way around the seam.
    fn bounds(&self) -> Option<MapDimensions> {
        None
    }

    fn is_walkable_at(&self, position: Position) -> bool {
        self.is_walkable(position.x, position.y)
    }

    fn wrap(&self, position: Position) -> Position {
        self.wrap_coords(position.x, position.y)
    }

    /// Returns `true` if both positions name the same tile after wrapping.
    fn same_tile(&self, a: Position, b: Position) -> bool {
        self.wrap(a) == self.wrap(b)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapDimensions {
    pub width: u32,
    pub height: u32,
}

impl MapDimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn contains(&self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && position.x < self.width as i32
            && position.y < self.height as i32
    }

    pub fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Euclidean-modulo normalisation into `[0, width) x [0, height)`.
    pub fn wrap(&self, x: i32, y: i32) -> Position {
        Position::new(
            x.rem_euclid(self.width as i32),
            y.rem_euclid(self.height as i32),
        )
    }
}

/// Canonical terrain classes for tiles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "lowercase")]
pub enum TerrainKind {
    Grass,
    Dirt,
    Stone,
    Water,
    Tree,
    Wall,
    Flower,
    Sand,
}

impl TerrainKind {
    pub fn is_walkable(self) -> bool {
        !matches!(self, TerrainKind::Water | TerrainKind::Tree | TerrainKind::Wall)
    }

    /// Single-character symbol used by ASCII maps.
    pub fn symbol(self) -> char {
        match self {
            TerrainKind::Grass => '.',
            TerrainKind::Dirt => '#',
            TerrainKind::Stone => 'o',
            TerrainKind::Water => '~',
            TerrainKind::Tree => 'T',
            TerrainKind::Wall => 'W',
            TerrainKind::Flower => '*',
            TerrainKind::Sand => 's',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Self> {
        TerrainKind::iter().find(|kind| kind.symbol() == symbol)
    }
}

/// Toroidal grid of terrain tiles, stored row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileGrid {
    dimensions: MapDimensions,
    tiles: Vec<TerrainKind>,
}

impl TileGrid {
    /// Probes made by [`TileGrid::random_walkable_position`] before it gives up.
    const RANDOM_PROBES: usize = 100;

    /// Creates a grid with every tile set to `fill`.
    pub fn new(width: u32, height: u32, fill: TerrainKind) -> Result<Self, GridError> {
        let dimensions = Self::checked_dimensions(width, height)?;
        Ok(Self {
            dimensions,
            tiles: vec![fill; dimensions.area()],
        })
    }

    /// Creates a grid from row-major tile data.
    pub fn from_tiles(width: u32, height: u32, tiles: Vec<TerrainKind>) -> Result<Self, GridError> {
        let dimensions = Self::checked_dimensions(width, height)?;
        if tiles.len() != dimensions.area() {
            return Err(GridError::TileCountMismatch {
                expected: dimensions.area(),
                found: tiles.len(),
            });
        }
        Ok(Self { dimensions, tiles })
    }

    /// Parses an ASCII map, one row per line, using [`TerrainKind::symbol`].
    ///
    /// Blank lines are ignored so maps can carry leading/trailing newlines.
    pub fn from_ascii(source: &str) -> Result<Self, GridError> {
        let rows: Vec<&str> = source
            .lines()
            .map(|line| line.trim_end_matches('\r'))
            .filter(|line| !line.trim().is_empty())
            .collect();

        let expected = rows.first().map_or(0, |row| row.chars().count());
        let mut tiles = Vec::with_capacity(expected * rows.len());

        for (row, line) in rows.iter().enumerate() {
            let found = line.chars().count();
            if found != expected {
                return Err(GridError::RaggedRow {
                    row,
                    expected,
                    found,
                });
            }
            for (column, symbol) in line.chars().enumerate() {
                let kind = TerrainKind::from_symbol(symbol).ok_or(GridError::UnknownSymbol {
                    symbol,
                    row,
                    column,
                })?;
                tiles.push(kind);
            }
        }

        Self::from_tiles(expected as u32, rows.len() as u32, tiles)
    }

    fn checked_dimensions(width: u32, height: u32) -> Result<MapDimensions, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::EmptyDimensions { width, height });
        }
        Ok(MapDimensions::new(width, height))
    }

    pub fn dimensions(&self) -> MapDimensions {
        self.dimensions
    }

    fn index(&self, position: Position) -> usize {
        let wrapped = self.dimensions.wrap(position.x, position.y);
        wrapped.y as usize * self.dimensions.width as usize + wrapped.x as usize
    }

    /// Terrain at `(x, y)` after wrapping.
    pub fn tile(&self, x: i32, y: i32) -> TerrainKind {
        self.tiles[self.index(Position::new(x, y))]
    }

    /// Replaces the terrain at `(x, y)` after wrapping.
    pub fn set_tile(&mut self, x: i32, y: i32, kind: TerrainKind) {
        let index = self.index(Position::new(x, y));
        self.tiles[index] = kind;
    }

    pub fn fill(&mut self, kind: TerrainKind) {
        self.tiles.fill(kind);
    }

    /// Picks a random walkable tile, falling back to the grid centre.
    pub fn random_walkable_position<R: Rng + ?Sized>(&self, rng: &mut R) -> Position {
        for _ in 0..Self::RANDOM_PROBES {
            let x = rng.gen_range(0..self.dimensions.width) as i32;
            let y = rng.gen_range(0..self.dimensions.height) as i32;
            if self.is_walkable(x, y) {
                return Position::new(x, y);
            }
        }

        let centre = Position::new(
            (self.dimensions.width / 2) as i32,
            (self.dimensions.height / 2) as i32,
        );
        tracing::debug!(
            "no walkable tile found in {} probes, falling back to {:?}",
            Self::RANDOM_PROBES,
            centre
        );
        centre
    }

    /// Renders the grid back to its ASCII form.
    pub fn to_ascii(&self) -> String {
        let width = self.dimensions.width as usize;
        let mut out = String::with_capacity(self.tiles.len() + self.dimensions.height as usize);
        for row in self.tiles.chunks(width) {
            out.extend(row.iter().map(|kind| kind.symbol()));
            out.push('\n');
        }
        out
    }
}

impl WorldOracle for TileGrid {
    fn is_walkable(&self, x: i32, y: i32) -> bool {
        self.tile(x, y).is_walkable()
    }

    fn wrap_coords(&self, x: i32, y: i32) -> Position {
        self.dimensions.wrap(x, y)
    }

    fn bounds(&self) -> Option<MapDimensions> {
        Some(self.dimensions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn wrap_is_euclidean_and_idempotent() {
        let grid = TileGrid::new(4, 3, TerrainKind::Grass).unwrap();

        assert_eq!(grid.wrap_coords(-1, -1), Position::new(3, 2));
        assert_eq!(grid.wrap_coords(4, 3), Position::new(0, 0));
        assert_eq!(grid.wrap_coords(-9, 7), Position::new(3, 1));

        let once = grid.wrap_coords(-9, 7);
        assert_eq!(grid.wrap(once), once);
    }

    #[test]
    fn walkability_follows_terrain_and_wraps() {
        let mut grid = TileGrid::new(5, 5, TerrainKind::Grass).unwrap();
        grid.set_tile(4, 0, TerrainKind::Water);

        assert!(!grid.is_walkable(4, 0));
        assert!(!grid.is_walkable(-1, 0));
        assert!(!grid.is_walkable(9, 5));
        assert!(grid.is_walkable(0, 0));
    }

    #[test]
    fn terrain_walkability_table() {
        let blocked: Vec<_> = TerrainKind::iter().filter(|k| !k.is_walkable()).collect();
        assert_eq!(
            blocked,
            vec![TerrainKind::Water, TerrainKind::Tree, TerrainKind::Wall]
        );
    }

    #[test]
    fn ascii_maps_parse_and_render() {
        let grid = TileGrid::from_ascii("\n..W\n~s*\n").unwrap();

        assert_eq!(grid.dimensions(), MapDimensions::new(3, 2));
        assert_eq!(grid.tile(2, 0), TerrainKind::Wall);
        assert_eq!(grid.tile(0, 1), TerrainKind::Water);
        assert_eq!(grid.to_ascii(), "..W\n~s*\n");
    }

    #[test]
    fn ascii_maps_reject_bad_input() {
        assert_eq!(
            TileGrid::from_ascii("...\n..\n"),
            Err(GridError::RaggedRow {
                row: 1,
                expected: 3,
                found: 2
            })
        );
        assert_eq!(
            TileGrid::from_ascii("..?\n"),
            Err(GridError::UnknownSymbol {
                symbol: '?',
                row: 0,
                column: 2
            })
        );
        assert!(matches!(
            TileGrid::from_ascii(""),
            Err(GridError::EmptyDimensions { .. })
        ));
    }

    #[test]
    fn random_walkable_position_avoids_obstacles() {
        let mut grid = TileGrid::new(6, 6, TerrainKind::Wall).unwrap();
        grid.set_tile(2, 4, TerrainKind::Dirt);
        let mut rng = ChaCha8Rng::seed_from_u64(7);

        let position = grid.random_walkable_position(&mut rng);
        // Either the single open tile was found or the centre fallback kicked in.
        assert!(position == Position::new(2, 4) || position == Position::new(3, 3));
    }
}
