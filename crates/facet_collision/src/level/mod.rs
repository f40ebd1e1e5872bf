//! Tile levels
//!
//! A level is a grid of tile codes. [`TileMap`] turns the grid into the facet
//! list the resolver and ray queries consume, emitting only the surfaces that
//! can actually be touched: faces shared with a covering neighbour are culled.
//!
//! Facets come out row by row, left to right, so the resolver always sees them
//! in the same order for the same level.

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::foundation::math::{Vec2, Vec3};
use crate::physics::collision::{Collider, Facet};
use crate::physics::error::CollisionError;

/// Level description as stored on disk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelConfig {
    /// Tile width in world units
    pub tile_width: f32,
    /// Tile height in world units
    pub tile_height: f32,
    /// Centre of the top-left tile
    pub origin: [f32; 2],
    /// Tile codes, one row per entry (top row first)
    pub tiles: Vec<Vec<u8>>,
}

impl Default for LevelConfig {
    fn default() -> Self {
        Self {
            tile_width: 16.0,
            tile_height: 16.0,
            // Bottom row sits on the lower edge of a 400 unit tall view
            origin: [8.0, 312.0],
            tiles: vec![
                vec![0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
                vec![0, 0, 0, 0, 0, 0, 0, 0, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
                vec![0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 3, 3, 0, 0, 0, 1, 3, 3, 2, 0, 0],
                vec![0, 0, 0, 3, 2, 0, 0, 0, 0, 0, 0, 3, 0, 3, 0, 0, 3, 0, 0, 1, 3, 3, 3, 3, 2, 0],
                vec![1, 0, 0, 3, 3, 3, 2, 0, 0, 0, 3, 3, 3, 3, 3, 3, 3, 0, 1, 3, 3, 3, 3, 3, 3, 2],
                vec![3, 0, 0, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3],
            ],
        }
    }
}

impl Config for LevelConfig {}

/// What a tile code stands for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TileKind {
    /// Nothing to collide with
    #[default]
    Empty,
    /// Diagonal rising to the right (`/`), solid below the diagonal
    RisingSlope,
    /// Diagonal falling to the right (`\`), solid below the diagonal
    FallingSlope,
    /// Fully solid block
    Solid,
}

impl TileKind {
    /// The tile's top or bottom edge is filled
    fn covers_vertically(self) -> bool {
        self != Self::Empty
    }

    /// The tile's right edge is filled, hiding the left wall of the tile after it
    fn covers_right_edge(self) -> bool {
        matches!(self, Self::RisingSlope | Self::Solid)
    }

    /// The tile's left edge is filled, hiding the right wall of the tile before it
    fn covers_left_edge(self) -> bool {
        matches!(self, Self::FallingSlope | Self::Solid)
    }
}

impl TryFrom<u8> for TileKind {
    type Error = u8;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::Empty),
            1 => Ok(Self::RisingSlope),
            2 => Ok(Self::FallingSlope),
            3 => Ok(Self::Solid),
            other => Err(other),
        }
    }
}

/// Validated tile grid
#[derive(Debug, Clone, PartialEq)]
pub struct TileMap {
    tile_size: Vec2,
    origin: Vec2,
    tiles: Vec<Vec<TileKind>>,
}

impl TileMap {
    /// Validate a level description.
    ///
    /// Fails on unknown tile codes and on non-positive or non-finite tile sizes.
    pub fn from_config(config: &LevelConfig) -> Result<Self, CollisionError> {
        let (width, height) = (config.tile_width, config.tile_height);
        if !(width > 0.0 && height > 0.0 && width.is_finite() && height.is_finite()) {
            return Err(CollisionError::InvalidTileSize { width, height });
        }

        let tiles = config
            .tiles
            .iter()
            .enumerate()
            .map(|(row, codes)| {
                codes
                    .iter()
                    .enumerate()
                    .map(|(column, &code)| {
                        TileKind::try_from(code).map_err(|tile| CollisionError::UnknownTile { tile, row, column })
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            tile_size: Vec2::new(width, height),
            origin: Vec2::new(config.origin[0], config.origin[1]),
            tiles,
        })
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.tiles.len()
    }

    /// Tile at a grid position; anything outside the grid is empty
    pub fn kind(&self, row: usize, column: usize) -> TileKind {
        self.tiles
            .get(row)
            .and_then(|cells| cells.get(column))
            .copied()
            .unwrap_or_default()
    }

    /// World-space centre of a tile
    pub fn tile_center(&self, row: usize, column: usize) -> Vec2 {
        self.origin + Vec2::new(column as f32 * self.tile_size.x, row as f32 * self.tile_size.y)
    }

    fn neighbour(&self, row: usize, column: usize, d_row: isize, d_column: isize) -> TileKind {
        match (row.checked_add_signed(d_row), column.checked_add_signed(d_column)) {
            (Some(r), Some(c)) => self.kind(r, c),
            _ => TileKind::Empty,
        }
    }

    /// Collision facets for the whole grid, row by row
    pub fn facets(&self) -> Vec<Facet> {
        let (w, h) = (self.tile_size.x, self.tile_size.y);
        let mut facets = Vec::new();

        for (row, cells) in self.tiles.iter().enumerate() {
            for (column, &kind) in cells.iter().enumerate() {
                let center = self.tile_center(row, column);
                let (x, y) = (center.x, center.y);

                match kind {
                    TileKind::Empty => {}
                    TileKind::RisingSlope => facets.push(Facet::new(
                        Vec3::new(x, y, 0.0),
                        Vec3::new(x, y, -w),
                        Vec3::new(x + w / 2.0, y - h / 2.0, 0.0),
                        Vec3::new(x - w / 2.0, y + h / 2.0, 0.0),
                    )),
                    TileKind::FallingSlope => facets.push(Facet::new(
                        Vec3::new(x, y, 0.0),
                        Vec3::new(x, y, -w),
                        Vec3::new(x + w / 2.0, y + h / 2.0, 0.0),
                        Vec3::new(x - w / 2.0, y - h / 2.0, 0.0),
                    )),
                    TileKind::Solid => {
                        if !self.neighbour(row, column, -1, 0).covers_vertically() {
                            facets.push(Facet::horizontal(x, y - h / 2.0, w));
                        }
                        if !self.neighbour(row, column, 1, 0).covers_vertically() {
                            facets.push(Facet::horizontal(x, y + h / 2.0, w));
                        }
                        if !self.neighbour(row, column, 0, -1).covers_right_edge() {
                            facets.push(Facet::vertical(x - w / 2.0, y, h));
                        }
                        if !self.neighbour(row, column, 0, 1).covers_left_edge() {
                            facets.push(Facet::vertical(x + w / 2.0, y, h));
                        }
                    }
                }
            }
        }

        log::debug!(
            "built {} facets from {}x{} tile level",
            facets.len(),
            self.rows(),
            self.tiles.iter().map(Vec::len).max().unwrap_or(0)
        );
        facets
    }

    /// The level geometry as a single mesh collider.
    ///
    /// A level with no solid tiles has no facets and is rejected.
    pub fn collider(&self) -> Result<Collider, CollisionError> {
        Collider::mesh(self.facets())
    }
}
