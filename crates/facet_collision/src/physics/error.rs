//! Error types for collider construction.
//!
//! Queries never fail: numerical degeneracies are absorbed where they occur.
//! These errors cover contract violations that must surface at build time.

/// Errors raised while building collision geometry.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum CollisionError {
    /// A collider needs at least one facet.
    #[error("collider must contain at least one facet")]
    EmptyCollider,

    /// Box and sphere builders need a positive, finite size.
    #[error("invalid collider dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Requested width.
        width: f32,
        /// Requested height.
        height: f32,
    },

    /// Level data contained a tile code with no geometry mapping.
    #[error("unknown tile code {tile} at row {row}, column {column}")]
    UnknownTile {
        /// The offending tile code.
        tile: u8,
        /// Row index in the tile grid.
        row: usize,
        /// Column index in the tile grid.
        column: usize,
    },

    /// Tile sizes must be positive and finite.
    #[error("invalid tile size: {width}x{height}")]
    InvalidTileSize {
        /// Tile width.
        width: f32,
        /// Tile height.
        height: f32,
    },
}
