//! # Facet Collision
//!
//! Triangle-facet collision geometry for arcade movement.
//!
//! ## Features
//!
//! - **Facets and Colliders**: Triangles with cached normals, classified as mesh, sphere or box
//! - **Movement Resolution**: Slides a sphere along walls and slopes without losing speed
//! - **Ray Queries**: All hits or the nearest within a length, per collider or scene-wide
//! - **Broad Phase**: Same-kind sphere/sphere and box/box overlap
//! - **Tile Levels**: Builds level facets from a grid of tile codes
//!
//! ## Quick Start
//!
//! ```rust
//! use facet_collision::prelude::*;
//!
//! let level = TileMap::from_config(&LevelConfig::default()).unwrap();
//! let facets = level.facets();
//!
//! let position = Vec3::new(40.0, 200.0, 0.0);
//! let velocity = resolve_velocity(position, 7.5, &facets, Vec3::new(0.0, 6.0, 0.0));
//! assert!(velocity.y <= 6.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::cast_precision_loss)]

pub mod config;
pub mod foundation;
pub mod level;
pub mod physics;

/// Common imports for crate users
pub mod prelude {
    pub use crate::{
        config::{Config, ConfigError, ConfigFormat},
        foundation::math::{Mat4, Transform, Vec2, Vec3},
        level::{LevelConfig, TileKind, TileMap},
        physics::{
            distance, distance_squared, overlaps, ray_cast, ray_cast_nearest, resolve_velocity, Body, BodyHit,
            BodyId, Collider, CollisionBody, CollisionError, CollisionWorld, Extents, Facet, RayHit, ShapeKind,
        },
    };
}
