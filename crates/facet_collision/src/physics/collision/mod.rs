//! Collision geometry
//!
//! # Architecture
//!
//! - **Model Space Storage**: Colliders are stored in local coordinates
//! - **On-Demand Transformation**: Facets are mapped to world space only when a
//!   query needs them, producing a new collider rather than mutating the source
//! - **Coordinate Decoupling**: Shape geometry is separate from the entity transform
//!
//! # Module Organization
//!
//! - [`primitives`] - Facets, bounding extents and ray hits
//! - [`shape`] - Classified colliders and their builders
//! - [`transform`] - Local to world mapping
//! - [`narrow`] - Point/sphere against triangle tests

pub mod primitives;
pub mod shape;
pub mod transform;
pub mod narrow;

// Re-export commonly used types
pub use primitives::{Extents, Facet, RayHit};
pub use shape::{Collider, ShapeKind};
pub use transform::{transform_collider, transform_facet};
pub use narrow::{point_in_triangle, sphere_intersects_facet};
