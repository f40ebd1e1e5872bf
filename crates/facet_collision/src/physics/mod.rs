//! Physics module for collision detection and response
//!
//! Provides triangle-facet geometry, velocity resolution for moving spheres,
//! ray queries and bounding-volume overlap. Every query takes the geometry it
//! works on as an argument; scene-wide queries go through a [`CollisionWorld`]
//! owned by the caller.

pub mod body;
pub mod broad_phase;
pub mod collision;
pub mod error;
pub mod raycast;
pub mod resolve;
pub mod world;

pub use body::{Body, CollisionBody};
pub use broad_phase::{colliders_overlap, distance, distance_squared, overlaps};
pub use collision::{Collider, Extents, Facet, RayHit, ShapeKind};
pub use error::CollisionError;
pub use raycast::{ray_cast, ray_cast_nearest};
pub use resolve::resolve_velocity;
pub use world::{BodyHit, BodyId, CollisionWorld};
