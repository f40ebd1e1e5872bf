//! Colliders: classified facet collections with cached bounds
//!
//! A [`Collider`] is stored in model space and mapped to world space on demand
//! (see [`super::transform`]). `Mesh` colliders carry real triangle geometry for
//! narrow-phase work; `Sphere` and `Box` colliders are four-facet rectangles
//! whose [`Extents`] drive the broad-phase tests.

use std::sync::Arc;

use super::primitives::{Extents, Facet};
use crate::physics::error::CollisionError;

/// Shape classification used by broad-phase dispatch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ShapeKind {
    /// Per-triangle geometry for narrow-phase tests
    #[default]
    Mesh,
    /// Bounding sphere; radius is half the X extent
    Sphere,
    /// Axis-aligned bounding box
    Box,
}

/// Ordered facets plus derived bounds and a shape tag.
///
/// Facets are shared behind an `Arc` so many entity instances can alias one
/// source mesh; transforming a collider always yields a new facet list.
#[derive(Debug, Clone)]
pub struct Collider {
    facets: Arc<[Facet]>,
    kind: ShapeKind,
    bounds: Extents,
    /// Exclude from scene-wide ray queries (e.g. the player's own body)
    pub skip_raycast: bool,
}

impl Collider {
    /// Builds a collider of the given kind.
    ///
    /// Fails with [`CollisionError::EmptyCollider`] when `facets` is empty.
    pub fn new(facets: impl Into<Arc<[Facet]>>, kind: ShapeKind) -> Result<Self, CollisionError> {
        let facets = facets.into();
        let bounds = Extents::from_facets(&facets).ok_or(CollisionError::EmptyCollider)?;
        Ok(Self {
            facets,
            kind,
            bounds,
            skip_raycast: false,
        })
    }

    /// Builds a `Mesh` collider
    pub fn mesh(facets: impl Into<Arc<[Facet]>>) -> Result<Self, CollisionError> {
        Self::new(facets, ShapeKind::Mesh)
    }

    /// A `w x h` rectangle centred on the origin, tagged `Box`.
    ///
    /// Two horizontal facets sit at `y = +-h/2` and two vertical facets at
    /// `x = +-w/2`.
    pub fn bounding_box(width: f32, height: f32) -> Result<Self, CollisionError> {
        if !(width > 0.0 && height > 0.0 && width.is_finite() && height.is_finite()) {
            return Err(CollisionError::InvalidDimensions { width, height });
        }
        let facets = vec![
            Facet::horizontal(0.0, -height / 2.0, width),
            Facet::horizontal(0.0, height / 2.0, width),
            Facet::vertical(-width / 2.0, 0.0, height),
            Facet::vertical(width / 2.0, 0.0, height),
        ];
        Self::new(facets, ShapeKind::Box)
    }

    /// A sphere of `radius`, represented by its `2r x 2r` bounding rectangle
    pub fn bounding_sphere(radius: f32) -> Result<Self, CollisionError> {
        let mut collider = Self::bounding_box(radius * 2.0, radius * 2.0)?;
        collider.kind = ShapeKind::Sphere;
        Ok(collider)
    }

    /// Builder-style toggle for [`Self::skip_raycast`]
    #[must_use]
    pub fn with_skip_raycast(mut self, skip: bool) -> Self {
        self.skip_raycast = skip;
        self
    }

    /// Re-wraps transformed facets with freshly computed bounds.
    ///
    /// The facet count never changes under a transform, so the bounds of a
    /// valid collider always exist.
    pub(crate) fn rebuilt(&self, facets: Arc<[Facet]>) -> Self {
        let bounds = Extents::from_facets(&facets).unwrap_or(self.bounds);
        Self {
            facets,
            kind: self.kind,
            bounds,
            skip_raycast: self.skip_raycast,
        }
    }

    /// The facets in their stored order
    pub fn facets(&self) -> &[Facet] {
        &self.facets
    }

    /// Shape tag
    pub const fn kind(&self) -> ShapeKind {
        self.kind
    }

    /// Cached bounding box
    pub const fn bounds(&self) -> &Extents {
        &self.bounds
    }

    /// Radius used for sphere/sphere overlap: half the X extent
    pub fn radius(&self) -> f32 {
        self.bounds.half_width()
    }
}
