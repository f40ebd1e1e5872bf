//! Capability interface for anything that takes part in collision queries
//!
//! An entity exposes an optional transform and an optional collider. Queries
//! resolve both once per call instead of inspecting the entity type.

use crate::foundation::math::{Transform, Vec3};
use crate::physics::collision::Collider;

/// Something with (maybe) a placement and (maybe) collision geometry
pub trait CollisionBody {
    /// World placement, if the entity has one
    fn transform(&self) -> Option<&Transform>;

    /// Model-space collider, if the entity has one
    fn collider(&self) -> Option<&Collider>;

    /// World position, if the entity has one
    fn position(&self) -> Option<Vec3> {
        self.transform().map(|t| t.position)
    }

    /// Collider mapped to world space; an entity without a transform is
    /// already in world coordinates.
    fn world_collider(&self) -> Option<Collider> {
        let collider = self.collider()?;
        Some(match self.transform() {
            Some(transform) => collider.to_world_space(transform),
            None => collider.clone(),
        })
    }
}

/// Plain entity record stored by [`crate::physics::CollisionWorld`]
#[derive(Debug, Clone, Default)]
pub struct Body {
    /// Debug label
    pub name: String,
    /// Placement; `None` for geometry authored in world space
    pub transform: Option<Transform>,
    /// Collision geometry in model space
    pub collider: Option<Collider>,
}

impl Body {
    /// Creates an empty, named body
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Static geometry already in world coordinates (e.g. level facets)
    pub fn fixed(name: impl Into<String>, collider: Collider) -> Self {
        Self::new(name).with_collider(collider)
    }

    /// Set the placement
    #[must_use]
    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = Some(transform);
        self
    }

    /// Set the collider
    #[must_use]
    pub fn with_collider(mut self, collider: Collider) -> Self {
        self.collider = Some(collider);
        self
    }
}

impl CollisionBody for Body {
    fn transform(&self) -> Option<&Transform> {
        self.transform.as_ref()
    }

    fn collider(&self) -> Option<&Collider> {
        self.collider.as_ref()
    }
}
