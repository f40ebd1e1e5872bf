//! Collision world: one arena of bodies per simulation session
//!
//! The world owns every body taking part in scene-wide queries. Systems
//! receive it by reference each tick; there is no global "current level".

use slotmap::{new_key_type, SlotMap};

use crate::foundation::math::Vec3;
use crate::physics::body::{Body, CollisionBody};
use crate::physics::broad_phase::overlaps;
use crate::physics::collision::RayHit;
use crate::physics::raycast::{nearest_within, ray_cast};

new_key_type! {
    /// Handle to a body stored in a [`CollisionWorld`]
    pub struct BodyId;
}

/// A ray hit attributed to the body that was struck
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyHit {
    /// Body owning the struck facet
    pub body: BodyId,
    /// Facet and intersection point, world space
    pub hit: RayHit,
}

/// Arena of collision bodies
#[derive(Debug, Default)]
pub struct CollisionWorld {
    bodies: SlotMap<BodyId, Body>,
}

impl CollisionWorld {
    /// Create an empty world
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a body, returning its handle
    pub fn insert(&mut self, body: Body) -> BodyId {
        let name = body.name.clone();
        let id = self.bodies.insert(body);
        log::debug!("inserted body '{}' as {:?}", name, id);
        id
    }

    /// Remove a body, returning it if it was present
    pub fn remove(&mut self, id: BodyId) -> Option<Body> {
        let body = self.bodies.remove(id);
        if let Some(body) = &body {
            log::debug!("removed body '{}' ({:?})", body.name, id);
        }
        body
    }

    /// Look up a body
    pub fn get(&self, id: BodyId) -> Option<&Body> {
        self.bodies.get(id)
    }

    /// Look up a body mutably (e.g. to apply a resolved velocity)
    pub fn get_mut(&mut self, id: BodyId) -> Option<&mut Body> {
        self.bodies.get_mut(id)
    }

    /// Number of bodies
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    /// True when the world holds no bodies
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Iterate over all bodies
    pub fn iter(&self) -> impl Iterator<Item = (BodyId, &Body)> {
        self.bodies.iter()
    }

    /// Every facet hit by the ray across all ray-eligible bodies.
    ///
    /// Bodies flagged `skip_raycast` are ignored; the rest are mapped to world
    /// space before testing.
    pub fn ray_cast(&self, origin: Vec3, direction: Vec3) -> Vec<BodyHit> {
        let mut hits = Vec::new();
        for (id, body) in &self.bodies {
            if body.collider.as_ref().map_or(true, |c| c.skip_raycast) {
                continue;
            }
            let Some(world) = body.world_collider() else {
                continue;
            };
            hits.extend(
                ray_cast(origin, direction, world.facets())
                    .into_iter()
                    .map(|hit| BodyHit { body: id, hit }),
            );
        }
        hits
    }

    /// Closest scene-wide hit within `max_length`
    pub fn ray_cast_nearest(&self, origin: Vec3, direction: Vec3, max_length: f32) -> Option<BodyHit> {
        nearest_within(&origin, max_length, self.ray_cast(origin, direction), |hit| &hit.hit)
    }

    /// Bodies whose collider overlaps `id`'s collider (same-kind tests only)
    pub fn overlapping(&self, id: BodyId) -> Vec<BodyId> {
        let Some(subject) = self.bodies.get(id) else {
            return Vec::new();
        };
        self.bodies
            .iter()
            .filter(|(other_id, other)| *other_id != id && overlaps(subject, *other))
            .map(|(other_id, _)| other_id)
            .collect()
    }
}
