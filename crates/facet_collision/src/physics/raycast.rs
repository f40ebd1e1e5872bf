//! Ray queries against facet lists
//!
//! Rays are unbounded in front of their origin; [`ray_cast_nearest`] applies
//! the length limit. The direction does not need to be normalised.

use crate::foundation::math::Vec3;
use crate::physics::collision::narrow::point_in_triangle;
use crate::physics::collision::{Facet, RayHit};

/// `|dot(direction, normal)|` at or below this counts as parallel to the plane.
pub const PARALLEL_EPSILON: f32 = 1e-6;

/// Intersects a single facet, returning the hit point.
pub fn ray_facet(origin: &Vec3, direction: &Vec3, facet: &Facet) -> Option<Vec3> {
    let normal = facet.normal();
    let denom = direction.dot(&normal);
    if denom.abs() <= PARALLEL_EPSILON {
        return None;
    }

    let t = (facet.origin() - origin).dot(&normal) / denom;
    if t < 0.0 {
        return None;
    }

    let point = origin + direction * t;
    let [a, b, c] = facet.vertices();
    point_in_triangle(&point, a, b, c).then_some(point)
}

/// Every facet the ray passes through, in facet order
pub fn ray_cast(origin: Vec3, direction: Vec3, facets: &[Facet]) -> Vec<RayHit> {
    let hits: Vec<RayHit> = facets
        .iter()
        .filter_map(|facet| {
            ray_facet(&origin, &direction, facet).map(|point| RayHit { facet: *facet, point })
        })
        .collect();
    log::trace!("ray from {:?} hit {} of {} facets", origin, hits.len(), facets.len());
    hits
}

/// Closest hit within `max_length` of the origin.
///
/// Distance ties keep the earliest hit in facet order.
pub fn ray_cast_nearest(origin: Vec3, direction: Vec3, facets: &[Facet], max_length: f32) -> Option<RayHit> {
    nearest_within(&origin, max_length, ray_cast(origin, direction, facets), |hit| hit)
}

/// Picks the closest item (by its hit point) no further than `max_length`.
pub(crate) fn nearest_within<T>(
    origin: &Vec3,
    max_length: f32,
    candidates: impl IntoIterator<Item = T>,
    hit_of: impl Fn(&T) -> &RayHit,
) -> Option<T> {
    let limit = max_length * max_length;
    let mut best: Option<(f32, T)> = None;

    for candidate in candidates {
        let distance = hit_of(&candidate).distance_squared_from(origin);
        if distance > limit {
            continue;
        }
        if best.as_ref().map_or(true, |(shortest, _)| distance < *shortest) {
            best = Some((distance, candidate));
        }
    }

    best.map(|(_, candidate)| candidate)
}
