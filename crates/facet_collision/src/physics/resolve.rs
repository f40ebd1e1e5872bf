//! Velocity resolution against a facet list
//!
//! A greedy, per-facet correction: facets are visited in slice order and each
//! one sees the velocity as already trimmed by the facets before it. Reordering
//! the slice can change the result, so callers that need reproducible movement
//! must keep their facet order stable (the tile level emits facets row by row,
//! left to right).
//!
//! Callers normally resolve one axis at a time (horizontal, then vertical) to
//! avoid catching on the seams between neighbouring facets.

use crate::foundation::math::Vec3;
use crate::physics::collision::narrow::sphere_intersects_facet;
use crate::physics::collision::Facet;

/// Trims `velocity` so a sphere of `radius` at `position` does not pass into
/// any of `facets`.
///
/// For every facet the sphere blocks, the velocity component along the facet
/// normal is removed and the remainder is rescaled to the speed it had before
/// the step, which keeps the sphere moving at full speed along slopes. A fully
/// stopped velocity stays zero.
pub fn resolve_velocity(position: Vec3, radius: f32, facets: &[Facet], velocity: Vec3) -> Vec3 {
    let mut velocity = velocity;

    for (index, facet) in facets.iter().enumerate() {
        if !facet_blocks(&position, radius, &velocity, facet) {
            continue;
        }

        let normal = facet.normal();
        let preserve = velocity.norm_squared();
        velocity -= normal * velocity.dot(&normal);

        let mag = velocity.norm_squared();
        if mag > 0.0 {
            velocity *= (preserve / mag).sqrt();
        }

        log::trace!("facet {} blocked movement, velocity now {:?}", index, velocity);
    }

    velocity
}

/// The sphere collides at the tentative position, or its straight path there
/// crosses the facet plane inside the facet's rounded volume.
fn facet_blocks(position: &Vec3, radius: f32, velocity: &Vec3, facet: &Facet) -> bool {
    let tentative = position + velocity;
    if sphere_intersects_facet(&tentative, radius, facet) {
        return true;
    }

    let start = facet.signed_distance(position);
    let end = facet.signed_distance(&tentative);
    if start * end >= 0.0 {
        return false;
    }

    let crossing = position + velocity * (start / (start - end));
    sphere_intersects_facet(&crossing, radius, facet)
}
