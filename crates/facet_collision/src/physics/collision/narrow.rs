//! Narrow-phase tests against single triangles
//!
//! The sphere/facet test is the union of three volumes: the slab over the
//! triangle face, a sphere around each vertex, and a cylinder around each edge.
//! Together they form the triangle's Minkowski sum with the sphere (a rounded
//! triangle).

use super::primitives::Facet;
use crate::foundation::math::Vec3;

/// Off-plane tolerance for point-in-triangle, compared against the
/// unnormalised `dot(p - a, (b - a) x (c - a))`.
pub const COPLANAR_EPSILON: f32 = 1e-2;

/// Triangles whose `|(b - a) x (c - a)|^2` is at or below this have no area.
pub const DEGENERATE_AREA_EPSILON: f32 = 1e-12;

/// Slack on barycentric weights so points on an edge stay inside.
pub const BARYCENTRIC_TOLERANCE: f32 = 1e-6;

/// Inclusive test for `p` lying inside triangle `(a, b, c)`.
///
/// Points further than [`COPLANAR_EPSILON`] off the plane are outside, and so is
/// every point of a zero-area triangle. The barycentric weights are signed
/// against the triangle normal, so a point outside an edge gets a negative
/// weight for the opposite corner.
pub fn point_in_triangle(p: &Vec3, a: &Vec3, b: &Vec3, c: &Vec3) -> bool {
    let n = (b - a).cross(&(c - a));
    let area_sq = n.norm_squared();
    if area_sq <= DEGENERATE_AREA_EPSILON {
        return false;
    }
    if (p - a).dot(&n).abs() > COPLANAR_EPSILON {
        return false;
    }

    let weight_a = (c - b).cross(&(p - b)).dot(&n) / area_sq;
    let weight_b = (a - c).cross(&(p - c)).dot(&n) / area_sq;
    let weight_c = (b - a).cross(&(p - a)).dot(&n) / area_sq;

    weight_a >= -BARYCENTRIC_TOLERANCE
        && weight_b >= -BARYCENTRIC_TOLERANCE
        && weight_c >= -BARYCENTRIC_TOLERANCE
}

/// True if any corner lies within `radius` of `center`
pub fn sphere_touches_vertices(center: &Vec3, radius: f32, vertices: &[Vec3; 3]) -> bool {
    let radius_sq = radius * radius;
    vertices
        .iter()
        .any(|v| (center - v).norm_squared() <= radius_sq)
}

/// True if the perpendicular foot of `center` on segment `ab` falls strictly
/// between the endpoints and lies within `radius`.
///
/// Endpoints are left to [`sphere_touches_vertices`]. A zero-length edge never
/// touches.
pub fn sphere_touches_edge(center: &Vec3, radius: f32, a: &Vec3, b: &Vec3) -> bool {
    let ab = b - a;
    let length_sq = ab.norm_squared();
    if length_sq <= DEGENERATE_AREA_EPSILON {
        return false;
    }

    let t = (center - a).dot(&ab) / length_sq;
    if t <= 0.0 || t >= 1.0 {
        return false;
    }

    let foot = a + ab * t;
    (center - foot).norm_squared() <= radius * radius
}

/// Edge test over all three edges of a triangle
pub fn sphere_touches_edges(center: &Vec3, radius: f32, vertices: &[Vec3; 3]) -> bool {
    let [a, b, c] = vertices;
    sphere_touches_edge(center, radius, a, b)
        || sphere_touches_edge(center, radius, b, c)
        || sphere_touches_edge(center, radius, c, a)
}

/// Sphere against the rounded volume of a facet.
///
/// Rejects early when the sphere cannot reach the facet plane, then accepts on
/// the face, a vertex or an edge.
pub fn sphere_intersects_facet(center: &Vec3, radius: f32, facet: &Facet) -> bool {
    let normal = facet.normal();
    let to_plane = normal * (center - facet.origin()).dot(&normal);
    if to_plane.norm_squared() > radius * radius {
        return false;
    }

    let vertices = facet.vertices();
    let [a, b, c] = vertices;
    let projected = center - to_plane;

    point_in_triangle(&projected, a, b, c)
        || sphere_touches_vertices(center, radius, vertices)
        || sphere_touches_edges(center, radius, vertices)
}
