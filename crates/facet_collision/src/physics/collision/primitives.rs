//! Primitive collision geometry
//!
//! Provides the oriented triangle ([`Facet`]) that every narrow-phase test works
//! on, the axis-aligned [`Extents`] cached per collider, and the [`RayHit`]
//! produced by ray queries.

use crate::foundation::math::{max_components, min_components, Vec3, Vec3Ext};

/// An oriented triangle with a cached plane anchor and unit normal.
///
/// The normal is derived once from the winding `(b - a) x (c - a)` and never
/// recomputed, so a facet is immutable after construction. The origin is a
/// caller-chosen point used as the plane reference for distance tests; it is
/// not required to be the centroid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Facet {
    origin: Vec3,
    normal: Vec3,
    vertices: [Vec3; 3],
}

impl Facet {
    /// Creates a facet anchored at `origin` with vertices `a`, `b`, `c`.
    ///
    /// Collinear vertices produce a zero normal; such a facet never reports a
    /// ray hit and only collides through its vertex/edge rounding.
    pub fn new(origin: Vec3, a: Vec3, b: Vec3, c: Vec3) -> Self {
        let normal = triangle_normal(&a, &b, &c);
        if normal == Vec3::zeros() {
            log::warn!("degenerate facet at {:?}: vertices are collinear", origin);
        }
        Self {
            origin,
            normal,
            vertices: [a, b, c],
        }
    }

    /// Assembles a facet from precomputed parts without touching the normal.
    pub(crate) const fn from_parts(origin: Vec3, normal: Vec3, vertices: [Vec3; 3]) -> Self {
        Self { origin, normal, vertices }
    }

    /// A floor/ceiling facet `len` wide centred on `(x, y)`; normal points along -Y.
    pub fn horizontal(x: f32, y: f32, len: f32) -> Self {
        Self::new(
            Vec3::new(x, y, 0.0),
            Vec3::new(x, y, -len),
            Vec3::new(x + len / 2.0, y, 0.0),
            Vec3::new(x - len / 2.0, y, 0.0),
        )
    }

    /// A wall facet `len` tall centred on `(x, y)`; normal points along -X.
    pub fn vertical(x: f32, y: f32, len: f32) -> Self {
        Self::new(
            Vec3::new(x, y, 0.0),
            Vec3::new(x, y, -len),
            Vec3::new(x, y - len / 2.0, 0.0),
            Vec3::new(x, y + len / 2.0, 0.0),
        )
    }

    /// Plane anchor point
    pub const fn origin(&self) -> Vec3 {
        self.origin
    }

    /// Unit normal (zero for a degenerate facet)
    pub const fn normal(&self) -> Vec3 {
        self.normal
    }

    /// The three corners in winding order
    pub const fn vertices(&self) -> &[Vec3; 3] {
        &self.vertices
    }

    /// True when the vertices were collinear at construction
    pub fn is_degenerate(&self) -> bool {
        self.normal == Vec3::zeros()
    }

    /// Signed distance from `point` to the facet plane, measured along the normal
    pub fn signed_distance(&self, point: &Vec3) -> f32 {
        (point - self.origin).dot(&self.normal)
    }
}

/// `normalize((b - a) x (c - a))`, or zero for collinear input
pub fn triangle_normal(a: &Vec3, b: &Vec3, c: &Vec3) -> Vec3 {
    (b - a).cross(&(c - a)).normalize_or_zero()
}

/// Axis-aligned bounding box over every vertex of a facet set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extents {
    /// Minimum corner
    pub min: Vec3,
    /// Maximum corner
    pub max: Vec3,
}

impl Extents {
    /// Creates extents from explicit corners
    pub const fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Tightest box around every vertex of `facets`, or `None` for an empty slice.
    pub fn from_facets(facets: &[Facet]) -> Option<Self> {
        let mut vertices = facets.iter().flat_map(|facet| facet.vertices().iter());
        let first = *vertices.next()?;
        Some(vertices.fold(Self::new(first, first), |extents, v| Self {
            min: min_components(&extents.min, v),
            max: max_components(&extents.max, v),
        }))
    }

    /// Half the X extent; the radius of a sphere collider
    pub fn half_width(&self) -> f32 {
        (self.max.x - self.min.x) / 2.0
    }

    /// Inclusive point containment
    pub fn contains_point(&self, point: &Vec3) -> bool {
        (0..3).all(|axis| point[axis] >= self.min[axis] && point[axis] <= self.max[axis])
    }

    /// Separating-axis test on the three world axes, touching counts as overlap
    pub fn intersects(&self, other: &Self) -> bool {
        (0..3).all(|axis| self.min[axis] <= other.max[axis] && self.max[axis] >= other.min[axis])
    }
}

/// A ray/facet intersection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// The facet that was struck (world space)
    pub facet: Facet,
    /// Intersection point in world space
    pub point: Vec3,
}

impl RayHit {
    /// Squared distance from `origin` to the hit point
    pub fn distance_squared_from(&self, origin: &Vec3) -> f32 {
        (self.point - origin).norm_squared()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    const EPSILON: f32 = 1e-6;

    #[test]
    fn test_facet_normal_from_winding() {
        let facet = Facet::new(
            Vec3::zeros(),
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
        );
        assert_relative_eq!(facet.normal(), Vec3::new(0.0, 0.0, 1.0), epsilon = EPSILON);
        assert!(!facet.is_degenerate());
    }

    #[test]
    fn test_collinear_facet_has_zero_normal() {
        let facet = Facet::new(
            Vec3::zeros(),
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 1.0, 1.0),
            Vec3::new(2.0, 2.0, 2.0),
        );
        assert!(facet.is_degenerate());
        assert!(facet.normal().iter().all(|c| c.is_finite()));
    }

    #[test]
    fn test_tile_facet_orientation() {
        let floor = Facet::horizontal(8.0, 16.0, 16.0);
        assert_relative_eq!(floor.normal(), Vec3::new(0.0, -1.0, 0.0), epsilon = EPSILON);
        assert_relative_eq!(floor.signed_distance(&Vec3::new(8.0, 10.0, 0.0)), 6.0, epsilon = EPSILON);

        let wall = Facet::vertical(4.0, 0.0, 16.0);
        assert_relative_eq!(wall.normal(), Vec3::new(-1.0, 0.0, 0.0), epsilon = EPSILON);
    }

    #[test]
    fn test_extents_from_facets() {
        let facets = [
            Facet::horizontal(0.0, -4.0, 8.0),
            Facet::vertical(3.0, 1.0, 2.0),
        ];
        let extents = Extents::from_facets(&facets).unwrap();
        assert_eq!(extents.min, Vec3::new(-4.0, -4.0, -8.0));
        assert_eq!(extents.max, Vec3::new(4.0, 2.0, 0.0));
        assert_relative_eq!(extents.half_width(), 4.0);
        assert!(Extents::from_facets(&[]).is_none());
    }

    #[test]
    fn test_extents_intersection_inclusive() {
        let a = Extents::new(Vec3::new(0.0, 0.0, 0.0), Vec3::new(1.0, 1.0, 1.0));
        let touching = Extents::new(Vec3::new(1.0, 0.5, 0.5), Vec3::new(2.0, 2.0, 2.0));
        let apart_in_y = Extents::new(Vec3::new(0.0, 1.5, 0.0), Vec3::new(1.0, 2.0, 1.0));
        let apart_in_z = Extents::new(Vec3::new(0.0, 0.0, -3.0), Vec3::new(1.0, 1.0, -0.5));

        assert!(a.intersects(&touching));
        assert!(touching.intersects(&a));
        assert!(!a.intersects(&apart_in_y));
        assert!(!a.intersects(&apart_in_z));
        assert!(a.contains_point(&Vec3::new(1.0, 0.0, 0.5)));
        assert!(!a.contains_point(&Vec3::new(1.1, 0.0, 0.5)));
    }

    proptest! {
        #[test]
        fn prop_extents_tightly_wrap_vertices(
            coords in prop::collection::vec(prop::array::uniform9(-100.0f32..100.0), 1..16),
        ) {
            let facets: Vec<Facet> = coords
                .iter()
                .map(|c| {
                    let a = Vec3::new(c[0], c[1], c[2]);
                    Facet::new(a, a, Vec3::new(c[3], c[4], c[5]), Vec3::new(c[6], c[7], c[8]))
                })
                .collect();
            let extents = Extents::from_facets(&facets).unwrap();

            let vertices: Vec<Vec3> = facets.iter().flat_map(|f| *f.vertices()).collect();
            for v in &vertices {
                prop_assert!(extents.contains_point(v));
            }
            // Every face of the box is touched by some vertex
            for axis in 0..3 {
                prop_assert!(vertices.iter().any(|v| v[axis] == extents.min[axis]));
                prop_assert!(vertices.iter().any(|v| v[axis] == extents.max[axis]));
            }
        }
    }
}
