//! Bounding-volume overlap and entity distance
//!
//! Only same-kind pairs are compared: sphere/sphere by centre distance against
//! the summed radii, box/box by axis-aligned extents. Any other pairing,
//! including anything involving a `Mesh`, reports no overlap.

use crate::foundation::math::Vec3;
use crate::physics::body::CollisionBody;
use crate::physics::collision::{Collider, ShapeKind};

/// Same-kind bounding-volume overlap between two bodies.
///
/// A sphere's radius is half the X extent of its world-space bounds and its
/// centre is the body position, so a sphere on a body without a transform
/// overlaps nothing (its [`distance`] is infinite). Boxes compare their
/// world-space bounds and need no position. Touching counts as overlapping.
pub fn overlaps<A, B>(a: &A, b: &B) -> bool
where
    A: CollisionBody + ?Sized,
    B: CollisionBody + ?Sized,
{
    let (Some(world_a), Some(world_b)) = (a.world_collider(), b.world_collider()) else {
        return false;
    };
    let (center_a, center_b) = match (a.position(), b.position()) {
        (Some(pa), Some(pb)) => (pa, pb),
        _ if world_a.kind() == ShapeKind::Box => (Vec3::zeros(), Vec3::zeros()),
        _ => return false,
    };
    colliders_overlap(&world_a, center_a, &world_b, center_b)
}

/// [`overlaps`] on world-space colliders with explicit sphere centres
pub fn colliders_overlap(a: &Collider, center_a: Vec3, b: &Collider, center_b: Vec3) -> bool {
    match (a.kind(), b.kind()) {
        (ShapeKind::Sphere, ShapeKind::Sphere) => {
            let reach = a.radius() + b.radius();
            (center_a - center_b).norm_squared() <= reach * reach
        }
        (ShapeKind::Box, ShapeKind::Box) => a.bounds().intersects(b.bounds()),
        _ => false,
    }
}

/// Squared distance between two entity positions; infinite when either has none
pub fn distance_squared<A, B>(a: &A, b: &B) -> f32
where
    A: CollisionBody + ?Sized,
    B: CollisionBody + ?Sized,
{
    match (a.position(), b.position()) {
        (Some(pa), Some(pb)) => (pa - pb).norm_squared(),
        _ => f32::INFINITY,
    }
}

/// Distance between two entity positions; infinite when either has none
pub fn distance<A, B>(a: &A, b: &B) -> f32
where
    A: CollisionBody + ?Sized,
    B: CollisionBody + ?Sized,
{
    distance_squared(a, b).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::Transform;
    use crate::physics::body::Body;
    use crate::physics::collision::Facet;
    use approx::assert_relative_eq;

    fn sphere_at(radius: f32, x: f32) -> Body {
        Body::new("sphere")
            .with_collider(Collider::bounding_sphere(radius).unwrap())
            .with_transform(Transform::from_position(Vec3::new(x, 0.0, 0.0)))
    }

    fn box_at(width: f32, height: f32, position: Vec3) -> Body {
        Body::new("box")
            .with_collider(Collider::bounding_box(width, height).unwrap())
            .with_transform(Transform::from_position(position))
    }

    #[test]
    fn test_sphere_overlap_boundary() {
        let a = sphere_at(3.0, 0.0);
        assert!(overlaps(&a, &sphere_at(2.0, 5.0)));
        assert!(!overlaps(&a, &sphere_at(2.0, 5.0001)));
        assert!(overlaps(&sphere_at(2.0, 5.0), &a));
    }

    #[test]
    fn test_box_overlap_each_axis() {
        let a = box_at(2.0, 2.0, Vec3::zeros());
        assert!(overlaps(&a, &box_at(2.0, 2.0, Vec3::new(1.5, 1.5, 0.0))));
        assert!(overlaps(&a, &box_at(2.0, 2.0, Vec3::new(2.0, 0.0, 0.0))));
        assert!(!overlaps(&a, &box_at(2.0, 2.0, Vec3::new(2.5, 0.0, 0.0))));
        // Entirely above on Y only
        assert!(!overlaps(&a, &box_at(2.0, 2.0, Vec3::new(0.0, -3.0, 0.0))));
        assert!(!overlaps(&box_at(2.0, 2.0, Vec3::new(0.0, -3.0, 0.0)), &a));
        // Separated on Z only
        assert!(!overlaps(&a, &box_at(2.0, 2.0, Vec3::new(0.0, 0.0, 10.0))));
    }

    #[test]
    fn test_mixed_kinds_never_overlap() {
        let sphere = sphere_at(5.0, 0.0);
        let cube = box_at(10.0, 10.0, Vec3::zeros());
        let mesh = Body::fixed("mesh", Collider::mesh(vec![Facet::horizontal(0.0, 0.0, 10.0)]).unwrap());

        assert!(!overlaps(&sphere, &cube));
        assert!(!overlaps(&cube, &sphere));
        assert!(!overlaps(&mesh, &sphere));
        assert!(!overlaps(&mesh, &mesh));
        assert!(!overlaps(&Body::new("no collider"), &sphere));
    }

    #[test]
    fn test_unplaced_sphere_never_overlaps() {
        let unplaced = Body::fixed("unplaced", Collider::bounding_sphere(1.0).unwrap());
        let placed = sphere_at(1.0, 1.0);

        assert_eq!(distance(&unplaced, &placed), f32::INFINITY);
        assert!(!overlaps(&unplaced, &placed));
        assert!(!overlaps(&placed, &unplaced));
        assert!(!overlaps(&unplaced, &unplaced));
    }

    #[test]
    fn test_unplaced_box_uses_world_bounds() {
        let wall = Body::fixed("wall", Collider::bounding_box(2.0, 2.0).unwrap());
        assert!(overlaps(&wall, &box_at(2.0, 2.0, Vec3::new(1.0, 0.0, 0.0))));
        assert!(overlaps(&box_at(2.0, 2.0, Vec3::new(1.0, 0.0, 0.0)), &wall));
        assert!(!overlaps(&wall, &box_at(2.0, 2.0, Vec3::new(5.0, 0.0, 0.0))));
    }

    #[test]
    fn test_distance_and_sentinel() {
        let a = sphere_at(1.0, 0.0);
        let b = sphere_at(1.0, 3.0);
        assert_relative_eq!(distance(&a, &b), 3.0);
        assert_relative_eq!(distance_squared(&a, &b), 9.0);

        let unplaced = Body::new("unplaced");
        assert_eq!(distance(&a, &unplaced), f32::INFINITY);
        assert_eq!(distance_squared(&unplaced, &b), f32::INFINITY);
    }

    #[test]
    fn test_scaled_sphere_radius() {
        let mut big = sphere_at(0.5, 0.0);
        big.transform = Some(Transform {
            position: Vec3::zeros(),
            scale: Vec3::new(16.0, 16.0, 16.0),
            ..Default::default()
        });
        // Scaled radius 8 reaches a unit sphere 8.5 away
        assert!(overlaps(&big, &sphere_at(0.5, 8.5)));
        assert!(!overlaps(&big, &sphere_at(0.5, 8.6)));
    }
}
