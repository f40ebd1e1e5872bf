//! Model-space to world-space mapping for facets and colliders
//!
//! Points (origin and vertices) are transformed with w = 1, the normal with
//! w = 0 and no renormalisation. Under non-uniform scale the normal comes out
//! skewed (the exact answer needs the inverse-transpose); mesh colliders should
//! only be scaled uniformly.

use std::sync::Arc;

use super::primitives::Facet;
use super::shape::Collider;
use crate::foundation::math::{Mat4, Point3, Transform, Vec3};

fn transform_position(model: &Mat4, v: &Vec3) -> Vec3 {
    model.transform_point(&Point3::from(*v)).coords
}

/// Maps one facet through an affine `model` matrix
pub fn transform_facet(facet: &Facet, model: &Mat4) -> Facet {
    let [a, b, c] = facet.vertices();
    Facet::from_parts(
        transform_position(model, &facet.origin()),
        model.transform_vector(&facet.normal()),
        [
            transform_position(model, a),
            transform_position(model, b),
            transform_position(model, c),
        ],
    )
}

/// Maps every facet of `collider` and recomputes the bounds from the result.
///
/// The bounds are rebuilt from transformed vertices rather than by transforming
/// the old box, since rotation changes how tight an axis-aligned box is.
pub fn transform_collider(collider: &Collider, model: &Mat4) -> Collider {
    let facets: Arc<[Facet]> = collider
        .facets()
        .iter()
        .map(|facet| transform_facet(facet, model))
        .collect();
    collider.rebuilt(facets)
}

impl Collider {
    /// World-space copy of this collider under `transform`
    pub fn to_world_space(&self, transform: &Transform) -> Self {
        transform_collider(self, &transform.to_matrix())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::{constants::HALF_PI, Quat};
    use crate::physics::collision::shape::ShapeKind;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    const EPSILON: f32 = 1e-5;

    fn wedge() -> Collider {
        Collider::mesh(vec![
            Facet::new(
                Vec3::new(0.0, 0.0, 0.0),
                Vec3::new(0.0, 0.0, 0.0),
                Vec3::new(2.0, 0.0, 0.0),
                Vec3::new(0.0, 1.0, 0.0),
            ),
            Facet::new(
                Vec3::new(0.0, 0.0, 1.0),
                Vec3::new(0.0, 0.0, 1.0),
                Vec3::new(0.0, 1.0, 1.0),
                Vec3::new(2.0, 0.0, 1.0),
            ),
        ])
        .unwrap()
    }

    #[test]
    fn test_translation_moves_points_not_normal() {
        let collider = wedge();
        let moved = transform_collider(&collider, &Mat4::new_translation(&Vec3::new(5.0, -1.0, 0.0)));

        let facet = moved.facets()[0];
        assert_relative_eq!(facet.origin(), Vec3::new(5.0, -1.0, 0.0), epsilon = EPSILON);
        assert_relative_eq!(facet.vertices()[1], Vec3::new(7.0, -1.0, 0.0), epsilon = EPSILON);
        assert_relative_eq!(facet.normal(), Vec3::new(0.0, 0.0, 1.0), epsilon = EPSILON);
        assert_relative_eq!(moved.bounds().min, Vec3::new(5.0, -1.0, 0.0), epsilon = EPSILON);
        assert_relative_eq!(moved.bounds().max, Vec3::new(7.0, 0.0, 1.0), epsilon = EPSILON);
    }

    #[test]
    fn test_source_collider_untouched() {
        let collider = wedge();
        let before = collider.facets().to_vec();
        let _ = transform_collider(&collider, &Mat4::new_scaling(3.0));
        assert_eq!(collider.facets(), before.as_slice());
    }

    #[test]
    fn test_rotation_rebuilds_bounds() {
        let collider = wedge();
        let rotation = Transform::from_position_rotation(
            Vec3::zeros(),
            Quat::from_axis_angle(&Vec3::z_axis(), HALF_PI),
        );
        let rotated = collider.to_world_space(&rotation);

        // (2, 0) rotates to (0, 2); (0, 1) rotates to (-1, 0)
        assert_relative_eq!(rotated.bounds().min, Vec3::new(-1.0, 0.0, 0.0), epsilon = EPSILON);
        assert_relative_eq!(rotated.bounds().max, Vec3::new(0.0, 2.0, 1.0), epsilon = EPSILON);
        assert_eq!(rotated.kind(), ShapeKind::Mesh);
    }

    #[test]
    fn test_flags_survive_transform() {
        let collider = Collider::bounding_sphere(1.0).unwrap().with_skip_raycast(true);
        let moved = collider.to_world_space(&Transform::from_position(Vec3::new(1.0, 2.0, 3.0)));
        assert!(moved.skip_raycast);
        assert_eq!(moved.kind(), ShapeKind::Sphere);
        assert_relative_eq!(moved.radius(), 1.0, epsilon = EPSILON);
    }

    #[test]
    fn test_non_uniform_scale_skews_normal() {
        // A 45 degree facet: normal (1, 1, 0) / sqrt(2)
        let facet = Facet::new(
            Vec3::zeros(),
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(0.0, 0.0, 1.0),
            Vec3::new(1.0, -1.0, 0.0),
        );
        let scaled = transform_facet(&facet, &Mat4::new_nonuniform_scaling(&Vec3::new(2.0, 1.0, 1.0)));

        // The transformed normal is not renormalised and no longer perpendicular
        let edge = scaled.vertices()[2] - scaled.vertices()[0];
        assert!(scaled.normal().dot(&edge).abs() > 0.1);
        assert!((scaled.normal().norm() - 1.0).abs() > 0.1);
    }

    proptest! {
        #[test]
        fn prop_identity_transform_preserves_collider(
            coords in prop::collection::vec(prop::array::uniform9(-100.0f32..100.0), 1..16)
        ) {
            let facets: Vec<Facet> = coords
                .iter()
                .map(|c| {
                    let a = Vec3::new(c[0], c[1], c[2]);
                    let b = Vec3::new(c[3], c[4], c[5]);
                    let d = Vec3::new(c[6], c[7], c[8]);
                    Facet::new(a, a, b, d)
                })
                .collect();
            let collider = Collider::mesh(facets).unwrap();
            let same = transform_collider(&collider, &Mat4::identity());

            for (original, mapped) in collider.facets().iter().zip(same.facets()) {
                prop_assert!((original.origin() - mapped.origin()).norm() <= EPSILON);
                prop_assert!((original.normal() - mapped.normal()).norm() <= EPSILON);
                for (v0, v1) in original.vertices().iter().zip(mapped.vertices()) {
                    prop_assert!((v0 - v1).norm() <= EPSILON);
                }
            }
            prop_assert!((collider.bounds().min - same.bounds().min).norm() <= EPSILON);
            prop_assert!((collider.bounds().max - same.bounds().max).norm() <= EPSILON);
        }
    }
}
