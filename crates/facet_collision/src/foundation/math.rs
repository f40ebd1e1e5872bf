//! Math utilities and types
//!
//! Provides the vector, matrix and transform types used by the collision core.
//! Everything is single precision and backed by nalgebra.

pub use nalgebra::{
    Vector2, Vector3,
    Matrix4,
    Quaternion,
    Unit,
};

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// 4x4 matrix type
pub type Mat4 = Matrix4<f32>;

/// 3D point type
pub type Point3 = nalgebra::Point3<f32>;

/// Quaternion type for rotations
pub type Quat = Unit<Quaternion<f32>>;

/// Squared lengths at or below this are treated as zero-length vectors.
pub const ZERO_LENGTH_EPSILON: f32 = 1e-12;

/// Transform representing position, rotation, and scale
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// Position in 3D space
    pub position: Vec3,

    /// Rotation quaternion
    pub rotation: Quat,

    /// Scale factors
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::zeros(),
            rotation: Quat::identity(),
            scale: Vec3::new(1.0, 1.0, 1.0),
        }
    }
}

impl Transform {
    /// Create a new identity transform
    pub fn identity() -> Self {
        Self::default()
    }

    /// Create a transform with only position
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Create a transform with position and rotation
    pub fn from_position_rotation(position: Vec3, rotation: Quat) -> Self {
        Self {
            position,
            rotation,
            ..Default::default()
        }
    }

    /// Create a transform with a position in the XY plane and a 2D size as scale.
    ///
    /// Sprite-style entities are sized by their scale; Z scale stays at one.
    pub fn origin_2d(width: f32, height: f32) -> Self {
        Self {
            scale: Vec3::new(width, height, 1.0),
            ..Default::default()
        }
    }

    /// Convert to a transformation matrix (T * R * S)
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::new_translation(&self.position)
            * self.rotation.to_homogeneous()
            * Mat4::new_nonuniform_scaling(&self.scale)
    }

    /// Apply this transform to a point
    pub fn transform_point(&self, point: Point3) -> Point3 {
        self.to_matrix().transform_point(&point)
    }

    /// Apply this transform to a direction (translation ignored)
    pub fn transform_vector(&self, vector: Vec3) -> Vec3 {
        self.to_matrix().transform_vector(&vector)
    }

    /// Move by an offset in the XY plane
    pub fn translate_2d(&mut self, dx: f32, dy: f32) {
        self.position.x += dx;
        self.position.y += dy;
    }

    /// Set the XY position, keeping Z
    pub fn set_position_2d(&mut self, x: f32, y: f32) {
        self.position.x = x;
        self.position.y = y;
    }

    /// True when scale differs between axes.
    ///
    /// Facet normals are carried through the linear part of the matrix, which
    /// skews them under non-uniform scale.
    pub fn has_non_uniform_scale(&self) -> bool {
        let s = self.scale.abs();
        (s.x - s.y).abs() > f32::EPSILON || (s.y - s.z).abs() > f32::EPSILON
    }
}

/// Extension trait for Vec3 with guarded operations
pub trait Vec3Ext {
    /// Normalize, yielding the zero vector instead of NaN for zero-length input
    fn normalize_or_zero(&self) -> Vec3;
}

impl Vec3Ext for Vec3 {
    fn normalize_or_zero(&self) -> Vec3 {
        self.try_normalize(ZERO_LENGTH_EPSILON.sqrt())
            .unwrap_or_else(Vec3::zeros)
    }
}

/// Component-wise minimum of two vectors
pub fn min_components(a: &Vec3, b: &Vec3) -> Vec3 {
    Vec3::new(a.x.min(b.x), a.y.min(b.y), a.z.min(b.z))
}

/// Component-wise maximum of two vectors
pub fn max_components(a: &Vec3, b: &Vec3) -> Vec3 {
    Vec3::new(a.x.max(b.x), a.y.max(b.y), a.z.max(b.z))
}

/// Math constants
pub mod constants {
    /// Pi constant
    pub const PI: f32 = std::f32::consts::PI;

    /// Pi / 2
    pub const HALF_PI: f32 = PI * 0.5;
}
