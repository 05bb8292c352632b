//! Frame Rotation
//!
//! Every pixel is carried into a frame aligned with the measured tilt by
//! exactly two rotations, always in this order:
//! 1. About Z by the azimuth angle
//! 2. About Y by the polar angle
//!
//! Each rotation is stored as a homogeneous 4x4 matrix, but only the entries
//! a rotation about that axis can change are ever read:
//! - Z rotation: rows/columns 0 and 1 (z and w pass through)
//! - Y rotation: rows/columns 0 and 2 (y and w pass through)
//!
//! Row and column 3 stay at identity: nothing here translates or shears.

use crate::orientation::Orientation;
use crate::point::WorkingPoint;

/// Homogeneous 4x4 transform, row major, applied as `M * p`.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub struct Transform {
    matrix: [[f32; 4]; 4],
}

impl Transform {
    pub const IDENTITY: Self = Self {
        matrix: [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ],
    };

    /// Identity with the rotation about Z by `angle` populated.
    pub fn rotation_z(angle: f32) -> Self {
        let mut transform = Self::IDENTITY;
        transform.set_rotation_z(angle);
        transform
    }

    /// Identity with the rotation about Y by `angle` populated.
    pub fn rotation_y(angle: f32) -> Self {
        let mut transform = Self::IDENTITY;
        transform.set_rotation_y(angle);
        transform
    }

    /// Restore the identity matrix.
    pub fn reset(&mut self) {
        *self = Self::IDENTITY;
    }

    /// Populate the x/y block with a right-handed rotation about Z.
    pub fn set_rotation_z(&mut self, angle: f32) {
        let (sin, cos) = libm::sincosf(angle);
        self.matrix[0][0] = cos;
        self.matrix[0][1] = -sin;
        self.matrix[1][0] = sin;
        self.matrix[1][1] = cos;
    }

    /// Populate the x/z block with a right-handed rotation about Y.
    pub fn set_rotation_y(&mut self, angle: f32) {
        let (sin, cos) = libm::sincosf(angle);
        self.matrix[0][0] = cos;
        self.matrix[0][2] = sin;
        self.matrix[2][0] = -sin;
        self.matrix[2][2] = cos;
    }

    pub fn entry(&self, row: usize, col: usize) -> f32 {
        self.matrix[row][col]
    }

    /// Multiply using only the Z rotation block.
    pub fn multiply_z(&self, point: &mut WorkingPoint) {
        let m = &self.matrix;
        let (x, y) = (point.x, point.y);
        point.x = m[0][0] * x + m[0][1] * y;
        point.y = m[1][0] * x + m[1][1] * y;
    }

    /// Multiply using only the Y rotation block.
    pub fn multiply_y(&self, point: &mut WorkingPoint) {
        let m = &self.matrix;
        let (x, z) = (point.x, point.z);
        point.x = m[0][0] * x + m[0][2] * z;
        point.z = m[2][0] * x + m[2][2] * z;
    }

    /// Full 4x4 product.
    pub fn multiply(&self, point: &mut WorkingPoint) {
        let v = [point.x, point.y, point.z, point.w];
        let row = |r: &[f32; 4]| r[0] * v[0] + r[1] * v[1] + r[2] * v[2] + r[3] * v[3];
        point.x = row(&self.matrix[0]);
        point.y = row(&self.matrix[1]);
        point.z = row(&self.matrix[2]);
        point.w = row(&self.matrix[3]);
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Rotates `point` about Z by `angle`, rebuilding `transform` from identity.
pub fn apply_z_rotation(angle: f32, transform: &mut Transform, point: &mut WorkingPoint) {
    transform.reset();
    transform.set_rotation_z(angle);
    transform.multiply_z(point);
}

/// Rotates `point` about Y by `angle`, rebuilding `transform` from identity.
pub fn apply_y_rotation(angle: f32, transform: &mut Transform, point: &mut WorkingPoint) {
    transform.reset();
    transform.set_rotation_y(angle);
    transform.multiply_y(point);
}

/// The pair of rotations shared by every pixel of one frame.
///
/// Built once per frame and only read afterwards, so it can be shared
/// between pixels computed in any order.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub struct FrameTransform {
    z_rotation: Transform,
    y_rotation: Transform,
}

impl FrameTransform {
    pub const IDENTITY: Self = Self {
        z_rotation: Transform::IDENTITY,
        y_rotation: Transform::IDENTITY,
    };

    /// Rotation about Z by the azimuth angle
    pub fn z_rotation(&self) -> &Transform {
        &self.z_rotation
    }

    /// Rotation about Y by the polar angle
    pub fn y_rotation(&self) -> &Transform {
        &self.y_rotation
    }

    /// Rotates `point` about Z, then about Y.
    pub fn apply(&self, point: &mut WorkingPoint) {
        self.z_rotation.multiply_z(point);
        self.y_rotation.multiply_y(point);
    }
}

impl Default for FrameTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Builds the frame rotations: Z by `orientation.azimuth`, Y by `orientation.polar`.
pub fn build_frame_transform(orientation: Orientation) -> FrameTransform {
    FrameTransform {
        z_rotation: Transform::rotation_z(orientation.azimuth),
        y_rotation: Transform::rotation_y(orientation.polar),
    }
}
