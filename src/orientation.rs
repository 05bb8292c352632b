//! Orientation Estimation
//!
//! Converts an accelerometer sample into the spherical angles of the
//! acceleration vector:
//! - Polar: angle from the +Z axis, 0 to π radians
//! - Azimuth: angle of the XY projection from +X, -π (exclusive) to π radians
//!
//! Each quadrant is resolved with explicit sign branches around a single
//! argument arctangent, so the edge cases take fixed values:
//! - z == 0 gives a polar angle of exactly π/2
//! - x == 0 gives an azimuth of exactly ±π/2

use core::f32::consts::{FRAC_PI_2, PI, TAU};

use crate::accel::AccelSample;
use crate::config::AxisInversion;

/// Tilt of the acceleration vector as spherical angles in radians.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Orientation {
    /// Angle from +Z, 0 to π radians
    pub polar: f32,
    /// Angle in the XY plane from +X, -π (exclusive) to π radians
    pub azimuth: f32,
}

impl Orientation {
    /// Both angles zero: both frame rotations are the identity.
    pub const IDENTITY: Self = Self {
        polar: 0.0,
        azimuth: 0.0,
    };

    pub const fn new(polar: f32, azimuth: f32) -> Self {
        Self { polar, azimuth }
    }

    /// Unit vector pointing along the direction described by the angles.
    pub fn gravity_direction(&self) -> [f32; 3] {
        let sin_polar = libm::sinf(self.polar);
        [
            sin_polar * libm::cosf(self.azimuth),
            sin_polar * libm::sinf(self.azimuth),
            libm::cosf(self.polar),
        ]
    }
}

impl Default for Orientation {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Estimates the orientation of `raw` using the default axis inversion (x negated).
pub fn estimate_orientation(raw: AccelSample) -> Orientation {
    estimate_orientation_with(raw, AxisInversion::default())
}

/// Estimates the orientation of `raw` after negating the axes in `inversion`.
pub fn estimate_orientation_with(raw: AccelSample, inversion: AxisInversion) -> Orientation {
    let sample = raw.inverted(inversion);
    Orientation {
        polar: polar_angle(sample.x, sample.y, sample.z),
        azimuth: azimuth_angle(sample.x, sample.y),
    }
}

/// Angle between `(x, y, z)` and +Z.
pub fn polar_angle(x: f32, y: f32, z: f32) -> f32 {
    let horizontal = libm::hypotf(x, y);
    if z == 0.0 {
        FRAC_PI_2
    } else if z > 0.0 {
        libm::atanf(horizontal / z)
    } else {
        PI - libm::atanf(horizontal / -z)
    }
}

/// Angle of `(x, y)` from +X.
pub fn azimuth_angle(x: f32, y: f32) -> f32 {
    if x == 0.0 {
        if y >= 0.0 {
            FRAC_PI_2
        } else {
            -FRAC_PI_2
        }
    } else if x > 0.0 {
        libm::atanf(y / x)
    } else {
        // For y < 0 this lands in (π, 3π/2); fold it back by a full turn.
        let azimuth = PI - libm::atanf(y / -x);
        if azimuth > PI {
            azimuth - TAU
        } else {
            azimuth
        }
    }
}
