//! Pixel Geometry
//!
//! Pixels arrive in normalized unit-cube space ([`PixelCoord`], each axis
//! 0 to 1). Before rotation they are moved into a homogeneous
//! [`WorkingPoint`] centred on the middle of the volume:
//! - x, y, z: -1 to 1
//! - w: always 1, no rotation here ever changes it

/// Position of a pixel inside the volume, each component 0 to 1.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub struct PixelCoord {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl PixelCoord {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

impl From<[f32; 3]> for PixelCoord {
    fn from([x, y, z]: [f32; 3]) -> Self {
        Self { x, y, z }
    }
}

/// Homogeneous point rotated in place while one pixel is being coloured.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub struct WorkingPoint {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl WorkingPoint {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z, w: 1.0 }
    }

    /// Rescales `pixel` from 0..1 to -1..1 on every axis, w = 1.
    pub fn from_pixel(pixel: PixelCoord) -> Self {
        Self::new(
            pixel.x * 2.0 - 1.0,
            pixel.y * 2.0 - 1.0,
            pixel.z * 2.0 - 1.0,
        )
    }

    /// Length of the (x, y, z) part.
    pub fn norm(&self) -> f32 {
        libm::sqrtf(self.x * self.x + self.y * self.y + self.z * self.z)
    }
}

impl From<PixelCoord> for WorkingPoint {
    fn from(pixel: PixelCoord) -> Self {
        Self::from_pixel(pixel)
    }
}
