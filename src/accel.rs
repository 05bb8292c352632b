//! Accelerometer Samples
//!
//! The pattern only needs the direction of the acceleration vector, so a
//! sample may be expressed in any consistent unit (`g`, m/s², raw counts
//! converted to float). Reading the sensor is left to the host.

use crate::config::AxisInversion;

/// One accelerometer reading, consumed once per frame.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub struct AccelSample {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl AccelSample {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn z(&self) -> f32 {
        self.z
    }

    /// Returns the sample with the axes selected by `inversion` negated.
    pub fn inverted(self, inversion: AxisInversion) -> Self {
        inversion.apply(self)
    }
}

impl From<[f32; 3]> for AccelSample {
    fn from([x, y, z]: [f32; 3]) -> Self {
        Self { x, y, z }
    }
}
