//! Pattern Configuration
//!
//! Two knobs exist:
//! - which accelerometer axes are sign-inverted to match how the sensor is
//!   mounted in the volume
//! - the palette used above and below the liquid surface
//!
//! Both defaults reproduce the stock pattern.

use crate::accel::AccelSample;

/// Bit flags stating which accelerometer axes are negated before use.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AxisInversion {
    flags: u8,
}

impl AxisInversion {
    const X: u8 = 1 << 0;
    const Y: u8 = 1 << 1;
    const Z: u8 = 1 << 2;

    /// No axis inverted
    pub const fn none() -> Self {
        Self { flags: 0 }
    }

    /// Every axis inverted
    pub const fn all() -> Self {
        Self { flags: 0x07 }
    }

    /// Check if the x axis is inverted
    pub const fn x(self) -> bool {
        self.flags & Self::X != 0
    }
    /// Check if the y axis is inverted
    pub const fn y(self) -> bool {
        self.flags & Self::Y != 0
    }
    /// Check if the z axis is inverted
    pub const fn z(self) -> bool {
        self.flags & Self::Z != 0
    }

    const fn with_flag(self, value: bool, flag: u8) -> Self {
        Self {
            flags: if value {
                self.flags | flag
            } else {
                self.flags & !flag
            },
        }
    }

    pub const fn with_x(self, value: bool) -> Self {
        self.with_flag(value, Self::X)
    }
    pub const fn with_y(self, value: bool) -> Self {
        self.with_flag(value, Self::Y)
    }
    pub const fn with_z(self, value: bool) -> Self {
        self.with_flag(value, Self::Z)
    }

    /// Negate the inverted axes of `sample`
    pub fn apply(self, sample: AccelSample) -> AccelSample {
        AccelSample {
            x: if self.x() { -sample.x } else { sample.x },
            y: if self.y() { -sample.y } else { sample.y },
            z: if self.z() { -sample.z } else { sample.z },
        }
    }
}

impl Default for AxisInversion {
    /// X is inverted: the sensor sits mirrored along x in the stock build.
    fn default() -> Self {
        Self::none().with_x(true)
    }
}

/// Palette and mounting parameters for one pattern instance.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LiquidConfig {
    /// Axes negated before the orientation is estimated
    pub inversion: AxisInversion,
    /// Hue per unit of height inside the liquid (`hue = height * scale`)
    pub liquid_hue_scale: f32,
    /// Fixed hue of the glow that fades out away from the surface
    pub surface_hue: f32,
    /// Saturation of every pixel
    pub saturation: f32,
}

impl Default for LiquidConfig {
    fn default() -> Self {
        Self {
            inversion: AxisInversion::default(),
            liquid_hue_scale: 0.6,
            surface_hue: 0.01,
            saturation: 1.0,
        }
    }
}
