//! Per-Frame Rendering
//!
//! A host drives the pattern with a two step contract, repeated at its
//! frame rate:
//! 1. [`Frame::begin`] once, with the latest accelerometer sample
//! 2. [`Frame::render`] once per pixel, with that pixel's coordinate
//!
//! A [`Frame`] is an immutable value. Pixels may be rendered in any order,
//! from any number of threads, and each one works on its own copy of the
//! point being rotated.
//!
//! # Example
//! ```
//! # use liquid_tilt::{accel::AccelSample, frame::Frame, point::PixelCoord};
//! let frame = Frame::begin(AccelSample::new(0.0, 0.0, 1.0));
//!
//! let color = frame.render(0, PixelCoord::new(0.5, 0.5, 1.0));
//! assert_eq!(color.value, 1.0);
//! ```

use crate::accel::AccelSample;
use crate::color::{Hsv, Rgb};
use crate::colorizer::color_for_with;
use crate::config::LiquidConfig;
use crate::error::Error;
use crate::orientation::{estimate_orientation_with, Orientation};
use crate::point::PixelCoord;
use crate::transform::{build_frame_transform, FrameTransform};

/// Everything the pixel loop of one frame reads.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub struct Frame {
    orientation: Orientation,
    transform: FrameTransform,
    config: LiquidConfig,
}

impl Frame {
    /// Start a frame with the default configuration.
    pub fn begin(sample: AccelSample) -> Self {
        Self::begin_with(sample, LiquidConfig::default())
    }

    /// Start a frame: estimate the orientation and build its rotations.
    pub fn begin_with(sample: AccelSample, config: LiquidConfig) -> Self {
        let orientation = estimate_orientation_with(sample, config.inversion);
        log::trace!(
            "frame sample=({}, {}, {}) polar={} azimuth={}",
            sample.x,
            sample.y,
            sample.z,
            orientation.polar,
            orientation.azimuth
        );
        Self::from_orientation(orientation, config)
    }

    /// Start a frame from an already known orientation.
    pub fn from_orientation(orientation: Orientation, config: LiquidConfig) -> Self {
        Self {
            orientation,
            transform: build_frame_transform(orientation),
            config,
        }
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn transform(&self) -> &FrameTransform {
        &self.transform
    }

    pub fn config(&self) -> &LiquidConfig {
        &self.config
    }

    /// Colour of one pixel. `_index` is accepted for hosts that pass it but unused.
    pub fn render(&self, _index: usize, coord: PixelCoord) -> Hsv {
        color_for_with(coord, &self.transform, &self.config)
    }

    /// Colours every pixel of `coords` into the matching slot of `colors`.
    pub fn render_into(&self, coords: &[PixelCoord], colors: &mut [Hsv]) -> Result<(), Error> {
        check_lengths(coords.len(), colors.len())?;
        for (index, (coord, color)) in coords.iter().zip(colors.iter_mut()).enumerate() {
            *color = self.render(index, *coord);
        }
        Ok(())
    }

    /// Same as [`Frame::render_into`], converted to 8 bit RGB.
    pub fn render_rgb_into(&self, coords: &[PixelCoord], colors: &mut [Rgb]) -> Result<(), Error> {
        check_lengths(coords.len(), colors.len())?;
        for (index, (coord, color)) in coords.iter().zip(colors.iter_mut()).enumerate() {
            *color = self.render(index, *coord).to_rgb();
        }
        Ok(())
    }
}

fn check_lengths(coords: usize, colors: usize) -> Result<(), Error> {
    if coords != colors {
        log::debug!("pixel map has {} entries, output buffer {}", coords, colors);
        return Err(Error::LengthMismatch { coords, colors });
    }
    Ok(())
}
