//! Liquid Colouring
//!
//! A pixel's colour depends only on its height above the tilted surface
//! plane, which after the frame rotations is the rotated z component:
//! - height > 0: inside the liquid, hue sweeps with height at full value
//! - height <= 0: a fixed near-red glow fading to black away from the surface

use crate::color::Hsv;
use crate::config::LiquidConfig;
use crate::point::{PixelCoord, WorkingPoint};
use crate::transform::FrameTransform;

/// Colour of `pixel` with the default palette.
pub fn color_for(pixel: PixelCoord, transform: &FrameTransform) -> Hsv {
    color_for_with(pixel, transform, &LiquidConfig::default())
}

/// Colour of `pixel` with the palette in `config`.
pub fn color_for_with(pixel: PixelCoord, transform: &FrameTransform, config: &LiquidConfig) -> Hsv {
    liquid_color(surface_height(pixel, transform), config)
}

/// Rotated z of `pixel`: its signed height relative to the surface plane.
pub fn surface_height(pixel: PixelCoord, transform: &FrameTransform) -> f32 {
    let mut point = WorkingPoint::from_pixel(pixel);
    transform.apply(&mut point);
    point.z
}

/// Colour for a pixel at signed height `tx_z`.
///
/// Value is not clamped: it goes negative if `tx_z < -1`.
pub fn liquid_color(tx_z: f32, config: &LiquidConfig) -> Hsv {
    if tx_z > 0.0 {
        Hsv::new(tx_z * config.liquid_hue_scale, config.saturation, 1.0)
    } else {
        Hsv::new(config.surface_hue, config.saturation, 1.0 + tx_z)
    }
}

#[cfg(test)]
mod tests {
    use super::{color_for, color_for_with, liquid_color, surface_height};
    use crate::{
        color::Hsv,
        config::LiquidConfig,
        orientation::Orientation,
        point::{PixelCoord, WorkingPoint},
        transform::{build_frame_transform, FrameTransform},
    };
    use approx::assert_abs_diff_eq;
    use core::f32::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_inside_liquid() {
        let color = liquid_color(0.5, &LiquidConfig::default());
        assert_abs_diff_eq!(color.hue, 0.3, epsilon = 1e-6);
        assert_eq!(color.saturation, 1.0);
        assert_eq!(color.value, 1.0);
    }

    #[test]
    fn test_outside_liquid_fades() {
        let config = LiquidConfig::default();
        assert_eq!(liquid_color(0.0, &config), Hsv::new(0.01, 1.0, 1.0));
        assert_eq!(liquid_color(-0.25, &config), Hsv::new(0.01, 1.0, 0.75));
        assert_eq!(liquid_color(-1.0, &config).value, 0.0);
    }

    #[test]
    fn test_custom_palette() {
        let config = LiquidConfig {
            liquid_hue_scale: 0.2,
            surface_hue: 0.5,
            saturation: 0.8,
            ..LiquidConfig::default()
        };
        assert_eq!(liquid_color(1.0, &config), Hsv::new(0.2, 0.8, 1.0));
        assert_eq!(liquid_color(-0.5, &config), Hsv::new(0.5, 0.8, 0.5));
    }

    #[test]
    fn test_top_centre_pixel_when_upright() {
        // Polar 0 leaves z unchanged whatever the azimuth.
        let transform = build_frame_transform(Orientation::new(0.0, FRAC_PI_2));
        let pixel = PixelCoord::new(0.5, 0.5, 1.0);
        assert_abs_diff_eq!(surface_height(pixel, &transform), 1.0, epsilon = 1e-6);

        let color = color_for(pixel, &transform);
        assert_abs_diff_eq!(color.hue, 0.6, epsilon = 1e-6);
        assert_eq!(color.value, 1.0);
    }

    #[test]
    fn test_identity_frame_uses_unrotated_height() {
        let transform = FrameTransform::IDENTITY;
        assert_eq!(surface_height(PixelCoord::new(0.2, 0.9, 0.0), &transform), -1.0);
        assert_eq!(surface_height(PixelCoord::new(0.2, 0.9, 0.75), &transform), 0.5);
        assert_eq!(
            color_for(PixelCoord::new(0.0, 0.0, 0.0), &transform),
            Hsv::new(0.01, 1.0, 0.0)
        );
    }

    #[test]
    fn test_upside_down_flips_height() {
        let transform = build_frame_transform(Orientation::new(PI, 0.0));
        assert_abs_diff_eq!(
            surface_height(PixelCoord::new(0.5, 0.5, 1.0), &transform),
            -1.0,
            epsilon = 1e-6
        );
    }

    #[test]
    fn test_height_bounded_by_distance_from_centre() {
        let transform = build_frame_transform(Orientation::new(1.1, -0.4));
        for x in [0.0, 0.3, 1.0] {
            for y in [0.0, 0.5, 1.0] {
                for z in [0.0, 0.8, 1.0] {
                    let pixel = PixelCoord::new(x, y, z);
                    let distance = WorkingPoint::from_pixel(pixel).norm();
                    assert!(libm::fabsf(surface_height(pixel, &transform)) <= distance + 1e-6);
                }
            }
        }
    }

    #[test]
    fn test_custom_config_changes_only_palette() {
        let transform = build_frame_transform(Orientation::new(0.4, 2.0));
        let pixel = PixelCoord::new(0.1, 0.7, 0.9);
        let config = LiquidConfig {
            saturation: 0.5,
            ..LiquidConfig::default()
        };
        let stock = color_for(pixel, &transform);
        let custom = color_for_with(pixel, &transform, &config);
        assert_eq!(custom.hue, stock.hue);
        assert_eq!(custom.value, stock.value);
        assert_eq!(custom.saturation, 0.5);
    }
}
