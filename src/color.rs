//! Pixel Colors
//!
//! The pattern produces [`Hsv`] colours with every component expressed as a
//! fraction:
//! - hue: turns, wraps modulo 1 (0 and 1 are both red)
//! - saturation: 0 to 1
//! - value: 0 to 1, may dip below 0 far from the liquid surface
//!
//! [`Hsv::to_rgb`] clamps saturation and value, which is what an LED driver
//! expects before it encodes 8 bit channels.

/// Colour in hue/saturation/value form.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hsv {
    pub hue: f32,
    pub saturation: f32,
    pub value: f32,
}

/// 8 bit per channel colour, ready for an LED driver.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Self = Self::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl Hsv {
    pub const fn new(hue: f32, saturation: f32, value: f32) -> Self {
        Self {
            hue,
            saturation,
            value,
        }
    }

    /// Converts to RGB using the six sector hue wheel.
    pub fn to_rgb(&self) -> Rgb {
        let hue = self.hue - libm::floorf(self.hue);
        let saturation = self.saturation.clamp(0.0, 1.0);
        let value = self.value.clamp(0.0, 1.0);

        let sector = hue * 6.0;
        let whole = libm::floorf(sector);
        let fraction = sector - whole;

        let p = value * (1.0 - saturation);
        let q = value * (1.0 - saturation * fraction);
        let t = value * (1.0 - saturation * (1.0 - fraction));

        let (r, g, b) = match whole as u8 % 6 {
            0 => (value, t, p),
            1 => (q, value, p),
            2 => (p, value, t),
            3 => (p, q, value),
            4 => (t, p, value),
            _ => (value, p, q),
        };

        Rgb::new(channel(r), channel(g), channel(b))
    }
}

impl From<Hsv> for Rgb {
    fn from(hsv: Hsv) -> Self {
        hsv.to_rgb()
    }
}

fn channel(fraction: f32) -> u8 {
    (fraction * 255.0 + 0.5) as u8
}
