use core::fmt::{Debug, Display, Formatter};

/// Error for batch rendering.
///
/// Angle estimation, rotation and colouring are total and never fail; only
/// handing over buffers of the wrong size can.
#[derive(Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub enum Error {
    /// Output buffer length differs from the number of pixel coordinates
    LengthMismatch { coords: usize, colors: usize },
}

impl Debug for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::result::Result<(), core::fmt::Error> {
        match self {
            Self::LengthMismatch { coords, colors } => f
                .debug_struct("LengthMismatch")
                .field("coords", coords)
                .field("colors", colors)
                .finish(),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::LengthMismatch { coords, colors } => write!(
                f,
                "{coords} pixel coordinates but room for {colors} colors"
            ),
        }
    }
}

impl core::error::Error for Error {}
