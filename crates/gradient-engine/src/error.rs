use std::fmt;

use crate::paint::ColorModel;

/// Failure while turning gradient properties into a drawable ramp.
///
/// Every variant is a caller configuration problem. The engine never substitutes a
/// best-effort ramp; the host decides whether to draw nothing or surface the bug.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GradientError {
    /// The color list and the stop list (or the normal and dimmed color lists) differ in length.
    RampLengthMismatch { colors: usize, stops: usize },
    /// Stop at `index` breaks the non-decreasing `[0, 1]` ordering.
    RampStopsNotMonotonic { index: usize },
    /// A color was specified in a model the normalizer cannot convert to RGB.
    UnsupportedColorModel(ColorModel),
}

impl fmt::Display for GradientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RampLengthMismatch { colors, stops } => {
                write!(f, "gradient ramp has {colors} colors but {stops} stops")
            }
            Self::RampStopsNotMonotonic { index } => {
                write!(f, "gradient stop {index} is out of order or outside [0, 1]")
            }
            Self::UnsupportedColorModel(model) => {
                write!(f, "cannot convert {model:?} color to RGB")
            }
        }
    }
}

impl std::error::Error for GradientError {}
