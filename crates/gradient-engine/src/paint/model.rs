use crate::error::GradientError;

use super::{Color, Hsba};

/// Color model a [`SourceColor`] is expressed in.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ColorModel {
    Rgb,
    Grayscale,
    Hsb,
    Cmyk,
    Lab,
    Pattern,
}

/// A color as the host specified it, tagged with its model.
///
/// Only RGB, grayscale and HSB inputs are convertible. The remaining models exist so
/// that hosts can hand over whatever they hold and get a precise error back.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum SourceColor {
    Rgb(Color),
    Grayscale { white: f32, alpha: f32 },
    Hsb(Hsba),
    Cmyk { cyan: f32, magenta: f32, yellow: f32, black: f32, alpha: f32 },
    Lab { l: f32, a: f32, b: f32, alpha: f32 },
    /// Opaque handle to a host-side pattern.
    Pattern(u32),
}

impl SourceColor {
    #[inline]
    pub fn model(&self) -> ColorModel {
        match self {
            SourceColor::Rgb(_) => ColorModel::Rgb,
            SourceColor::Grayscale { .. } => ColorModel::Grayscale,
            SourceColor::Hsb(_) => ColorModel::Hsb,
            SourceColor::Cmyk { .. } => ColorModel::Cmyk,
            SourceColor::Lab { .. } => ColorModel::Lab,
            SourceColor::Pattern(_) => ColorModel::Pattern,
        }
    }

    #[inline]
    pub fn gray(white: f32, alpha: f32) -> Self {
        SourceColor::Grayscale { white, alpha }
    }
}

impl From<Color> for SourceColor {
    #[inline]
    fn from(color: Color) -> Self {
        SourceColor::Rgb(color)
    }
}

impl From<Hsba> for SourceColor {
    #[inline]
    fn from(color: Hsba) -> Self {
        SourceColor::Hsb(color)
    }
}

/// Converts `color` to RGB.
///
/// RGB input is returned as-is, with no decompose/recompose round trip.
pub fn normalize_to_rgb(color: SourceColor) -> Result<Color, GradientError> {
    match color {
        SourceColor::Rgb(c) => Ok(c),
        SourceColor::Grayscale { white, alpha } => Ok(Color::new(white, white, white, alpha)),
        SourceColor::Hsb(hsb) => Ok(hsb.to_rgba()),
        other => Err(GradientError::UnsupportedColorModel(other.model())),
    }
}

/// Normalizes a whole color list, failing on the first unsupported entry.
pub fn normalize_all(colors: &[SourceColor]) -> Result<Vec<Color>, GradientError> {
    colors.iter().copied().map(normalize_to_rgb).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_passes_through_bit_exact() {
        let c = Color::new(0.1234567, 0.7654321, 0.000001, 0.33);
        assert_eq!(normalize_to_rgb(c.into()), Ok(c));
    }

    #[test]
    fn grayscale_expands_to_rgb() {
        assert_eq!(
            normalize_to_rgb(SourceColor::gray(0.25, 0.5)),
            Ok(Color::new(0.25, 0.25, 0.25, 0.5))
        );
    }

    #[test]
    fn hsb_converts() {
        let red = Hsba::new(0.0, 1.0, 1.0, 1.0);
        assert_eq!(normalize_to_rgb(red.into()), Ok(Color::rgb(1.0, 0.0, 0.0)));
    }

    #[test]
    fn unsupported_models_are_rejected() {
        let cmyk = SourceColor::Cmyk { cyan: 0.0, magenta: 0.0, yellow: 0.0, black: 1.0, alpha: 1.0 };
        assert_eq!(
            normalize_to_rgb(cmyk),
            Err(GradientError::UnsupportedColorModel(ColorModel::Cmyk))
        );
        assert_eq!(
            normalize_to_rgb(SourceColor::Pattern(7)),
            Err(GradientError::UnsupportedColorModel(ColorModel::Pattern))
        );
    }

    #[test]
    fn normalize_all_stops_at_first_failure() {
        let list = [
            SourceColor::from(Color::white()),
            SourceColor::Lab { l: 50.0, a: 0.0, b: 0.0, alpha: 1.0 },
            SourceColor::Pattern(1),
        ];
        assert_eq!(
            normalize_all(&list),
            Err(GradientError::UnsupportedColorModel(ColorModel::Lab))
        );
    }
}
