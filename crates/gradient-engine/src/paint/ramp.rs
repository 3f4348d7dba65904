use crate::error::GradientError;

use super::Color;

/// A single ramp entry: an RGB color pinned at position `t` in `[0, 1]`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ColorStop {
    pub t: f32,
    pub color: Color,
}

impl ColorStop {
    #[inline]
    pub const fn new(t: f32, color: Color) -> Self {
        Self { t, color }
    }
}

/// Validated, immutable color ramp.
///
/// Invariants (enforced by [`GradientRamp::build`]):
/// - every `t` is finite and in `[0, 1]`
/// - `t` never decreases along the ramp
/// - color order is the caller's insertion order
///
/// An empty ramp is legal and means "no gradient".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GradientRamp {
    stops: Vec<ColorStop>,
}

impl GradientRamp {
    /// Pairs each color with its stop position.
    ///
    /// With `locations == None` the stops are spread uniformly: `i / (n - 1)`, or a
    /// single stop at `0` for a one-color ramp.
    pub fn build(colors: &[Color], locations: Option<&[f32]>) -> Result<Self, GradientError> {
        let stops = match locations {
            Some(locations) => {
                validate_locations(colors.len(), locations)?;
                colors
                    .iter()
                    .zip(locations)
                    .map(|(&color, &t)| ColorStop::new(t, color))
                    .collect()
            }
            None => {
                let last = colors.len().saturating_sub(1).max(1) as f32;
                colors
                    .iter()
                    .enumerate()
                    .map(|(i, &color)| ColorStop::new(i as f32 / last, color))
                    .collect()
            }
        };

        Ok(Self { stops })
    }

    #[inline]
    pub fn stops(&self) -> &[ColorStop] {
        &self.stops
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Stop positions in ramp order.
    pub fn locations(&self) -> impl Iterator<Item = f32> + '_ {
        self.stops.iter().map(|s| s.t)
    }

    /// Colors in ramp order.
    pub fn colors(&self) -> impl Iterator<Item = Color> + '_ {
        self.stops.iter().map(|s| s.color)
    }
}

fn validate_locations(colors: usize, locations: &[f32]) -> Result<(), GradientError> {
    if locations.len() != colors {
        return Err(GradientError::RampLengthMismatch { colors, stops: locations.len() });
    }

    let mut prev = 0.0f32;
    for (index, &t) in locations.iter().enumerate() {
        // NaN fails the range check.
        if !(0.0..=1.0).contains(&t) || t < prev {
            return Err(GradientError::RampStopsNotMonotonic { index });
        }
        prev = t;
    }

    Ok(())
}
