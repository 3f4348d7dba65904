use crate::coords::Size;
use crate::dimming::{DimmingInputs, DimmingRule, DimmingState, Selection};
use crate::error::GradientError;
use crate::geometry::GradientStyle;
use crate::paint::{GradientRamp, SourceColor};

use super::{GradientDescriptor, RenderOutcome};

/// Snapshot of the host properties that feed one render.
///
/// Borrowed, so building one per frame costs nothing.
#[derive(Debug, Copy, Clone)]
pub struct RenderRequest<'a, S: GradientStyle> {
    pub colors: Option<&'a [SourceColor]>,
    pub dimmed_colors: Option<&'a [SourceColor]>,
    pub locations: Option<&'a [f32]>,
    pub style: S,
    pub state: DimmingState,
    pub automatically_dims: bool,
}

impl<'a, S: GradientStyle> RenderRequest<'a, S> {
    /// A request with default style, normal state and automatic dimming on.
    pub fn new(colors: &'a [SourceColor]) -> Self {
        Self {
            colors: Some(colors),
            dimmed_colors: None,
            locations: None,
            style: S::default(),
            state: DimmingState::Normal,
            automatically_dims: true,
        }
    }

    #[inline]
    pub fn style(mut self, style: S) -> Self {
        self.style = style;
        self
    }

    #[inline]
    pub fn state(mut self, state: DimmingState) -> Self {
        self.state = state;
        self
    }

    #[inline]
    pub fn locations(mut self, locations: &'a [f32]) -> Self {
        self.locations = Some(locations);
        self
    }

    #[inline]
    pub fn dimmed_colors(mut self, dimmed_colors: &'a [SourceColor]) -> Self {
        self.dimmed_colors = Some(dimmed_colors);
        self
    }

    #[inline]
    pub fn automatically_dims(mut self, enabled: bool) -> Self {
        self.automatically_dims = enabled;
        self
    }
}

/// Turns the current properties and surface size into a drawable gradient.
///
/// Steps: dimming selection → empty check → ramp → geometry for the style's kind.
/// Pure; safe to call from any thread for independent requests.
pub fn render<S: GradientStyle>(
    request: &RenderRequest<'_, S>,
    size: Size,
) -> Result<RenderOutcome, GradientError> {
    let selection = Selection::choose(&DimmingInputs {
        state: request.state,
        colors: request.colors,
        dimmed_colors: request.dimmed_colors,
        automatically_dims: request.automatically_dims,
    });

    // The dimmed list reuses `locations`, so it must line up with the normal list.
    if selection.rule == DimmingRule::ExplicitOverride {
        if let (Some(colors), Some(dimmed)) = (request.colors, selection.colors) {
            if colors.len() != dimmed.len() {
                return Err(GradientError::RampLengthMismatch {
                    colors: colors.len(),
                    stops: dimmed.len(),
                });
            }
        }
    }

    let colors = match selection.resolve()? {
        Some(colors) if !colors.is_empty() => colors,
        _ => {
            log::trace!("render: no colors, falling back to flat fill");
            return Ok(RenderOutcome::NoGradient);
        }
    };

    let ramp = GradientRamp::build(&colors, request.locations)?;
    let geometry = request.style.geometry(size);

    log::trace!(
        "render: {:?} gradient, {} stops, rule {:?}",
        S::KIND,
        ramp.len(),
        selection.rule
    );

    Ok(RenderOutcome::Gradient(GradientDescriptor {
        ramp,
        geometry,
        extend: request.style.extend(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Point;
    use crate::geometry::{Circle, Extend, Geometry, LinearStyle, RadialStyle};
    use crate::paint::{Color, ColorModel, ColorStop};

    const YELLOW: Color = Color::rgb(1.0, 1.0, 0.0);
    const PURPLE: Color = Color::rgb(0.5, 0.0, 0.5);
    const SIZE: Size = Size::new(200.0, 150.0);

    fn list(colors: &[Color]) -> Vec<SourceColor> {
        colors.iter().copied().map(SourceColor::from).collect()
    }

    // ── end to end ────────────────────────────────────────────────────────

    #[test]
    fn vertical_yellow_to_purple() {
        let colors = list(&[YELLOW, PURPLE]);
        let req = RenderRequest::new(&colors).style(LinearStyle::Vertical);
        let out = render(&req, SIZE).unwrap();

        let d = out.descriptor().unwrap();
        assert_eq!(
            d.geometry,
            Geometry::Linear { start: Point::new(0.0, 0.0), end: Point::new(0.0, 150.0) }
        );
        assert_eq!(d.ramp.stops(), &[ColorStop::new(0.0, YELLOW), ColorStop::new(1.0, PURPLE)]);
        assert_eq!(d.extend, Extend::new(false, true));
    }

    #[test]
    fn radial_fill_uses_radial_geometry_and_options() {
        let colors = list(&[YELLOW, PURPLE]);
        let req = RenderRequest::new(&colors).style(RadialStyle::Fill);
        let out = render(&req, SIZE).unwrap();

        let d = out.descriptor().unwrap();
        let center = Point::new(100.0, 75.0);
        assert_eq!(
            d.geometry,
            Geometry::Radial { start: Circle::new(center, 0.0), end: Circle::new(center, 100.0) }
        );
        assert_eq!(d.extend, Extend::new(true, true));
    }

    #[test]
    fn dimmed_state_desaturates_the_ramp() {
        let colors = list(&[YELLOW, PURPLE]);
        let req = RenderRequest::<LinearStyle>::new(&colors).state(DimmingState::Dimmed);
        let out = render(&req, SIZE).unwrap();

        let got: Vec<Color> = out.descriptor().unwrap().ramp.colors().collect();
        assert_eq!(got, vec![Color::white(), Color::rgb(0.5, 0.5, 0.5)]);
    }

    #[test]
    fn explicit_locations_are_used() {
        let colors = list(&[YELLOW, PURPLE]);
        let locations = [0.2, 0.8];
        let req = RenderRequest::<LinearStyle>::new(&colors).locations(&locations);
        let out = render(&req, SIZE).unwrap();

        let t: Vec<f32> = out.descriptor().unwrap().ramp.locations().collect();
        assert_eq!(t, vec![0.2, 0.8]);
    }

    // ── no gradient ───────────────────────────────────────────────────────

    #[test]
    fn absent_colors_means_no_gradient() {
        let req = RenderRequest::<LinearStyle> { colors: None, ..RenderRequest::new(&[]) };
        assert_eq!(render(&req, SIZE), Ok(RenderOutcome::NoGradient));
    }

    #[test]
    fn empty_colors_means_no_gradient() {
        let req = RenderRequest::<RadialStyle>::new(&[]).state(DimmingState::Dimmed);
        assert_eq!(render(&req, SIZE), Ok(RenderOutcome::NoGradient));
    }

    #[test]
    fn empty_colors_skip_location_validation() {
        let req = RenderRequest::<LinearStyle>::new(&[]).locations(&[0.5]);
        assert_eq!(render(&req, SIZE), Ok(RenderOutcome::NoGradient));
    }

    // ── errors ────────────────────────────────────────────────────────────

    #[test]
    fn location_count_mismatch_propagates() {
        let colors = list(&[YELLOW, PURPLE]);
        let req = RenderRequest::<LinearStyle>::new(&colors).locations(&[0.0, 0.5, 1.0]);
        assert_eq!(
            render(&req, SIZE),
            Err(GradientError::RampLengthMismatch { colors: 2, stops: 3 })
        );
    }

    #[test]
    fn non_monotonic_locations_propagate() {
        let colors = list(&[YELLOW, PURPLE]);
        let req = RenderRequest::<LinearStyle>::new(&colors).locations(&[0.9, 0.1]);
        assert_eq!(render(&req, SIZE), Err(GradientError::RampStopsNotMonotonic { index: 1 }));
    }

    #[test]
    fn dimmed_list_must_match_colors() {
        let colors = list(&[YELLOW, PURPLE]);
        let dimmed = list(&[Color::black()]);
        let req = RenderRequest::<LinearStyle>::new(&colors)
            .dimmed_colors(&dimmed)
            .state(DimmingState::Dimmed);
        assert_eq!(
            render(&req, SIZE),
            Err(GradientError::RampLengthMismatch { colors: 2, stops: 1 })
        );
    }

    #[test]
    fn mismatched_dimmed_list_is_ignored_while_normal() {
        let colors = list(&[YELLOW, PURPLE]);
        let dimmed = list(&[Color::black()]);
        let req = RenderRequest::<LinearStyle>::new(&colors).dimmed_colors(&dimmed);
        assert!(render(&req, SIZE).unwrap().is_gradient());
    }

    #[test]
    fn unsupported_color_model_propagates() {
        let colors = vec![SourceColor::from(YELLOW), SourceColor::Pattern(9)];
        let req = RenderRequest::<LinearStyle>::new(&colors);
        assert_eq!(
            render(&req, SIZE),
            Err(GradientError::UnsupportedColorModel(ColorModel::Pattern))
        );
    }

    // ── concurrency ───────────────────────────────────────────────────────

    #[test]
    fn independent_requests_render_in_parallel() {
        let colors = list(&[YELLOW, PURPLE]);
        let expected = render(&RenderRequest::<LinearStyle>::new(&colors), SIZE).unwrap();

        std::thread::scope(|s| {
            let handles: Vec<_> = (0..4)
                .map(|_| s.spawn(|| render(&RenderRequest::<LinearStyle>::new(&colors), SIZE)))
                .collect();
            for h in handles {
                assert_eq!(h.join().unwrap(), Ok(expected.clone()));
            }
        });
    }
}
