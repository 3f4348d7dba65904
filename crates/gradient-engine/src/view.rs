//! Host-side gradient properties with redraw tracking.
//!
//! `GradientView` holds what a host surface owns (colors, dimmed colors, stop
//! locations, style, dimming state) and raises `needs_display` whenever a change
//! could alter the drawn result. Rendering stays a pure function of the current
//! values; the host decides when to call [`GradientView::draw`].

use crate::coords::Size;
use crate::dimming::DimmingState;
use crate::error::GradientError;
use crate::geometry::{GradientStyle, LinearStyle, RadialStyle};
use crate::paint::SourceColor;
use crate::render::{render, RenderOutcome, RenderRequest};

pub type LinearGradientView = GradientView<LinearStyle>;
pub type RadialGradientView = GradientView<RadialStyle>;

#[derive(Debug, Clone, PartialEq)]
pub struct GradientView<S: GradientStyle> {
    colors: Option<Vec<SourceColor>>,
    dimmed_colors: Option<Vec<SourceColor>>,
    locations: Option<Vec<f32>>,
    style: S,
    state: DimmingState,
    automatically_dims: bool,
    needs_display: bool,
}

impl<S: GradientStyle> Default for GradientView<S> {
    fn default() -> Self {
        Self {
            colors: None,
            dimmed_colors: None,
            locations: None,
            style: S::default(),
            state: DimmingState::Normal,
            automatically_dims: true,
            needs_display: false,
        }
    }
}

impl<S: GradientStyle> GradientView<S> {
    pub fn new() -> Self {
        Self::default()
    }

    // ── properties ────────────────────────────────────────────────────────

    /// Colors of the gradient. `None` draws the host background instead.
    pub fn set_colors(&mut self, colors: Option<Vec<SourceColor>>) {
        self.colors = colors;
        self.needs_display = true;
    }

    /// Colors used while dimmed. Must have as many entries as `colors`; they share
    /// `locations`. `None` falls back to automatic dimming.
    pub fn set_dimmed_colors(&mut self, dimmed_colors: Option<Vec<SourceColor>>) {
        self.dimmed_colors = dimmed_colors;
        self.needs_display = true;
    }

    /// Stop positions in `[0, 1]`, non-decreasing. `None` spreads stops uniformly.
    pub fn set_locations(&mut self, locations: Option<Vec<f32>>) {
        self.locations = locations;
        self.needs_display = true;
    }

    pub fn set_style(&mut self, style: S) {
        self.style = style;
        self.needs_display = true;
    }

    pub fn set_automatically_dims(&mut self, enabled: bool) {
        self.automatically_dims = enabled;
        self.needs_display = true;
    }

    /// Applies the host's dimming state.
    ///
    /// Only requests a redraw when the state actually changes and something would
    /// render differently: automatic dimming is on or an explicit dimmed list exists.
    pub fn set_dimming_state(&mut self, state: DimmingState) {
        if self.state == state {
            return;
        }
        self.state = state;
        if self.automatically_dims || self.dimmed_colors.is_some() {
            self.needs_display = true;
        }
    }

    #[inline]
    pub fn colors(&self) -> Option<&[SourceColor]> {
        self.colors.as_deref()
    }

    #[inline]
    pub fn dimmed_colors(&self) -> Option<&[SourceColor]> {
        self.dimmed_colors.as_deref()
    }

    #[inline]
    pub fn locations(&self) -> Option<&[f32]> {
        self.locations.as_deref()
    }

    #[inline]
    pub fn style(&self) -> S {
        self.style
    }

    #[inline]
    pub fn dimming_state(&self) -> DimmingState {
        self.state
    }

    #[inline]
    pub fn automatically_dims(&self) -> bool {
        self.automatically_dims
    }

    // ── drawing ───────────────────────────────────────────────────────────

    /// True when a property changed since the last [`draw`](Self::draw).
    #[inline]
    pub fn needs_display(&self) -> bool {
        self.needs_display
    }

    /// Borrowed snapshot of the current properties.
    pub fn request(&self) -> RenderRequest<'_, S> {
        RenderRequest {
            colors: self.colors(),
            dimmed_colors: self.dimmed_colors(),
            locations: self.locations(),
            style: self.style,
            state: self.state,
            automatically_dims: self.automatically_dims,
        }
    }

    /// Renders the current properties at `size` and clears the redraw flag.
    ///
    /// The flag is cleared on error as well; the configuration has to change before
    /// another attempt can succeed.
    pub fn draw(&mut self, size: Size) -> Result<RenderOutcome, GradientError> {
        self.needs_display = false;
        render(&self.request(), size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Geometry;
    use crate::paint::Color;

    const YELLOW: Color = Color::rgb(1.0, 1.0, 0.0);
    const PURPLE: Color = Color::rgb(0.5, 0.0, 0.5);

    fn yellow_purple() -> Option<Vec<SourceColor>> {
        Some(vec![YELLOW.into(), PURPLE.into()])
    }

    #[test]
    fn defaults() {
        let view = LinearGradientView::new();
        assert_eq!(view.style(), LinearStyle::Vertical);
        assert_eq!(RadialGradientView::new().style(), RadialStyle::Fit);
        assert_eq!(view.dimming_state(), DimmingState::Normal);
        assert!(view.automatically_dims());
        assert!(view.colors().is_none());
        assert!(!view.needs_display());
    }

    #[test]
    fn property_changes_request_redraw() {
        let mut view = LinearGradientView::new();
        view.set_colors(yellow_purple());
        assert!(view.needs_display());

        view.draw(Size::new(10.0, 10.0)).unwrap();
        assert!(!view.needs_display());

        view.set_locations(Some(vec![0.0, 1.0]));
        assert!(view.needs_display());
        view.draw(Size::new(10.0, 10.0)).unwrap();

        view.set_style(LinearStyle::Horizontal);
        assert!(view.needs_display());
    }

    #[test]
    fn dimming_change_without_auto_or_override_is_not_a_redraw() {
        let mut view = LinearGradientView::new();
        view.set_colors(yellow_purple());
        view.set_automatically_dims(false);
        view.draw(Size::new(10.0, 10.0)).unwrap();

        view.set_dimming_state(DimmingState::Dimmed);
        assert!(!view.needs_display());
        assert_eq!(view.dimming_state(), DimmingState::Dimmed);
    }

    #[test]
    fn dimming_change_with_auto_dims_is_a_redraw() {
        let mut view = RadialGradientView::new();
        view.set_colors(yellow_purple());
        view.draw(Size::new(10.0, 10.0)).unwrap();

        view.set_dimming_state(DimmingState::Dimmed);
        assert!(view.needs_display());

        view.draw(Size::new(10.0, 10.0)).unwrap();
        view.set_dimming_state(DimmingState::Dimmed);
        assert!(!view.needs_display());
    }

    #[test]
    fn draw_uses_current_size() {
        let mut view = LinearGradientView::new();
        view.set_colors(yellow_purple());

        let small = view.draw(Size::new(10.0, 20.0)).unwrap();
        let large = view.draw(Size::new(10.0, 400.0)).unwrap();

        let end = |o: &RenderOutcome| match o.descriptor().map(|d| d.geometry) {
            Some(Geometry::Linear { end, .. }) => end.y,
            _ => f32::NAN,
        };
        assert_eq!(end(&small), 20.0);
        assert_eq!(end(&large), 400.0);
    }

    #[test]
    fn dimmed_override_is_drawn() {
        let mut view = LinearGradientView::new();
        view.set_colors(yellow_purple());
        view.set_dimmed_colors(Some(vec![Color::black().into(), Color::white().into()]));
        view.set_dimming_state(DimmingState::Dimmed);

        let out = view.draw(Size::new(10.0, 10.0)).unwrap();
        let colors: Vec<Color> = out.descriptor().unwrap().ramp.colors().collect();
        assert_eq!(colors, vec![Color::black(), Color::white()]);
    }

    #[test]
    fn no_colors_draws_background() {
        let mut view = RadialGradientView::new();
        assert_eq!(view.draw(Size::new(10.0, 10.0)), Ok(RenderOutcome::NoGradient));
    }

    #[test]
    fn draw_errors_clear_the_flag() {
        let mut view = LinearGradientView::new();
        view.set_colors(yellow_purple());
        view.set_locations(Some(vec![0.5]));
        assert!(view.draw(Size::new(10.0, 10.0)).is_err());
        assert!(!view.needs_display());
    }
}
