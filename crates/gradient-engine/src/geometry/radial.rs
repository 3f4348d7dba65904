use crate::coords::{Point, Size};

use super::{Circle, Geometry, GradientKind, GradientStyle};

/// Extent of a radial gradient.
///
/// `Fit` and `Fill` both grow from a zero-radius circle at the surface center.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub enum RadialStyle {
    /// End circle inscribed in the surface (radius = shorter side / 2).
    #[default]
    Fit,
    /// End circle reaching the longer side (radius = longer side / 2).
    Fill,
    /// Caller-supplied start center, start radius, end center, end radius.
    Custom(Point, f32, Point, f32),
}

impl RadialStyle {
    /// Start and end circles for a surface of `size`.
    pub fn circles(self, size: Size) -> (Circle, Circle) {
        match self {
            RadialStyle::Fit => {
                let center = size.center();
                (Circle::new(center, 0.0), Circle::new(center, size.min_side() / 2.0))
            }
            RadialStyle::Fill => {
                let center = size.center();
                (Circle::new(center, 0.0), Circle::new(center, size.max_side() / 2.0))
            }
            RadialStyle::Custom(start_center, start_radius, end_center, end_radius) => (
                Circle::new(start_center, start_radius),
                Circle::new(end_center, end_radius),
            ),
        }
    }
}

impl GradientStyle for RadialStyle {
    const KIND: GradientKind = GradientKind::Radial;

    fn geometry(&self, size: Size) -> Geometry {
        let (start, end) = self.circles(size);
        Geometry::Radial { start, end }
    }
}
