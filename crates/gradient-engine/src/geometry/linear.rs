use crate::coords::{Point, Size};

use super::{Geometry, GradientKind, GradientStyle};

/// Direction of a linear gradient.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub enum LinearStyle {
    /// Top edge to bottom edge.
    #[default]
    Vertical,
    /// Left edge to right edge.
    Horizontal,
    /// Caller-supplied start and end points, used as-is.
    Custom(Point, Point),
}

impl LinearStyle {
    /// Start and end points for a surface of `size`.
    ///
    /// Custom points are not checked against the surface bounds.
    #[inline]
    pub fn points(self, size: Size) -> (Point, Point) {
        match self {
            LinearStyle::Vertical => (Point::zero(), Point::new(0.0, size.height)),
            LinearStyle::Horizontal => (Point::zero(), Point::new(size.width, 0.0)),
            LinearStyle::Custom(start, end) => (start, end),
        }
    }
}

impl GradientStyle for LinearStyle {
    const KIND: GradientKind = GradientKind::Linear;

    fn geometry(&self, size: Size) -> Geometry {
        let (start, end) = self.points(size);
        Geometry::Linear { start, end }
    }
}
