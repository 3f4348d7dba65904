use super::Point;

/// Surface size supplied by the host on every render.
///
/// Both dimensions are expected to be non-negative. Nothing derived from a size is
/// cached across renders, so a resize simply means passing a new value.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn center(self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    #[inline]
    pub fn min_side(self) -> f32 {
        self.width.min(self.height)
    }

    #[inline]
    pub fn max_side(self) -> f32 {
        self.width.max(self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_is_half_extent() {
        assert_eq!(Size::new(100.0, 200.0).center(), Point::new(50.0, 100.0));
    }

    #[test]
    fn min_and_max_side() {
        let s = Size::new(100.0, 200.0);
        assert_eq!(s.min_side(), 100.0);
        assert_eq!(s.max_side(), 200.0);
    }
}
