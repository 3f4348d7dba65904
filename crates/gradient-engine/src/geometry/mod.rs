//! Surface-size → gradient geometry.
//!
//! Each gradient kind contributes two things to the renderer:
//! - a geometry function (`LinearStyle::points`, `RadialStyle::circles`)
//! - a fixed set of extend options for the drawing backend
//!
//! Extending a kind:
//! - add a style enum in its own module
//! - add a `GradientKind` variant with its `Extend` set
//! - add a `Geometry` variant and implement `GradientStyle`

mod linear;
mod radial;

use core::fmt::Debug;

use crate::coords::{Point, Size};

pub use linear::LinearStyle;
pub use radial::RadialStyle;

/// Which side(s) of the ramp the backend keeps painting with the edge color.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Extend {
    /// Paint the first color before the start point / inside the start circle.
    pub before_start: bool,
    /// Paint the last color past the end point / outside the end circle.
    pub after_end: bool,
}

impl Extend {
    #[inline]
    pub const fn new(before_start: bool, after_end: bool) -> Self {
        Self { before_start, after_end }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum GradientKind {
    Linear,
    Radial,
}

impl GradientKind {
    /// Backend drawing options for this kind.
    ///
    /// Linear gradients clamp past the end only. Radial gradients clamp on both
    /// sides, which fills the corners outside a `Fit` circle with the last color.
    #[inline]
    pub const fn extend(self) -> Extend {
        match self {
            GradientKind::Linear => Extend::new(false, true),
            GradientKind::Radial => Extend::new(true, true),
        }
    }
}

/// A circle in surface space.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Circle {
    pub center: Point,
    pub radius: f32,
}

impl Circle {
    #[inline]
    pub const fn new(center: Point, radius: f32) -> Self {
        Self { center, radius }
    }
}

/// Concrete draw geometry for one render.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Geometry {
    Linear { start: Point, end: Point },
    Radial { start: Circle, end: Circle },
}

impl Geometry {
    #[inline]
    pub fn kind(&self) -> GradientKind {
        match self {
            Geometry::Linear { .. } => GradientKind::Linear,
            Geometry::Radial { .. } => GradientKind::Radial,
        }
    }
}

/// A style that can be resolved against a surface size.
///
/// The renderer is generic over this trait; the style type alone decides whether a
/// linear or radial gradient is produced.
pub trait GradientStyle: Copy + Debug + Default + PartialEq {
    const KIND: GradientKind;

    fn geometry(&self, size: Size) -> Geometry;

    #[inline]
    fn extend(&self) -> Extend {
        Self::KIND.extend()
    }
}
