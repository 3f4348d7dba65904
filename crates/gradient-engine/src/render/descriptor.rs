use crate::geometry::{Extend, Geometry, GradientKind};
use crate::paint::GradientRamp;

/// Everything a drawing backend needs for one gradient draw.
///
/// Produced per render call and meant to be consumed right away; nothing in it
/// refers back to the host's properties.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientDescriptor {
    pub ramp: GradientRamp,
    pub geometry: Geometry,
    pub extend: Extend,
}

impl GradientDescriptor {
    #[inline]
    pub fn kind(&self) -> GradientKind {
        self.geometry.kind()
    }
}

/// Result of a successful render.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderOutcome {
    Gradient(GradientDescriptor),
    /// No colors to draw; the host falls back to its flat background fill.
    NoGradient,
}

impl RenderOutcome {
    #[inline]
    pub fn descriptor(&self) -> Option<&GradientDescriptor> {
        match self {
            RenderOutcome::Gradient(d) => Some(d),
            RenderOutcome::NoGradient => None,
        }
    }

    #[inline]
    pub fn is_gradient(&self) -> bool {
        matches!(self, RenderOutcome::Gradient(_))
    }
}
