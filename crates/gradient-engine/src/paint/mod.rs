//! Color model shared by the dimming policy and the renderer.
//!
//! Scope:
//! - RGBA / HSBA representation and conversion
//! - normalization of host colors into RGB
//! - validated color ramps (colors + stop positions)
//!
//! Geometry types remain in `coords` and `geometry`.

pub mod color;
pub mod model;
pub mod ramp;

pub use color::{Color, Hsba};
pub use model::{normalize_all, normalize_to_rgb, ColorModel, SourceColor};
pub use ramp::{ColorStop, GradientRamp};
