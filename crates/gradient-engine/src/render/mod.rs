//! Gradient rendering: properties + surface size → backend-ready descriptor.

mod descriptor;
mod renderer;
pub mod uniform;

pub use descriptor::{GradientDescriptor, RenderOutcome};
pub use renderer::{render, RenderRequest};
pub use uniform::GradientUniform;
