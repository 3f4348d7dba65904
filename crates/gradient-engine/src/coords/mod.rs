//! Coordinate types for the gradient surface.
//!
//! Local surface space:
//! - Origin top-left
//! - +X right, +Y down
//! - Units are whatever the host layout system uses (typically logical points)

mod point;
mod size;

pub use point::Point;
pub use size::Size;
