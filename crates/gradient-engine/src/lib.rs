//! Gradient engine.
//!
//! Computes everything needed to draw a linear or radial gradient inside a
//! rectangular surface, including the desaturated look used while the surface is
//! dimmed. Drawing itself is left to the host's backend.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`paint`] | `Color`, `Hsba`, `SourceColor`, `GradientRamp` |
//! | [`dimming`] | `DimmingState`, rule chain, `select_colors` |
//! | [`geometry`] | `LinearStyle`, `RadialStyle`, `Extend`, `GradientStyle` |
//! | [`render`] | `render`, `GradientDescriptor`, `GradientUniform` |
//! | [`view`] | `GradientView` property bag with redraw tracking |
//!
//! # Quick start
//!
//! ```rust
//! use gradient_engine::coords::{Point, Size};
//! use gradient_engine::geometry::{Geometry, LinearStyle};
//! use gradient_engine::paint::Color;
//! use gradient_engine::view::LinearGradientView;
//!
//! let mut view = LinearGradientView::new();
//! view.set_colors(Some(vec![Color::rgb(1.0, 1.0, 0.0).into(), Color::rgb(0.5, 0.0, 0.5).into()]));
//! view.set_style(LinearStyle::Vertical);
//!
//! let out = view.draw(Size::new(200.0, 150.0)).unwrap();
//! let geometry = out.descriptor().unwrap().geometry;
//! assert_eq!(geometry, Geometry::Linear { start: Point::zero(), end: Point::new(0.0, 150.0) });
//! ```

pub mod coords;
pub mod dimming;
pub mod error;
pub mod geometry;
pub mod logging;
pub mod paint;
pub mod render;
pub mod view;

pub use error::GradientError;
