use anyhow::{Context, Result};
use gradient_engine::coords::Size;
use gradient_engine::dimming::DimmingState;
use gradient_engine::geometry::{Geometry, GradientStyle, LinearStyle, RadialStyle};
use gradient_engine::logging::{init_logging, LoggingConfig};
use gradient_engine::paint::{Color, SourceColor};
use gradient_engine::render::{GradientUniform, RenderOutcome};
use gradient_engine::view::{GradientView, LinearGradientView, RadialGradientView};

const YELLOW: Color = Color::rgb(1.0, 1.0, 0.0);
const PURPLE: Color = Color::rgb(0.5, 0.0, 0.5);

/// Both demo surfaces share this frame size.
const SURFACE: Size = Size::new(200.0, 150.0);

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let colors: Vec<SourceColor> = vec![YELLOW.into(), PURPLE.into()];

    let mut linear = LinearGradientView::new();
    linear.set_colors(Some(colors.clone()));
    linear.set_style(LinearStyle::Vertical);

    let mut radial = RadialGradientView::new();
    radial.set_colors(Some(colors));
    radial.set_style(RadialStyle::Fill);

    println!();
    println!("  ── normal ───────────────────────────────────────────");
    show("linear", &mut linear)?;
    show("radial", &mut radial)?;

    // An alert above the views dims everything below it.
    log::info!("alert shown; dimming surfaces");
    linear.set_dimming_state(DimmingState::Dimmed);
    radial.set_dimming_state(DimmingState::Dimmed);

    println!();
    println!("  ── dimmed ───────────────────────────────────────────");
    show("linear", &mut linear)?;
    show("radial", &mut radial)?;
    println!();

    Ok(())
}

fn show<S: GradientStyle>(name: &str, view: &mut GradientView<S>) -> Result<()> {
    if !view.needs_display() {
        log::debug!("{name}: up to date, skipping");
        return Ok(());
    }

    let outcome = view
        .draw(SURFACE)
        .with_context(|| format!("rendering {name} gradient"))?;

    let descriptor = match outcome {
        RenderOutcome::Gradient(d) => d,
        RenderOutcome::NoGradient => {
            println!("  {name:<8} flat background");
            return Ok(());
        }
    };

    match descriptor.geometry {
        Geometry::Linear { start, end } => println!(
            "  {name:<8} ({}, {}) → ({}, {})",
            start.x, start.y, end.x, end.y
        ),
        Geometry::Radial { start, end } => println!(
            "  {name:<8} ({}, {}) r{} → ({}, {}) r{}",
            start.center.x, start.center.y, start.radius, end.center.x, end.center.y, end.radius
        ),
    }

    for stop in descriptor.ramp.stops() {
        let c = stop.color;
        println!("           {:>4.2}  rgba({:.2}, {:.2}, {:.2}, {:.2})", stop.t, c.r, c.g, c.b, c.a);
    }

    let mut warned = false;
    let uniform = GradientUniform::from_descriptor(&descriptor, &mut warned);
    log::debug!("{name}: uniform kind={} extend={:#b} stops={}", uniform.kind, uniform.extend, uniform.stop_count);

    Ok(())
}
