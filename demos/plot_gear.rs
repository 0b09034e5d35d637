//! Gear outline plotter — writes a generated gear outline as an SVG
//! document.
//!
//! Usage:
//! ```text
//! cargo run --example plot_gear                 # writes gear.svg
//! cargo run --example plot_gear -- profile.svg
//! ```

use std::fmt::Write as _;

use gearform::geometry::GearSpec;
use gearform::outline::{GearOutline, GenerateGear};
use gearform::trace::{StrokeRole, TraceParams};
use tracing::info;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::INFO.into());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let spec = GearSpec::default();
    let outline = GenerateGear::new(spec, TraceParams::default()).execute()?;
    info!(
        teeth = spec.tooth_count(),
        strokes = outline.strokes.len(),
        "generated gear outline"
    );

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "gear.svg".to_owned());
    std::fs::write(&path, render_svg(&outline, spec.outer_radius())?)?;
    info!(%path, "wrote svg");
    Ok(())
}

fn render_svg(outline: &GearOutline, outer_radius: f64) -> Result<String, std::fmt::Error> {
    let extent = outer_radius * 1.1;
    let size = extent * 2.0;
    let mut svg = String::new();
    writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{:.3} {:.3} {size:.3} {size:.3}">"#,
        -extent, -extent
    )?;
    for stroke in &outline.strokes {
        let mut d = String::new();
        for (i, p) in stroke.points.iter().enumerate() {
            let command = if i == 0 { 'M' } else { 'L' };
            // svg y axis points down
            write!(d, "{command}{:.4} {:.4} ", p.x, -p.y)?;
        }
        writeln!(
            svg,
            r#"  <path d="{}" fill="none" stroke="{}" stroke-width="0.05"/>"#,
            d.trim_end(),
            stroke_color(stroke.role)
        )?;
    }
    writeln!(svg, "</svg>")?;
    Ok(svg)
}

fn stroke_color(role: StrokeRole) -> &'static str {
    match role {
        StrokeRole::RootCircle => "#9aa0a6",
        StrokeRole::Spoke => "#c5221f",
        StrokeRole::FlankForward | StrokeRole::FlankReverse => "#1a73e8",
        StrokeRole::TopLand => "#188038",
    }
}
