//! The stroked monochrome compositions: mono, white, and menu bar.
//!
//! All three share one painter; they differ only in stroke color token and
//! viewBox. The outer ring is drawn at `outer_radius - outer_stroke_width / 2`
//! so its outside edge lands exactly on the outer clip boundary.

use crate::config::LogoConfig;
use crate::error::Result;
use crate::markup::{circle, clip_circle, clipped_group, Document, Element};

use super::CANVAS;

fn stroked(cx: f64, cy: f64, r: f64, width: f64, color: &'static str) -> Element {
    circle(cx, cy, r)
        .attr("fill", "none")
        .attr("stroke", color)
        .attr("stroke-width", width)
}

/// The shared stroke geometry: three primary outlines plus the outer ring,
/// clipped to the mono silhouette.
fn outline_group(config: &LogoConfig, stroke: &'static str) -> Element {
    let c = &config.color;
    let m = &config.mono;
    let ring_radius = m.outer_radius - m.outer_stroke_width / 2.0;

    let mut group = clipped_group("outerMono");
    for (cx, cy) in c.primary_centers() {
        group = group.child(stroked(cx, cy, c.circle_radius, m.stroke_width, stroke));
    }
    group.child(stroked(
        m.outer_x,
        m.outer_y,
        ring_radius,
        m.outer_stroke_width,
        stroke,
    ))
}

fn full_canvas_svg(config: &LogoConfig, stroke: &'static str) -> Result<String> {
    config.validate()?;
    let m = &config.mono;
    Ok(Document::with_view_box(0.0, 0.0, CANVAS, CANVAS)
        .sized(CANVAS, CANVAS)
        .def(clip_circle("outerMono", circle(m.outer_x, m.outer_y, m.outer_radius)))
        .push(outline_group(config, stroke))
        .to_markup())
}

/// Renders the monochrome variant: black outlines on the full canvas.
pub fn mono_svg(config: &LogoConfig) -> Result<String> {
    full_canvas_svg(config, "black")
}

/// Renders the white variant: identical geometry to [`mono_svg`], stroke
/// color inverted for dark backgrounds.
pub fn white_svg(config: &LogoConfig) -> Result<String> {
    full_canvas_svg(config, "white")
}

/// Renders the menu-bar variant: mono stroke geometry with the viewBox
/// cropped to the bounding box of the three primary circles expanded by
/// `circle_radius + stroke_width` on every side.
pub fn menubar_svg(config: &LogoConfig) -> Result<String> {
    config.validate()?;
    let c = &config.color;
    let m = &config.mono;

    let centers = c.primary_centers();
    let xs = centers.map(|(x, _)| x);
    let ys = centers.map(|(_, y)| y);
    let reach = c.circle_radius + m.stroke_width;

    let min_x = xs.iter().copied().fold(f64::INFINITY, f64::min) - reach;
    let max_x = xs.iter().copied().fold(f64::NEG_INFINITY, f64::max) + reach;
    let min_y = ys.iter().copied().fold(f64::INFINITY, f64::min) - reach;
    let max_y = ys.iter().copied().fold(f64::NEG_INFINITY, f64::max) + reach;

    Ok(Document::with_view_box(min_x, min_y, max_x - min_x, max_y - min_y)
        .def(clip_circle("outerMono", circle(m.outer_x, m.outer_y, m.outer_radius)))
        .push(outline_group(config, "black"))
        .to_markup())
}

// ============================================================================
// Tests
// ============================================================================
