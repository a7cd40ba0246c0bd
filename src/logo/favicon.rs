//! The favicon: a fixed 64x64 design tuned for 16-64 px legibility.
//!
//! Not derived from [`LogoConfig`](crate::LogoConfig): three flat circles
//! on a rounded black square, tuned independently of the parametric
//! overlap composition.

use crate::markup::{circle, Document, Element};

use super::{BLUE, GREEN, RED};

const GRID: f64 = 64.0;
const CORNER_RADIUS: f64 = 8.0;
const CIRCLE_RADIUS: f64 = 12.0;

/// Renders the favicon variant. Infallible: there is no configuration to
/// reject.
pub fn favicon_svg() -> String {
    let background = Element::new("rect")
        .attr("width", GRID)
        .attr("height", GRID)
        .attr("rx", CORNER_RADIUS)
        .attr("fill", "#000000");

    Document::with_view_box(0.0, 0.0, GRID, GRID)
        .push(background)
        .push(circle(32.0, 22.0, CIRCLE_RADIUS).attr("fill", GREEN))
        .push(circle(21.0, 40.0, CIRCLE_RADIUS).attr("fill", RED))
        .push(circle(43.0, 40.0, CIRCLE_RADIUS).attr("fill", BLUE))
        .to_markup()
}
