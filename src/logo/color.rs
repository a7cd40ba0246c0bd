//! The filled color composition.
//!
//! Three opaque primary circles are painted inside the outer silhouette,
//! then the pairwise and triple overlap regions are repainted with solid
//! mix tones under nested clips. Later paints occlude earlier ones
//! pixel-for-pixel, which reads as three translucent disks overlapping
//! while using only opaque fills.

use crate::config::{ColorGeometry, LogoConfig};
use crate::error::Result;
use crate::markup::{circle, clip_circle, clipped_group, Document, Element};

use super::{BLUE, CANVAS, CYAN, GREEN, MAGENTA, RED, WHITE, YELLOW};

/// Padding around the outer circle in the cropped variant.
const CROP_PADDING: f64 = 20.0;

/// Renders the color variant on the full 1024x1024 canvas.
pub fn color_svg(config: &LogoConfig) -> Result<String> {
    config.validate()?;
    let doc = Document::with_view_box(0.0, 0.0, CANVAS, CANVAS).sized(CANVAS, CANVAS);
    Ok(paint(&config.color, doc))
}

/// Renders the color variant cropped to the outer circle plus a small
/// padding, for contexts where transparent margin is wasted space.
pub fn color_svg_cropped(config: &LogoConfig) -> Result<String> {
    config.validate()?;
    let c = &config.color;
    let min_x = c.outer_x - c.outer_radius - CROP_PADDING;
    let min_y = c.outer_y - c.outer_radius - CROP_PADDING;
    let size = 2.0 * (c.outer_radius + CROP_PADDING);
    let doc = Document::with_view_box(min_x, min_y, size, size).sized(size, size);
    Ok(paint(&config.color, doc))
}

fn filled(cx: f64, cy: f64, r: f64, fill: &'static str) -> Element {
    circle(cx, cy, r).attr("fill", fill)
}

fn paint(c: &ColorGeometry, doc: Document) -> String {
    let r = c.circle_radius;

    // Overlap z-order matters: each mix tone is clipped by every region it
    // belongs to, and the triple-overlap white goes on top.
    let body = clipped_group("outerColor")
        .child(filled(c.green_x, c.green_y, r, GREEN))
        .child(filled(c.red_x, c.red_y, r, RED))
        .child(filled(c.blue_x, c.blue_y, r, BLUE))
        .child(clipped_group("greenClip").child(filled(c.red_x, c.red_y, r, YELLOW)))
        .child(clipped_group("greenClip").child(filled(c.blue_x, c.blue_y, r, CYAN)))
        .child(clipped_group("redClip").child(filled(c.blue_x, c.blue_y, r, MAGENTA)))
        .child(
            clipped_group("greenClip")
                .child(clipped_group("redClip").child(filled(c.blue_x, c.blue_y, r, WHITE))),
        );

    doc.def(clip_circle("outerColor", circle(c.outer_x, c.outer_y, c.outer_radius)))
        .def(clip_circle("greenClip", circle(c.green_x, c.green_y, r)))
        .def(clip_circle("redClip", circle(c.red_x, c.red_y, r)))
        .def(clip_circle("blueClip", circle(c.blue_x, c.blue_y, r)))
        .push(body)
        .to_markup()
}

// ============================================================================
// Tests
// ============================================================================
