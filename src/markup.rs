//! Structured SVG markup construction.
//!
//! Every geometry function builds its output through [`Element`] and
//! [`Document`] instead of interpolating strings ad hoc, so the markup is
//! well-formed by construction and numeric values are emitted uniformly
//! (plain numbers, no unit suffixes, no rounding).

use std::fmt::{Display, Write};

// ============================================================================
// Element
// ============================================================================

/// A single SVG element: tag, attribute list, children.
///
/// Attributes serialize in insertion order. Values go through minimal XML
/// escaping; all values this crate emits are numbers, color tokens, and
/// `url(#id)` references, so escaping is a guard rather than a feature.
#[derive(Debug, Clone)]
pub struct Element {
    tag: &'static str,
    attributes: Vec<(&'static str, String)>,
    children: Vec<Element>,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn attr(mut self, name: &'static str, value: impl Display) -> Self {
        self.attributes.push((name, value.to_string()));
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    fn write_into(&self, out: &mut String, depth: usize) {
        let indent = "  ".repeat(depth);
        let _ = write!(out, "{indent}<{}", self.tag);
        for (name, value) in &self.attributes {
            let _ = write!(out, " {name}=\"{}\"", escape(value));
        }
        if self.children.is_empty() {
            out.push_str("/>\n");
        } else {
            out.push_str(">\n");
            for child in &self.children {
                child.write_into(out, depth + 1);
            }
            let _ = writeln!(out, "{indent}</{}>", self.tag);
        }
    }
}

/// `<circle cx=".." cy=".." r=".."/>`
pub fn circle(cx: f64, cy: f64, r: f64) -> Element {
    Element::new("circle").attr("cx", cx).attr("cy", cy).attr("r", r)
}

/// `<clipPath id=".."><circle .../></clipPath>`
pub fn clip_circle(id: &'static str, shape: Element) -> Element {
    Element::new("clipPath").attr("id", id).child(shape)
}

/// `<g clip-path="url(#id)">`
pub fn clipped_group(id: &'static str) -> Element {
    Element::new("g").attr("clip-path", format!("url(#{id})"))
}

// ============================================================================
// Document
// ============================================================================

/// An SVG document: viewBox, optional pixel size, defs, body.
#[derive(Debug, Clone)]
pub struct Document {
    view_box: (f64, f64, f64, f64),
    size: Option<(f64, f64)>,
    defs: Vec<Element>,
    body: Vec<Element>,
}

impl Document {
    pub fn with_view_box(min_x: f64, min_y: f64, width: f64, height: f64) -> Self {
        Self {
            view_box: (min_x, min_y, width, height),
            size: None,
            defs: Vec::new(),
            body: Vec::new(),
        }
    }

    /// Adds explicit `width`/`height` attributes to the root element.
    pub fn sized(mut self, width: f64, height: f64) -> Self {
        self.size = Some((width, height));
        self
    }

    pub fn def(mut self, def: Element) -> Self {
        self.defs.push(def);
        self
    }

    pub fn push(mut self, element: Element) -> Self {
        self.body.push(element);
        self
    }

    pub fn to_markup(&self) -> String {
        let (x, y, w, h) = self.view_box;
        let mut out = String::new();
        out.push_str("<svg");
        if let Some((width, height)) = self.size {
            let _ = write!(out, " width=\"{width}\" height=\"{height}\"");
        }
        let _ = writeln!(
            out,
            " viewBox=\"{x} {y} {w} {h}\" xmlns=\"http://www.w3.org/2000/svg\">"
        );
        if !self.defs.is_empty() {
            out.push_str("  <defs>\n");
            for def in &self.defs {
                def.write_into(&mut out, 2);
            }
            out.push_str("  </defs>\n");
        }
        for element in &self.body {
            element.write_into(&mut out, 1);
        }
        out.push_str("</svg>\n");
        out
    }
}

fn escape(value: &str) -> String {
    if !value.contains(['&', '<', '>', '"']) {
        return value.to_string();
    }
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

// ============================================================================
// Tests
// ============================================================================
