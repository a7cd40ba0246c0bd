//! The logo geometry model.
//!
//! Each variant is a pure function from a [`LogoConfig`](crate::LogoConfig)
//! to SVG markup. The favicon is the one deliberate exception: it is an
//! independently tuned small-size design and takes no configuration.

mod color;
mod favicon;
mod outline;

pub use color::{color_svg, color_svg_cropped};
pub use favicon::favicon_svg;
pub use outline::{menubar_svg, mono_svg, white_svg};

use crate::config::LogoConfig;
use crate::error::Result;

/// Side length of the fixed square canvas used by the full-size variants.
pub(crate) const CANVAS: f64 = 1024.0;

// Brand palette. The mixed tones are the subtractive overlaps of the three
// primaries, painted as opaque fills under nested clips.
pub(crate) const GREEN: &str = "#00A652";
pub(crate) const RED: &str = "#ED1C24";
pub(crate) const BLUE: &str = "#2E3192";
pub(crate) const YELLOW: &str = "#FCF006";
pub(crate) const CYAN: &str = "#01ACF1";
pub(crate) const MAGENTA: &str = "#EA018E";
pub(crate) const WHITE: &str = "#FFFFFF";

// ============================================================================
// Variant
// ============================================================================

/// The closed set of visual variants.
///
/// Matching on this enum is exhaustive everywhere (renderer, batch,
/// showcase): adding a variant forces every consumer to handle it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    /// Solid fills with subtractive overlap colors, 1024x1024 canvas.
    Color,
    /// Black stroked outlines plus outer ring, 1024x1024 canvas.
    Mono,
    /// Mono stroke geometry on a tightly cropped viewBox.
    Menubar,
    /// Simplified flat design on a rounded black square, 64x64 grid.
    Favicon,
    /// Mono geometry with white strokes, for dark backgrounds.
    White,
}

impl Variant {
    pub const ALL: [Variant; 5] = [
        Variant::Color,
        Variant::Mono,
        Variant::Menubar,
        Variant::Favicon,
        Variant::White,
    ];

    /// Renders this variant to SVG markup.
    pub fn render(self, config: &LogoConfig) -> Result<String> {
        match self {
            Variant::Color => color_svg(config),
            Variant::Mono => mono_svg(config),
            Variant::Menubar => menubar_svg(config),
            Variant::Favicon => Ok(favicon_svg()),
            Variant::White => white_svg(config),
        }
    }

    /// File stem used for this variant's SVG source on disk.
    pub fn file_stem(self) -> &'static str {
        match self {
            Variant::Color => "zoo-logo",
            Variant::Mono => "zoo-logo-mono",
            Variant::Menubar => "zoo-logo-menubar",
            Variant::Favicon => "zoo-logo-favicon",
            Variant::White => "zoo-logo-white",
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_variant_renders_with_default_config() {
        let config = LogoConfig::default();
        for variant in Variant::ALL {
            let svg = variant.render(&config).unwrap();
            assert!(svg.starts_with("<svg"), "{variant:?} markup malformed");
            assert!(svg.trim_end().ends_with("</svg>"));
        }
    }

    #[test]
    fn invalid_config_rejected_before_rendering() {
        let mut config = LogoConfig::default();
        config.color.outer_radius = -5.0;
        for variant in Variant::ALL {
            if variant == Variant::Favicon {
                // The favicon is non-parametric and cannot fail.
                continue;
            }
            assert!(variant.render(&config).is_err(), "{variant:?} accepted bad config");
        }
    }

    #[test]
    fn file_stems_are_unique() {
        let mut stems: Vec<_> = Variant::ALL.iter().map(|v| v.file_stem()).collect();
        stems.sort();
        stems.dedup();
        assert_eq!(stems.len(), Variant::ALL.len());
    }
}
