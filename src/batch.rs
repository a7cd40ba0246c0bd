//! The standard asset enumeration and the batch runner.
//!
//! Every request is independent: its own SVG string, its own target path,
//! no two requests share a path. A failed emission is logged with its path
//! and size and the batch keeps going; the caller decides what a failure
//! means for the process.

use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::config::LogoConfig;
use crate::emit::{emit, PlacementPolicy, RenderRequest, BLACK};
use crate::error::{Error, Result};
use crate::logo::{color_svg_cropped, Variant};

/// Standard app icon ladder, emitted for the color and mono variants.
pub const ICON_SIZES: [u32; 7] = [16, 32, 64, 128, 256, 512, 1024];

/// Favicon ladder, emitted from the simplified favicon design.
pub const FAVICON_SIZES: [u32; 9] = [16, 32, 48, 64, 96, 128, 192, 256, 512];

/// Apple touch-icon ladder.
pub const TOUCH_ICON_SIZES: [u32; 10] = [57, 60, 72, 76, 114, 120, 144, 152, 167, 180];

/// Social share canvases (non-square).
pub const SOCIAL_SIZES: [(u32, u32); 3] = [(1200, 630), (1200, 600), (1200, 1200)];

/// macOS app-icon base sizes; each also gets an `@2x` file at double size.
const APP_ICON_BASES: [u32; 5] = [16, 32, 128, 256, 512];

/// Dock icon sizes; each also gets an `@2x` file at double size.
const DOCK_SIZES: [u32; 3] = [128, 256, 512];

/// Menu-bar template files and their pixel sizes.
const MENUBAR_TEMPLATES: [(&str, u32); 5] = [
    ("iconTemplate.png", 16),
    ("iconTemplate@2x.png", 32),
    ("iconTemplate@3x.png", 48),
    ("iconTemplate-22.png", 22),
    ("iconTemplate-22@2x.png", 44),
];

const DOCK_LOGO_FRACTION: f32 = 0.8;
// macOS-style squircle approximation.
const DOCK_CORNER_FRACTION: f32 = 0.22;
const TOUCH_LOGO_FRACTION: f32 = 0.8;
const SOCIAL_LOGO_FRACTION: f32 = 0.4;

// ============================================================================
// Request construction
// ============================================================================

/// Builds the full fixed asset enumeration rooted at `out_dir`.
///
/// Each variant's markup is rendered once and cloned into the requests that
/// use it.
pub fn standard_requests(config: &LogoConfig, out_dir: &Path) -> Result<Vec<RenderRequest>> {
    let color = Variant::Color.render(config)?;
    let mono = Variant::Mono.render(config)?;
    let menubar = Variant::Menubar.render(config)?;
    let favicon = Variant::Favicon.render(config)?;

    let mut requests = Vec::new();

    // Reference icon ladder, color and mono.
    for size in ICON_SIZES {
        requests.push(RenderRequest::new(
            color.clone(),
            out_dir.join(format!("icons/zoo-{size}.png")),
            size,
            PlacementPolicy::Plain,
        ));
        requests.push(RenderRequest::new(
            mono.clone(),
            out_dir.join(format!("icons/zoo-mono-{size}.png")),
            size,
            PlacementPolicy::Plain,
        ));
    }

    // macOS app icon set with @2x names.
    for base in APP_ICON_BASES {
        requests.push(RenderRequest::new(
            color.clone(),
            out_dir.join(format!("app/icon_{base}x{base}.png")),
            base,
            PlacementPolicy::Plain,
        ));
        requests.push(RenderRequest::new(
            color.clone(),
            out_dir.join(format!("app/icon_{base}x{base}@2x.png")),
            base * 2,
            PlacementPolicy::Plain,
        ));
    }

    // Dock icons on a black rounded-rect background.
    for base in DOCK_SIZES {
        for (suffix, size) in [("", base), ("@2x", base * 2)] {
            let corner = (size as f32 * DOCK_CORNER_FRACTION).floor() as u32;
            requests.push(RenderRequest::new(
                color.clone(),
                out_dir.join(format!("dock/zoo-dock-{base}{suffix}.png")),
                size,
                PlacementPolicy::padded(BLACK, corner, DOCK_LOGO_FRACTION),
            ));
        }
    }

    // Favicons from the simplified small-size design.
    for size in FAVICON_SIZES {
        requests.push(RenderRequest::new(
            favicon.clone(),
            out_dir.join(format!("favicons/favicon-{size}x{size}.png")),
            size,
            PlacementPolicy::Plain,
        ));
    }

    // Apple touch icons: opaque background, sharp corners (iOS applies its
    // own mask).
    for size in TOUCH_ICON_SIZES {
        requests.push(RenderRequest::new(
            color.clone(),
            out_dir.join(format!("touch/apple-touch-icon-{size}x{size}.png")),
            size,
            PlacementPolicy::padded(BLACK, 0, TOUCH_LOGO_FRACTION),
        ));
    }

    // Social share images.
    for (width, height) in SOCIAL_SIZES {
        requests.push(RenderRequest::new(
            color.clone(),
            out_dir.join(format!("social/share-{width}x{height}.png")),
            width.max(height),
            PlacementPolicy::fixed_aspect(width, height, BLACK, SOCIAL_LOGO_FRACTION),
        ));
    }

    // Menu-bar templates from the tightly cropped variant.
    for (name, size) in MENUBAR_TEMPLATES {
        requests.push(RenderRequest::new(
            menubar.clone(),
            out_dir.join("menubar").join(name),
            size,
            PlacementPolicy::Plain,
        ));
    }

    Ok(requests)
}

/// Writes the SVG sources for every variant (plus the cropped color logo)
/// under `out_dir`, returning the written paths.
pub fn write_svg_sources(config: &LogoConfig, out_dir: &Path) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(out_dir).map_err(|e| Error::io(out_dir, e))?;

    let mut sources: Vec<(String, String)> = Variant::ALL
        .iter()
        .map(|&variant| {
            variant
                .render(config)
                .map(|svg| (format!("{}.svg", variant.file_stem()), svg))
        })
        .collect::<Result<_>>()?;
    sources.push(("zoo-logo-cropped.svg".into(), color_svg_cropped(config)?));

    let mut written = Vec::with_capacity(sources.len());
    for (name, svg) in sources {
        let path = out_dir.join(name);
        std::fs::write(&path, &svg).map_err(|e| Error::io(&path, e))?;
        written.push(path);
    }
    Ok(written)
}

// ============================================================================
// Batch runner
// ============================================================================

/// One failed emission, kept with enough context to report it.
#[derive(Debug)]
pub struct Failure {
    pub target: PathBuf,
    pub pixel_size: u32,
    pub error: Error,
}

/// Outcome of a batch run.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub written: Vec<PathBuf>,
    pub failures: Vec<Failure>,
}

impl BatchReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Runs every request in order. Failures are logged and collected; they
/// never abort the remaining requests.
pub fn run(requests: &[RenderRequest]) -> BatchReport {
    let mut report = BatchReport::default();
    for request in requests {
        match emit(&request.svg, &request.target, request.pixel_size, &request.policy) {
            Ok(()) => {
                info!("wrote {}", request.target.display());
                report.written.push(request.target.clone());
            }
            Err(error) => {
                warn!(
                    "failed to generate {} ({} px): {error}",
                    request.target.display(),
                    request.pixel_size
                );
                report.failures.push(Failure {
                    target: request.target.clone(),
                    pixel_size: request.pixel_size,
                    error,
                });
            }
        }
    }
    report
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emit::scaled_logo_size;
    use std::collections::HashSet;

    fn requests() -> Vec<RenderRequest> {
        standard_requests(&LogoConfig::default(), Path::new("dist")).unwrap()
    }

    #[test]
    fn enumeration_is_complete() {
        // icons 14 + app 10 + dock 6 + favicons 9 + touch 10 + social 3
        // + menubar 5
        assert_eq!(requests().len(), 57);
    }

    #[test]
    fn no_two_requests_share_a_target() {
        let all = requests();
        let unique: HashSet<_> = all.iter().map(|r| r.target.clone()).collect();
        assert_eq!(unique.len(), all.len());
    }

    #[test]
    fn menubar_sizes_cover_template_ladder() {
        let sizes: HashSet<u32> = requests()
            .iter()
            .filter(|r| r.target.starts_with("dist/menubar"))
            .map(|r| r.pixel_size)
            .collect();
        assert_eq!(sizes, HashSet::from([16, 22, 32, 44, 48]));
    }

    #[test]
    fn dock_icons_use_scaled_corner_radius() {
        let all = requests();
        let dock512 = all
            .iter()
            .find(|r| r.target.ends_with("zoo-dock-512.png"))
            .unwrap();
        match dock512.policy {
            PlacementPolicy::Padded {
                corner_radius,
                logo_fraction,
                ..
            } => {
                // floor(512 * 0.22) = 112
                assert_eq!(corner_radius, 112);
                assert_eq!(logo_fraction, DOCK_LOGO_FRACTION);
            }
            _ => unreachable!("dock icons are padded"),
        }
        let dock512_2x = all
            .iter()
            .find(|r| r.target.ends_with("zoo-dock-512@2x.png"))
            .unwrap();
        assert_eq!(dock512_2x.pixel_size, 1024);
    }

    #[test]
    fn social_images_are_fixed_aspect() {
        for request in requests()
            .iter()
            .filter(|r| r.target.starts_with("dist/social"))
        {
            assert!(matches!(request.policy, PlacementPolicy::FixedAspect { .. }));
        }
    }

    #[test]
    fn social_logo_size_uses_short_edge() {
        // The 1200x630 canvas scales the logo from the 630 edge.
        assert_eq!(scaled_logo_size(630, SOCIAL_LOGO_FRACTION), 252);
    }

    #[test]
    fn favicon_ladder_uses_favicon_markup() {
        let all = requests();
        let favicon = Variant::Favicon.render(&LogoConfig::default()).unwrap();
        for size in FAVICON_SIZES {
            let request = all
                .iter()
                .find(|r| r.target.ends_with(format!("favicon-{size}x{size}.png")))
                .unwrap();
            assert_eq!(request.svg, favicon);
        }
    }
}
