//! The asset emission pipeline: one SVG string plus a placement policy in,
//! exactly one PNG file out.
//!
//! Pixel decode, scaling, and encoding are delegated to `resvg`/`tiny-skia`
//! and `image`; this module owns the sizing arithmetic, background
//! synthesis, compositing, and atomic file output.

use std::fs;
use std::io::{self, Cursor};
use std::path::{Path, PathBuf};

use image::{ImageFormat, Rgba, RgbaImage};
use palette::Srgb;
use resvg::tiny_skia::{Pixmap, Transform};
use resvg::usvg::{Options, Tree};

use crate::error::{Error, Result};
use crate::markup::{Document, Element};

/// Opaque black, the background of dock and touch icons.
pub const BLACK: Srgb<u8> = Srgb::new(0, 0, 0);

// ============================================================================
// PlacementPolicy
// ============================================================================

/// How a vector source is scaled and positioned onto the raster canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlacementPolicy {
    /// Scale the SVG to exactly `pixel_size` x `pixel_size`.
    Plain,
    /// Rounded-rect background of `pixel_size` squared; logo scaled to
    /// `floor(pixel_size * logo_fraction)` and integer-centered.
    Padded {
        background: Srgb<u8>,
        corner_radius: u32,
        logo_fraction: f32,
    },
    /// Background canvas of `width` x `height`; logo scaled to
    /// `floor(min(width, height) * logo_fraction)` and centered per axis.
    FixedAspect {
        width: u32,
        height: u32,
        background: Srgb<u8>,
        corner_radius: u32,
        logo_fraction: f32,
    },
}

impl PlacementPolicy {
    /// Padded policy; the fraction is clamped to 0.0-1.0.
    pub fn padded(background: Srgb<u8>, corner_radius: u32, logo_fraction: f32) -> Self {
        Self::Padded {
            background,
            corner_radius,
            logo_fraction: logo_fraction.clamp(0.0, 1.0),
        }
    }

    /// Fixed-aspect policy with sharp corners; the fraction is clamped to
    /// 0.0-1.0.
    pub fn fixed_aspect(width: u32, height: u32, background: Srgb<u8>, logo_fraction: f32) -> Self {
        Self::FixedAspect {
            width,
            height,
            background,
            corner_radius: 0,
            logo_fraction: logo_fraction.clamp(0.0, 1.0),
        }
    }
}

/// One pending emission: the markup, where it goes, and how it is placed.
///
/// Built per output file and consumed once; requests never share mutable
/// state, so a batch of them can run in any order.
#[derive(Debug, Clone)]
pub struct RenderRequest {
    pub svg: String,
    pub target: PathBuf,
    /// Canvas side length for `Plain` and `Padded`; ignored by
    /// `FixedAspect`, whose canvas comes from the policy.
    pub pixel_size: u32,
    pub policy: PlacementPolicy,
}

impl RenderRequest {
    pub fn new(
        svg: impl Into<String>,
        target: impl Into<PathBuf>,
        pixel_size: u32,
        policy: PlacementPolicy,
    ) -> Self {
        Self {
            svg: svg.into(),
            target: target.into(),
            pixel_size,
            policy,
        }
    }
}

// ============================================================================
// Sizing arithmetic
// ============================================================================

/// `floor(canvas * fraction)`: the logo's side length on a given canvas.
pub fn scaled_logo_size(canvas: u32, fraction: f32) -> u32 {
    (canvas as f32 * fraction).floor() as u32
}

/// `floor((canvas - logo) / 2)`: integer centering with the truncation
/// bias toward the top-left corner.
pub fn centered_offset(canvas: u32, logo: u32) -> u32 {
    canvas.saturating_sub(logo) / 2
}

/// Parses a `#rrggbb` (or `#rgb`) color string.
pub fn parse_color(value: &str) -> Result<Srgb<u8>> {
    value
        .parse::<Srgb<u8>>()
        .map_err(|_| Error::Config(format!("invalid color '{value}'")))
}

// ============================================================================
// emit
// ============================================================================

/// Converts one render request into exactly one raster file.
///
/// The parent directory is created recursively if absent. The file is
/// written via a sibling temp file and renamed into place, so a failed
/// emission never leaves a partial file at `target`. Identical inputs
/// produce byte-identical output.
pub fn emit(svg: &str, target: &Path, pixel_size: u32, policy: &PlacementPolicy) -> Result<()> {
    if let Some(parent) = target.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
        }
    }

    let image = match *policy {
        PlacementPolicy::Plain => rasterize(svg, pixel_size, pixel_size, target)?,
        PlacementPolicy::Padded {
            background,
            corner_radius,
            logo_fraction,
        } => compose(svg, pixel_size, pixel_size, background, corner_radius, logo_fraction, target)?,
        PlacementPolicy::FixedAspect {
            width,
            height,
            background,
            corner_radius,
            logo_fraction,
        } => compose(svg, width, height, background, corner_radius, logo_fraction, target)?,
    };

    write_png(&image, target)
}

fn compose(
    svg: &str,
    width: u32,
    height: u32,
    background: Srgb<u8>,
    corner_radius: u32,
    logo_fraction: f32,
    path: &Path,
) -> Result<RgbaImage> {
    let mut canvas = background_raster(width, height, corner_radius, background, path)?;

    let logo_size = scaled_logo_size(width.min(height), logo_fraction);
    if logo_size > 0 {
        let logo = rasterize(svg, logo_size, logo_size, path)?;
        let x = centered_offset(width, logo_size);
        let y = centered_offset(height, logo_size);
        composite_over(&mut canvas, &logo, x, y);
    }

    Ok(canvas)
}

/// Synthesizes the rounded-rect background by rasterizing a one-element
/// SVG at the exact canvas size (corner radius 0 gives sharp corners).
fn background_raster(
    width: u32,
    height: u32,
    corner_radius: u32,
    color: Srgb<u8>,
    path: &Path,
) -> Result<RgbaImage> {
    let rect = Element::new("rect")
        .attr("width", width)
        .attr("height", height)
        .attr("rx", corner_radius)
        .attr("fill", hex(color));
    let svg = Document::with_view_box(0.0, 0.0, f64::from(width), f64::from(height))
        .sized(f64::from(width), f64::from(height))
        .push(rect)
        .to_markup();
    rasterize(&svg, width, height, path)
}

fn hex(color: Srgb<u8>) -> String {
    format!("#{:02x}{:02x}{:02x}", color.red, color.green, color.blue)
}

// ============================================================================
// Rasterization
// ============================================================================

/// Parses the markup and renders it to exactly `width` x `height` pixels,
/// using independent per-axis scale factors.
fn rasterize(svg: &str, width: u32, height: u32, path: &Path) -> Result<RgbaImage> {
    let options = Options::default();
    let tree = Tree::from_str(svg, &options).map_err(|source| Error::Svg {
        path: path.to_path_buf(),
        source,
    })?;

    let mut pixmap = Pixmap::new(width, height).ok_or(Error::Pixmap {
        path: path.to_path_buf(),
        width,
        height,
    })?;

    let size = tree.size();
    let transform =
        Transform::from_scale(width as f32 / size.width(), height as f32 / size.height());
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    Ok(pixmap_to_rgba(&pixmap))
}

/// tiny-skia stores premultiplied alpha; `image` expects straight alpha.
fn pixmap_to_rgba(pixmap: &Pixmap) -> RgbaImage {
    let mut img = RgbaImage::new(pixmap.width(), pixmap.height());
    for (pixel, out) in pixmap.pixels().iter().zip(img.pixels_mut()) {
        let (r, g, b, a) = unpremultiply(pixel.red(), pixel.green(), pixel.blue(), pixel.alpha());
        out.0 = [r, g, b, a];
    }
    img
}

fn unpremultiply(r: u8, g: u8, b: u8, a: u8) -> (u8, u8, u8, u8) {
    if a == 0 {
        (0, 0, 0, 0)
    } else {
        let a_f = a as f32 / 255.0;
        (
            (r as f32 / a_f).round().min(255.0) as u8,
            (g as f32 / a_f).round().min(255.0) as u8,
            (b as f32 / a_f).round().min(255.0) as u8,
            a,
        )
    }
}

// ============================================================================
// Compositing
// ============================================================================

/// Source-over alpha blend of `src` onto `dest` at the given offset.
fn composite_over(dest: &mut RgbaImage, src: &RgbaImage, x: u32, y: u32) {
    for sy in 0..src.height() {
        for sx in 0..src.width() {
            let dx = x + sx;
            let dy = y + sy;
            if dx >= dest.width() || dy >= dest.height() {
                continue;
            }
            let blended = alpha_blend(*src.get_pixel(sx, sy), *dest.get_pixel(dx, dy));
            dest.put_pixel(dx, dy, blended);
        }
    }
}

fn alpha_blend(src: Rgba<u8>, dst: Rgba<u8>) -> Rgba<u8> {
    let sa = src[3] as f32 / 255.0;
    let da = dst[3] as f32 / 255.0;
    let out_a = sa + da * (1.0 - sa);
    if out_a == 0.0 {
        return Rgba([0, 0, 0, 0]);
    }

    let blend = |s: u8, d: u8| -> u8 {
        let sf = s as f32 / 255.0;
        let df = d as f32 / 255.0;
        (((sf * sa + df * da * (1.0 - sa)) / out_a) * 255.0).round() as u8
    };

    Rgba([
        blend(src[0], dst[0]),
        blend(src[1], dst[1]),
        blend(src[2], dst[2]),
        (out_a * 255.0).round() as u8,
    ])
}

// ============================================================================
// File output
// ============================================================================

fn write_png(image: &RgbaImage, target: &Path) -> Result<()> {
    let mut bytes = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .map_err(|source| Error::Encode {
            path: target.to_path_buf(),
            source,
        })?;
    write_atomic(target, &bytes)
}

fn write_atomic(target: &Path, bytes: &[u8]) -> Result<()> {
    let file_name = target.file_name().ok_or_else(|| {
        Error::io(
            target,
            io::Error::new(io::ErrorKind::InvalidInput, "path has no file name"),
        )
    })?;
    let mut tmp_name = std::ffi::OsString::from(".");
    tmp_name.push(file_name);
    tmp_name.push(".tmp");
    let tmp = target.with_file_name(tmp_name);

    fs::write(&tmp, bytes).map_err(|e| Error::io(&tmp, e))?;
    fs::rename(&tmp, target)
        .or_else(|_| {
            // Some platforms refuse to rename over an existing file.
            fs::remove_file(target).and_then(|()| fs::rename(&tmp, target))
        })
        .map_err(|e| {
            let _ = fs::remove_file(&tmp);
            Error::io(target, e)
        })
}

// ============================================================================
// Tests
// ============================================================================
