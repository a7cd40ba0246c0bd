//! zoo-logo: parametric logo geometry and raster asset generation
//!
//! This crate derives every visual variant of the Zoo logo (filled color,
//! stroked monochrome, menu-bar crop, small-size favicon, white-on-dark)
//! from one shared [`LogoConfig`], and turns the resulting SVG markup into
//! the fixed set of raster assets an application ships: icon ladders,
//! favicons, dock icons, menu-bar templates, and social share images.
//!
//! # Example
//!
//! ```
//! use zoo_logo::{LogoConfig, Variant};
//!
//! let config = LogoConfig::default();
//! let svg = Variant::Color.render(&config).unwrap();
//! assert!(svg.starts_with("<svg"));
//! ```
//!
//! # Generating the asset set
//!
//! ```no_run
//! use std::path::Path;
//! use zoo_logo::{standard_requests, write_svg_sources, LogoConfig};
//!
//! let config = LogoConfig::default();
//! let out_dir = Path::new("dist");
//!
//! write_svg_sources(&config, out_dir)?;
//! let report = zoo_logo::run(&standard_requests(&config, out_dir)?);
//! assert!(report.is_success());
//! # Ok::<(), zoo_logo::Error>(())
//! ```
//!
//! # Inline embedding
//!
//! A front end that renders SVG itself can skip rasterization and request
//! the markup (or a data URL of it) directly:
//!
//! ```
//! use zoo_logo::{logo, Format, LogoConfig, Variant};
//!
//! let url = logo(&LogoConfig::default(), Variant::White, Format::DataUrl).unwrap();
//! assert!(url.starts_with("data:image/svg+xml;base64,"));
//! ```

mod batch;
mod config;
mod emit;
mod encode;
mod error;
mod logo;
mod markup;
mod showcase;

pub use batch::{
    run, standard_requests, write_svg_sources, BatchReport, Failure, FAVICON_SIZES, ICON_SIZES,
    SOCIAL_SIZES, TOUCH_ICON_SIZES,
};
pub use config::{ColorGeometry, LogoConfig, MonoGeometry};
pub use emit::{
    centered_offset, emit, parse_color, scaled_logo_size, PlacementPolicy, RenderRequest, BLACK,
};
pub use encode::{logo, Format};
pub use error::{Error, Result};
pub use logo::{
    color_svg, color_svg_cropped, favicon_svg, menubar_svg, mono_svg, white_svg, Variant,
};
pub use showcase::write_page;
