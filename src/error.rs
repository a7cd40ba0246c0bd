//! Error types shared by the geometry model and the emission pipeline.

use std::io;
use std::path::{Path, PathBuf};

use resvg::usvg;
use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong while generating assets.
///
/// Configuration problems are rejected before any markup is built; raster
/// and file-system failures carry the target path so a batch runner can
/// report them and keep going.
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed or out-of-range geometry, or an unparseable setting.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// The raster engine could not parse the SVG markup.
    #[error("failed to parse SVG markup for {path}: {source}")]
    Svg {
        path: PathBuf,
        #[source]
        source: usvg::Error,
    },

    /// Pixel buffer allocation failed (zero or excessive dimensions).
    #[error("failed to allocate a {width}x{height} pixel buffer for {path}")]
    Pixmap {
        path: PathBuf,
        width: u32,
        height: u32,
    },

    /// PNG encoding failed.
    #[error("failed to encode PNG for {path}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Directory creation or file write failed.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Error {
    pub(crate) fn io(path: impl AsRef<Path>, source: io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}
