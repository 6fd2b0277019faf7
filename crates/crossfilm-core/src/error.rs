//! Error type shared by every fallible core operation.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading, compositing or writing images.
///
/// Curve building and pixel remapping never fail; everything here comes from
/// the I/O and imaging layers around them.
#[derive(Debug, Error)]
pub enum FilterError {
    /// Filesystem failure, with the path that was being touched.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Decode, encode or resize failure reported by the imaging library.
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    /// The file extension does not map to a format we read or write.
    #[error("unsupported image format: {0}")]
    UnsupportedFormat(String),

    /// No embedded resource with this name.
    #[error("asset not found: {0}")]
    AssetNotFound(String),

    /// Width or height of zero where a real image is required.
    #[error("image has zero width or height ({width}x{height})")]
    EmptyImage { width: u32, height: u32 },

    /// Curve midpoint or factor is NaN or infinite.
    #[error("curve parameter `{name}` must be finite, got {value}")]
    NonFiniteParameter { name: &'static str, value: f64 },
}

impl FilterError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
