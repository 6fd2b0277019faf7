//! Image decoding
//!
//! Thin wrapper over the `image` crate that maps failures onto
//! [`FilterError`] and rejects file types we never read.

use std::io::BufReader;
use std::path::Path;

use image::{DynamicImage, ImageReader};

use crate::error::FilterError;
use crate::verbose_println;

/// File extensions accepted as input (lowercase)
pub const SUPPORTED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "tif", "tiff", "bmp", "webp"];

/// True when `path` has one of the supported extensions (case-insensitive).
pub fn is_supported_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| SUPPORTED_EXTENSIONS.contains(&e.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Decode an image from a file path
///
/// The format is detected from the file contents, so a mislabelled file
/// still decodes as long as its extension is one we accept.
pub fn decode_image<P: AsRef<Path>>(path: P) -> Result<DynamicImage, FilterError> {
    let path = path.as_ref();
    if !is_supported_extension(path) {
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().into_owned())
            .unwrap_or_else(|| "<none>".to_string());
        return Err(FilterError::UnsupportedFormat(ext));
    }

    let file = std::fs::File::open(path).map_err(|e| FilterError::io(path, e))?;
    let reader = ImageReader::new(BufReader::new(file))
        .with_guessed_format()
        .map_err(|e| FilterError::io(path, e))?;
    let image = reader.decode()?;

    verbose_println!(
        "[crossfilm] Decoded {} ({}x{}, {:?})",
        path.display(),
        image.width(),
        image.height(),
        image.color()
    );
    Ok(image)
}

/// Decode an image held in memory.
pub fn decode_image_bytes(bytes: &[u8]) -> Result<DynamicImage, FilterError> {
    Ok(image::load_from_memory(bytes)?)
}
