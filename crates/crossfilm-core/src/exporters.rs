//! Image exporters
//!
//! Write RGBA results to disk. The output format follows the file extension.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, ImageFormat, RgbaImage};

use crate::error::FilterError;
use crate::models::DEFAULT_JPEG_QUALITY;
use crate::verbose_println;

/// Options controlling how results are encoded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportOptions {
    /// JPEG quality (1 - 100); ignored for other formats
    pub jpeg_quality: u8,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            jpeg_quality: DEFAULT_JPEG_QUALITY,
        }
    }
}

/// Pick the output format from a path's extension.
pub fn output_format(path: &Path) -> Result<ImageFormat, FilterError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .ok_or_else(|| FilterError::UnsupportedFormat("<none>".to_string()))?;

    match ext.as_str() {
        "png" => Ok(ImageFormat::Png),
        "jpg" | "jpeg" => Ok(ImageFormat::Jpeg),
        "tif" | "tiff" => Ok(ImageFormat::Tiff),
        "bmp" => Ok(ImageFormat::Bmp),
        "webp" => Ok(ImageFormat::WebP),
        _ => Err(FilterError::UnsupportedFormat(ext)),
    }
}

/// Export an RGBA image to `path`.
///
/// JPEG has no alpha channel, so alpha is dropped and the configured quality
/// is used. Every other format keeps alpha.
pub fn export_image<P: AsRef<Path>>(
    image: &RgbaImage,
    path: P,
    options: &ExportOptions,
) -> Result<(), FilterError> {
    let path = path.as_ref();
    let format = output_format(path)?;

    match format {
        ImageFormat::Jpeg => {
            let file = File::create(path).map_err(|e| FilterError::io(path, e))?;
            let mut writer = BufWriter::new(file);
            let quality = options.jpeg_quality.clamp(1, 100);
            let rgb = DynamicImage::ImageRgba8(image.clone()).into_rgb8();
            JpegEncoder::new_with_quality(&mut writer, quality).encode_image(&rgb)?;
        }
        _ => image.save_with_format(path, format)?,
    }

    verbose_println!(
        "[crossfilm] Wrote {} ({}x{}, {:?})",
        path.display(),
        image.width(),
        image.height(),
        format
    );
    Ok(())
}
