//! Single image processing.

use std::path::{Path, PathBuf};

use crossfilm_core::exporters::{export_image, ExportOptions};
use crossfilm_core::models::FilterSettings;
use crossfilm_core::verbose_println;

/// Decode `input`, apply the cross-processing curve (and the filmstrip when
/// enabled), and write the result to `output_path`.
///
/// Returns the written path.
pub fn process_single_image(
    input: &Path,
    output_path: &Path,
    settings: &FilterSettings,
) -> Result<PathBuf, String> {
    let decoded = crossfilm_core::decoders::decode_image(input).map_err(|e| e.to_string())?;

    let mut result = crossfilm_core::cross_process(&decoded, &settings.curve);
    if settings.filmstrip {
        result = crossfilm_core::filmstrip(&result).map_err(|e| e.to_string())?;
    }

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create output directory: {}", e))?;
        }
    }

    let options = ExportOptions {
        jpeg_quality: settings.jpeg_quality,
    };
    export_image(&result, output_path, &options).map_err(|e| e.to_string())?;
    verbose_println!(
        "[crossfilm] {} -> {}",
        input.display(),
        output_path.display()
    );

    Ok(output_path.to_path_buf())
}
