//! Input file handling and path utilities.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crossfilm_core::decoders::is_supported_extension;

/// Appended to the input file stem to name outputs
pub const OUTPUT_SUFFIX: &str = "_crossfilm";

/// Determine the output path for an input image
///
/// # Arguments
/// * `input` - Input file path
/// * `out` - Optional output directory or file path
///
/// # Returns
/// `out` itself when it names a file; otherwise `<stem>_crossfilm.<ext>`
/// inside `out` (when it is a directory) or next to the input. The input's
/// extension is kept so the output format matches the input format.
pub fn determine_output_path(input: &Path, out: Option<&Path>) -> Result<PathBuf, String> {
    let filename = output_file_name(input)?;

    match out {
        Some(out_path) if out_path.is_dir() => Ok(out_path.join(filename)),
        Some(out_path) => Ok(out_path.to_path_buf()),
        None => {
            let parent = input.parent().unwrap_or(Path::new("."));
            Ok(parent.join(filename))
        }
    }
}

fn output_file_name(input: &Path) -> Result<String, String> {
    let stem = input
        .file_stem()
        .ok_or_else(|| format!("Invalid input filename: {}", input.display()))?
        .to_string_lossy();
    let extension = input
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_else(|| "png".to_string());
    Ok(format!("{}{}.{}", stem, OUTPUT_SUFFIX, extension))
}

/// Pair every input with its output path.
///
/// Fails when two inputs would be written to the same file, which happens
/// when files with the same stem from different directories go to one
/// output directory.
pub fn plan_outputs(
    inputs: &[PathBuf],
    out: Option<&Path>,
) -> Result<Vec<(PathBuf, PathBuf)>, String> {
    let mut claimed: HashMap<PathBuf, &Path> = HashMap::new();
    let mut plan = Vec::with_capacity(inputs.len());

    for input in inputs {
        let output = determine_output_path(input, out)?;
        if let Some(previous) = claimed.insert(output.clone(), input) {
            return Err(format!(
                "{} and {} would both be written to {}",
                previous.display(),
                input.display(),
                output.display()
            ));
        }
        plan.push((input.clone(), output));
    }
    Ok(plan)
}

/// Expand a list of inputs (files and directories) into a list of image files.
///
/// Directories are scanned for supported image files. If `recursive` is
/// true, subdirectories are also scanned. Files that are themselves outputs
/// of an earlier run are skipped when found while scanning.
pub fn expand_inputs(inputs: &[PathBuf], recursive: bool) -> Result<Vec<PathBuf>, String> {
    let mut files = Vec::new();

    for input in inputs {
        if input.is_dir() {
            collect_images_from_dir(input, recursive, &mut files)?;
        } else if input.is_file() {
            files.push(input.clone());
        } else {
            return Err(format!("Path not found: {}", input.display()));
        }
    }

    // Sort for consistent ordering
    files.sort();
    files.dedup();
    Ok(files)
}

/// Recursively collect image files from a directory.
fn collect_images_from_dir(
    dir: &Path,
    recursive: bool,
    files: &mut Vec<PathBuf>,
) -> Result<(), String> {
    let entries = std::fs::read_dir(dir)
        .map_err(|e| format!("Failed to read directory {}: {}", dir.display(), e))?;

    for entry in entries {
        let entry = entry.map_err(|e| format!("Error reading directory entry: {}", e))?;
        let path = entry.path();

        if path.is_dir() {
            if recursive {
                collect_images_from_dir(&path, recursive, files)?;
            }
        } else if path.is_file() && is_supported_extension(&path) && !is_previous_output(&path) {
            files.push(path);
        }
    }
    Ok(())
}

fn is_previous_output(path: &Path) -> bool {
    path.file_stem()
        .and_then(|s| s.to_str())
        .map(|s| s.ends_with(OUTPUT_SUFFIX))
        .unwrap_or(false)
}
