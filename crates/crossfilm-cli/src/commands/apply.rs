use std::path::PathBuf;
use std::time::Instant;

use crossfilm_cli::{determine_output_path, process_single_image, FilterArgs};

/// Execute the apply command for a single image.
///
/// Decodes the input, applies the cross-processing curve (plus filmstrip
/// borders when requested) and writes the result.
pub fn cmd_apply(
    input: PathBuf,
    out: Option<PathBuf>,
    filter: FilterArgs,
    silent: bool,
    verbose: bool,
) -> Result<(), String> {
    let start_time = Instant::now();

    // Set verbose mode for core library
    crossfilm_core::config::set_verbose(verbose);
    let settings = filter.settings()?;

    if verbose {
        println!("Filter settings:");
        println!("  midpoint: {}", settings.curve.midpoint);
        println!("  factor: {}", settings.curve.factor);
        println!("  filmstrip: {}", settings.filmstrip);
        println!("  jpeg_quality: {}", settings.jpeg_quality);
        println!();
    }

    let output_path = determine_output_path(&input, out.as_deref())?;

    if !silent {
        println!("Cross processing {}...", input.display());
    }

    let written = process_single_image(&input, &output_path, &settings)?;

    if !silent {
        println!(
            "Wrote {} in {:.2}s",
            written.display(),
            start_time.elapsed().as_secs_f64()
        );
    }

    Ok(())
}
