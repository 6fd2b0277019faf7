use rayon::prelude::*;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

use crossfilm_cli::{expand_inputs, plan_outputs, process_single_image, FilterArgs};

/// Process many images with shared settings, in parallel.
///
/// Every file is attempted; the command fails at the end if any of them did.
pub fn cmd_batch(
    inputs: Vec<PathBuf>,
    recursive: bool,
    out: Option<PathBuf>,
    threads: Option<usize>,
    filter: FilterArgs,
    silent: bool,
    verbose: bool,
) -> Result<(), String> {
    let batch_start = Instant::now();

    // Set verbose mode for core library
    crossfilm_core::config::set_verbose(verbose);
    let settings = filter.settings()?;

    if inputs.is_empty() {
        return Err("No input files or directories specified".to_string());
    }

    // Expand directories to file lists
    let inputs = expand_inputs(&inputs, recursive)?;

    if inputs.is_empty() {
        return Err(format!(
            "No supported image files found (supported: {})",
            crossfilm_core::decoders::SUPPORTED_EXTENSIONS.join(", ")
        ));
    }

    if !silent {
        println!("Found {} image files to process", inputs.len());
    }

    // Configure thread pool if specified
    if let Some(num_threads) = threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build_global()
            .map_err(|e| format!("Failed to configure thread pool: {}", e))?;
        if !silent {
            println!("Using {} threads for parallel processing", num_threads);
        }
    }

    if let Some(dir) = &out {
        if !dir.exists() {
            std::fs::create_dir_all(dir)
                .map_err(|e| format!("Failed to create output directory: {}", e))?;
        }
    }

    let plan = plan_outputs(&inputs, out.as_deref())?;

    let total = plan.len();
    let processed = AtomicUsize::new(0);
    let failed = AtomicUsize::new(0);

    plan.par_iter().for_each(|(input, output)| {
        let result = process_single_image(input, output, &settings);

        let done = processed.fetch_add(1, Ordering::SeqCst) + 1;
        match result {
            Ok(written) => {
                if !silent {
                    println!("[{}/{}] {} -> {}", done, total, input.display(), written.display());
                }
            }
            Err(e) => {
                failed.fetch_add(1, Ordering::SeqCst);
                eprintln!("[{}/{}] Failed {}: {}", done, total, input.display(), e);
            }
        }
    });

    let failed = failed.load(Ordering::SeqCst);
    if !silent {
        println!(
            "\nProcessed {} of {} images in {:.2}s",
            total - failed,
            total,
            batch_start.elapsed().as_secs_f64()
        );
    }

    if failed > 0 {
        return Err(format!("{} of {} images failed", failed, total));
    }
    Ok(())
}
