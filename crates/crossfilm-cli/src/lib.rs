//! Shared utilities for crossfilm-cli
//!
//! Argument handling, input expansion and single-image processing used by
//! the `crossfilm` binary's subcommands.

pub mod args;
pub mod processing;

// Re-export commonly used items at the crate root for convenience
pub use args::FilterArgs;
pub use processing::{
    determine_output_path, expand_inputs, plan_outputs, process_single_image, OUTPUT_SUFFIX,
};
