//! Image processing and input handling.

mod input;
mod single;

pub use input::{determine_output_path, expand_inputs, plan_outputs, OUTPUT_SUFFIX};
pub use single::process_single_image;
