//! Command implementations for the crossfilm CLI.

mod apply;
mod assets;
mod batch;
mod curves;

// Re-export all command functions
pub use apply::cmd_apply;
pub use assets::{cmd_assets_extract, cmd_assets_list};
pub use batch::cmd_batch;
pub use curves::cmd_curves;
