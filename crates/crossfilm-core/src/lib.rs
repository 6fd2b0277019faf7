//! Crossfilm Core Library
//!
//! Sigmoid "cross-processing" tone curves for 8-bit RGBA images, plus the
//! filmstrip border compositor and the embedded resources it draws from.

pub mod assets;
pub mod config;
pub mod curves;
pub mod decoders;
pub mod error;
pub mod exporters;
pub mod filmstrip;
pub mod filter;
pub mod models;
pub mod remap;

// Re-export commonly used types
pub use curves::{build_cross_curves, ChannelLut, CrossCurves};
pub use error::FilterError;
pub use filmstrip::{compose_filmstrip, filmstrip};
pub use models::{CurveParams, FilterSettings};
pub use remap::{cross_process, remap_pixel, remap_rgba_in_place};
