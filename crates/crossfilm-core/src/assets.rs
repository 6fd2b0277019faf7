//! Compile-time embedded resources
//!
//! Border strips and the logo are compiled into the binary so the filters
//! work without any files next to the executable. The bundle is read-only
//! and built once per process.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use image::DynamicImage;
use once_cell::sync::Lazy;

use crate::error::FilterError;
use crate::verbose_println;

const STRIP_LEFT_PNG: &[u8] = include_bytes!("../assets/strip_left.png");
const STRIP_RIGHT_PNG: &[u8] = include_bytes!("../assets/strip_right.png");
const LOGO_PNG: &[u8] = include_bytes!("../assets/logo.png");

/// All embedded assets, keyed by file name
static ASSETS: Lazy<BTreeMap<&'static str, &'static [u8]>> = Lazy::new(|| {
    BTreeMap::from([
        ("logo.png", LOGO_PNG),
        ("strip_left.png", STRIP_LEFT_PNG),
        ("strip_right.png", STRIP_RIGHT_PNG),
    ])
});

/// Name and size of an embedded asset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssetInfo {
    pub name: &'static str,
    pub size: usize,
}

/// Raw bytes of an embedded asset.
pub fn asset(name: &str) -> Result<&'static [u8], FilterError> {
    ASSETS
        .get(name)
        .copied()
        .ok_or_else(|| FilterError::AssetNotFound(name.to_string()))
}

/// Names of all embedded assets, sorted.
pub fn asset_names() -> Vec<&'static str> {
    ASSETS.keys().copied().collect()
}

pub fn asset_info(name: &str) -> Result<AssetInfo, FilterError> {
    let (name, bytes) = ASSETS
        .get_key_value(name)
        .ok_or_else(|| FilterError::AssetNotFound(name.to_string()))?;
    Ok(AssetInfo {
        name: *name,
        size: bytes.len(),
    })
}

/// Decode an embedded image asset.
pub fn decode_asset(name: &str) -> Result<DynamicImage, FilterError> {
    let bytes = asset(name)?;
    Ok(image::load_from_memory(bytes)?)
}

/// Write one asset into `dir`, creating the directory if needed.
///
/// Returns the path that was written.
pub fn restore_asset<P: AsRef<Path>>(dir: P, name: &str) -> Result<PathBuf, FilterError> {
    let bytes = asset(name)?;
    let dir = dir.as_ref();
    std::fs::create_dir_all(dir).map_err(|e| FilterError::io(dir, e))?;

    let path = dir.join(name);
    std::fs::write(&path, bytes).map_err(|e| FilterError::io(&path, e))?;
    verbose_println!("[crossfilm] Restored {} ({} bytes)", path.display(), bytes.len());
    Ok(path)
}

/// Write every asset into `dir`.
pub fn restore_assets<P: AsRef<Path>>(dir: P) -> Result<Vec<PathBuf>, FilterError> {
    asset_names()
        .into_iter()
        .map(|name| restore_asset(dir.as_ref(), name))
        .collect()
}
