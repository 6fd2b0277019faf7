use std::path::PathBuf;

use crossfilm_core::assets;

/// List the embedded assets and their sizes.
pub fn cmd_assets_list() -> Result<(), String> {
    for name in assets::asset_names() {
        let info = assets::asset_info(name).map_err(|e| e.to_string())?;
        println!("  {:<20} {:>8} bytes", info.name, info.size);
    }
    Ok(())
}

/// Write the embedded assets (or just `name`) into `dir`.
pub fn cmd_assets_extract(dir: PathBuf, name: Option<String>) -> Result<(), String> {
    let written = match name {
        Some(name) => vec![assets::restore_asset(&dir, &name).map_err(|e| e.to_string())?],
        None => assets::restore_assets(&dir).map_err(|e| e.to_string())?,
    };

    for path in written {
        println!("Wrote {}", path.display());
    }
    Ok(())
}
