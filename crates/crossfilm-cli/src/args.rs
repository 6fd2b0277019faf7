//! Filter argument structs for CLI commands.

use std::path::PathBuf;

use clap::Args;
use crossfilm_core::models::{CurveParams, FilterSettings};

/// Filter arguments shared between the Apply and Batch commands.
///
/// Every value is optional; unset values fall back to the loaded config,
/// and from there to built-in defaults.
#[derive(Args, Clone, Debug, Default)]
pub struct FilterArgs {
    /// Sigmoid midpoint (0.0 - 1.0, default 0.5)
    #[arg(long, value_name = "FLOAT", allow_negative_numbers = true)]
    pub midpoint: Option<f64>,

    /// Sigmoid steepness; sign is ignored (default 10)
    #[arg(long, value_name = "FLOAT", allow_negative_numbers = true)]
    pub factor: Option<f64>,

    /// Add filmstrip borders after the curve is applied
    #[arg(long)]
    pub filmstrip: bool,

    /// JPEG output quality (1-100)
    #[arg(short, long, value_name = "N", value_parser = clap::value_parser!(u8).range(1..=100))]
    pub quality: Option<u8>,

    /// Config file (overrides CROSSFILM_CONFIG and the default search path)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl FilterArgs {
    /// Merge these arguments over `defaults` and validate the result.
    pub fn resolve(&self, defaults: &FilterSettings) -> Result<FilterSettings, String> {
        let curve = CurveParams {
            midpoint: self.midpoint.unwrap_or(defaults.curve.midpoint),
            factor: self.factor.unwrap_or(defaults.curve.factor),
        };
        curve.validate().map_err(|e| e.to_string())?;

        Ok(FilterSettings {
            curve,
            filmstrip: self.filmstrip || defaults.filmstrip,
            jpeg_quality: self.quality.unwrap_or(defaults.jpeg_quality),
        })
    }

    /// Load the process config (honoring `--config`) and merge these
    /// arguments over it. A `--config` file that does not exist is an error.
    pub fn settings(&self) -> Result<FilterSettings, String> {
        if let Some(path) = &self.config {
            if !path.is_file() {
                return Err(format!("Config file not found: {}", path.display()));
            }
        }
        let handle = crossfilm_core::config::config_handle(self.config.as_deref());
        crossfilm_core::config::log_config_usage();
        self.resolve(&handle.config.defaults)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_uses_defaults() {
        let settings = FilterArgs::default()
            .resolve(&FilterSettings::default())
            .unwrap();
        assert_eq!(settings, FilterSettings::default());
    }

    #[test]
    fn test_cli_overrides_config() {
        let config = FilterSettings {
            curve: CurveParams::new(0.2, 3.0),
            filmstrip: false,
            jpeg_quality: 70,
        };
        let args = FilterArgs {
            factor: Some(-8.0),
            quality: Some(95),
            ..Default::default()
        };
        let settings = args.resolve(&config).unwrap();
        assert_eq!(settings.curve, CurveParams::new(0.2, -8.0));
        assert_eq!(settings.jpeg_quality, 95);
        assert!(!settings.filmstrip);
    }

    #[test]
    fn test_filmstrip_flag_or_config() {
        let config = FilterSettings {
            filmstrip: true,
            ..Default::default()
        };
        assert!(FilterArgs::default().resolve(&config).unwrap().filmstrip);

        let args = FilterArgs {
            filmstrip: true,
            ..Default::default()
        };
        assert!(args.resolve(&FilterSettings::default()).unwrap().filmstrip);
    }

    #[test]
    fn test_non_finite_rejected() {
        let args = FilterArgs {
            midpoint: Some(f64::NAN),
            ..Default::default()
        };
        let err = args.resolve(&FilterSettings::default()).unwrap_err();
        assert!(err.contains("midpoint"), "got: {}", err);
    }

    #[test]
    fn test_missing_config_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let args = FilterArgs {
            config: Some(dir.path().join("typo.yml")),
            ..Default::default()
        };
        let err = args.settings().unwrap_err();
        assert!(err.contains("Config file not found"), "got: {}", err);
        assert!(err.contains("typo.yml"));
    }
}
