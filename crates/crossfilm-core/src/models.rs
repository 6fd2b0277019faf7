//! Parameter types shared by the curve builder, config files and the CLI.

use serde::{Deserialize, Serialize};

use crate::error::FilterError;

/// Default JPEG quality used when neither config nor CLI provide one.
pub const DEFAULT_JPEG_QUALITY: u8 = 90;

/// Parameters of the sigmoid cross-processing curve.
///
/// `midpoint` is clamped to [0, 1] when curves are built and only the
/// magnitude of `factor` matters. A factor of zero is allowed and yields a
/// flat curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurveParams {
    /// Center of the logistic curve in normalized channel units (0.0 - 1.0)
    #[serde(default = "default_midpoint")]
    pub midpoint: f64,

    /// Steepness of the logistic curve; sign is ignored
    #[serde(default = "default_factor")]
    pub factor: f64,
}

fn default_midpoint() -> f64 {
    0.5
}

fn default_factor() -> f64 {
    10.0
}

impl CurveParams {
    pub fn new(midpoint: f64, factor: f64) -> Self {
        Self { midpoint, factor }
    }

    /// Reject NaN and infinite values.
    ///
    /// Curve building itself accepts anything; this check sits at the edges
    /// (config files, command line) so bad input fails fast instead of
    /// silently producing an all-black table.
    pub fn validate(&self) -> Result<(), FilterError> {
        if !self.midpoint.is_finite() {
            return Err(FilterError::NonFiniteParameter {
                name: "midpoint",
                value: self.midpoint,
            });
        }
        if !self.factor.is_finite() {
            return Err(FilterError::NonFiniteParameter {
                name: "factor",
                value: self.factor,
            });
        }
        Ok(())
    }
}

impl Default for CurveParams {
    fn default() -> Self {
        Self {
            midpoint: default_midpoint(),
            factor: default_factor(),
        }
    }
}

/// Everything needed to turn one input image into one output image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterSettings {
    /// Cross-processing curve parameters
    pub curve: CurveParams,

    /// Add filmstrip borders on both sides after the curve is applied
    pub filmstrip: bool,

    /// Quality for JPEG output (1 - 100)
    pub jpeg_quality: u8,
}

impl FilterSettings {
    pub(crate) fn sanitize(&mut self) -> Vec<String> {
        let mut warnings = Vec::new();

        if self.curve.validate().is_err() {
            warnings.push(format!(
                "Non-finite curve parameters (midpoint {}, factor {}); using defaults",
                self.curve.midpoint, self.curve.factor
            ));
            self.curve = CurveParams::default();
        }

        let quality = self.jpeg_quality.clamp(1, 100);
        if quality != self.jpeg_quality {
            warnings.push(format!(
                "jpeg_quality {} out of range; using {}",
                self.jpeg_quality, quality
            ));
            self.jpeg_quality = quality;
        }

        warnings
    }
}

impl Default for FilterSettings {
    fn default() -> Self {
        Self {
            curve: CurveParams::default(),
            filmstrip: false,
            jpeg_quality: DEFAULT_JPEG_QUALITY,
        }
    }
}
