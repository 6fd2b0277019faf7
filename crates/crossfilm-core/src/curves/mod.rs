//! Cross-processing curve builder
//!
//! Derives three 256-entry lookup tables from a logistic curve. Red and green
//! follow the normalized forward curve; blue follows its inverse, which pulls
//! the blue channel away from the other two for the cross-processed look.
//!
//! Tables are cheap to build (768 evaluations) and are rebuilt for every
//! image rather than cached.


use serde::{Deserialize, Serialize};

use crate::filter::{clamp_channel, sigmoid, LOG_EPSILON};
use crate::models::CurveParams;

/// Number of entries in a channel table, one per 8-bit input value.
pub const LUT_SIZE: usize = 256;

/// Lookup table for one 8-bit channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChannelLut(#[serde(with = "lut_serde")] [u8; LUT_SIZE]);

impl ChannelLut {
    /// Build a table by evaluating `f` at every input value.
    pub fn from_fn(mut f: impl FnMut(u8) -> u8) -> Self {
        let mut table = [0u8; LUT_SIZE];
        for (i, entry) in table.iter_mut().enumerate() {
            *entry = f(i as u8);
        }
        Self(table)
    }

    #[inline]
    pub fn get(&self, value: u8) -> u8 {
        self.0[value as usize]
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    /// True when no entry is smaller than the one before it.
    pub fn is_monotonic(&self) -> bool {
        self.0.windows(2).all(|w| w[0] <= w[1])
    }

    /// True when every entry holds the same value.
    pub fn is_flat(&self) -> bool {
        self.0.iter().all(|&v| v == self.0[0])
    }
}

/// Red, green and blue tables produced by one curve build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CrossCurves {
    pub red: ChannelLut,
    pub green: ChannelLut,
    pub blue: ChannelLut,
}

impl CrossCurves {
    pub fn from_params(params: &CurveParams) -> Self {
        build_cross_curves(params.midpoint, params.factor)
    }

    /// Map one RGB triple through the tables.
    #[inline]
    pub fn map_rgb(&self, r: u8, g: u8, b: u8) -> [u8; 3] {
        [self.red.get(r), self.green.get(g), self.blue.get(b)]
    }
}

/// Build the red, green and blue tables for a sigmoid with the given
/// midpoint and factor.
///
/// `midpoint` is clamped to [0, 1] and the absolute value of `factor` is used.
/// The forward curve is normalized by its values at 0 and 1 so the red and
/// green tables span the full output range. The blue table inverts the curve,
/// treating each normalized input as a target output; its logit argument is
/// kept within `LOG_EPSILON` of the open interval (0, 1).
///
/// Any finite input produces valid tables. A factor of zero gives flat tables.
/// NaN inputs propagate through the math and end up as zero entries.
pub fn build_cross_curves(midpoint: f64, factor: f64) -> CrossCurves {
    let a = midpoint.clamp(0.0, 1.0);
    let b = factor.abs();
    let sig0 = sigmoid(a, b, 0.0);
    let sig1 = sigmoid(a, b, 1.0);

    let forward = ChannelLut::from_fn(|i| {
        let x = f64::from(i) / 255.0;
        let f = (sigmoid(a, b, x) - sig0) / (sig1 - sig0);
        clamp_channel(f * 255.0)
    });

    let inverse = ChannelLut::from_fn(|i| {
        let x = f64::from(i) / 255.0;
        let arg = ((sig1 - sig0) * x + sig0).clamp(LOG_EPSILON, 1.0 - LOG_EPSILON);
        let f = a - (1.0 / arg - 1.0).ln() / b;
        clamp_channel(f * 255.0)
    });

    CrossCurves {
        red: forward,
        green: forward,
        blue: inverse,
    }
}

mod lut_serde {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::LUT_SIZE;

    pub fn serialize<S: Serializer>(table: &[u8; LUT_SIZE], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(table.iter())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<[u8; LUT_SIZE], D::Error> {
        let values = Vec::<u8>::deserialize(deserializer)?;
        let len = values.len();
        values
            .try_into()
            .map_err(|_| D::Error::invalid_length(len, &"256 table entries"))
    }
}
