// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Radio frequency and tuning bounds.

use std::fmt;

use crate::error::{ConfigError, ValueError};

/// A radio frequency rounded to one decimal place.
///
/// # Examples
///
/// ```
/// use speaker_lib::types::Frequency;
///
/// let freq = Frequency::new(101.26).unwrap();
/// assert_eq!(freq.value(), 101.3);
/// assert_eq!(freq.to_string(), "101.3");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Frequency(f64);

impl Frequency {
    /// Bottom of the FM band, where a radio starts unless configured otherwise.
    pub const FM_START: Self = Self(87.5);

    /// Creates a frequency, rounding to the nearest tenth.
    ///
    /// Rounding works on the exact decimal expansion of `value`, so `87.55`
    /// (stored as `87.5499…`) rounds down and exact halves such as `100.25`
    /// round to even.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::NotFinite` for NaN or infinite input.
    pub fn new(value: f64) -> Result<Self, ValueError> {
        if !value.is_finite() {
            return Err(ValueError::NotFinite(value));
        }
        Ok(Self(round_to_tenth(value)))
    }

    /// Returns the rounded value.
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.0
    }
}

// `{:.1}` rounds the exact binary value; scaling by 10 first would not.
fn round_to_tenth(value: f64) -> f64 {
    format!("{value:.1}").parse().unwrap_or(value)
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<f64> for Frequency {
    type Error = ValueError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Frequency> for f64 {
    fn from(freq: Frequency) -> Self {
        freq.0
    }
}

/// Tuning bounds of a radio, inclusive on both ends.
///
/// # Examples
///
/// ```
/// use speaker_lib::types::FrequencyRange;
///
/// let fm = FrequencyRange::FM;
/// assert!(fm.contains(100.0));
/// assert!(!fm.contains(108.1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct FrequencyRange {
    min: f64,
    max: f64,
}

impl FrequencyRange {
    /// The FM broadcast band, 87.5 to 108.0.
    pub const FM: Self = Self {
        min: 87.5,
        max: 108.0,
    };

    /// Creates tuning bounds.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::NotFinite` for NaN or infinite bounds and
    /// `ConfigError::InvalidBounds` unless `min < max`.
    pub fn new(min: f64, max: f64) -> crate::Result<Self> {
        for bound in [min, max] {
            if !bound.is_finite() {
                return Err(ValueError::NotFinite(bound).into());
            }
        }
        if min >= max {
            return Err(ConfigError::InvalidBounds {
                what: "frequency",
                min,
                max,
            }
            .into());
        }
        Ok(Self { min, max })
    }

    /// Returns the lower bound.
    #[must_use]
    pub const fn min(&self) -> f64 {
        self.min
    }

    /// Returns the upper bound.
    #[must_use]
    pub const fn max(&self) -> f64 {
        self.max
    }

    /// Returns `true` if the raw, unrounded `value` lies within the bounds.
    ///
    /// Bounds that are not whole tenths can admit a value whose rounded
    /// form falls outside them: with `min = 87.54`, `87.54` is admitted and
    /// stored as `87.5`.
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

impl Default for FrequencyRange {
    fn default() -> Self {
        Self::FM
    }
}
