// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Volume level and volume bounds.
//!
//! Volume levels are quantized to half steps: every [`Volume`] holds a
//! multiple of 0.5, obtained by rounding `value * 2` to the nearest integer
//! (ties to even) and halving the result.

use std::fmt;

use crate::error::{ConfigError, ValueError};

/// A volume level, always a multiple of 0.5.
///
/// # Examples
///
/// ```
/// use speaker_lib::types::Volume;
///
/// let vol = Volume::new(3.3).unwrap();
/// assert_eq!(vol.value(), 3.5);
///
/// // Ties go to the even half step
/// assert_eq!(Volume::new(0.25).unwrap().value(), 0.0);
/// assert_eq!(Volume::new(0.75).unwrap().value(), 1.0);
///
/// assert!(Volume::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Volume(f64);

impl Volume {
    /// Lowest value accepted by [`set_volume`](crate::Speaker::set_volume).
    pub const INPUT_MIN: f64 = 0.0;

    /// Highest value accepted by [`set_volume`](crate::Speaker::set_volume).
    pub const INPUT_MAX: f64 = 10.0;

    /// The volume a device starts with unless configured otherwise.
    pub const DEFAULT: Self = Self(5.0);

    /// Creates a volume level, quantizing to the nearest half step.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::NotFinite` for NaN or infinite input.
    pub fn new(value: f64) -> Result<Self, ValueError> {
        if !value.is_finite() {
            return Err(ValueError::NotFinite(value));
        }
        Ok(Self(quantize(value)))
    }

    /// Returns the quantized value.
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.0
    }

    /// Returns `true` if `value` lies in the fixed `0..=10` input range.
    #[must_use]
    pub fn is_accepted_input(value: f64) -> bool {
        (Self::INPUT_MIN..=Self::INPUT_MAX).contains(&value)
    }
}

impl Default for Volume {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Volume {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<f64> for Volume {
    type Error = ValueError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Volume> for f64 {
    fn from(volume: Volume) -> Self {
        volume.0
    }
}

fn quantize(value: f64) -> f64 {
    (value * 2.0).round_ties_even() / 2.0
}

/// Integer volume bounds of a device, fixed at construction.
///
/// # Examples
///
/// ```
/// use speaker_lib::types::{Volume, VolumeRange};
///
/// let range = VolumeRange::new(0, 10).unwrap();
/// assert!(range.contains(Volume::new(7.5).unwrap()));
/// assert!(VolumeRange::new(10, 0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct VolumeRange {
    min: i32,
    max: i32,
}

impl VolumeRange {
    /// The `0..=10` range every device uses unless configured otherwise.
    pub const DEFAULT: Self = Self { min: 0, max: 10 };

    /// Creates volume bounds.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidBounds` unless `min < max`.
    pub fn new(min: i32, max: i32) -> Result<Self, ConfigError> {
        if min >= max {
            return Err(ConfigError::InvalidBounds {
                what: "volume",
                min: f64::from(min),
                max: f64::from(max),
            });
        }
        Ok(Self { min, max })
    }

    /// Returns the lower bound.
    #[must_use]
    pub const fn min(&self) -> i32 {
        self.min
    }

    /// Returns the upper bound.
    #[must_use]
    pub const fn max(&self) -> i32 {
        self.max
    }

    /// Returns `true` if `volume` lies within the bounds, inclusive.
    #[must_use]
    pub fn contains(&self, volume: Volume) -> bool {
        (f64::from(self.min)..=f64::from(self.max)).contains(&volume.value())
    }

    /// Checks that `volume` lies within the bounds.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` otherwise.
    pub fn check(&self, volume: Volume) -> Result<Volume, ValueError> {
        if self.contains(volume) {
            Ok(volume)
        } else {
            Err(ValueError::OutOfRange {
                min: f64::from(self.min),
                max: f64::from(self.max),
                actual: volume.value(),
            })
        }
    }
}

impl Default for VolumeRange {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for VolumeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn volume_quantizes_to_half_steps() {
        assert_eq!(Volume::new(3.3).unwrap().value(), 3.5);
        assert_eq!(Volume::new(3.2).unwrap().value(), 3.0);
        assert_eq!(Volume::new(9.9).unwrap().value(), 10.0);
        assert_eq!(Volume::new(-1.1).unwrap().value(), -1.0);
    }

    #[test]
    fn volume_ties_round_to_even() {
        assert_eq!(Volume::new(1.25).unwrap().value(), 1.0);
        assert_eq!(Volume::new(1.75).unwrap().value(), 2.0);
    }

    #[test]
    fn volume_rejects_non_finite() {
        assert!(matches!(
            Volume::new(f64::INFINITY),
            Err(ValueError::NotFinite(_))
        ));
    }

    #[test]
    fn accepted_input_is_fixed_range() {
        assert!(Volume::is_accepted_input(0.0));
        assert!(Volume::is_accepted_input(10.0));
        assert!(!Volume::is_accepted_input(-0.1));
        assert!(!Volume::is_accepted_input(10.1));
    }

    #[test]
    fn volume_deserializes_through_quantization() {
        let vol: Volume = serde_json::from_str("4.2").unwrap();
        assert_eq!(vol.value(), 4.0);
    }

    #[test]
    fn range_requires_ordered_bounds() {
        assert!(VolumeRange::new(0, 10).is_ok());
        assert!(VolumeRange::new(5, 5).is_err());
        assert!(VolumeRange::new(6, 5).is_err());
    }

    #[test]
    fn range_check() {
        let range = VolumeRange::new(2, 4).unwrap();
        assert!(range.check(Volume::new(3.0).unwrap()).is_ok());
        assert!(range.check(Volume::new(5.0).unwrap()).is_err());
        assert_eq!(range.to_string(), "2..=4");
    }
}
