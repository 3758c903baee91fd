// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Radio receiver.

use crate::capabilities::{Capabilities, DeviceKind};
use crate::config::RadioConfig;
use crate::error::{Result, ValueError};
use crate::outcome::Outcome;
use crate::state::StateChange;
use crate::types::{Frequency, FrequencyRange};

use super::{Speaker, SpeakerCore};

/// A radio with bounded frequency tuning.
///
/// # Examples
///
/// ```
/// use speaker_lib::{Radio, Speaker};
///
/// let mut radio = Radio::new("Tivoli One");
/// radio.turn_on();
///
/// let outcome = radio.set_frequency(101.26);
/// assert!(outcome.is_success());
/// assert_eq!(radio.frequency().value(), 101.3);
///
/// // Outside the FM band: rejected, frequency unchanged
/// assert!(!radio.set_frequency(120.0).is_success());
/// assert_eq!(radio.frequency().value(), 101.3);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Radio {
    core: SpeakerCore,
    frequency_range: FrequencyRange,
    frequency: Frequency,
}

impl Radio {
    /// Creates a radio covering the FM band, off and tuned to 87.5.
    #[must_use]
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            core: SpeakerCore::with_defaults(model),
            frequency_range: FrequencyRange::FM,
            frequency: Frequency::FM_START,
        }
    }

    /// Creates a radio from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any pair of bounds is inverted, or if the initial
    /// volume or the rounded initial frequency lies outside its bounds.
    pub fn from_config(config: &RadioConfig) -> Result<Self> {
        let core = SpeakerCore::from_config(&config.speaker)?;
        let frequency_range = FrequencyRange::new(config.min_frequency, config.max_frequency)?;
        let frequency = Frequency::new(config.frequency)?;
        if !frequency_range.contains(frequency.value()) {
            return Err(ValueError::OutOfRange {
                min: frequency_range.min(),
                max: frequency_range.max(),
                actual: frequency.value(),
            }
            .into());
        }

        Ok(Self {
            core,
            frequency_range,
            frequency,
        })
    }

    /// Returns the current frequency.
    #[must_use]
    pub const fn frequency(&self) -> Frequency {
        self.frequency
    }

    /// Returns the tuning bounds.
    #[must_use]
    pub const fn frequency_range(&self) -> FrequencyRange {
        self.frequency_range
    }

    /// Tunes to `value`, rounded to one decimal place.
    ///
    /// The range check applies to the unrounded value. A powered-off radio
    /// reports [`Status::DeviceOff`](crate::Status::DeviceOff) whatever the
    /// value.
    pub fn set_frequency(&mut self, value: f64) -> Outcome {
        let in_range = self.frequency_range.contains(value);

        // `contains` is false for non-finite values, so `new` succeeds here.
        if let (true, Ok(frequency)) = (self.is_on() && in_range, Frequency::new(value)) {
            self.frequency = frequency;
            tracing::debug!(device = %self.id(), frequency = %frequency, "Frequency set");
            return Outcome::applied(
                format!("Radio frequency set to {frequency}."),
                StateChange::frequency(frequency),
            );
        }

        if !self.is_on() {
            tracing::debug!(device = %self.id(), value, "Tuning refused, device off");
            return Outcome::device_off();
        }

        tracing::debug!(device = %self.id(), value, "Frequency out of range");
        Outcome::not_allowed(format!(
            "Radio frequency must be a non-negative number between {} and {}.",
            self.frequency_range.min(),
            self.frequency_range.max()
        ))
    }
}

impl Speaker for Radio {
    fn core(&self) -> &SpeakerCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut SpeakerCore {
        &mut self.core
    }

    fn kind(&self) -> DeviceKind {
        DeviceKind::Radio
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities::radio()
    }
}
