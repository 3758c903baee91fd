// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Shared power and volume capability.

use crate::capabilities::{Capabilities, DeviceKind};
use crate::config::SpeakerConfig;
use crate::error::Result;
use crate::outcome::{Outcome, Status};
use crate::state::StateChange;
use crate::types::{DeviceId, PowerState, Volume, VolumeRange};

use super::Speaker;

/// Power and volume state embedded in every device.
///
/// Devices do not inherit from each other: each one owns a `SpeakerCore`
/// and exposes it through the [`Speaker`] trait, which provides the shared
/// guarded operations.
#[derive(Debug, Clone, PartialEq)]
pub struct SpeakerCore {
    id: DeviceId,
    model: String,
    power: PowerState,
    volume: Volume,
    volume_range: VolumeRange,
}

impl SpeakerCore {
    /// Creates the core with default bounds: off, volume 5 in `0..=10`.
    pub(crate) fn with_defaults(model: impl Into<String>) -> Self {
        Self {
            id: DeviceId::new(),
            model: model.into(),
            power: PowerState::Off,
            volume: Volume::DEFAULT,
            volume_range: VolumeRange::DEFAULT,
        }
    }

    /// Creates the core from configuration.
    ///
    /// The initial volume is quantized first and must then lie within the
    /// configured bounds.
    pub(crate) fn from_config(config: &SpeakerConfig) -> Result<Self> {
        let volume_range = VolumeRange::new(config.min_volume, config.max_volume)?;
        let volume = volume_range.check(Volume::new(config.volume)?)?;

        let core = Self {
            id: DeviceId::new(),
            model: config.model.clone(),
            power: PowerState::from(config.power),
            volume,
            volume_range,
        };
        tracing::debug!(
            device = %core.id,
            model = %core.model,
            power = %core.power,
            volume = %core.volume,
            "Device constructed"
        );
        Ok(core)
    }

    /// Returns the instance identifier.
    #[must_use]
    pub const fn id(&self) -> DeviceId {
        self.id
    }

    /// Returns the model label.
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Returns the power state.
    #[must_use]
    pub const fn power(&self) -> PowerState {
        self.power
    }

    /// Returns `true` if the device is on.
    #[must_use]
    pub const fn is_on(&self) -> bool {
        self.power.is_on()
    }

    /// Returns the current volume.
    #[must_use]
    pub const fn volume(&self) -> Volume {
        self.volume
    }

    /// Returns the volume bounds.
    #[must_use]
    pub const fn volume_range(&self) -> VolumeRange {
        self.volume_range
    }

    pub(crate) fn turn_on(&mut self) -> Outcome {
        if self.is_on() {
            tracing::trace!(device = %self.id, "Device already on");
            return Outcome::already_active("The device is already on.");
        }
        self.power = PowerState::On;
        tracing::debug!(device = %self.id, model = %self.model, "Device turned on");
        Outcome::applied("The device is on.", StateChange::power_on())
    }

    pub(crate) fn turn_off(&mut self) -> Outcome {
        if !self.is_on() {
            tracing::trace!(device = %self.id, "Device already off");
            return Outcome::already_active("The device is already off.");
        }
        self.power = PowerState::Off;
        tracing::debug!(device = %self.id, model = %self.model, "Device turned off");
        Outcome::applied("The device is off.", StateChange::power_off())
    }

    // The accepted input is the fixed 0..=10 range while the rejection text
    // quotes the instance bounds.
    pub(crate) fn set_volume(&mut self, value: f64) -> Outcome {
        if !self.is_on() {
            tracing::debug!(device = %self.id, value, "Volume change refused, device off");
            return Outcome::new(
                Status::DeviceOff,
                "Volume control is unavailable while the device is off.",
            );
        }

        match Volume::new(value) {
            Ok(volume) if Volume::is_accepted_input(value) => {
                self.volume = volume;
                tracing::debug!(device = %self.id, volume = %volume, "Volume set");
                Outcome::applied(
                    format!("Volume set to {volume}."),
                    StateChange::volume(volume),
                )
            }
            _ => {
                tracing::debug!(device = %self.id, value, "Volume out of range");
                Outcome::not_allowed(format!(
                    "Volume must be a non-negative real number between {} and {}.",
                    self.volume_range.min(),
                    self.volume_range.max()
                ))
            }
        }
    }
}

/// A generic sound-capable device: power and volume control only.
///
/// # Examples
///
/// ```
/// use speaker_lib::{Speaker, SpeakerDevice, Status};
///
/// let mut speaker = SpeakerDevice::new("Bookshelf");
/// assert_eq!(speaker.set_volume(7.0).status(), Status::DeviceOff);
///
/// speaker.turn_on();
/// assert!(speaker.set_volume(7.3).is_success());
/// assert_eq!(speaker.volume().value(), 7.5);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SpeakerDevice {
    core: SpeakerCore,
}

impl SpeakerDevice {
    /// Creates a device that is off, at volume 5 within `0..=10`.
    #[must_use]
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            core: SpeakerCore::with_defaults(model),
        }
    }

    /// Creates a device from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the volume bounds are inverted or the initial
    /// volume lies outside them.
    pub fn from_config(config: &SpeakerConfig) -> Result<Self> {
        Ok(Self {
            core: SpeakerCore::from_config(config)?,
        })
    }
}

impl Speaker for SpeakerDevice {
    fn core(&self) -> &SpeakerCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut SpeakerCore {
        &mut self.core
    }

    fn kind(&self) -> DeviceKind {
        DeviceKind::Speaker
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities::speaker()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn powered() -> SpeakerDevice {
        let mut speaker = SpeakerDevice::new("Test");
        speaker.turn_on();
        speaker
    }

    #[test]
    fn defaults() {
        let speaker = SpeakerDevice::new("Test");
        assert_eq!(speaker.model(), "Test");
        assert_eq!(speaker.power(), PowerState::Off);
        assert_eq!(speaker.volume(), Volume::DEFAULT);
        assert_eq!(speaker.volume_range(), VolumeRange::DEFAULT);
    }

    #[test]
    fn turn_on_twice_reports_already_on() {
        let mut speaker = SpeakerDevice::new("Test");
        assert_eq!(speaker.turn_on().status(), Status::Success);

        let before = speaker.clone();
        let second = speaker.turn_on();
        assert_eq!(second.status(), Status::AlreadyActive);
        assert_eq!(second.message(), "The device is already on.");
        assert_eq!(speaker, before);
    }

    #[test]
    fn turn_off_when_off() {
        let mut speaker = SpeakerDevice::new("Test");
        let outcome = speaker.turn_off();
        assert_eq!(outcome.status(), Status::AlreadyActive);
        assert!(outcome.change().is_none());
    }

    #[test]
    fn set_volume_quantizes() {
        let mut speaker = powered();
        let outcome = speaker.set_volume(6.8);
        assert_eq!(outcome.message(), "Volume set to 7.");
        assert_eq!(speaker.volume().value(), 7.0);
    }

    #[test]
    fn set_volume_while_off_keeps_volume() {
        let mut speaker = SpeakerDevice::new("Test");
        let outcome = speaker.set_volume(2.0);
        assert_eq!(outcome.status(), Status::DeviceOff);
        assert_eq!(
            outcome.message(),
            "Volume control is unavailable while the device is off."
        );
        assert_eq!(speaker.volume(), Volume::DEFAULT);
    }

    #[test]
    fn set_volume_out_of_range_quotes_instance_bounds() {
        let config = SpeakerConfig::new("Narrow").with_volume_range(2, 4).with_volume(3.0);
        let mut speaker = SpeakerDevice::from_config(&config).unwrap();
        speaker.turn_on();

        let outcome = speaker.set_volume(11.0);
        assert_eq!(outcome.status(), Status::NotAllowed);
        assert_eq!(
            outcome.message(),
            "Volume must be a non-negative real number between 2 and 4."
        );
        assert_eq!(speaker.volume().value(), 3.0);
    }

    #[test]
    fn set_volume_accepts_fixed_range_not_instance_bounds() {
        let config = SpeakerConfig::new("Narrow").with_volume_range(2, 4).with_volume(3.0);
        let mut speaker = SpeakerDevice::from_config(&config).unwrap();
        speaker.turn_on();

        assert!(speaker.set_volume(9.0).is_success());
        assert_eq!(speaker.volume().value(), 9.0);
    }

    #[test]
    fn set_volume_rejects_nan() {
        let mut speaker = powered();
        assert_eq!(speaker.set_volume(f64::NAN).status(), Status::NotAllowed);
        assert_eq!(speaker.volume(), Volume::DEFAULT);
    }

    #[test]
    fn config_rejects_inverted_volume_bounds() {
        let config = SpeakerConfig::new("Broken").with_volume_range(10, 0);
        assert!(SpeakerDevice::from_config(&config).is_err());
    }

    #[test]
    fn config_rejects_volume_outside_bounds() {
        let config = SpeakerConfig::new("Broken").with_volume(12.0);
        assert!(SpeakerDevice::from_config(&config).is_err());
    }

    #[test]
    fn config_power_on() {
        let config = SpeakerConfig::new("Live").with_power(true);
        let speaker = SpeakerDevice::from_config(&config).unwrap();
        assert!(speaker.is_on());
    }
}
