// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! State change representation.
//!
//! # Change Types
//!
//! - [`StateChange::Power`] - Device switched on or off
//! - [`StateChange::Volume`] - Volume level changed
//! - [`StateChange::Frequency`] - Radio retuned
//! - [`StateChange::InputSource`] - Television input switched
//! - [`StateChange::Channel`] - Television channel switched

use std::fmt;

use crate::types::{Frequency, PowerState, Volume};

/// Represents a single applied change in device state.
///
/// # Examples
///
/// ```
/// use speaker_lib::state::StateChange;
/// use speaker_lib::types::Volume;
///
/// let change = StateChange::volume(Volume::new(7.0).unwrap());
/// assert_eq!(change.to_string(), "volume = 7");
/// ```
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum StateChange {
    /// Power state changed.
    Power(PowerState),

    /// Volume level changed.
    Volume(Volume),

    /// Radio frequency changed.
    Frequency(Frequency),

    /// Television input source changed.
    InputSource(String),

    /// Television channel changed.
    Channel(i32),
}

impl StateChange {
    /// Creates a power-on change.
    #[must_use]
    pub fn power_on() -> Self {
        Self::Power(PowerState::On)
    }

    /// Creates a power-off change.
    #[must_use]
    pub fn power_off() -> Self {
        Self::Power(PowerState::Off)
    }

    /// Creates a volume change.
    #[must_use]
    pub fn volume(volume: Volume) -> Self {
        Self::Volume(volume)
    }

    /// Creates a frequency change.
    #[must_use]
    pub fn frequency(frequency: Frequency) -> Self {
        Self::Frequency(frequency)
    }

    /// Creates an input source change.
    #[must_use]
    pub fn input_source(source: impl Into<String>) -> Self {
        Self::InputSource(source.into())
    }

    /// Creates a channel change.
    #[must_use]
    pub fn channel(channel: i32) -> Self {
        Self::Channel(channel)
    }

    /// Returns the name of the field this change touches.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::Power(_) => "power",
            Self::Volume(_) => "volume",
            Self::Frequency(_) => "frequency",
            Self::InputSource(_) => "input_source",
            Self::Channel(_) => "channel",
        }
    }
}

impl fmt::Display for StateChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Power(state) => write!(f, "{} = {state}", self.field()),
            Self::Volume(volume) => write!(f, "{} = {volume}", self.field()),
            Self::Frequency(freq) => write!(f, "{} = {freq}", self.field()),
            Self::InputSource(source) => write!(f, "{} = {source}", self.field()),
            Self::Channel(channel) => write!(f, "{} = {channel}", self.field()),
        }
    }
}
