// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Power state of a device.

use std::fmt;

/// Represents whether a device is energized.
///
/// # Examples
///
/// ```
/// use speaker_lib::types::PowerState;
///
/// assert_eq!(PowerState::On.as_str(), "ON");
/// assert_eq!(PowerState::from(false), PowerState::Off);
/// assert!(PowerState::On.is_on());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum PowerState {
    /// Power is off.
    #[default]
    Off,
    /// Power is on.
    On,
}

impl PowerState {
    /// Returns the upper-case label of the state.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Off => "OFF",
            Self::On => "ON",
        }
    }

    /// Returns `true` if the device is energized.
    #[must_use]
    pub const fn is_on(&self) -> bool {
        matches!(self, Self::On)
    }
}

impl fmt::Display for PowerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<bool> for PowerState {
    fn from(value: bool) -> Self {
        if value { Self::On } else { Self::Off }
    }
}

impl From<PowerState> for bool {
    fn from(state: PowerState) -> Self {
        state.is_on()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn power_state_bool_conversions() {
        assert_eq!(PowerState::from(true), PowerState::On);
        assert!(!bool::from(PowerState::Off));
        assert_eq!(PowerState::default(), PowerState::Off);
    }

    #[test]
    fn power_state_labels() {
        assert_eq!(PowerState::On.to_string(), "ON");
        assert!(!PowerState::Off.is_on());
    }
}
