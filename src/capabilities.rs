// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Capability sets of the supported device kinds.
//!
//! Every device shares power and volume control. On top of that, each kind
//! adds its own guarded operations; [`Capabilities`] lists which ones a given
//! device exposes so callers holding a [`Device`](crate::Device) can check
//! before reaching for a kind-specific accessor.

use std::fmt;

/// The kind of a device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceKind {
    /// A generic sound-capable device with power and volume only.
    Speaker,
    /// A radio receiver.
    Radio,
    /// A television set.
    Television,
    /// A mobile phone.
    MobilePhone,
}

impl DeviceKind {
    /// Returns the snake-case name of the kind.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Speaker => "speaker",
            Self::Radio => "radio",
            Self::Television => "television",
            Self::MobilePhone => "mobile_phone",
        }
    }
}

impl fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Capabilities of a device.
///
/// # Examples
///
/// ```
/// use speaker_lib::Capabilities;
///
/// let tv = Capabilities::television();
/// assert!(tv.input_switching);
/// assert!(tv.channel_switching);
/// assert!(!tv.tuner);
///
/// let phone = Capabilities::mobile_phone(false);
/// assert!(phone.telephony);
/// assert!(!phone.camera);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
// Each boolean is an independent feature flag.
#[allow(clippy::struct_excessive_bools)]
pub struct Capabilities {
    /// Supports frequency tuning.
    pub tuner: bool,

    /// Supports switching between input sources.
    pub input_switching: bool,

    /// Supports channel switching.
    pub channel_switching: bool,

    /// Supports calls and text messages.
    pub telephony: bool,

    /// Has a built-in camera.
    pub camera: bool,
}

impl Default for Capabilities {
    fn default() -> Self {
        Self::speaker()
    }
}

impl Capabilities {
    /// Power and volume only.
    #[must_use]
    pub const fn speaker() -> Self {
        Self {
            tuner: false,
            input_switching: false,
            channel_switching: false,
            telephony: false,
            camera: false,
        }
    }

    /// Power, volume and tuning.
    #[must_use]
    pub const fn radio() -> Self {
        Self {
            tuner: true,
            ..Self::speaker()
        }
    }

    /// Power, volume, input and channel switching.
    #[must_use]
    pub const fn television() -> Self {
        Self {
            input_switching: true,
            channel_switching: true,
            ..Self::speaker()
        }
    }

    /// Power, volume and telephony, with or without a camera.
    #[must_use]
    pub const fn mobile_phone(camera: bool) -> Self {
        Self {
            telephony: true,
            camera,
            ..Self::speaker()
        }
    }

    /// Returns whether the device offers anything beyond power and volume.
    #[must_use]
    pub const fn is_extended(&self) -> bool {
        self.tuner || self.input_switching || self.channel_switching || self.telephony
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn speaker_has_no_extras() {
        let caps = Capabilities::default();
        assert_eq!(caps, Capabilities::speaker());
        assert!(!caps.is_extended());
    }

    #[test]
    fn radio_only_tunes() {
        let caps = Capabilities::radio();
        assert!(caps.tuner);
        assert!(!caps.telephony);
        assert!(caps.is_extended());
    }

    #[test]
    fn phone_camera_flag() {
        assert!(Capabilities::mobile_phone(true).camera);
        assert!(!Capabilities::mobile_phone(false).camera);
    }

    #[test]
    fn kind_names() {
        assert_eq!(DeviceKind::MobilePhone.to_string(), "mobile_phone");
        assert_eq!(DeviceKind::Speaker.as_str(), "speaker");
    }
}
