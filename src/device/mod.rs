// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device types and the shared power/volume capability.
//!
//! Each device owns a [`SpeakerCore`] holding its power state and volume and
//! implements [`Speaker`], which supplies `turn_on`, `turn_off` and
//! `set_volume` for all of them. Kind-specific operations live on the
//! concrete types:
//!
//! | Type              | Operations                                      |
//! |-------------------|-------------------------------------------------|
//! | [`SpeakerDevice`] | power and volume only                           |
//! | [`Radio`]         | `set_frequency`                                 |
//! | [`Television`]    | `switch_input_source`, `switch_channel`         |
//! | [`MobilePhone`]   | `make_call`, `receive_call`, `send_message`, `receive_message` |
//!
//! [`Device`] wraps any of the four when the kind is only known at runtime,
//! for example after loading a [`DeviceConfig`](crate::config::DeviceConfig).

mod call;
mod mobile_phone;
mod radio;
mod speaker;
mod television;

pub use call::{CallDecision, CallReceipt, CallResponder, IncomingCall};
pub use mobile_phone::{DECLINE_REPLY, MobilePhone};
pub use radio::Radio;
pub use speaker::{SpeakerCore, SpeakerDevice};
pub use television::Television;

use crate::capabilities::{Capabilities, DeviceKind};
use crate::outcome::Outcome;
use crate::types::{DeviceId, PowerState, Volume, VolumeRange};

/// The power and volume capability shared by every device.
///
/// Implementors only provide access to their embedded [`SpeakerCore`] and
/// describe themselves; the guarded operations come with the trait.
///
/// # Examples
///
/// ```
/// use speaker_lib::{Radio, Speaker, SpeakerDevice, Status};
///
/// fn mute_all(devices: &mut [&mut dyn Speaker]) {
///     for device in devices {
///         device.turn_on();
///         device.set_volume(0.0);
///     }
/// }
///
/// let mut radio = Radio::new("Kitchen");
/// let mut speaker = SpeakerDevice::new("Study");
/// mute_all(&mut [&mut radio, &mut speaker]);
/// assert_eq!(radio.volume().value(), 0.0);
/// assert_eq!(speaker.turn_on().status(), Status::AlreadyActive);
/// ```
pub trait Speaker {
    /// Returns the embedded power/volume state.
    fn core(&self) -> &SpeakerCore;

    /// Returns the embedded power/volume state for mutation.
    fn core_mut(&mut self) -> &mut SpeakerCore;

    /// Returns the kind of device.
    fn kind(&self) -> DeviceKind;

    /// Returns the operations the device supports.
    fn capabilities(&self) -> Capabilities;

    /// Returns the instance identifier.
    fn id(&self) -> DeviceId {
        self.core().id()
    }

    /// Returns the model label.
    fn model(&self) -> &str {
        self.core().model()
    }

    /// Returns the power state.
    fn power(&self) -> PowerState {
        self.core().power()
    }

    /// Returns `true` if the device is on.
    fn is_on(&self) -> bool {
        self.core().is_on()
    }

    /// Returns the current volume.
    fn volume(&self) -> Volume {
        self.core().volume()
    }

    /// Returns the volume bounds.
    fn volume_range(&self) -> VolumeRange {
        self.core().volume_range()
    }

    /// Switches the device on; reports `AlreadyActive` if it already is.
    fn turn_on(&mut self) -> Outcome {
        self.core_mut().turn_on()
    }

    /// Switches the device off; reports `AlreadyActive` if it already is.
    fn turn_off(&mut self) -> Outcome {
        self.core_mut().turn_off()
    }

    /// Sets the volume to `value`, quantized to half steps.
    ///
    /// Refused while the device is off. Accepted values are `0..=10`
    /// regardless of the device's own volume bounds, which only appear in the
    /// rejection text.
    fn set_volume(&mut self, value: f64) -> Outcome {
        self.core_mut().set_volume(value)
    }
}

/// Any supported device.
#[derive(Debug, Clone, PartialEq)]
pub enum Device {
    /// A generic speaker.
    Speaker(SpeakerDevice),
    /// A radio.
    Radio(Radio),
    /// A television.
    Television(Television),
    /// A mobile phone.
    MobilePhone(MobilePhone),
}

impl Device {
    /// Returns the radio, if this is one.
    #[must_use]
    pub const fn as_radio(&self) -> Option<&Radio> {
        match self {
            Self::Radio(radio) => Some(radio),
            _ => None,
        }
    }

    /// Returns the radio mutably, if this is one.
    pub const fn as_radio_mut(&mut self) -> Option<&mut Radio> {
        match self {
            Self::Radio(radio) => Some(radio),
            _ => None,
        }
    }

    /// Returns the television, if this is one.
    #[must_use]
    pub const fn as_television(&self) -> Option<&Television> {
        match self {
            Self::Television(tv) => Some(tv),
            _ => None,
        }
    }

    /// Returns the television mutably, if this is one.
    pub const fn as_television_mut(&mut self) -> Option<&mut Television> {
        match self {
            Self::Television(tv) => Some(tv),
            _ => None,
        }
    }

    /// Returns the phone, if this is one.
    #[must_use]
    pub const fn as_mobile_phone(&self) -> Option<&MobilePhone> {
        match self {
            Self::MobilePhone(phone) => Some(phone),
            _ => None,
        }
    }

    /// Returns the phone mutably, if this is one.
    pub const fn as_mobile_phone_mut(&mut self) -> Option<&mut MobilePhone> {
        match self {
            Self::MobilePhone(phone) => Some(phone),
            _ => None,
        }
    }

    fn inner(&self) -> &dyn Speaker {
        match self {
            Self::Speaker(speaker) => speaker,
            Self::Radio(radio) => radio,
            Self::Television(tv) => tv,
            Self::MobilePhone(phone) => phone,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn Speaker {
        match self {
            Self::Speaker(speaker) => speaker,
            Self::Radio(radio) => radio,
            Self::Television(tv) => tv,
            Self::MobilePhone(phone) => phone,
        }
    }
}

impl Speaker for Device {
    fn core(&self) -> &SpeakerCore {
        self.inner().core()
    }

    fn core_mut(&mut self) -> &mut SpeakerCore {
        self.inner_mut().core_mut()
    }

    fn kind(&self) -> DeviceKind {
        self.inner().kind()
    }

    fn capabilities(&self) -> Capabilities {
        self.inner().capabilities()
    }
}

impl From<SpeakerDevice> for Device {
    fn from(speaker: SpeakerDevice) -> Self {
        Self::Speaker(speaker)
    }
}

impl From<Radio> for Device {
    fn from(radio: Radio) -> Self {
        Self::Radio(radio)
    }
}

impl From<Television> for Device {
    fn from(tv: Television) -> Self {
        Self::Television(tv)
    }
}

impl From<MobilePhone> for Device {
    fn from(phone: MobilePhone) -> Self {
        Self::MobilePhone(phone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Status;

    #[test]
    fn device_dispatches_shared_operations() {
        let mut device = Device::from(Radio::new("Kitchen"));
        assert_eq!(device.kind(), DeviceKind::Radio);
        assert!(device.turn_on().is_success());
        assert!(device.set_volume(2.2).is_success());
        assert_eq!(device.volume().value(), 2.0);
        assert_eq!(device.as_radio().map(Speaker::is_on), Some(true));
    }

    #[test]
    fn kind_specific_access() {
        let mut device = Device::from(Television::new("Lounge", 50.0).unwrap());
        assert!(device.as_radio().is_none());
        assert!(device.capabilities().input_switching);

        device.turn_on();
        let tv = device.as_television_mut().unwrap();
        assert_eq!(tv.switch_channel(12).status(), Status::Success);
        assert_eq!(device.as_television().map(Television::channel), Some(12));
    }

    #[test]
    fn phone_capabilities_follow_camera_flag() {
        let device = Device::from(MobilePhone::new("Pocket", 6.1).unwrap());
        assert_eq!(device.capabilities(), Capabilities::mobile_phone(true));
        assert!(device.as_mobile_phone().is_some());
    }

    #[test]
    fn speaker_trait_object() {
        let mut speaker = SpeakerDevice::new("Study");
        let dynamic: &mut dyn Speaker = &mut speaker;
        dynamic.turn_on();
        assert_eq!(dynamic.power(), PowerState::On);
        assert_eq!(dynamic.model(), "Study");
    }
}
