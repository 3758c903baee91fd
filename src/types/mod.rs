// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for device control.
//!
//! Each type ensures its value is valid at construction time, so a device
//! holding one never needs to re-check it.
//!
//! # Types
//!
//! - [`PowerState`] - On/Off
//! - [`Volume`] - Volume level quantized to half steps
//! - [`VolumeRange`] - Integer volume bounds of a device
//! - [`Frequency`] - Radio frequency rounded to one decimal
//! - [`FrequencyRange`] - Tuning bounds of a radio
//! - [`ChannelRange`] - Channel numbering of a television
//! - [`InputSources`] - Ordered, non-empty input source labels
//! - [`Contact`] - Name and number of a call or message counterpart
//! - [`DeviceId`] - Unique per-instance identifier

mod channel;
mod contact;
mod device_id;
mod frequency;
mod input_source;
mod power;
mod volume;

pub use channel::ChannelRange;
pub use contact::Contact;
pub use device_id::DeviceId;
pub use frequency::{Frequency, FrequencyRange};
pub use input_source::InputSources;
pub use power::PowerState;
pub use volume::{Volume, VolumeRange};
