// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `speaker_lib` - In-memory simulation of sound-capable consumer devices.
//!
//! Devices are plain stateful values. Every state-changing operation is
//! *guarded*: it checks its preconditions (power state, value ranges,
//! membership in an allowed set) and either applies the change or leaves the
//! device untouched. Either way it returns an [`Outcome`] carrying a
//! [`Status`] and a human-readable status line; guarded operations never
//! return errors.
//!
//! # Supported Devices
//!
//! - [`SpeakerDevice`]: power toggle and half-step volume control
//! - [`Radio`]: bounded frequency tuning
//! - [`Television`]: input source selection and channel switching
//! - [`MobilePhone`]: calls and text messages
//!
//! All of them implement [`Speaker`], the shared power/volume capability.
//!
//! # Quick Start
//!
//! ```
//! use speaker_lib::{Speaker, Status, Television};
//!
//! let mut tv = Television::new("Some classy TV", 40.0).unwrap();
//!
//! // Off: nothing switches
//! let outcome = tv.switch_input_source("AV");
//! assert_eq!(outcome.status(), Status::DeviceOff);
//! assert_eq!(tv.input_source(), "HDMI");
//!
//! tv.turn_on();
//! println!("{}", tv.switch_input_source("AV"));
//! println!("{}", tv.switch_channel(2));
//! assert_eq!(tv.input_source(), "AV");
//! assert_eq!(tv.channel(), 2);
//! ```
//!
//! ## Answering Calls
//!
//! An incoming call needs a yes/no answer from outside the phone, supplied
//! as a [`CallResponder`]:
//!
//! ```
//! use speaker_lib::{CallDecision, MobilePhone, Speaker};
//! use speaker_lib::types::Contact;
//!
//! let mut phone = MobilePhone::new("Pocket", 6.1).unwrap();
//! phone.turn_on();
//!
//! let caller = Contact::new("Alice", "555-0101");
//! let receipt = phone.receive_call(&caller, CallDecision::Accept).unwrap();
//! assert_eq!(receipt.outcome().message(), "Hello, Alice!");
//! ```
//!
//! # Logging
//!
//! Operations emit [`tracing`] events with the device id and the attempted
//! value. The library installs no subscriber.

mod capabilities;
pub mod config;
mod device;
pub mod error;
mod outcome;
pub mod state;
pub mod types;

pub use capabilities::{Capabilities, DeviceKind};
pub use config::{DeviceConfig, PhoneConfig, RadioConfig, SpeakerConfig, TelevisionConfig};
pub use device::{
    CallDecision, CallReceipt, CallResponder, DECLINE_REPLY, Device, IncomingCall, MobilePhone,
    Radio, Speaker, SpeakerCore, SpeakerDevice, Television,
};
pub use error::{ConfigError, Error, Result, ValueError};
pub use outcome::{Outcome, Status};
pub use state::StateChange;
pub use types::{
    ChannelRange, Contact, DeviceId, Frequency, FrequencyRange, InputSources, PowerState, Volume,
    VolumeRange,
};
