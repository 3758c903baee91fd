// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Mobile phone.

use crate::capabilities::{Capabilities, DeviceKind};
use crate::config::PhoneConfig;
use crate::error::{Result, ValueError};
use crate::outcome::Outcome;
use crate::types::Contact;

use super::call::{CallDecision, CallReceipt, CallResponder, IncomingCall};
use super::{Speaker, SpeakerCore};

/// Text sent back to a caller whose call was declined.
pub const DECLINE_REPLY: &str = "I can't talk right now, I'll call back later.";

/// A mobile phone with calls and text messages.
///
/// Calls and messages leave no trace on the phone; each operation only
/// reports what happened.
///
/// # Examples
///
/// ```
/// use speaker_lib::{CallDecision, MobilePhone, Speaker, Status};
/// use speaker_lib::types::Contact;
///
/// let mut phone = MobilePhone::new("Pocket", 6.1).unwrap();
/// let bob = Contact::new("Bob", "555-0100");
///
/// assert_eq!(phone.make_call(&bob).status(), Status::DeviceOff);
///
/// phone.turn_on();
/// assert_eq!(phone.make_call(&bob).message(), "Calling: Bob (555-0100)");
///
/// let receipt = phone.receive_call(&bob, CallDecision::Decline).unwrap();
/// assert_eq!(
///     receipt.outcome().message(),
///     "Message sent to Bob (555-0100): \"I can't talk right now, I'll call back later.\""
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct MobilePhone {
    core: SpeakerCore,
    display_size: f64,
    has_camera: bool,
}

impl MobilePhone {
    /// Creates a phone with a camera, off, at volume 5 within `0..=10`.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::InvalidDisplaySize` unless `display_size` is a
    /// positive finite number.
    pub fn new(model: impl Into<String>, display_size: f64) -> Result<Self> {
        Self::assemble(SpeakerCore::with_defaults(model), display_size, true)
    }

    /// Creates a phone from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the display size is not positive or the volume
    /// settings are inconsistent.
    pub fn from_config(config: &PhoneConfig) -> Result<Self> {
        let core = SpeakerCore::from_config(&config.speaker)?;
        Self::assemble(core, config.display_size, config.has_camera)
    }

    fn assemble(core: SpeakerCore, display_size: f64, has_camera: bool) -> Result<Self> {
        if !(display_size.is_finite() && display_size > 0.0) {
            return Err(ValueError::InvalidDisplaySize(display_size).into());
        }
        Ok(Self {
            core,
            display_size,
            has_camera,
        })
    }

    /// Returns the display diagonal.
    #[must_use]
    pub const fn display_size(&self) -> f64 {
        self.display_size
    }

    /// Returns `true` if the phone has a camera.
    #[must_use]
    pub const fn has_camera(&self) -> bool {
        self.has_camera
    }

    /// Places a call to `callee`.
    pub fn make_call(&self, callee: &Contact) -> Outcome {
        if !self.is_on() {
            tracing::debug!(device = %self.id(), "Call refused, device off");
            return Outcome::device_off();
        }
        tracing::debug!(device = %self.id(), callee = %callee, "Calling");
        Outcome::success(format!("Calling: {callee}"))
    }

    /// Handles a call from `caller`.
    ///
    /// A powered-off phone ignores the call: the responder is not consulted
    /// and `None` is returned. Otherwise the responder decides once; a
    /// declined call is answered with [`DECLINE_REPLY`] through
    /// [`send_message`](Self::send_message).
    pub fn receive_call<R>(&self, caller: &Contact, mut responder: R) -> Option<CallReceipt>
    where
        R: CallResponder,
    {
        if !self.is_on() {
            tracing::trace!(device = %self.id(), caller = %caller, "Call missed, device off");
            return None;
        }

        let call = IncomingCall::new(caller.clone());
        let decision = responder.respond(&call);
        tracing::debug!(device = %self.id(), caller = %caller, %decision, "Incoming call answered");

        let outcome = match decision {
            CallDecision::Accept => Outcome::success(format!("Hello, {}!", caller.name())),
            CallDecision::Decline => self.send_message(caller, DECLINE_REPLY),
        };
        Some(CallReceipt::new(call.prompt(), decision, outcome))
    }

    /// Sends `text` to `recipient`.
    pub fn send_message(&self, recipient: &Contact, text: &str) -> Outcome {
        if !self.is_on() {
            tracing::debug!(device = %self.id(), "Message refused, device off");
            return Outcome::device_off();
        }
        tracing::debug!(device = %self.id(), recipient = %recipient, "Message sent");
        Outcome::success(format!("Message sent to {recipient}: \"{text}\""))
    }

    /// Shows `text` received from `sender`.
    ///
    /// Unlike the other phone operations, a powered-off phone produces no
    /// status line at all: `None` is returned.
    pub fn receive_message(&self, sender: &Contact, text: &str) -> Option<Outcome> {
        if !self.is_on() {
            tracing::trace!(device = %self.id(), sender = %sender, "Message dropped, device off");
            return None;
        }
        tracing::debug!(device = %self.id(), sender = %sender, "Message received");
        Some(Outcome::success(format!(
            "{sender} sent you a message: \"{text}\""
        )))
    }
}

impl Speaker for MobilePhone {
    fn core(&self) -> &SpeakerCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut SpeakerCore {
        &mut self.core
    }

    fn kind(&self) -> DeviceKind {
        DeviceKind::MobilePhone
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities::mobile_phone(self.has_camera)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Status;

    fn bob() -> Contact {
        Contact::new("Bob", "555-0100")
    }

    fn powered() -> MobilePhone {
        let mut phone = MobilePhone::new("Test", 6.1).unwrap();
        phone.turn_on();
        phone
    }

    #[test]
    fn defaults() {
        let phone = MobilePhone::new("Test", 6.1).unwrap();
        assert!(phone.has_camera());
        assert_eq!(phone.display_size(), 6.1);
        assert!(phone.capabilities().camera);
    }

    #[test]
    fn send_message_while_off() {
        let phone = MobilePhone::new("Test", 6.1).unwrap();
        let outcome = phone.send_message(&bob(), "hi");
        assert_eq!(outcome.status(), Status::DeviceOff);
        assert_eq!(outcome.message(), "Turn on the device.");
    }

    #[test]
    fn send_message_quotes_text() {
        let outcome = powered().send_message(&bob(), "on my way");
        assert_eq!(outcome.message(), "Message sent to Bob (555-0100): \"on my way\"");
        assert!(outcome.change().is_none());
    }

    #[test]
    fn receive_message_while_off_is_silent() {
        let phone = MobilePhone::new("Test", 6.1).unwrap();
        let before = phone.clone();
        assert!(phone.receive_message(&bob(), "hi").is_none());
        assert_eq!(phone, before);
    }

    #[test]
    fn receive_message_while_on() {
        let outcome = powered().receive_message(&bob(), "hi").unwrap();
        assert_eq!(outcome.message(), "Bob (555-0100) sent you a message: \"hi\"");
    }

    #[test]
    fn receive_call_while_off_skips_responder() {
        let phone = MobilePhone::new("Test", 6.1).unwrap();
        let mut asked = false;
        let receipt = phone.receive_call(&bob(), |_: &IncomingCall| {
            asked = true;
            CallDecision::Accept
        });
        assert!(receipt.is_none());
        assert!(!asked);
    }

    #[test]
    fn accepted_call_greets_caller() {
        let receipt = powered().receive_call(&bob(), CallDecision::Accept).unwrap();
        assert_eq!(receipt.decision(), CallDecision::Accept);
        assert_eq!(receipt.prompt(), "Bob (555-0100) is calling you. Answer the call?");
        assert_eq!(receipt.outcome().message(), "Hello, Bob!");
    }

    #[test]
    fn declined_call_texts_back() {
        let phone = powered();
        let receipt = phone.receive_call(&bob(), CallDecision::Decline).unwrap();
        assert_eq!(receipt.decision(), CallDecision::Decline);
        assert_eq!(
            receipt.outcome(),
            &phone.send_message(&bob(), DECLINE_REPLY)
        );
    }

    #[test]
    fn responder_consulted_once() {
        let phone = powered();
        let mut calls = 0;
        phone.receive_call(&bob(), |_: &IncomingCall| {
            calls += 1;
            CallDecision::from_reply("no")
        });
        assert_eq!(calls, 1);
    }

    #[test]
    fn camera_less_config() {
        let config = PhoneConfig::new("Basic", 2.4).with_camera(false);
        let phone = MobilePhone::from_config(&config).unwrap();
        assert!(!phone.has_camera());
        assert!(!phone.capabilities().camera);
    }
}
