// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Structured results of guarded operations.
//!
//! A guarded operation either applies its change or leaves the device
//! untouched and explains why. Both cases are reported as an [`Outcome`]:
//! a machine-checkable [`Status`] plus the human-readable status line.
//!
//! # Examples
//!
//! ```
//! use speaker_lib::{Radio, Speaker, Status};
//!
//! let mut radio = Radio::new("Tivoli One");
//! let outcome = radio.set_frequency(101.1);
//! assert_eq!(outcome.status(), Status::DeviceOff);
//! assert_eq!(outcome.to_string(), "Turn on the device.");
//! ```

use std::fmt;

use crate::state::StateChange;

/// Status line shown when an operation needs the device to be powered.
pub(crate) const TURN_ON_PROMPT: &str = "Turn on the device.";

/// Classification of an operation result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// The operation was performed.
    Success,
    /// The device is already in the requested state; nothing changed.
    AlreadyActive,
    /// The requested value is not permitted; nothing changed.
    NotAllowed,
    /// The device is off; nothing changed.
    DeviceOff,
}

impl Status {
    /// Returns the snake-case name of the status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::AlreadyActive => "already_active",
            Self::NotAllowed => "not_allowed",
            Self::DeviceOff => "device_off",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of a guarded operation.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Outcome {
    status: Status,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    change: Option<StateChange>,
}

impl Outcome {
    /// Creates an outcome without an associated state change.
    #[must_use]
    pub fn new(status: Status, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            change: None,
        }
    }

    /// Creates a successful outcome that applied `change`.
    #[must_use]
    pub fn applied(message: impl Into<String>, change: StateChange) -> Self {
        Self {
            status: Status::Success,
            message: message.into(),
            change: Some(change),
        }
    }

    /// Creates a successful outcome that did not touch device state.
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(Status::Success, message)
    }

    /// Creates an "already in that state" outcome.
    #[must_use]
    pub fn already_active(message: impl Into<String>) -> Self {
        Self::new(Status::AlreadyActive, message)
    }

    /// Creates a rejection for a value that is not permitted.
    #[must_use]
    pub fn not_allowed(message: impl Into<String>) -> Self {
        Self::new(Status::NotAllowed, message)
    }

    /// Creates the standard rejection for a powered-off device.
    #[must_use]
    pub fn device_off() -> Self {
        Self::new(Status::DeviceOff, TURN_ON_PROMPT)
    }

    /// Returns the status.
    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    /// Returns the status line.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the state change applied by the operation, if any.
    #[must_use]
    pub const fn change(&self) -> Option<&StateChange> {
        self.change.as_ref()
    }

    /// Returns `true` if the operation was performed.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self.status, Status::Success)
    }

    /// Consumes the outcome, returning the status line.
    #[must_use]
    pub fn into_message(self) -> String {
        self.message
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn device_off_uses_turn_on_prompt() {
        let outcome = Outcome::device_off();
        assert_eq!(outcome.status(), Status::DeviceOff);
        assert_eq!(outcome.message(), "Turn on the device.");
        assert!(outcome.change().is_none());
        assert!(!outcome.is_success());
    }

    #[test]
    fn applied_carries_change() {
        let outcome = Outcome::applied("Channel 5 is on.", StateChange::channel(5));
        assert!(outcome.is_success());
        assert_eq!(outcome.change(), Some(&StateChange::Channel(5)));
        assert_eq!(outcome.to_string(), "Channel 5 is on.");
    }

    #[test]
    fn serializes_without_empty_change() {
        let json = serde_json::to_value(Outcome::not_allowed("nope")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "status": "not_allowed", "message": "nope" })
        );
    }
}
