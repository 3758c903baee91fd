// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Incoming call boundary.
//!
//! Answering a call needs a single accept/decline answer from outside the
//! phone. The answer is supplied through a [`CallResponder`]: either a
//! pre-decided [`CallDecision`] or a closure that sees the [`IncomingCall`]
//! and may block until a person replies.
//!
//! ```
//! use speaker_lib::{CallDecision, IncomingCall, MobilePhone, Speaker};
//! use speaker_lib::types::Contact;
//!
//! let mut phone = MobilePhone::new("Pocket", 6.1).unwrap();
//! phone.turn_on();
//!
//! let alice = Contact::new("Alice", "555-0101");
//! let receipt = phone
//!     .receive_call(&alice, |call: &IncomingCall| {
//!         assert_eq!(call.caller().name(), "Alice");
//!         CallDecision::from_reply("Да")
//!     })
//!     .unwrap();
//! assert_eq!(receipt.outcome().message(), "Hello, Alice!");
//! ```

use std::fmt;

use crate::outcome::Outcome;
use crate::types::Contact;

/// Answer to an incoming call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CallDecision {
    /// Pick up.
    Accept,
    /// Reject and text the caller back.
    Decline,
}

impl CallDecision {
    /// The one reply that accepts a call. Compared exactly.
    pub const AFFIRMATIVE: &'static str = "Да";

    /// Interprets a free-form reply: exactly [`Self::AFFIRMATIVE`] accepts,
    /// anything else declines.
    ///
    /// # Examples
    ///
    /// ```
    /// use speaker_lib::CallDecision;
    ///
    /// assert_eq!(CallDecision::from_reply("Да"), CallDecision::Accept);
    /// assert_eq!(CallDecision::from_reply("да"), CallDecision::Decline);
    /// assert_eq!(CallDecision::from_reply("yes"), CallDecision::Decline);
    /// assert_eq!(CallDecision::from_reply(""), CallDecision::Decline);
    /// ```
    #[must_use]
    pub fn from_reply(reply: &str) -> Self {
        if reply == Self::AFFIRMATIVE {
            Self::Accept
        } else {
            Self::Decline
        }
    }

    /// Returns `true` for [`CallDecision::Accept`].
    #[must_use]
    pub const fn is_accept(&self) -> bool {
        matches!(self, Self::Accept)
    }
}

impl From<bool> for CallDecision {
    fn from(accept: bool) -> Self {
        if accept { Self::Accept } else { Self::Decline }
    }
}

impl fmt::Display for CallDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Accept => f.write_str("accept"),
            Self::Decline => f.write_str("decline"),
        }
    }
}

/// A call waiting for an answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomingCall {
    caller: Contact,
}

impl IncomingCall {
    pub(crate) fn new(caller: Contact) -> Self {
        Self { caller }
    }

    /// Returns who is calling.
    #[must_use]
    pub const fn caller(&self) -> &Contact {
        &self.caller
    }

    /// Returns the question put to the user.
    #[must_use]
    pub fn prompt(&self) -> String {
        format!("{} is calling you. Answer the call?", self.caller)
    }
}

/// Source of the accept/decline answer for an incoming call.
///
/// The phone consults the responder exactly once per call, synchronously.
pub trait CallResponder {
    /// Decides whether to take `call`.
    fn respond(&mut self, call: &IncomingCall) -> CallDecision;
}

impl CallResponder for CallDecision {
    fn respond(&mut self, _call: &IncomingCall) -> CallDecision {
        *self
    }
}

impl<F> CallResponder for F
where
    F: FnMut(&IncomingCall) -> CallDecision,
{
    fn respond(&mut self, call: &IncomingCall) -> CallDecision {
        self(call)
    }
}

/// What happened to an incoming call.
#[derive(Debug, Clone, PartialEq)]
pub struct CallReceipt {
    prompt: String,
    decision: CallDecision,
    outcome: Outcome,
}

impl CallReceipt {
    pub(crate) fn new(prompt: String, decision: CallDecision, outcome: Outcome) -> Self {
        Self {
            prompt,
            decision,
            outcome,
        }
    }

    /// Returns the question that was put to the responder.
    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Returns the responder's answer.
    #[must_use]
    pub const fn decision(&self) -> CallDecision {
        self.decision
    }

    /// Returns the greeting, or the outcome of the call-back message when
    /// the call was declined.
    #[must_use]
    pub const fn outcome(&self) -> &Outcome {
        &self.outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_reply_accepts_only_exact_token() {
        assert!(CallDecision::from_reply("Да").is_accept());
        assert!(!CallDecision::from_reply("ДА").is_accept());
        assert!(!CallDecision::from_reply("да").is_accept());
        assert!(!CallDecision::from_reply(" Да\n").is_accept());
        assert!(!CallDecision::from_reply("yes").is_accept());
        assert!(!CallDecision::from_reply("y").is_accept());
        assert!(!CallDecision::from_reply("no").is_accept());
    }

    #[test]
    fn fixed_decision_responds_with_itself() {
        let call = IncomingCall::new(Contact::new("Bob", "1"));
        let mut decision = CallDecision::Decline;
        assert_eq!(decision.respond(&call), CallDecision::Decline);
    }

    #[test]
    fn closure_responder_sees_call() {
        let call = IncomingCall::new(Contact::new("Bob", "1"));
        let mut seen = Vec::new();
        let mut responder = |c: &IncomingCall| {
            seen.push(c.prompt());
            CallDecision::Accept
        };
        assert_eq!(responder.respond(&call), CallDecision::Accept);
        assert_eq!(seen, vec!["Bob (1) is calling you. Answer the call?".to_string()]);
    }

    #[test]
    fn from_bool() {
        assert_eq!(CallDecision::from(true), CallDecision::Accept);
        assert_eq!(CallDecision::from(false), CallDecision::Decline);
    }
}
