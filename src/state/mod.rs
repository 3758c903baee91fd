// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device state change records.
//!
//! Every successful guarded operation mutates exactly one field of a device.
//! The [`StateChange`] describing that mutation travels with the
//! [`Outcome`](crate::Outcome) of the operation.
//!
//! # Examples
//!
//! ```
//! use speaker_lib::{Radio, Speaker};
//! use speaker_lib::state::StateChange;
//! use speaker_lib::types::PowerState;
//!
//! let mut radio = Radio::new("Tivoli One");
//! let outcome = radio.turn_on();
//! assert_eq!(outcome.change(), Some(&StateChange::Power(PowerState::On)));
//! ```

mod state_change;

pub use state_change::StateChange;
