// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Television channel bounds.

use std::fmt;

use crate::error::ConfigError;

/// Channel numbering of a television.
///
/// A television starts on `start` and may be switched to any channel
/// strictly between `start` and `max`. Both bounds themselves are refused as
/// switch targets, so the starting channel cannot be selected again once
/// left.
///
/// # Examples
///
/// ```
/// use speaker_lib::types::ChannelRange;
///
/// let range = ChannelRange::default();
/// assert_eq!(range.start(), 1);
/// assert!(range.is_selectable(2));
/// assert!(!range.is_selectable(1));
/// assert!(!range.is_selectable(100));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
pub struct ChannelRange {
    start: i32,
    max: i32,
}

impl ChannelRange {
    /// Channels 1 to 100.
    pub const DEFAULT: Self = Self { start: 1, max: 100 };

    /// Creates channel bounds.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidBounds` unless `start < max`.
    pub fn new(start: i32, max: i32) -> Result<Self, ConfigError> {
        if start >= max {
            return Err(ConfigError::InvalidBounds {
                what: "channel",
                min: f64::from(start),
                max: f64::from(max),
            });
        }
        Ok(Self { start, max })
    }

    /// Returns the channel a television starts on.
    #[must_use]
    pub const fn start(&self) -> i32 {
        self.start
    }

    /// Returns the channel count bound.
    #[must_use]
    pub const fn max(&self) -> i32 {
        self.max
    }

    /// Returns `true` if `channel` is a valid switch target.
    #[must_use]
    pub const fn is_selectable(&self, channel: i32) -> bool {
        self.start < channel && channel < self.max
    }
}

impl Default for ChannelRange {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for ChannelRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_are_exclusive() {
        let range = ChannelRange::new(5, 8).unwrap();
        assert!(!range.is_selectable(5));
        assert!(range.is_selectable(6));
        assert!(range.is_selectable(7));
        assert!(!range.is_selectable(8));
    }

    #[test]
    fn rejects_empty_range() {
        assert!(ChannelRange::new(3, 3).is_err());
        assert!(ChannelRange::new(4, 3).is_err());
    }
}
