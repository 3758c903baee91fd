// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Television set.

use crate::capabilities::{Capabilities, DeviceKind};
use crate::config::TelevisionConfig;
use crate::error::{Result, ValueError};
use crate::outcome::Outcome;
use crate::state::StateChange;
use crate::types::{ChannelRange, InputSources};

use super::{Speaker, SpeakerCore};

/// A television with input source selection and channel switching.
///
/// # Examples
///
/// ```
/// use speaker_lib::{Speaker, Status, Television};
///
/// let mut tv = Television::new("Some classy TV", 40.0).unwrap();
///
/// // Nothing switches while the set is off
/// assert_eq!(tv.switch_input_source("AV").status(), Status::DeviceOff);
/// assert_eq!(tv.input_source(), "HDMI");
///
/// tv.turn_on();
/// tv.switch_input_source("AV");
/// tv.switch_channel(2);
/// assert_eq!(tv.input_source(), "AV");
/// assert_eq!(tv.channel(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Television {
    core: SpeakerCore,
    display_size: f64,
    input_sources: InputSources,
    input_source: String,
    channel_range: ChannelRange,
    channel: i32,
}

impl Television {
    /// Creates a television with the default sources (HDMI, AV, SCART) and
    /// channels 1 to 100, off, on HDMI and channel 1.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::InvalidDisplaySize` unless `display_size` is a
    /// positive finite number.
    pub fn new(model: impl Into<String>, display_size: f64) -> Result<Self> {
        Self::assemble(
            SpeakerCore::with_defaults(model),
            display_size,
            InputSources::default(),
            ChannelRange::DEFAULT,
        )
    }

    /// Creates a television from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the display size is not positive, the source list
    /// is empty or repeats a label, or any pair of bounds is inverted.
    pub fn from_config(config: &TelevisionConfig) -> Result<Self> {
        let core = SpeakerCore::from_config(&config.speaker)?;
        let input_sources = InputSources::new(config.input_sources.iter().cloned())?;
        let channel_range = ChannelRange::new(config.start_channel, config.max_channels)?;
        Self::assemble(core, config.display_size, input_sources, channel_range)
    }

    fn assemble(
        core: SpeakerCore,
        display_size: f64,
        input_sources: InputSources,
        channel_range: ChannelRange,
    ) -> Result<Self> {
        if !(display_size.is_finite() && display_size > 0.0) {
            return Err(ValueError::InvalidDisplaySize(display_size).into());
        }
        Ok(Self {
            core,
            display_size,
            input_source: input_sources.first().to_string(),
            input_sources,
            channel: channel_range.start(),
            channel_range,
        })
    }

    /// Returns the display diagonal.
    #[must_use]
    pub const fn display_size(&self) -> f64 {
        self.display_size
    }

    /// Returns the allowed input sources.
    #[must_use]
    pub const fn input_sources(&self) -> &InputSources {
        &self.input_sources
    }

    /// Returns the selected input source.
    #[must_use]
    pub fn input_source(&self) -> &str {
        &self.input_source
    }

    /// Returns the channel bounds.
    #[must_use]
    pub const fn channel_range(&self) -> ChannelRange {
        self.channel_range
    }

    /// Returns the current channel.
    #[must_use]
    pub const fn channel(&self) -> i32 {
        self.channel
    }

    /// Switches to another allowed input source.
    ///
    /// Off wins over every other rejection. A label outside the allowed list
    /// is answered with the full list; re-selecting the current source is
    /// reported as [`Status::AlreadyActive`](crate::Status::AlreadyActive).
    pub fn switch_input_source(&mut self, source: &str) -> Outcome {
        let allowed = self.input_sources.contains(source);
        let different = source != self.input_source;

        if self.is_on() && allowed && different {
            self.input_source = source.to_string();
            tracing::debug!(device = %self.id(), source, "Input source switched");
            return Outcome::applied(
                format!("Input source switched to {source}."),
                StateChange::input_source(source),
            );
        }

        if !self.is_on() {
            tracing::debug!(device = %self.id(), source, "Input switch refused, device off");
            return Outcome::device_off();
        }

        if allowed {
            tracing::trace!(device = %self.id(), source, "Input source already selected");
            return Outcome::already_active(format!("Input source {source} is already selected."));
        }

        tracing::debug!(device = %self.id(), source, "Unknown input source");
        Outcome::not_allowed(format!(
            "Input source {source} is not in the list of available sources: {}.",
            self.input_sources.joined()
        ))
    }

    /// Switches to `channel`.
    ///
    /// Targets must lie strictly between the start channel and the channel
    /// bound. When powered, re-selecting the current channel is reported
    /// before the range check.
    pub fn switch_channel(&mut self, channel: i32) -> Outcome {
        let exists = self.channel_range.is_selectable(channel);
        let different = channel != self.channel;

        if self.is_on() && exists && different {
            self.channel = channel;
            tracing::debug!(device = %self.id(), channel, "Channel switched");
            return Outcome::applied(
                format!("Channel {channel} is on."),
                StateChange::channel(channel),
            );
        }

        if !self.is_on() {
            tracing::debug!(device = %self.id(), channel, "Channel switch refused, device off");
            return Outcome::device_off();
        }

        if !different {
            tracing::trace!(device = %self.id(), channel, "Channel already on");
            return Outcome::already_active("This channel is already on.");
        }

        tracing::debug!(device = %self.id(), channel, "Channel out of range");
        Outcome::not_allowed(format!(
            "Channel number must be a whole non-negative number between {} and {}.",
            self.channel_range.start(),
            self.channel_range.max()
        ))
    }
}

impl Speaker for Television {
    fn core(&self) -> &SpeakerCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut SpeakerCore {
        &mut self.core
    }

    fn kind(&self) -> DeviceKind {
        DeviceKind::Television
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities::television()
    }
}
