// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device construction parameters.
//!
//! Construction parameters are the only configuration surface of a device.
//! Each device kind has a config struct holding its recognized options with
//! documented defaults; the structs deserialize from JSON with missing
//! fields filled in, and offer `with_*` builder methods for use in code.
//! `build()` validates the parameters and produces the device.
//!
//! # Examples
//!
//! ```
//! use speaker_lib::config::{DeviceConfig, TelevisionConfig};
//! use speaker_lib::Speaker;
//!
//! // From code
//! let tv = TelevisionConfig::new("Lounge", 55.0)
//!     .with_input_sources(["HDMI1", "HDMI2"])
//!     .with_power(true)
//!     .build()
//!     .unwrap();
//! assert_eq!(tv.input_source(), "HDMI1");
//!
//! // From JSON
//! let device = DeviceConfig::from_json(
//!     r#"{ "kind": "radio", "model": "Kitchen", "frequency": 101.1 }"#,
//! )
//! .unwrap()
//! .build()
//! .unwrap();
//! assert_eq!(device.as_radio().unwrap().frequency().value(), 101.1);
//! ```

use crate::capabilities::DeviceKind;
use crate::device::{Device, MobilePhone, Radio, SpeakerDevice, Television};
use crate::error::{ConfigError, Result};

/// Options shared by every device.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SpeakerConfig {
    /// Model label.
    pub model: String,
    /// Whether the device starts switched on. Default: `false`.
    #[serde(default)]
    pub power: bool,
    /// Lower volume bound. Default: `0`.
    #[serde(default = "default_min_volume")]
    pub min_volume: i32,
    /// Upper volume bound. Default: `10`.
    #[serde(default = "default_max_volume")]
    pub max_volume: i32,
    /// Initial volume, quantized to half steps. Default: `5.0`.
    #[serde(default = "default_volume")]
    pub volume: f64,
}

impl SpeakerConfig {
    /// Creates the default options for `model`.
    #[must_use]
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            power: false,
            min_volume: default_min_volume(),
            max_volume: default_max_volume(),
            volume: default_volume(),
        }
    }

    /// Builds a generic speaker.
    ///
    /// # Errors
    ///
    /// Returns an error if the volume options are inconsistent.
    pub fn build(&self) -> Result<SpeakerDevice> {
        SpeakerDevice::from_config(self)
    }
}

/// Options of a [`Radio`].
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RadioConfig {
    /// Shared options.
    #[serde(flatten)]
    pub speaker: SpeakerConfig,
    /// Lower tuning bound. Default: `87.5`.
    #[serde(default = "default_min_frequency")]
    pub min_frequency: f64,
    /// Upper tuning bound. Default: `108.0`.
    #[serde(default = "default_max_frequency")]
    pub max_frequency: f64,
    /// Initial frequency, rounded to one decimal. Default: `87.5`.
    #[serde(default = "default_min_frequency")]
    pub frequency: f64,
}

impl RadioConfig {
    /// Creates the default options for `model`.
    #[must_use]
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            speaker: SpeakerConfig::new(model),
            min_frequency: default_min_frequency(),
            max_frequency: default_max_frequency(),
            frequency: default_min_frequency(),
        }
    }

    /// Sets the tuning bounds.
    #[must_use]
    pub fn with_frequency_range(mut self, min: f64, max: f64) -> Self {
        self.min_frequency = min;
        self.max_frequency = max;
        self
    }

    /// Sets the initial frequency.
    #[must_use]
    pub fn with_frequency(mut self, frequency: f64) -> Self {
        self.frequency = frequency;
        self
    }

    /// Builds the radio.
    ///
    /// # Errors
    ///
    /// Returns an error if the volume or frequency options are inconsistent.
    pub fn build(&self) -> Result<Radio> {
        Radio::from_config(self)
    }
}

/// Options of a [`Television`].
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TelevisionConfig {
    /// Shared options.
    #[serde(flatten)]
    pub speaker: SpeakerConfig,
    /// Display diagonal. Required.
    pub display_size: f64,
    /// Allowed input sources, in order; the first is selected initially.
    /// Default: `["HDMI", "AV", "SCART"]`.
    #[serde(default = "default_input_sources")]
    pub input_sources: Vec<String>,
    /// Channel a television starts on. Default: `1`.
    #[serde(default = "default_start_channel")]
    pub start_channel: i32,
    /// Channel bound, exclusive. Default: `100`.
    #[serde(default = "default_max_channels")]
    pub max_channels: i32,
}

impl TelevisionConfig {
    /// Creates the default options for `model`.
    #[must_use]
    pub fn new(model: impl Into<String>, display_size: f64) -> Self {
        Self {
            speaker: SpeakerConfig::new(model),
            display_size,
            input_sources: default_input_sources(),
            start_channel: default_start_channel(),
            max_channels: default_max_channels(),
        }
    }

    /// Sets the allowed input sources.
    #[must_use]
    pub fn with_input_sources<I, S>(mut self, sources: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.input_sources = sources.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the start channel and the exclusive channel bound.
    #[must_use]
    pub fn with_channels(mut self, start: i32, max: i32) -> Self {
        self.start_channel = start;
        self.max_channels = max;
        self
    }

    /// Builds the television.
    ///
    /// # Errors
    ///
    /// Returns an error if the display size, sources or bounds are invalid.
    pub fn build(&self) -> Result<Television> {
        Television::from_config(self)
    }
}

/// Options of a [`MobilePhone`].
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PhoneConfig {
    /// Shared options.
    #[serde(flatten)]
    pub speaker: SpeakerConfig,
    /// Display diagonal. Required.
    pub display_size: f64,
    /// Whether the phone has a camera. Default: `true`.
    #[serde(default = "default_has_camera")]
    pub has_camera: bool,
}

impl PhoneConfig {
    /// Creates the default options for `model`.
    #[must_use]
    pub fn new(model: impl Into<String>, display_size: f64) -> Self {
        Self {
            speaker: SpeakerConfig::new(model),
            display_size,
            has_camera: default_has_camera(),
        }
    }

    /// Sets the camera flag.
    #[must_use]
    pub fn with_camera(mut self, has_camera: bool) -> Self {
        self.has_camera = has_camera;
        self
    }

    /// Builds the phone.
    ///
    /// # Errors
    ///
    /// Returns an error if the display size or volume options are invalid.
    pub fn build(&self) -> Result<MobilePhone> {
        MobilePhone::from_config(self)
    }
}

// Shared-option setters for every config type.
macro_rules! speaker_options {
    ($($config:ty => $($path:ident).*;)+) => {
        $(
            impl $config {
                /// Sets whether the device starts switched on.
                #[must_use]
                pub fn with_power(mut self, power: bool) -> Self {
                    self $(.$path)* .power = power;
                    self
                }

                /// Sets the volume bounds.
                #[must_use]
                pub fn with_volume_range(mut self, min: i32, max: i32) -> Self {
                    self $(.$path)* .min_volume = min;
                    self $(.$path)* .max_volume = max;
                    self
                }

                /// Sets the initial volume.
                #[must_use]
                pub fn with_volume(mut self, volume: f64) -> Self {
                    self $(.$path)* .volume = volume;
                    self
                }
            }
        )+
    };
}

speaker_options! {
    SpeakerConfig => ;
    RadioConfig => speaker;
    TelevisionConfig => speaker;
    PhoneConfig => speaker;
}

/// Configuration of a device of any kind, tagged by `kind`.
///
/// # Examples
///
/// ```
/// use speaker_lib::config::DeviceConfig;
/// use speaker_lib::DeviceKind;
///
/// let config = DeviceConfig::from_json(
///     r#"{ "kind": "mobile_phone", "model": "Pocket", "display_size": 6.1, "has_camera": false }"#,
/// )
/// .unwrap();
/// assert_eq!(config.kind(), DeviceKind::MobilePhone);
/// ```
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DeviceConfig {
    /// A generic speaker.
    Speaker(SpeakerConfig),
    /// A radio.
    Radio(RadioConfig),
    /// A television.
    Television(TelevisionConfig),
    /// A mobile phone.
    MobilePhone(PhoneConfig),
}

impl DeviceConfig {
    /// Parses a configuration from JSON.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Json` if the text is not a valid configuration.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json).map_err(ConfigError::from)?)
    }

    /// Parses a JSON array of configurations.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Json` if the text is not a valid list.
    pub fn list_from_json(json: &str) -> Result<Vec<Self>> {
        Ok(serde_json::from_str(json).map_err(ConfigError::from)?)
    }

    /// Returns the kind of device this configuration builds.
    #[must_use]
    pub const fn kind(&self) -> DeviceKind {
        match self {
            Self::Speaker(_) => DeviceKind::Speaker,
            Self::Radio(_) => DeviceKind::Radio,
            Self::Television(_) => DeviceKind::Television,
            Self::MobilePhone(_) => DeviceKind::MobilePhone,
        }
    }

    /// Returns the shared options.
    #[must_use]
    pub const fn speaker(&self) -> &SpeakerConfig {
        match self {
            Self::Speaker(config) => config,
            Self::Radio(config) => &config.speaker,
            Self::Television(config) => &config.speaker,
            Self::MobilePhone(config) => &config.speaker,
        }
    }

    /// Validates the options and builds the device.
    ///
    /// # Errors
    ///
    /// Returns the first validation error of the underlying config.
    pub fn build(&self) -> Result<Device> {
        let device: Device = match self {
            Self::Speaker(config) => config.build()?.into(),
            Self::Radio(config) => config.build()?.into(),
            Self::Television(config) => config.build()?.into(),
            Self::MobilePhone(config) => config.build()?.into(),
        };
        Ok(device)
    }
}

impl From<SpeakerConfig> for DeviceConfig {
    fn from(config: SpeakerConfig) -> Self {
        Self::Speaker(config)
    }
}

impl From<RadioConfig> for DeviceConfig {
    fn from(config: RadioConfig) -> Self {
        Self::Radio(config)
    }
}

impl From<TelevisionConfig> for DeviceConfig {
    fn from(config: TelevisionConfig) -> Self {
        Self::Television(config)
    }
}

impl From<PhoneConfig> for DeviceConfig {
    fn from(config: PhoneConfig) -> Self {
        Self::MobilePhone(config)
    }
}

const fn default_min_volume() -> i32 {
    0
}

const fn default_max_volume() -> i32 {
    10
}

const fn default_volume() -> f64 {
    5.0
}

const fn default_min_frequency() -> f64 {
    87.5
}

const fn default_max_frequency() -> f64 {
    108.0
}

fn default_input_sources() -> Vec<String> {
    vec!["HDMI".to_string(), "AV".to_string(), "SCART".to_string()]
}

const fn default_start_channel() -> i32 {
    1
}

const fn default_max_channels() -> i32 {
    100
}

const fn default_has_camera() -> bool {
    true
}
