// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `speaker_lib` library.
//!
//! Guarded device operations never fail: a rejected request is reported as an
//! [`Outcome`](crate::Outcome) with a non-success status. The errors in this
//! module only surface while *constructing* devices and value types, where an
//! inconsistent parameter set (inverted bounds, an empty input-source list,
//! ...) must be refused up front.

use thiserror::Error;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// A value failed validation.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// A device configuration is inconsistent or could not be parsed.
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors related to value validation and constraints.
///
/// These errors occur when attempting to create constrained types
/// with invalid values.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValueError {
    /// A numeric value is outside the allowed range.
    #[error("value {actual} is out of range [{min}, {max}]")]
    OutOfRange {
        /// Minimum allowed value.
        min: f64,
        /// Maximum allowed value.
        max: f64,
        /// The actual value that was provided.
        actual: f64,
    },

    /// A floating point value was NaN or infinite.
    #[error("value {0} is not a finite number")]
    NotFinite(f64),

    /// A television needs at least one input source.
    #[error("input source list is empty")]
    EmptyInputSources,

    /// The same input source label was listed twice.
    #[error("input source {0:?} is listed more than once")]
    DuplicateInputSource(String),

    /// A display diagonal must be a positive number.
    #[error("display size {0} must be positive")]
    InvalidDisplaySize(f64),
}

/// Errors related to device configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A lower bound is not strictly below its upper bound.
    #[error("{what} lower bound {min} must be below upper bound {max}")]
    InvalidBounds {
        /// Which pair of bounds is inconsistent.
        what: &'static str,
        /// The configured lower bound.
        min: f64,
        /// The configured upper bound.
        max: f64,
    },

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;
