// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Allowed input sources of a television.

use std::fmt;

use crate::error::ValueError;

/// Ordered, non-empty set of input source labels.
///
/// Order is preserved: the first entry is the source a television starts on,
/// and [`joined`](Self::joined) lists the entries in the order given.
///
/// # Examples
///
/// ```
/// use speaker_lib::types::InputSources;
///
/// let sources = InputSources::new(["HDMI", "AV"]).unwrap();
/// assert_eq!(sources.first(), "HDMI");
/// assert!(sources.contains("AV"));
/// assert_eq!(sources.joined(), "HDMI, AV");
///
/// assert!(InputSources::new(Vec::<String>::new()).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct InputSources(Vec<String>);

impl InputSources {
    /// Creates the source set.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::EmptyInputSources` for an empty list and
    /// `ValueError::DuplicateInputSource` if a label repeats.
    pub fn new<I, S>(sources: I) -> Result<Self, ValueError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut labels: Vec<String> = Vec::new();
        for source in sources {
            let source = source.into();
            if labels.contains(&source) {
                return Err(ValueError::DuplicateInputSource(source));
            }
            labels.push(source);
        }
        if labels.is_empty() {
            return Err(ValueError::EmptyInputSources);
        }
        Ok(Self(labels))
    }

    /// Returns the first source in the list.
    #[must_use]
    pub fn first(&self) -> &str {
        // Non-empty by construction.
        &self.0[0]
    }

    /// Returns `true` if `source` is one of the allowed labels.
    #[must_use]
    pub fn contains(&self, source: &str) -> bool {
        self.0.iter().any(|s| s == source)
    }

    /// Iterates over the labels in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Returns the number of labels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if there are no labels, which construction rules out.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the labels joined with `", "`.
    #[must_use]
    pub fn joined(&self) -> String {
        self.0.join(", ")
    }
}

impl Default for InputSources {
    fn default() -> Self {
        Self(vec!["HDMI".to_string(), "AV".to_string(), "SCART".to_string()])
    }
}

impl fmt::Display for InputSources {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.joined())
    }
}

impl TryFrom<Vec<String>> for InputSources {
    type Error = ValueError;

    fn try_from(value: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<InputSources> for Vec<String> {
    fn from(sources: InputSources) -> Self {
        sources.0
    }
}
