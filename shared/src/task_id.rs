//! Task identifier type.
//!
//! `TaskId` wraps a v4 UUID and always serializes as its hyphenated string
//! form, so the same value round-trips unchanged through JSON bodies, URL
//! path segments, and the stored document's `_id` field.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;
use uuid::Uuid;

/// A validated task identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(Uuid);

/// Error returned when a string does not parse as a task id.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid task id: {0}")]
pub struct ParseTaskIdError(String);

impl TaskId {
    /// Generates a fresh random id.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parses an id from its string form.
    ///
    /// # Errors
    ///
    /// Returns [`ParseTaskIdError`] if `s` is not a well-formed UUID.
    pub fn parse(s: &str) -> Result<Self, ParseTaskIdError> {
        Uuid::parse_str(s)
            .map(Self)
            .map_err(|e| ParseTaskIdError(e.to_string()))
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TaskId {
    type Err = ParseTaskIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for TaskId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.to_string().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for TaskId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
