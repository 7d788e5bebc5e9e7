//! Core type definitions with validation.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Validation errors for core types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided value was empty.
    #[error("{field} cannot be empty")]
    Empty { field: &'static str },

    /// The pin number was outside 1-10.
    #[error("pin number must be between 1 and 10, got {value}")]
    PinOutOfRange { value: u8 },

    /// Invalid series tag value.
    #[error("invalid series tag: {value}")]
    InvalidSeriesTag { value: String },
}

/// One of the ten standard bowling pins, numbered 1-10.
///
/// Pin 1 is the headpin; 7 and 10 are the back corners. Equality and
/// ordering follow the pin number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Pin(u8);

impl Pin {
    /// The headpin.
    pub const HEADPIN: Self = Self(1);

    /// Creates a pin after validating the number is in 1-10.
    pub const fn new(number: u8) -> Result<Self, ValidationError> {
        if matches!(number, 1..=10) {
            Ok(Self(number))
        } else {
            Err(ValidationError::PinOutOfRange { value: number })
        }
    }

    /// Returns the pin number (1-10).
    #[must_use]
    pub const fn number(self) -> u8 {
        self.0
    }

    /// Iterates over all ten pins in numeric order.
    pub fn all() -> impl Iterator<Item = Self> {
        (1..=10).map(Self)
    }
}

impl fmt::Display for Pin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u8> for Pin {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Pin> for u8 {
    fn from(pin: Pin) -> Self {
        pin.0
    }
}

/// The competitive context a series was bowled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeriesTag {
    /// Tournament play.
    Tournament,
    /// League night.
    League,
    /// Practice session.
    Training,
    /// Anything else.
    Other,
}

impl SeriesTag {
    /// String representation for database storage.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Tournament => "tournament",
            Self::League => "league",
            Self::Training => "training",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for SeriesTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for SeriesTag {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tournament" => Ok(Self::Tournament),
            "league" => Ok(Self::League),
            "training" => Ok(Self::Training),
            "other" => Ok(Self::Other),
            _ => Err(ValidationError::InvalidSeriesTag {
                value: s.to_string(),
            }),
        }
    }
}

/// A validated series identifier.
///
/// Series IDs must be non-empty strings. The CLI generates UUIDs, but any
/// non-empty string is accepted so externally-sourced documents keep their
/// keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SeriesId(String);

impl SeriesId {
    /// Creates a new ID after validation.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.is_empty() {
            return Err(ValidationError::Empty { field: "series ID" });
        }
        Ok(Self(id))
    }

    /// Returns the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for SeriesId {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SeriesId> for String {
    fn from(id: SeriesId) -> Self {
        id.0
    }
}

impl fmt::Display for SeriesId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for SeriesId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
