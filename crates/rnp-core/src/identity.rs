//! # Voter Identifier Newtype
//!
//! The citizen identifier that keys every durable record in the registry.
//! In the reference deployment this is the national identity document
//! number (DNI), issued upstream by the civil registry; this crate treats
//! it as an opaque validated string.
//!
//! ## Validation
//!
//! Identifiers validate format at construction time. A deserialized
//! [`VoterId`] has passed the same validation as a constructed one.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Helper macro to implement `Deserialize` for string newtypes that must
/// validate their contents. Deserializes as a plain `String`, then routes
/// through the type's `new()` constructor so that invalid values are
/// rejected at deserialization time — not silently accepted.
macro_rules! impl_validating_deserialize {
    ($ty:ident) => {
        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let raw = String::deserialize(deserializer)?;
                Self::new(raw).map_err(serde::de::Error::custom)
            }
        }
    };
}

/// A registered citizen's identifier within the voter registry.
///
/// Exactly one voter record exists per identifier. The identifier is
/// public — it namespaces the record but carries no biometric material.
///
/// # Validation
///
/// - Non-empty after trimming ASCII whitespace
/// - At most 64 characters
/// - ASCII alphanumerics, `-`, and `.` only
///
/// Leading zeros are significant (`"007"` and `"7"` are distinct voters).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct VoterId(String);

impl_validating_deserialize!(VoterId);

impl VoterId {
    /// Maximum accepted identifier length in characters.
    pub const MAX_LEN: usize = 64;

    /// Create a voter identifier from a string, validating format.
    ///
    /// Surrounding whitespace is trimmed before validation; the trimmed
    /// form is stored.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidVoterId`] if the trimmed string
    /// is empty, longer than [`Self::MAX_LEN`], or contains characters
    /// outside `[A-Za-z0-9.-]`.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = value.into();
        let trimmed = raw.trim();

        if trimmed.is_empty() || trimmed.len() > Self::MAX_LEN {
            return Err(ValidationError::InvalidVoterId(raw));
        }
        if !trimmed
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '.')
        {
            return Err(ValidationError::InvalidVoterId(raw));
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Access the identifier string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the owned identifier string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for VoterId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for VoterId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
