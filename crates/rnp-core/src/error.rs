//! # Validation Error Types
//!
//! Structured errors for constructing the domain primitives in `rnp-core`.
//! Uses `thiserror` for ergonomic error definitions with diagnostic context.
//!
//! Error messages carry offending identifier strings and lengths only —
//! never biometric template bytes.

use thiserror::Error;

/// Errors from validating domain primitives at construction time.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Voter identifier failed format validation.
    #[error("invalid voter identifier: {0:?}")]
    InvalidVoterId(String),

    /// Hex decoding error.
    #[error("invalid hex encoding: {0}")]
    InvalidHex(String),

    /// A fixed-length value had the wrong byte length.
    #[error("invalid value length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// Biometric templates must contain at least one byte.
    #[error("biometric template must not be empty")]
    EmptyTemplate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_voter_id_display() {
        let err = ValidationError::InvalidVoterId("  ".to_string());
        assert!(format!("{err}").contains("invalid voter identifier"));
    }

    #[test]
    fn invalid_hex_display() {
        let err = ValidationError::InvalidHex("odd length".to_string());
        assert!(format!("{err}").contains("odd length"));
    }

    #[test]
    fn invalid_length_display() {
        let err = ValidationError::InvalidLength {
            expected: 32,
            actual: 31,
        };
        let msg = format!("{err}");
        assert!(msg.contains("32"));
        assert!(msg.contains("31"));
    }

    #[test]
    fn empty_template_display() {
        let err = ValidationError::EmptyTemplate;
        assert!(format!("{err}").contains("must not be empty"));
    }

    #[test]
    fn all_variants_are_debug() {
        let variants: Vec<ValidationError> = vec![
            ValidationError::InvalidVoterId("a".to_string()),
            ValidationError::InvalidHex("b".to_string()),
            ValidationError::InvalidLength {
                expected: 32,
                actual: 0,
            },
            ValidationError::EmptyTemplate,
        ];
        for v in variants {
            assert!(!format!("{v:?}").is_empty());
        }
    }
}
