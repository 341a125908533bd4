//! # Credential Error Types
//!
//! Structured errors for credential derivation and record decoding.
//!
//! Display messages name the failing condition and lengths only. They
//! never carry template bytes, digests of templates, or recovery-secret
//! material — these errors are expected to reach batch logs.

use thiserror::Error;

/// Errors from credential generation and record handling.
#[derive(Error, Debug)]
pub enum CredentialError {
    /// The template does not have the generator's configured byte length.
    #[error("invalid template length: expected {expected} bytes, got {actual}")]
    InvalidTemplateLength { expected: usize, actual: usize },

    /// The secure random source could not produce bytes.
    ///
    /// Fatal: callers must abort the enclosing batch rather than
    /// substitute weaker randomness.
    #[error("secure randomness unavailable: {0}")]
    RandomnessUnavailable(String),

    /// A stored record's fields failed to decode as exact 32-byte values.
    ///
    /// Indicates registry storage corruption or tampering.
    #[error("malformed voter record: {0}")]
    MalformedRecord(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_template_length_display() {
        let err = CredentialError::InvalidTemplateLength {
            expected: 32,
            actual: 4,
        };
        let msg = format!("{err}");
        assert!(msg.contains("expected 32"));
        assert!(msg.contains("got 4"));
    }

    #[test]
    fn randomness_unavailable_display() {
        let err = CredentialError::RandomnessUnavailable("entropy pool closed".to_string());
        assert!(format!("{err}").contains("entropy pool closed"));
    }

    #[test]
    fn malformed_record_display() {
        let err = CredentialError::MalformedRecord("helper: invalid value length".to_string());
        assert!(format!("{err}").contains("helper"));
    }

    #[test]
    fn all_variants_are_debug() {
        let variants: Vec<CredentialError> = vec![
            CredentialError::InvalidTemplateLength {
                expected: 32,
                actual: 0,
            },
            CredentialError::RandomnessUnavailable("a".to_string()),
            CredentialError::MalformedRecord("b".to_string()),
        ];
        for v in variants {
            assert!(!format!("{v:?}").is_empty());
        }
    }
}
