//! # Biometric Template Container
//!
//! Holds one biometric capture as an opaque secret byte string. The
//! template exists only in memory between capture and credential
//! derivation; the derivation layer digests it and discards it.
//!
//! ## Security Invariants
//!
//! - No `Serialize` impl: a template cannot reach `serde_json` (and hence
//!   a registry file) by accident. The development fingerprint map encodes
//!   templates explicitly, and only in development provisioning runs.
//! - No `Display` impl, and `Debug` prints a redacted placeholder.
//! - The backing buffer is wiped on drop (`zeroize`).

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::ValidationError;

/// One biometric capture, treated as secret input.
///
/// The expected byte length is enforced by the credential generator
/// against its configured template length, not by this type: upstream
/// feature extractors differ in output width (the reference scheme fixes
/// 32 bytes; development enrollment uses short synthetic strings).
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct BiometricTemplate(Vec<u8>);

impl BiometricTemplate {
    /// Create a template from raw capture bytes.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyTemplate`] for an empty buffer.
    pub fn new(bytes: impl Into<Vec<u8>>) -> Result<Self, ValidationError> {
        let bytes = bytes.into();
        if bytes.is_empty() {
            return Err(ValidationError::EmptyTemplate);
        }
        Ok(Self(bytes))
    }

    /// Create a template from a text rendering (UTF-8 bytes).
    ///
    /// Development enrollment represents synthetic fingerprints as short
    /// decimal strings; this is the constructor for that path.
    pub fn from_text(text: &str) -> Result<Self, ValidationError> {
        Self::new(text.as_bytes().to_vec())
    }

    /// Template length in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false` — empty templates are rejected at construction.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Access the raw template bytes.
    ///
    /// For digest computation and explicit development-map encoding only.
    /// Callers must not persist or log the returned slice.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl std::fmt::Debug for BiometricTemplate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "BiometricTemplate(<{} bytes redacted>)", self.0.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_from_bytes() {
        let t = BiometricTemplate::new(vec![1, 2, 3, 4]).unwrap();
        assert_eq!(t.len(), 4);
        assert_eq!(t.as_bytes(), &[1, 2, 3, 4]);
    }

    #[test]
    fn template_from_text() {
        let t = BiometricTemplate::from_text("1111").unwrap();
        assert_eq!(t.as_bytes(), b"1111");
    }

    #[test]
    fn template_rejects_empty() {
        assert!(matches!(
            BiometricTemplate::new(Vec::new()),
            Err(ValidationError::EmptyTemplate)
        ));
        assert!(BiometricTemplate::from_text("").is_err());
    }

    #[test]
    fn template_is_never_empty() {
        let t = BiometricTemplate::from_text("x").unwrap();
        assert!(!t.is_empty());
    }

    #[test]
    fn template_equality_is_byte_exact() {
        let a = BiometricTemplate::from_text("1111").unwrap();
        let b = BiometricTemplate::from_text("1111").unwrap();
        let c = BiometricTemplate::from_text("1112").unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn debug_output_is_redacted() {
        let t = BiometricTemplate::from_text("1111").unwrap();
        let rendered = format!("{t:?}");
        assert!(!rendered.contains("1111"));
        assert!(rendered.contains("redacted"));
        assert!(rendered.contains('4'));
    }
}
