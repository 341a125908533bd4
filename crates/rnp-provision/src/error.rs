//! # Provisioning Error Types
//!
//! Structured errors for batch provisioning and file handoff. Every
//! record-level failure names the identifier it occurred on — and only
//! the identifier: template material never appears in these errors.

use thiserror::Error;

use rnp_core::VoterId;
use rnp_credential::CredentialError;

/// Errors from batch provisioning operations.
#[derive(Error, Debug)]
pub enum ProvisionError {
    /// An identifier appeared twice in the batch input.
    ///
    /// Indicates a provisioning-input bug; the batch is aborted rather
    /// than silently overwriting the earlier record.
    #[error("duplicate identifier in batch: {0}")]
    DuplicateIdentifier(VoterId),

    /// Credential derivation failed for one identifier.
    #[error("credential generation failed for {identifier}")]
    Credential {
        identifier: VoterId,
        #[source]
        source: CredentialError,
    },

    /// The template source could not supply a template for one identifier.
    #[error("template source failed for {identifier}: {reason}")]
    TemplateSource { identifier: VoterId, reason: String },

    /// I/O error during file handoff.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error during file handoff.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
