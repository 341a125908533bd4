//! # Voter Record
//!
//! The only durable artifact of enrollment. One record exists per
//! registered identifier; the record is immutable once written and is
//! owned by the external registry collaborator — this crate only produces
//! and decodes it.
//!
//! ## Wire Shape
//!
//! ```json
//! {
//!   "identifier": "12345678",
//!   "salt":   "0x<64 lowercase hex>",
//!   "helper": "0x<64 lowercase hex>",
//!   "tag":    "0x<64 lowercase hex>"
//! }
//! ```
//!
//! Field-level hex and length validation happens inside the typed field
//! deserializers, so a decoded `VoterRecord` is always well-formed: a
//! stored value that is not exactly 32 bytes fails at decode, it cannot
//! reach the verifier.

use serde::{Deserialize, Serialize};

use rnp_core::{CredentialTag, HelperData, Salt, VoterId};

use crate::error::CredentialError;

/// A voter's durable public credential record.
///
/// Contains no recoverable trace of the biometric template: `helper`
/// only reveals the recovery secret XOR-masked with the template digest,
/// and `tag` commits to the secret through a one-way digest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VoterRecord {
    /// The registered citizen identifier. Unique per record.
    pub identifier: VoterId,

    /// Public per-record randomness, reserved for future domain
    /// separation. Not mixed into the current derivation.
    pub salt: Salt,

    /// Public helper data: recovery secret XOR template digest.
    pub helper: HelperData,

    /// The pseudonymous voting credential: digest of the recovery secret.
    pub tag: CredentialTag,
}

impl VoterRecord {
    /// Assemble a record from raw registry strings.
    ///
    /// For callers reading records from storage systems that hand back
    /// untyped hex strings. Each value must decode to exactly 32 bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialError::MalformedRecord`] naming the offending
    /// field if any value fails hex or length validation.
    pub fn from_hex_parts(
        identifier: VoterId,
        salt: &str,
        helper: &str,
        tag: &str,
    ) -> Result<Self, CredentialError> {
        let salt = Salt::from_hex(salt)
            .map_err(|e| CredentialError::MalformedRecord(format!("salt: {e}")))?;
        let helper = HelperData::from_hex(helper)
            .map_err(|e| CredentialError::MalformedRecord(format!("helper: {e}")))?;
        let tag = CredentialTag::from_hex(tag)
            .map_err(|e| CredentialError::MalformedRecord(format!("tag: {e}")))?;
        Ok(Self {
            identifier,
            salt,
            helper,
            tag,
        })
    }
}
