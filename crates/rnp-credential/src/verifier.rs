//! # Credential Verification
//!
//! The symmetric counterpart of generation: given a stored record and a
//! fresh biometric capture, decide whether the capture matches the
//! enrollment template.
//!
//! ## Exact-Match Semantics
//!
//! This XOR+digest construction is a commitment scheme, not an
//! error-tolerant fuzzy extractor: verification succeeds iff the
//! candidate template is byte-identical to the enrollment template. Any
//! capture noise — a single flipped bit — fails verification. A
//! deployment whose upstream feature extractor is not noise-free needs an
//! error-correcting layer between raw features and this scheme; none is
//! provided here.

use subtle::ConstantTimeEq;
use zeroize::Zeroizing;

use rnp_core::BiometricTemplate;

use crate::digest::{keccak256, xor32};
use crate::record::VoterRecord;

/// Check a candidate biometric capture against a stored record.
///
/// Recomputes `H' = keccak256(candidate)`, unmasks the candidate recovery
/// secret `R' = helper XOR H'`, and accepts iff `keccak256(R')` equals
/// the stored tag. The tag comparison is constant-time.
///
/// Pure function of its inputs: no side effects, no logging. Malformed
/// stored data cannot reach this function — records that do not decode
/// to exact 32-byte fields are rejected when the record is parsed.
pub fn verify(record: &VoterRecord, candidate: &BiometricTemplate) -> bool {
    let candidate_digest = Zeroizing::new(keccak256(candidate.as_bytes()));
    let recovered = Zeroizing::new(xor32(record.helper.as_bytes(), &candidate_digest));
    let tag = keccak256(&*recovered);
    tag[..].ct_eq(&record.tag.as_bytes()[..]).into()
}
