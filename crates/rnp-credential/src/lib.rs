//! # rnp-credential — Privacy-Preserving Voter Credential Derivation
//!
//! Implements the fuzzy-commitment construction at the heart of the voter
//! registry. Given a citizen identifier and a biometric template, the
//! generator derives a durable public record — salt, helper data, and a
//! pseudonymous credential tag — from which the biometric cannot be
//! recovered, while a later capture of the same biometric can still be
//! matched against it.
//!
//! ## The Scheme
//!
//! ```text
//! H      = keccak256(template)        // never stored
//! R      = random(32)                 // never stored
//! helper = R XOR H                    // public
//! tag    = keccak256(R)               // public, the voting credential
//! salt   = random(32)                 // public, reserved
//! ```
//!
//! Verification recomputes `H'` from a candidate template, unmasks
//! `R' = helper XOR H'`, and accepts iff `keccak256(R') == tag`.
//!
//! ## Security Invariants
//!
//! - `R` is drawn fresh and uniformly for every record. Reusing `R`
//!   across records links them and must never happen; the generator owns
//!   the draw and offers no way to supply `R` externally.
//! - A failing entropy source is a hard error
//!   ([`CredentialError::RandomnessUnavailable`]) — never silently
//!   downgraded, because weak `R` directly breaks tag unlinkability.
//! - Neither the template, its digest, nor `R` is stored, returned,
//!   or logged. Intermediate secrets live in zeroized buffers.

pub mod digest;
pub mod error;
pub mod generator;
pub mod record;
pub mod verifier;

// Re-export primary types.
pub use digest::keccak256;
pub use error::CredentialError;
pub use generator::{CredentialGenerator, CredentialParams};
pub use record::VoterRecord;
pub use verifier::verify;
