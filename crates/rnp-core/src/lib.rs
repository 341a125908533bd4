//! # rnp-core — Foundational Types for the Voter Credential Registry
//!
//! This crate provides the domain-primitive types shared by the credential
//! derivation and provisioning layers:
//!
//! - **Validated identifiers** ([`VoterId`]) for registered citizens.
//! - **32-byte public values** ([`Bytes32`]) with `0x`-prefixed lowercase
//!   hex encoding, and the distinct [`Salt`], [`HelperData`], and
//!   [`CredentialTag`] newtypes built on top of it.
//! - **The secret biometric template container** ([`BiometricTemplate`]),
//!   zeroized on drop and deliberately unserializable.
//! - **Structured validation errors** ([`ValidationError`]).
//!
//! ## Security Invariants
//!
//! - A [`BiometricTemplate`] never reaches a log line, a serializer, or a
//!   `Debug` rendering of its contents. The type has no `Serialize` or
//!   `Display` impl and its `Debug` output is redacted.
//! - Public 32-byte values are distinct types — a [`HelperData`] cannot be
//!   passed where a [`CredentialTag`] is expected.

pub mod bytes;
pub mod error;
pub mod identity;
pub mod template;

// Re-export primary types.
pub use bytes::{Bytes32, CredentialTag, HelperData, Salt};
pub use error::ValidationError;
pub use identity::VoterId;
pub use template::BiometricTemplate;
