//! # rnp-provision — Batch Voter Provisioning
//!
//! Drives the credential generator over a collection of citizen
//! identifiers and assembles the two handoff artifacts:
//!
//! - **Registry snapshot** ([`RegistrySnapshot`]) — the ordered sequence
//!   of voter records consumed by the external registry service.
//! - **Development fingerprint map** ([`DevFingerprintMap`]) — the
//!   identifier-to-template mapping assembled only in development runs,
//!   kept in a separate file, never part of a production artifact.
//!
//! ## Batch Semantics
//!
//! Batches are atomic: a failure on any identifier — duplicate input,
//! template source error, entropy failure — aborts the whole batch and no
//! partial snapshot escapes. A registry with partial anonymity-set
//! membership is worse than no registry at all.
//!
//! ## Security Invariants
//!
//! - In [`ProvisionMode::Production`] no template outlives its
//!   `generate` call.
//! - Log output carries identifiers and counts only; templates never
//!   reach `tracing`.

pub mod batch;
pub mod error;
pub mod export;
pub mod snapshot;
pub mod source;

// Re-export primary types.
pub use batch::{provision_batch, sequential_voter_ids, ProvisionMode, ProvisionOutput};
pub use error::ProvisionError;
pub use export::{
    read_dev_fingerprints, read_registry_snapshot, write_dev_fingerprints,
    write_registry_snapshot,
};
pub use snapshot::{DevFingerprintMap, RegistrySnapshot};
pub use source::{SyntheticTemplateSource, TemplateSource};
