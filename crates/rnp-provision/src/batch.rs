//! # Batch Provisioner
//!
//! Drives the credential generator over an ordered collection of
//! identifiers with atomic-batch semantics: either every identifier
//! yields a record, or the batch fails and nothing is handed off.
//!
//! The generator and verifier are pure and independent per identifier,
//! so callers needing throughput can run one generator per worker over
//! disjoint identifier slices and concatenate the snapshots in input
//! order. This driver itself processes sequentially, which preserves the
//! ordering invariant without coordination.

use std::collections::HashSet;

use rand_core::{CryptoRng, RngCore};

use rnp_core::VoterId;
use rnp_credential::CredentialGenerator;

use crate::error::ProvisionError;
use crate::snapshot::{DevFingerprintMap, RegistrySnapshot};
use crate::source::TemplateSource;

/// Whether a provisioning run may retain template material for local
/// verification testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProvisionMode {
    /// No template outlives its `generate` call; no fingerprint map is
    /// produced.
    Production,
    /// Additionally assemble the [`DevFingerprintMap`] for local
    /// verification tests.
    Development,
}

/// The artifacts of one successful provisioning run.
#[derive(Debug)]
pub struct ProvisionOutput {
    /// Ordered registry snapshot, one record per input identifier.
    pub snapshot: RegistrySnapshot,
    /// Identifier-to-template map; `Some` only in
    /// [`ProvisionMode::Development`].
    pub dev_map: Option<DevFingerprintMap>,
}

/// Provision credential records for every identifier in the batch.
///
/// For each identifier, in input order: obtain its template from
/// `source`, derive a record, and append it to the snapshot. In
/// [`ProvisionMode::Development`] the template is additionally recorded
/// in the fingerprint map.
///
/// # Invariants
///
/// - The snapshot preserves the input identifier order.
/// - No identifier appears twice; a duplicate aborts the batch with
///   [`ProvisionError::DuplicateIdentifier`].
/// - The fingerprint map, when produced, has exactly the input
///   identifiers as its key set.
///
/// # Errors
///
/// Atomic-batch semantics: the first failure — duplicate input, template
/// source error, or credential error (including entropy failure) —
/// aborts the run and no partial output is returned. Errors name the
/// failing identifier and never carry template material.
pub fn provision_batch<R, S>(
    identifiers: &[VoterId],
    source: &mut S,
    generator: &mut CredentialGenerator<R>,
    mode: ProvisionMode,
) -> Result<ProvisionOutput, ProvisionError>
where
    R: RngCore + CryptoRng,
    S: TemplateSource,
{
    let mut seen = HashSet::with_capacity(identifiers.len());
    let mut snapshot = RegistrySnapshot::with_capacity(identifiers.len());
    let mut dev_map = match mode {
        ProvisionMode::Production => None,
        ProvisionMode::Development => Some(DevFingerprintMap::new()),
    };

    for id in identifiers {
        if !seen.insert(id.clone()) {
            return Err(ProvisionError::DuplicateIdentifier(id.clone()));
        }

        let template = source
            .template(id)
            .map_err(|reason| ProvisionError::TemplateSource {
                identifier: id.clone(),
                reason,
            })?;

        let record = generator
            .generate(id.clone(), &template)
            .map_err(|source| ProvisionError::Credential {
                identifier: id.clone(),
                source,
            })?;

        tracing::debug!(identifier = %id, "voter record generated");
        snapshot.push(record);

        if let Some(map) = dev_map.as_mut() {
            map.insert(id.clone(), template);
        }
        // In production mode the template drops (and zeroizes) here.
    }

    tracing::info!(
        records = snapshot.len(),
        mode = ?mode,
        "voter batch provisioned"
    );

    Ok(ProvisionOutput { snapshot, dev_map })
}

/// Sequential identifier range for seeding development registries:
/// `start`, `start + 1`, …, `count` values in total, rendered in decimal.
pub fn sequential_voter_ids(start: u64, count: usize) -> Vec<VoterId> {
    (0..count as u64)
        .map(|i| {
            VoterId::new((start + i).to_string())
                .expect("decimal rendering is a valid identifier")
        })
        .collect()
}
