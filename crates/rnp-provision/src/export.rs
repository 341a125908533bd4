//! # File Handoff
//!
//! Writers and readers for the two provisioning artifacts. The snapshot
//! file is the registry handoff; the fingerprint file supports local
//! verification tests and must never be bundled into a production
//! artifact — keeping the two in separate files is the mechanism.
//!
//! Parent directories are created as needed; output is pretty-printed
//! JSON so the seeded registries stay diffable.

use std::fs;
use std::path::Path;

use crate::error::ProvisionError;
use crate::snapshot::{DevFingerprintMap, RegistrySnapshot};

/// Write the registry snapshot to `path` as a pretty-printed JSON array.
pub fn write_registry_snapshot(
    path: impl AsRef<Path>,
    snapshot: &RegistrySnapshot,
) -> Result<(), ProvisionError> {
    write_json(path.as_ref(), snapshot)
}

/// Read a registry snapshot previously written with
/// [`write_registry_snapshot`].
///
/// Field-level validation runs during decode: a file with corrupted hex
/// or wrong-length values fails here, before any record can reach
/// verification.
pub fn read_registry_snapshot(path: impl AsRef<Path>) -> Result<RegistrySnapshot, ProvisionError> {
    let contents = fs::read_to_string(path.as_ref())?;
    Ok(serde_json::from_str(&contents)?)
}

/// Write the development fingerprint map to `path`.
///
/// Development tooling only. The map must land in a different file (and
/// in practice a different directory) from the registry snapshot.
pub fn write_dev_fingerprints(
    path: impl AsRef<Path>,
    map: &DevFingerprintMap,
) -> Result<(), ProvisionError> {
    write_json(path.as_ref(), map)
}

/// Read a development fingerprint map previously written with
/// [`write_dev_fingerprints`].
pub fn read_dev_fingerprints(path: impl AsRef<Path>) -> Result<DevFingerprintMap, ProvisionError> {
    let contents = fs::read_to_string(path.as_ref())?;
    Ok(serde_json::from_str(&contents)?)
}

fn write_json<T: serde::Serialize>(path: &Path, value: &T) -> Result<(), ProvisionError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json)?;
    Ok(())
}
