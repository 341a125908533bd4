//! # Template Sources
//!
//! The capability supplying an enrollment template per identifier. In
//! production this fronts the real biometric enrollment flow; in
//! development and test provisioning it is the deterministic synthetic
//! source below.

use std::collections::HashMap;

use rnp_core::{BiometricTemplate, VoterId};

/// Supplies the enrollment biometric template for an identifier.
///
/// Implemented for any `FnMut(&VoterId) -> Result<BiometricTemplate,
/// String>` closure, so call sites can inject ad-hoc sources the same way
/// they inject key resolvers elsewhere in the stack.
pub trait TemplateSource {
    /// Return the template for `id`, or a reason string on failure.
    ///
    /// The reason is surfaced in batch errors and logs — it must describe
    /// the failure without reproducing template material.
    fn template(&mut self, id: &VoterId) -> Result<BiometricTemplate, String>;
}

impl<F> TemplateSource for F
where
    F: FnMut(&VoterId) -> Result<BiometricTemplate, String>,
{
    fn template(&mut self, id: &VoterId) -> Result<BiometricTemplate, String> {
        self(id)
    }
}

/// Deterministic synthetic fingerprints for development provisioning.
///
/// The i-th distinct identifier requested receives the ASCII decimal
/// rendering of `seed + i`: with the default seed, `"1111"`, `"1112"`,
/// `"1113"`, … — predictable values that local verification tests can
/// reproduce. Repeated requests for the same identifier return the same
/// template.
///
/// Templates are 4 bytes long for the first 8 889 draws under the default
/// seed; pair with a generator configured for that template length.
#[derive(Debug, Default)]
pub struct SyntheticTemplateSource {
    seed: u64,
    next_offset: u64,
    assigned: HashMap<VoterId, u64>,
}

impl SyntheticTemplateSource {
    /// The default first fingerprint value.
    pub const DEFAULT_SEED: u64 = 1111;

    /// Source starting at the default seed value 1111.
    pub fn new() -> Self {
        Self::with_seed(Self::DEFAULT_SEED)
    }

    /// Source starting at an explicit seed value.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            next_offset: 0,
            assigned: HashMap::new(),
        }
    }

    fn value_for(&mut self, id: &VoterId) -> u64 {
        if let Some(value) = self.assigned.get(id) {
            return *value;
        }
        let value = self.seed + self.next_offset;
        self.next_offset += 1;
        self.assigned.insert(id.clone(), value);
        value
    }
}

impl TemplateSource for SyntheticTemplateSource {
    fn template(&mut self, id: &VoterId) -> Result<BiometricTemplate, String> {
        let value = self.value_for(id);
        BiometricTemplate::from_text(&value.to_string()).map_err(|e| e.to_string())
    }
}
