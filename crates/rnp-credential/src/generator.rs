//! # Credential Generator
//!
//! Derives a [`VoterRecord`] from an identifier and a biometric template.
//! The generator owns an injected random source rather than reaching for
//! a process-wide global, so provisioning tests can substitute a seeded
//! rng and reproduce exact outputs.
//!
//! ## Security Invariants
//!
//! - The recovery secret `R` and the template digest `H` are drawn or
//!   computed into zeroized buffers and wiped when derivation returns.
//!   There is no API for supplying `R` from outside.
//! - An entropy failure aborts derivation with
//!   [`CredentialError::RandomnessUnavailable`]. The generator never
//!   falls back to a weaker source.
//! - Nothing in this module logs. The caller may log the identifier; the
//!   template and intermediates never leave this function.

use rand_core::{CryptoRng, RngCore};
use zeroize::Zeroizing;

use rnp_core::{BiometricTemplate, CredentialTag, HelperData, Salt, VoterId};

use crate::digest::{keccak256, xor32};
use crate::error::CredentialError;
use crate::record::VoterRecord;

/// Parameters of the derivation scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CredentialParams {
    template_len: usize,
}

impl CredentialParams {
    /// The reference template length: 32 bytes, matching the digest
    /// output width.
    pub const DEFAULT_TEMPLATE_LEN: usize = 32;

    /// Set the expected template byte length.
    ///
    /// Development provisioning pairs this with the synthetic template
    /// source, whose fingerprints are 4-byte decimal strings.
    pub fn with_template_len(mut self, template_len: usize) -> Self {
        debug_assert!(template_len > 0, "template length must be non-zero");
        self.template_len = template_len;
        self
    }

    /// The expected template byte length.
    pub fn template_len(&self) -> usize {
        self.template_len
    }
}

impl Default for CredentialParams {
    fn default() -> Self {
        Self {
            template_len: Self::DEFAULT_TEMPLATE_LEN,
        }
    }
}

/// Derives voter credential records from biometric templates.
///
/// Stateless apart from the owned random source: every call draws fresh
/// independent randomness, so invocations across identifiers are
/// independent and may run on separate generators in parallel workers.
#[derive(Debug)]
pub struct CredentialGenerator<R> {
    rng: R,
    params: CredentialParams,
}

impl CredentialGenerator<rand_core::OsRng> {
    /// Generator backed by the operating system's secure random source.
    pub fn system() -> Self {
        Self::new(rand_core::OsRng)
    }
}

impl<R: RngCore + CryptoRng> CredentialGenerator<R> {
    /// Create a generator with default parameters over an injected
    /// cryptographically secure random source.
    pub fn new(rng: R) -> Self {
        Self::with_params(rng, CredentialParams::default())
    }

    /// Create a generator with explicit parameters.
    pub fn with_params(rng: R, params: CredentialParams) -> Self {
        Self { rng, params }
    }

    /// The generator's parameters.
    pub fn params(&self) -> &CredentialParams {
        &self.params
    }

    /// Derive the durable credential record for one voter.
    ///
    /// ```text
    /// H      = keccak256(template)
    /// R      = random(32)
    /// helper = R XOR H
    /// tag    = keccak256(R)
    /// salt   = random(32)
    /// ```
    ///
    /// The returned record contains no recoverable trace of the template;
    /// `H` and `R` are wiped before returning.
    ///
    /// # Errors
    ///
    /// - [`CredentialError::InvalidTemplateLength`] if the template does
    ///   not match the configured length.
    /// - [`CredentialError::RandomnessUnavailable`] if the random source
    ///   fails. Fatal for the enclosing batch.
    pub fn generate(
        &mut self,
        identifier: VoterId,
        template: &BiometricTemplate,
    ) -> Result<VoterRecord, CredentialError> {
        let expected = self.params.template_len;
        if template.len() != expected {
            return Err(CredentialError::InvalidTemplateLength {
                expected,
                actual: template.len(),
            });
        }

        let template_digest = Zeroizing::new(keccak256(template.as_bytes()));

        let mut secret = Zeroizing::new([0u8; 32]);
        self.try_fill(&mut *secret)?;

        let helper = xor32(&secret, &template_digest);
        let tag = keccak256(&*secret);

        let mut salt = [0u8; 32];
        self.try_fill(&mut salt)?;

        Ok(VoterRecord {
            identifier,
            salt: Salt::new(salt),
            helper: HelperData::new(helper),
            tag: CredentialTag::new(tag),
        })
    }

    fn try_fill(&mut self, dest: &mut [u8]) -> Result<(), CredentialError> {
        self.rng
            .try_fill_bytes(dest)
            .map_err(|e| CredentialError::RandomnessUnavailable(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::verifier::verify;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn dev_generator(seed: u64) -> CredentialGenerator<StdRng> {
        CredentialGenerator::with_params(
            StdRng::seed_from_u64(seed),
            CredentialParams::default().with_template_len(4),
        )
    }

    #[test]
    fn default_params_expect_32_byte_templates() {
        assert_eq!(CredentialParams::default().template_len(), 32);
    }

    #[test]
    fn generate_roundtrips_with_verify() {
        let mut generator = dev_generator(7);
        let template = BiometricTemplate::from_text("1111").unwrap();
        let record = generator
            .generate(VoterId::new("1").unwrap(), &template)
            .unwrap();
        assert!(verify(&record, &template));
    }

    #[test]
    fn generate_rejects_wrong_template_length() {
        let mut generator = dev_generator(7);
        let template = BiometricTemplate::from_text("11111").unwrap();
        let err = generator
            .generate(VoterId::new("1").unwrap(), &template)
            .unwrap_err();
        assert!(matches!(
            err,
            CredentialError::InvalidTemplateLength {
                expected: 4,
                actual: 5
            }
        ));
    }

    #[test]
    fn repeated_generation_yields_fresh_helper_and_tag() {
        let mut generator = dev_generator(7);
        let template = BiometricTemplate::from_text("1111").unwrap();
        let first = generator
            .generate(VoterId::new("1").unwrap(), &template)
            .unwrap();
        let second = generator
            .generate(VoterId::new("1").unwrap(), &template)
            .unwrap();
        // Same voter, same template: fresh R must still produce distinct
        // public values each call.
        assert_ne!(first.helper, second.helper);
        assert_ne!(first.tag, second.tag);
        assert_ne!(first.salt, second.salt);
    }

    #[test]
    fn helper_unmasks_to_secret_committed_by_tag() {
        let mut generator = dev_generator(11);
        let template = BiometricTemplate::from_text("4242").unwrap();
        let record = generator
            .generate(VoterId::new("4".to_string()).unwrap(), &template)
            .unwrap();

        let recovered = xor32(
            record.helper.as_bytes(),
            &keccak256(template.as_bytes()),
        );
        assert_eq!(keccak256(&recovered), *record.tag.as_bytes());
    }

    #[test]
    fn seeded_generator_is_reproducible() {
        let template = BiometricTemplate::from_text("1111").unwrap();
        let a = dev_generator(99)
            .generate(VoterId::new("1").unwrap(), &template)
            .unwrap();
        let b = dev_generator(99)
            .generate(VoterId::new("1").unwrap(), &template)
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn entropy_failure_is_fatal() {
        struct FailingRng;

        impl RngCore for FailingRng {
            fn next_u32(&mut self) -> u32 {
                0
            }
            fn next_u64(&mut self) -> u64 {
                0
            }
            fn fill_bytes(&mut self, _dest: &mut [u8]) {
                unreachable!("generator must use the fallible fill path");
            }
            fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> Result<(), rand_core::Error> {
                Err(rand_core::Error::new("entropy source offline"))
            }
        }

        impl CryptoRng for FailingRng {}

        let mut generator = CredentialGenerator::with_params(
            FailingRng,
            CredentialParams::default().with_template_len(4),
        );
        let template = BiometricTemplate::from_text("1111").unwrap();
        let err = generator
            .generate(VoterId::new("1").unwrap(), &template)
            .unwrap_err();
        assert!(matches!(err, CredentialError::RandomnessUnavailable(_)));
    }

    #[test]
    fn system_generator_produces_valid_records() {
        let mut generator = CredentialGenerator::system();
        let template = BiometricTemplate::new(vec![0xab; 32]).unwrap();
        let record = generator
            .generate(VoterId::new("12345678").unwrap(), &template)
            .unwrap();
        assert!(verify(&record, &template));
    }

    proptest! {
        #[test]
        fn any_full_length_template_roundtrips(
            bytes in prop::collection::vec(any::<u8>(), 32),
            seed in any::<u64>(),
        ) {
            let mut generator =
                CredentialGenerator::new(StdRng::seed_from_u64(seed));
            let template = BiometricTemplate::new(bytes).unwrap();
            let record = generator
                .generate(VoterId::new("1").unwrap(), &template)
                .unwrap();
            prop_assert!(verify(&record, &template));
            // Cross-check: helper XOR H commits to tag.
            let recovered = xor32(
                record.helper.as_bytes(),
                &keccak256(template.as_bytes()),
            );
            prop_assert_eq!(keccak256(&recovered), *record.tag.as_bytes());
        }
    }
}
