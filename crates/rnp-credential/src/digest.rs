//! # Keccak-256 Digest Computation
//!
//! The single sanctioned digest path for credential derivation. Both the
//! template digest `H` and the credential tag are Keccak-256 outputs —
//! the same permutation the ledger-side registry applies when it checks
//! submitted tags, so digest agreement across the boundary is exact.
//!
//! Note this is Keccak-256 (the original padding, as used by EVM chains),
//! not the NIST-finalized SHA3-256.

use sha3::{Digest, Keccak256};

/// Compute the Keccak-256 digest of a byte string.
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Byte-wise exclusive-or of two 32-byte values.
///
/// The masking/unmasking primitive of the scheme: `helper = R XOR H` on
/// generation, `R' = helper XOR H'` on verification.
pub(crate) fn xor32(a: &[u8; 32], b: &[u8; 32]) -> [u8; 32] {
    let mut out = [0u8; 32];
    for (i, byte) in out.iter_mut().enumerate() {
        *byte = a[i] ^ b[i];
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keccak256_empty_input_known_answer() {
        // Well-known Keccak-256 of the empty string (the EVM empty-data hash).
        assert_eq!(
            hex::encode(keccak256(b"")),
            "c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470"
        );
    }

    #[test]
    fn keccak256_abc_known_answer() {
        assert_eq!(
            hex::encode(keccak256(b"abc")),
            "4e03657aea45a94fc7d47ba826c8d667c0d1e6e33a64a036ec44f58fa12d6c45"
        );
    }

    #[test]
    fn keccak256_is_deterministic() {
        assert_eq!(keccak256(b"1111"), keccak256(b"1111"));
    }

    #[test]
    fn keccak256_different_input_different_digest() {
        assert_ne!(keccak256(b"1111"), keccak256(b"1112"));
    }

    #[test]
    fn xor32_involution() {
        let a = [0x3c; 32];
        let b = keccak256(b"mask");
        assert_eq!(xor32(&xor32(&a, &b), &b), a);
    }

    #[test]
    fn xor32_identity_and_self_cancel() {
        let a = keccak256(b"value");
        assert_eq!(xor32(&a, &[0u8; 32]), a);
        assert_eq!(xor32(&a, &a), [0u8; 32]);
    }
}
