//! # 32-Byte Public Values
//!
//! The credential scheme stores three public 32-byte values per voter
//! record: the salt, the helper data, and the pseudonymous tag. All three
//! share one wire encoding — `0x` followed by 64 lowercase hex characters —
//! implemented once on [`Bytes32`] and lifted onto distinct newtypes so
//! the type system keeps them apart.
//!
//! ## Validation
//!
//! Hex parsing accepts an optional `0x`/`0X` prefix and mixed-case digits,
//! and always re-emits the canonical `0x` + lowercase form. Anything that
//! does not decode to exactly 32 bytes is rejected, at construction and at
//! deserialization alike.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// An exact 32-byte value with canonical `0x`-prefixed hex encoding.
///
/// This is the storage and wire representation for every fixed-length
/// public value in the registry. The byte array is always exactly 32
/// bytes by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bytes32([u8; 32]);

impl Bytes32 {
    /// The fixed length in bytes.
    pub const LEN: usize = 32;

    /// Wrap an existing 32-byte array.
    pub fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Create from a byte slice, validating length.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidLength`] if the slice is not
    /// exactly 32 bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, ValidationError> {
        let arr: [u8; 32] = bytes
            .try_into()
            .map_err(|_| ValidationError::InvalidLength {
                expected: Self::LEN,
                actual: bytes.len(),
            })?;
        Ok(Self(arr))
    }

    /// Parse from a hex string.
    ///
    /// Accepts an optional `0x`/`0X` prefix and upper- or lowercase hex
    /// digits. The decoded value must be exactly 32 bytes.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidHex`] for non-hex input and
    /// [`ValidationError::InvalidLength`] for a wrong decoded length.
    pub fn from_hex(s: &str) -> Result<Self, ValidationError> {
        let stripped = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);
        let bytes =
            hex::decode(stripped).map_err(|e| ValidationError::InvalidHex(e.to_string()))?;
        Self::from_slice(&bytes)
    }

    /// Canonical encoding: `0x` + 64 lowercase hex characters.
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }

    /// Access the underlying bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Consume and return the underlying array.
    pub fn into_inner(self) -> [u8; 32] {
        self.0
    }

    /// Byte-wise exclusive-or with another 32-byte value.
    pub fn xor(&self, other: &Bytes32) -> Bytes32 {
        let mut out = [0u8; 32];
        for (i, byte) in out.iter_mut().enumerate() {
            *byte = self.0[i] ^ other.0[i];
        }
        Bytes32(out)
    }
}

impl std::fmt::Display for Bytes32 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl std::str::FromStr for Bytes32 {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl From<[u8; 32]> for Bytes32 {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl Serialize for Bytes32 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Bytes32 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::from_hex(&raw).map_err(serde::de::Error::custom)
    }
}

/// Helper macro implementing the shared surface of the distinct 32-byte
/// newtypes. Each wraps a [`Bytes32`] and forwards encoding, parsing, and
/// serde through it, so the canonical hex form is defined in one place.
macro_rules! impl_bytes32_newtype {
    ($(#[$meta:meta])* $ty:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $ty(Bytes32);

        impl $ty {
            /// Wrap an existing 32-byte array.
            pub fn new(bytes: [u8; 32]) -> Self {
                Self(Bytes32::new(bytes))
            }

            /// Parse from a hex string (optional `0x` prefix, 64 hex chars).
            pub fn from_hex(s: &str) -> Result<Self, ValidationError> {
                Bytes32::from_hex(s).map(Self)
            }

            /// Canonical encoding: `0x` + 64 lowercase hex characters.
            pub fn to_hex(&self) -> String {
                self.0.to_hex()
            }

            /// Access the underlying bytes.
            pub fn as_bytes(&self) -> &[u8; 32] {
                self.0.as_bytes()
            }

            /// Access the underlying [`Bytes32`].
            pub fn as_bytes32(&self) -> &Bytes32 {
                &self.0
            }
        }

        impl From<Bytes32> for $ty {
            fn from(value: Bytes32) -> Self {
                Self(value)
            }
        }

        impl From<[u8; 32]> for $ty {
            fn from(bytes: [u8; 32]) -> Self {
                Self::new(bytes)
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.to_hex())
            }
        }

        impl std::str::FromStr for $ty {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::from_hex(s)
            }
        }
    };
}

impl_bytes32_newtype! {
    /// Per-record public randomness stored alongside the credential.
    ///
    /// Drawn independently of the recovery secret and not currently mixed
    /// into any derivation; reserved for future domain separation of the
    /// template digest.
    Salt
}

impl_bytes32_newtype! {
    /// Public helper data: the recovery secret XOR-masked with the
    /// template digest.
    ///
    /// On its own reveals neither the secret nor the digest. Combined
    /// with a digest of a matching fresh template it reconstructs the
    /// recovery secret exactly.
    HelperData
}

impl_bytes32_newtype! {
    /// The pseudonymous voting credential: a one-way digest of the
    /// recovery secret.
    ///
    /// Commits to the secret without revealing it; this is the value the
    /// external registry aggregates into its anonymity-set root.
    CredentialTag
}
