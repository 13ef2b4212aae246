//! Account key types.
//!
//! Keys are opaque to the provider layer: no derivation, signing or
//! verification happens here. Backends that accept a private key are
//! responsible for checking it against the declared sender.

use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The length of key material in bytes.
pub const KEY_SIZE: usize = 32;

/// A public key identifying an account on the network.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PublicKey([u8; KEY_SIZE]);

impl PublicKey {
    /// Returns the all-zero public key.
    #[inline]
    #[must_use]
    pub fn zero() -> Self {
        Self::default()
    }

    /// Creates a public key from a byte slice.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidLength` if the input is not exactly
    /// 32 bytes.
    pub fn from_bytes(value: &[u8]) -> CoreResult<Self> {
        if value.len() != KEY_SIZE {
            return Err(CoreError::InvalidLength {
                expected: KEY_SIZE,
                actual: value.len(),
            });
        }
        let mut bytes = [0u8; KEY_SIZE];
        bytes.copy_from_slice(value);
        Ok(Self(bytes))
    }

    /// Returns the bytes of this key.
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.0
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey({})", hex::encode(self.0))
    }
}

impl FromStr for PublicKey {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = hex::decode(s)?;
        Self::from_bytes(&bytes)
    }
}

/// A private signing key.
///
/// Never serialized and never printed: the `Debug` impl redacts the key
/// material.
#[derive(Clone, PartialEq, Eq)]
pub struct PrivateKey([u8; KEY_SIZE]);

impl PrivateKey {
    /// Creates a private key from a byte slice.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidLength` if the input is not exactly
    /// 32 bytes.
    pub fn from_bytes(value: &[u8]) -> CoreResult<Self> {
        if value.len() != KEY_SIZE {
            return Err(CoreError::InvalidLength {
                expected: KEY_SIZE,
                actual: value.len(),
            });
        }
        let mut bytes = [0u8; KEY_SIZE];
        bytes.copy_from_slice(value);
        Ok(Self(bytes))
    }

    /// Returns the bytes of this key.
    ///
    /// Only backends that sign with the key should read these.
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.0
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PrivateKey(..)")
    }
}
