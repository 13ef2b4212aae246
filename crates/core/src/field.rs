//! Implementation of `Field`, an opaque field element digest.

use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The length of `Field` values in bytes.
pub const FIELD_SIZE: usize = 32;

/// An opaque field element, stored as 32 little-endian bytes.
///
/// The provider layer never interprets the contents; it only carries
/// digests between callers and backends. Action-state commitments, token
/// identifiers and ledger hashes are all `Field` values.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Field([u8; FIELD_SIZE]);

impl Field {
    /// Alias for the byte width of a field element.
    pub const LENGTH: usize = FIELD_SIZE;

    /// Returns the zero field element.
    #[inline]
    #[must_use]
    pub fn zero() -> Self {
        Self::default()
    }

    /// Checks whether every byte is zero.
    #[inline]
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|b| *b == 0)
    }

    /// Creates a field element from a small integer.
    #[must_use]
    pub fn from_u64(value: u64) -> Self {
        let mut bytes = [0u8; FIELD_SIZE];
        bytes[..8].copy_from_slice(&value.to_le_bytes());
        Self(bytes)
    }

    /// Creates a field element from a byte slice.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidLength` if the input is not exactly
    /// 32 bytes.
    pub fn from_bytes(value: &[u8]) -> CoreResult<Self> {
        if value.len() != FIELD_SIZE {
            return Err(CoreError::InvalidLength {
                expected: FIELD_SIZE,
                actual: value.len(),
            });
        }
        let mut bytes = [0u8; FIELD_SIZE];
        bytes.copy_from_slice(value);
        Ok(Self(bytes))
    }

    /// Returns the bytes of this field element.
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8; FIELD_SIZE] {
        &self.0
    }

    /// Returns a copy of the bytes.
    #[inline]
    #[must_use]
    pub fn to_bytes(&self) -> [u8; FIELD_SIZE] {
        self.0
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl fmt::Debug for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Field({})", hex::encode(self.0))
    }
}

impl FromStr for Field {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = hex::decode(s)?;
        Self::from_bytes(&bytes)
    }
}
