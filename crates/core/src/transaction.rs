//! Transaction handles exchanged with a network provider.

use crate::keys::PublicKey;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An unsigned transaction assembled by a provider.
///
/// The transaction body (the recorded account updates) belongs to the
/// transaction-building layer; this handle carries what the provider
/// contract needs to identify and submit the result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Account paying the transaction fee.
    pub fee_payer: PublicKey,
    /// Fee in the smallest currency unit.
    pub fee: u64,
    /// Fee payer nonce the transaction was built against.
    pub nonce: u32,
    /// Human-readable memo; length bounds are enforced by the backend.
    pub memo: String,
}

impl Transaction {
    /// Creates a transaction handle.
    #[must_use]
    pub fn new(fee_payer: PublicKey, fee: u64, nonce: u32, memo: impl Into<String>) -> Self {
        Self {
            fee_payer,
            fee,
            nonce,
            memo: memo.into(),
        }
    }
}

/// Identifier assigned to a submitted transaction by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TransactionId(String);

impl TransactionId {
    /// Wraps a backend-assigned identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
