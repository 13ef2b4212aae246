//! Account records and token identifiers.

use crate::field::Field;
use crate::keys::PublicKey;
use mina_config::ZKAPP_STATE_FIELDS;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies the token an account holds.
///
/// Token identifiers are field elements; the default is the native token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TokenId(pub Field);

impl TokenId {
    /// The identifier of the native token.
    #[must_use]
    pub fn native() -> Self {
        Self(Field::from_u64(1))
    }
}

impl Default for TokenId {
    fn default() -> Self {
        Self::native()
    }
}

impl From<Field> for TokenId {
    fn from(field: Field) -> Self {
        Self(field)
    }
}

impl fmt::Display for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A full account record as reported by a backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Key identifying the account.
    pub public_key: PublicKey,
    /// Token the account holds; the native token for plain accounts.
    pub token_id: TokenId,
    /// Current on-chain nonce.
    pub nonce: u32,
    /// Balance in the smallest currency unit.
    pub balance: u64,
    /// On-chain zkapp state, present when the account hosts a zkapp.
    pub zkapp_state: Option<[Field; ZKAPP_STATE_FIELDS]>,
}

impl Account {
    /// Creates a plain (non-zkapp) account record.
    #[must_use]
    pub fn new(public_key: PublicKey, token_id: TokenId, nonce: u32, balance: u64) -> Self {
        Self {
            public_key,
            token_id,
            nonce,
            balance,
            zkapp_state: None,
        }
    }
}
