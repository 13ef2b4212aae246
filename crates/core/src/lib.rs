//! Mina Core Types
//!
//! Opaque value types consumed by the network provider contract: field
//! elements, keys, token identifiers, accounts, transaction handles, and
//! the payloads returned by event and action queries.
//!
//! Nothing in this crate performs cryptography. Field elements and keys are
//! fixed-width byte containers that move between callers and backends
//! without being interpreted here.

#![warn(missing_docs)]

/// Account records and token identifiers
pub mod account;
/// Core error types
pub mod error;
/// Event and action payloads returned by provider queries
pub mod events;
/// Opaque field element digests
pub mod field;
/// Account key types
pub mod keys;
/// Network state snapshots
pub mod network_state;
/// Transaction handles and identifiers
pub mod transaction;

// Re-exports for convenient access
pub use account::{Account, TokenId};
pub use error::{CoreError, CoreResult};
pub use events::{ActionBatch, EventData};
pub use field::Field;
pub use keys::{PrivateKey, PublicKey};
pub use network_state::NetworkState;
pub use transaction::{Transaction, TransactionId};
