//! Network state snapshots.

use crate::field::Field;
use serde::{Deserialize, Serialize};

/// A point-in-time snapshot of observable network state.
///
/// The provider contract treats the contents as opaque; preconditions
/// built on top of a snapshot belong to the transaction-building layer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkState {
    /// Hash of the most recent snarked ledger.
    pub snarked_ledger_hash: Field,
    /// Number of blocks in the best chain.
    pub blockchain_length: u32,
    /// Minimum window density observed by consensus.
    pub min_window_density: u32,
    /// Total currency in circulation, in the smallest unit.
    pub total_currency: u64,
    /// Consensus slot since genesis.
    pub global_slot_since_genesis: u32,
    /// Wall-clock timestamp of the snapshot, in milliseconds since the
    /// Unix epoch.
    pub timestamp: u64,
}
