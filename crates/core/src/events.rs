//! Event and action payloads returned by provider queries.

use serde::{Deserialize, Serialize};

/// Events emitted by an account in a single block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventData {
    /// Height of the block the events were emitted in.
    pub block_height: u32,
    /// Hash of that block, as rendered by the backend.
    pub block_hash: String,
    /// Consensus slot of that block.
    pub global_slot: u32,
    /// Raw event field data, one inner vector per event.
    pub events: Vec<Vec<String>>,
}

/// A batch of actions grouped under one action-state commitment.
///
/// Both the synchronous and the asynchronous action queries return this
/// shape, so callers can switch between them without remapping results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionBatch {
    /// Action-state commitment after this batch was applied, as rendered
    /// by the backend.
    pub hash: String,
    /// Raw action field data, one inner vector per action.
    pub actions: Vec<Vec<String>>,
}
