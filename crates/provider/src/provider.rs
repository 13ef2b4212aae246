// Copyright (C) 2025 The Mina-RS Project.
//
// provider.rs file belongs to the mina-rs project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! The network provider contract.

use crate::error::Result;
use crate::fee_payer::DeprecatedFeePayerSpec;
use crate::filter::{ActionStates, EventActionFilterOptions};
use async_trait::async_trait;
use mina_config::{NetworkConstants, NetworkId};
use mina_core::{
    Account, ActionBatch, EventData, NetworkState, PublicKey, TokenId, Transaction, TransactionId,
};

/// Deferred transaction-building logic passed to
/// [`NetworkProvider::transaction`].
///
/// The block runs synchronously inside the call, before any network I/O;
/// an error raised inside it surfaces as the result of `transaction`
/// itself.
pub type TransactionCallback = Box<dyn FnOnce() -> Result<()> + Send>;

/// The operation set every network backend must implement.
///
/// Synchronous methods answer from backend-local state; asynchronous
/// methods may suspend the calling task on backend I/O. A local test
/// ledger answers everything instantly while a remote client legitimately
/// suspends on the async subset. [`get_actions`](Self::get_actions) and
/// [`fetch_actions`](Self::fetch_actions) coexist so callers can pick the
/// cost/availability tradeoff appropriate to the backend in use.
///
/// No ordering is promised across operations invoked concurrently against
/// the same provider; implementations may serialize internally but are not
/// required to.
#[async_trait]
pub trait NetworkProvider: Send + Sync {
    /// Builds a transaction by running `build` under the given fee payer.
    ///
    /// The callback is invoked synchronously inside the call before any
    /// network I/O.
    ///
    /// # Errors
    ///
    /// Fails for invalid fee payer data, an invalid nonce override, or an
    /// error raised inside `build`.
    async fn transaction(
        &self,
        sender: DeprecatedFeePayerSpec,
        build: TransactionCallback,
    ) -> Result<Transaction>;

    /// Current consensus slot number.
    fn current_slot(&self) -> Result<u32>;

    /// Whether an account exists for the key at the given token.
    ///
    /// `None` selects the native token.
    fn has_account(&self, public_key: PublicKey, token_id: Option<TokenId>) -> Result<bool>;

    /// Full account record for the key at the given token.
    ///
    /// # Errors
    ///
    /// [`Error::MissingAccount`](crate::Error::MissingAccount) if no such
    /// account exists.
    fn get_account(&self, public_key: PublicKey, token_id: Option<TokenId>) -> Result<Account>;

    /// Snapshot of the current network state.
    fn get_network_state(&self) -> Result<NetworkState>;

    /// Immutable-per-network protocol constants.
    fn get_network_constants(&self) -> NetworkConstants;

    /// Fee charged to create a new account.
    #[deprecated(note = "read account_creation_fee from get_network_constants instead")]
    fn account_creation_fee(&self) -> u64 {
        self.get_network_constants().account_creation_fee
    }

    /// Submits a previously built transaction.
    async fn send_transaction(&self, transaction: Transaction) -> Result<TransactionId>;

    /// Events emitted by the account, filtered by block range.
    async fn fetch_events(
        &self,
        public_key: PublicKey,
        token_id: Option<TokenId>,
        filter: EventActionFilterOptions,
    ) -> Result<Vec<EventData>>;

    /// Action batches for the account within the cursor bounds.
    async fn fetch_actions(
        &self,
        public_key: PublicKey,
        action_states: ActionStates,
        token_id: Option<TokenId>,
    ) -> Result<Vec<ActionBatch>>;

    /// Synchronous variant of [`fetch_actions`](Self::fetch_actions) for
    /// backends holding full local history.
    ///
    /// # Errors
    ///
    /// Fails when the requested data is not locally available.
    fn get_actions(
        &self,
        public_key: PublicKey,
        action_states: ActionStates,
        token_id: Option<TokenId>,
    ) -> Result<Vec<ActionBatch>>;

    /// Whether this provider executes real proof circuits.
    ///
    /// Surfaced as an accessor since the contract is a trait; a provider
    /// answering `false` short-circuits proving.
    fn proofs_enabled(&self) -> bool;

    /// Identity tag of the network this provider targets.
    fn network_id(&self) -> NetworkId;
}
