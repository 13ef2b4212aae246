// Copyright (C) 2025 The Mina-RS Project.
//
// registry.rs file belongs to the mina-rs project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Process-wide registry of the active network provider.
//!
//! The registry is a single mutable slot created at first use and
//! initialized to a failing default. [`set_active_instance`] replaces the
//! slot contents wholesale; the forwarding entry points resolve the slot
//! fresh on every call, so a swap is observed by the next operation. The
//! lock is held only for the pointer clone or swap, never across a
//! forwarded call.

use crate::error::{Error, Result};
use crate::fee_payer::DeprecatedFeePayerSpec;
use crate::filter::{ActionStates, EventActionFilterOptions};
use crate::provider::{NetworkProvider, TransactionCallback};
use async_trait::async_trait;
use mina_config::{NetworkConstants, NetworkId};
use mina_core::{
    Account, ActionBatch, EventData, NetworkState, PublicKey, TokenId, Transaction, TransactionId,
};
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::debug;

/// Global slot holding the active provider.
static ACTIVE_INSTANCE: Lazy<RwLock<Arc<dyn NetworkProvider>>> =
    Lazy::new(|| RwLock::new(Arc::new(Unconfigured)));

/// Failing default installed until a real backend replaces it.
///
/// Network constants, the network id and the proving flag have meaningful
/// answers with no backend; every other operation fails with the one fixed
/// [`Error::Unconfigured`] diagnostic. The type stays private so the slot
/// cannot be reset to it from outside: there is no uninstall transition.
struct Unconfigured;

#[async_trait]
impl NetworkProvider for Unconfigured {
    async fn transaction(
        &self,
        _sender: DeprecatedFeePayerSpec,
        _build: TransactionCallback,
    ) -> Result<Transaction> {
        Err(Error::Unconfigured)
    }

    fn current_slot(&self) -> Result<u32> {
        Err(Error::Unconfigured)
    }

    fn has_account(&self, _public_key: PublicKey, _token_id: Option<TokenId>) -> Result<bool> {
        Err(Error::Unconfigured)
    }

    fn get_account(&self, _public_key: PublicKey, _token_id: Option<TokenId>) -> Result<Account> {
        Err(Error::Unconfigured)
    }

    fn get_network_state(&self) -> Result<NetworkState> {
        Err(Error::Unconfigured)
    }

    fn get_network_constants(&self) -> NetworkConstants {
        NetworkConstants::default()
    }

    async fn send_transaction(&self, _transaction: Transaction) -> Result<TransactionId> {
        Err(Error::Unconfigured)
    }

    async fn fetch_events(
        &self,
        _public_key: PublicKey,
        _token_id: Option<TokenId>,
        _filter: EventActionFilterOptions,
    ) -> Result<Vec<EventData>> {
        Err(Error::Unconfigured)
    }

    async fn fetch_actions(
        &self,
        _public_key: PublicKey,
        _action_states: ActionStates,
        _token_id: Option<TokenId>,
    ) -> Result<Vec<ActionBatch>> {
        Err(Error::Unconfigured)
    }

    fn get_actions(
        &self,
        _public_key: PublicKey,
        _action_states: ActionStates,
        _token_id: Option<TokenId>,
    ) -> Result<Vec<ActionBatch>> {
        Err(Error::Unconfigured)
    }

    fn proofs_enabled(&self) -> bool {
        // Never silently skip proving before a backend decides otherwise.
        true
    }

    fn network_id(&self) -> NetworkId {
        NetworkId::default()
    }
}

/// Installs `provider` as the active network instance.
///
/// The slot contents are replaced wholesale; there is no partial update
/// and no merging with the previous value. Calls already dispatched to the
/// previous instance keep running against it. Intended to run once at
/// application setup, or per test to swap in a fresh local backend.
pub fn set_active_instance(provider: Arc<dyn NetworkProvider>) {
    debug!("replacing active network instance");
    *ACTIVE_INSTANCE.write() = provider;
}

/// Returns the currently installed provider.
///
/// Consumers resolve the slot per call rather than holding the returned
/// handle, so a later install is observed by their next call.
#[must_use]
pub fn active_instance() -> Arc<dyn NetworkProvider> {
    ACTIVE_INSTANCE.read().clone()
}

// Forwarding entry points. Each resolves the slot fresh and forwards its
// arguments verbatim to the active instance.

/// Builds a transaction against the active instance.
///
/// See [`NetworkProvider::transaction`].
pub async fn transaction(
    sender: DeprecatedFeePayerSpec,
    build: TransactionCallback,
) -> Result<Transaction> {
    active_instance().transaction(sender, build).await
}

/// Current consensus slot of the active instance.
pub fn current_slot() -> Result<u32> {
    active_instance().current_slot()
}

/// Whether an account exists on the active instance.
pub fn has_account(public_key: PublicKey, token_id: Option<TokenId>) -> Result<bool> {
    active_instance().has_account(public_key, token_id)
}

/// Account record from the active instance.
pub fn get_account(public_key: PublicKey, token_id: Option<TokenId>) -> Result<Account> {
    active_instance().get_account(public_key, token_id)
}

/// Network state snapshot from the active instance.
pub fn get_network_state() -> Result<NetworkState> {
    active_instance().get_network_state()
}

/// Protocol constants of the active instance.
pub fn get_network_constants() -> NetworkConstants {
    active_instance().get_network_constants()
}

/// Fee charged to create a new account on the active instance.
#[deprecated(note = "read account_creation_fee from get_network_constants instead")]
#[allow(deprecated)]
pub fn account_creation_fee() -> u64 {
    active_instance().account_creation_fee()
}

/// Submits a transaction to the active instance.
pub async fn send_transaction(transaction: Transaction) -> Result<TransactionId> {
    active_instance().send_transaction(transaction).await
}

/// Fetches events from the active instance.
pub async fn fetch_events(
    public_key: PublicKey,
    token_id: Option<TokenId>,
    filter: EventActionFilterOptions,
) -> Result<Vec<EventData>> {
    active_instance().fetch_events(public_key, token_id, filter).await
}

/// Fetches action batches from the active instance.
pub async fn fetch_actions(
    public_key: PublicKey,
    action_states: ActionStates,
    token_id: Option<TokenId>,
) -> Result<Vec<ActionBatch>> {
    active_instance()
        .fetch_actions(public_key, action_states, token_id)
        .await
}

/// Reads locally held action batches from the active instance.
pub fn get_actions(
    public_key: PublicKey,
    action_states: ActionStates,
    token_id: Option<TokenId>,
) -> Result<Vec<ActionBatch>> {
    active_instance().get_actions(public_key, action_states, token_id)
}

/// Whether the active instance executes real proof circuits.
#[must_use]
pub fn proofs_enabled() -> bool {
    active_instance().proofs_enabled()
}

/// Network identity of the active instance.
#[must_use]
pub fn network_id() -> NetworkId {
    active_instance().network_id()
}
