// Copyright (C) 2025 The Mina-RS Project.
//
// lib.rs file belongs to the mina-rs project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Mina Network Provider Library
//!
//! This crate defines the contract every network backend must implement to
//! act as "the network" for transaction construction, together with the
//! process-wide registry through which all higher-level code resolves the
//! active backend.
//!
//! No backend ships here. Local test ledgers, mocks and remote network
//! clients implement [`NetworkProvider`] elsewhere and are installed with
//! [`set_active_instance`]; every consumer entry point resolves the
//! registry fresh on each call, so installing a backend (or swapping it in
//! a test) is observed by the very next operation.
//!
//! Before any install, the registry holds a failing default: network
//! constants, the network id and the proving flag resolve to documented
//! defaults, and every state-dependent operation fails with
//! [`Error::Unconfigured`] rather than returning a value that could be
//! mistaken for a real answer.

#![warn(missing_docs)]

/// Provider error types
pub mod error;
/// Fee payer specifications for transaction construction
pub mod fee_payer;
/// Cursors and filters for event and action queries
pub mod filter;
/// The network provider contract
pub mod provider;
/// Process-wide registry of the active provider instance
pub mod registry;

pub use error::{Error, Result};
pub use fee_payer::{DeprecatedFeePayer, DeprecatedFeePayerSpec, FeePayer, FeePayerSpec};
pub use filter::{ActionStates, EventActionFilterOptions};
pub use provider::{NetworkProvider, TransactionCallback};
pub use registry::{
    active_instance, current_slot, fetch_actions, fetch_events, get_account, get_actions,
    get_network_constants, get_network_state, has_account, network_id, proofs_enabled,
    send_transaction, set_active_instance, transaction,
};
#[allow(deprecated)]
pub use registry::account_creation_fee;
