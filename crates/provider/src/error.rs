// Copyright (C) 2025 The Mina-RS Project.
//
// error.rs file belongs to the mina-rs project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Error types surfaced by the provider contract.
//!
//! The registry layer performs no recovery and no translation: every error
//! originates either in the installed backend or in the failing default's
//! fail-fast stubs.

use mina_core::{CoreError, PublicKey, TokenId};
use thiserror::Error;

/// Result type for provider operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by provider operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A state-dependent operation ran before any backend was installed.
    ///
    /// Deterministic and never retried; the diagnostic names the missing
    /// setup step.
    #[error("no active network instance is configured: call set_active_instance before use")]
    Unconfigured,

    /// No account exists for the queried key and token.
    #[error("no account found for public key {public_key} and token {token_id}")]
    MissingAccount {
        /// Key the lookup was made with.
        public_key: PublicKey,
        /// Token the lookup was made against.
        token_id: TokenId,
    },

    /// Structurally ambiguous or contradictory fee payer data.
    #[error("invalid fee payer: {0}")]
    InvalidFeePayer(String),

    /// An error raised inside the deferred transaction-building block.
    #[error("transaction build failed: {0}")]
    TransactionBuild(String),

    /// The backend refused a submitted transaction.
    #[error("transaction rejected: {0}")]
    TransactionRejected(String),

    /// Transport failure while talking to the backend.
    #[error("network error: {0}")]
    Network(String),

    /// A malformed value propagated from the core type layer.
    #[error(transparent)]
    Core(#[from] CoreError),
}
