//! # Mina-RS: Mina Network Provider Stack in Rust
//!
//! Backend-polymorphic access to "the network" for Mina transaction
//! construction.
//!
//! This library defines the contract every network backend must implement
//! and the process-wide registry through which higher-level code resolves
//! the active backend on every call:
//!
//! - Provider contract ([`mina_provider::NetworkProvider`]) with the fee
//!   payer, cursor and filter types that parameterize it
//! - Active-instance registry with a failing default, so every
//!   state-dependent operation fails loudly until a backend is installed
//! - Network identity and protocol constants with documented no-network
//!   defaults
//! - Opaque value types (field elements, keys, accounts, transactions)
//!   exchanged with backends
//!
//! ## Quick Start
//!
//! ```rust
//! use mina_rs::prelude::*;
//!
//! // Without a backend installed, constants still resolve deterministically
//! let constants: NetworkConstants = mina_rs::provider::get_network_constants();
//! assert_eq!(constants.slot_time, 180_000);
//!
//! // ...while state-dependent reads fail loudly
//! assert!(mina_rs::provider::current_slot().is_err());
//!
//! // A real application installs a backend once at setup:
//! // mina_rs::provider::set_active_instance(Arc::new(MyBackend::new()));
//! ```
//!
//! ## Architecture
//!
//! The implementation is organized into three crates:
//!
//! - [`mina_config`] - Network identity and protocol constants
//! - [`mina_core`] - Opaque value types exchanged with backends
//! - [`mina_provider`] - Provider contract and active-instance registry

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

// Re-export all public APIs from member crates
pub use mina_config as config;
pub use mina_core as core;
pub use mina_provider as provider;

/// Common imports for working with the provider stack
pub mod prelude {
    pub use crate::config::{NetworkConstants, NetworkId};
    pub use crate::core::{Account, Field, PrivateKey, PublicKey, TokenId, Transaction};
    pub use crate::provider::{
        active_instance, set_active_instance, FeePayerSpec, NetworkProvider,
    };
}
