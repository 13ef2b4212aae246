//! Mina Configuration Module
//!
//! This module provides network identity and the immutable-per-network
//! protocol parameters consumed by the provider stack.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Consensus timing constants
pub const SECONDS_PER_SLOT: u64 = 3 * 60;
/// Duration of one consensus slot in milliseconds
pub const MILLISECONDS_PER_SLOT: u64 = SECONDS_PER_SLOT * 1000;

/// Genesis timestamp assumed when no real network is configured,
/// in milliseconds since the Unix epoch
pub const DEFAULT_GENESIS_TIMESTAMP: u64 = 0;

/// Fee charged to create a new account, in the smallest currency unit
pub const DEFAULT_ACCOUNT_CREATION_FEE: u64 = 1_000_000_000;

/// Number of field elements of on-chain zkapp state held per account
pub const ZKAPP_STATE_FIELDS: usize = 8;

/// Network identity tag for the Mina blockchain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum NetworkId {
    /// The main network.
    MainNet,
    /// The public test network.
    #[default]
    TestNet,
}

impl fmt::Display for NetworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkId::MainNet => write!(f, "mainnet"),
            NetworkId::TestNet => write!(f, "testnet"),
        }
    }
}

impl FromStr for NetworkId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mainnet" | "main" => Ok(NetworkId::MainNet),
            "testnet" | "test" => Ok(NetworkId::TestNet),
            _ => Err(format!("Unknown network id: {}", s)),
        }
    }
}

/// Immutable-per-network protocol parameters.
///
/// The defaults are deterministic, documented values so code can run
/// against no real network and still observe meaningful constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkConstants {
    /// Absolute genesis time, in milliseconds since the Unix epoch.
    pub genesis_timestamp: u64,
    /// Duration of one consensus slot in milliseconds.
    pub slot_time: u64,
    /// Fee charged to create a new account, in the smallest currency unit.
    pub account_creation_fee: u64,
}

impl Default for NetworkConstants {
    fn default() -> Self {
        Self {
            genesis_timestamp: DEFAULT_GENESIS_TIMESTAMP,
            slot_time: MILLISECONDS_PER_SLOT,
            account_creation_fee: DEFAULT_ACCOUNT_CREATION_FEE,
        }
    }
}
