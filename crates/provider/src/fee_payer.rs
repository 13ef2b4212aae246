// Copyright (C) 2025 The Mina-RS Project.
//
// fee_payer.rs file belongs to the mina-rs project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Fee payer specifications for transaction construction.

use crate::error::{Error, Result};
use mina_core::{PrivateKey, PublicKey};

/// Describes who pays the fee for a transaction and how.
///
/// A bare public key is shorthand for a [`FeePayer`] record with only the
/// sender set; backends observe the two shapes identically after
/// [normalization](FeePayerSpec::into_fee_payer).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FeePayerSpec {
    /// No fee payer override supplied by the caller.
    #[default]
    Unset,
    /// Fee payer identified by account key; fee, memo and nonce default.
    Sender(PublicKey),
    /// Fully specified fee payer.
    Detailed(FeePayer),
}

/// Structured fee payer record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeePayer {
    /// Account paying the fee.
    pub sender: PublicKey,
    /// Fee in the smallest currency unit; backend default when absent.
    pub fee: Option<u64>,
    /// Transaction memo; length bounds are enforced by the backend.
    pub memo: Option<String>,
    /// Override of the account's on-chain nonce.
    pub nonce: Option<u32>,
}

impl FeePayer {
    /// Creates a record with only the sender set.
    #[must_use]
    pub fn from_sender(sender: PublicKey) -> Self {
        Self {
            sender,
            fee: None,
            memo: None,
            nonce: None,
        }
    }
}

impl FeePayerSpec {
    /// Normalizes to the structured fee payer form.
    ///
    /// A bare key becomes a record with every optional field absent;
    /// `Unset` stays `None`.
    #[must_use]
    pub fn into_fee_payer(self) -> Option<FeePayer> {
        match self {
            FeePayerSpec::Unset => None,
            FeePayerSpec::Sender(sender) => Some(FeePayer::from_sender(sender)),
            FeePayerSpec::Detailed(fee_payer) => Some(fee_payer),
        }
    }
}

impl From<PublicKey> for FeePayerSpec {
    fn from(sender: PublicKey) -> Self {
        FeePayerSpec::Sender(sender)
    }
}

impl From<FeePayer> for FeePayerSpec {
    fn from(fee_payer: FeePayer) -> Self {
        FeePayerSpec::Detailed(fee_payer)
    }
}

/// Legacy fee payer shape retained for backward compatibility.
///
/// Prefer [`FeePayerSpec`]. This shape additionally admits a bare private
/// key (the signer is the sender) and records carrying both the key and
/// the sender. When both are present the key must correspond to the
/// sender; that check belongs to the backend, which holds the key
/// arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DeprecatedFeePayerSpec {
    /// No fee payer supplied.
    #[default]
    Unset,
    /// Fee payer identified by account key.
    Sender(PublicKey),
    /// Fee payer identified by signing key; the signer is the sender.
    FeePayerKey(PrivateKey),
    /// Structured legacy record.
    Detailed(DeprecatedFeePayer),
}

/// Structured legacy fee payer record.
///
/// The shape alone admits a record with neither `fee_payer_key` nor
/// `sender`; [`validate`](Self::validate) rejects that combination at
/// runtime.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DeprecatedFeePayer {
    /// Signing key of the fee payer, when the caller supplies one.
    pub fee_payer_key: Option<PrivateKey>,
    /// Account paying the fee.
    pub sender: Option<PublicKey>,
    /// Fee in the smallest currency unit; backend default when absent.
    pub fee: Option<u64>,
    /// Transaction memo; length bounds are enforced by the backend.
    pub memo: Option<String>,
    /// Override of the account's on-chain nonce.
    pub nonce: Option<u32>,
}

impl DeprecatedFeePayer {
    /// Rejects records naming neither a key nor a sender.
    ///
    /// Backends call this before building a transaction; the registry
    /// layer never validates on its own.
    pub fn validate(&self) -> Result<()> {
        if self.fee_payer_key.is_none() && self.sender.is_none() {
            return Err(Error::InvalidFeePayer(
                "at least one of fee_payer_key and sender is required".to_string(),
            ));
        }
        Ok(())
    }
}

impl DeprecatedFeePayerSpec {
    /// Validates the structural invariants a backend relies on.
    pub fn validate(&self) -> Result<()> {
        match self {
            DeprecatedFeePayerSpec::Detailed(fee_payer) => fee_payer.validate(),
            _ => Ok(()),
        }
    }
}

impl From<PublicKey> for DeprecatedFeePayerSpec {
    fn from(sender: PublicKey) -> Self {
        DeprecatedFeePayerSpec::Sender(sender)
    }
}

impl From<PrivateKey> for DeprecatedFeePayerSpec {
    fn from(fee_payer_key: PrivateKey) -> Self {
        DeprecatedFeePayerSpec::FeePayerKey(fee_payer_key)
    }
}

impl From<FeePayerSpec> for DeprecatedFeePayerSpec {
    fn from(spec: FeePayerSpec) -> Self {
        match spec {
            FeePayerSpec::Unset => DeprecatedFeePayerSpec::Unset,
            FeePayerSpec::Sender(sender) => DeprecatedFeePayerSpec::Sender(sender),
            FeePayerSpec::Detailed(fee_payer) => {
                DeprecatedFeePayerSpec::Detailed(DeprecatedFeePayer {
                    fee_payer_key: None,
                    sender: Some(fee_payer.sender),
                    fee: fee_payer.fee,
                    memo: fee_payer.memo,
                    nonce: fee_payer.nonce,
                })
            }
        }
    }
}
