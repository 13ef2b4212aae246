// Copyright (C) 2025 The Mina-RS Project.
//
// filter.rs file belongs to the mina-rs project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Cursors and filters for event and action queries.

use mina_core::Field;

/// A cursor into an account's append-only action log.
///
/// Both bounds are optional action-state commitments. The default requests
/// the full available history; setting only `from_action_state` requests
/// everything from that commitment forward, and setting only
/// `end_action_state` everything up to that commitment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ActionStates {
    /// Commitment to start reading from; unbounded when absent.
    pub from_action_state: Option<Field>,
    /// Commitment to stop reading at; unbounded when absent.
    pub end_action_state: Option<Field>,
}

impl ActionStates {
    /// Cursor over the full available history.
    #[must_use]
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Cursor from the given commitment forward.
    #[must_use]
    pub fn since(from_action_state: Field) -> Self {
        Self {
            from_action_state: Some(from_action_state),
            end_action_state: None,
        }
    }

    /// Cursor up to the given commitment.
    #[must_use]
    pub fn until(end_action_state: Field) -> Self {
        Self {
            from_action_state: None,
            end_action_state: Some(end_action_state),
        }
    }
}

/// Block-range filter applied by event queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EventActionFilterOptions {
    /// Lowest block height to include; unbounded when absent.
    pub from: Option<u32>,
    /// Highest block height to include; unbounded when absent.
    pub to: Option<u32>,
}
