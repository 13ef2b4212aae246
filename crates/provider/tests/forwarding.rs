//! Forwarding and replacement semantics of the active-instance registry.
//!
//! Every test here installs an instance, so the suite serializes the
//! registry-mutating tests; the unconfigured defaults are covered by the
//! `unconfigured` binary, which runs in its own process.

use async_trait::async_trait;
use mina_config::{NetworkConstants, NetworkId};
use mina_core::{
    Account, ActionBatch, EventData, Field, NetworkState, PublicKey, TokenId, Transaction,
    TransactionId,
};
use mina_provider::{
    set_active_instance, ActionStates, DeprecatedFeePayerSpec, Error, EventActionFilterOptions,
    NetworkProvider, Result, TransactionCallback,
};
use parking_lot::Mutex;
use serial_test::serial;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// One observed contract call, with the arguments exactly as received.
#[derive(Debug, Clone, PartialEq)]
enum Call {
    Transaction(DeprecatedFeePayerSpec),
    CurrentSlot,
    HasAccount(PublicKey, Option<TokenId>),
    GetAccount(PublicKey, Option<TokenId>),
    GetNetworkState,
    SendTransaction(Transaction),
    FetchEvents(PublicKey, Option<TokenId>, EventActionFilterOptions),
    FetchActions(PublicKey, ActionStates, Option<TokenId>),
    GetActions(PublicKey, ActionStates, Option<TokenId>),
}

/// Backend that records every call it receives and answers with fixed
/// values distinguishable from the registry defaults.
struct Recording {
    calls: Mutex<Vec<Call>>,
}

impl Recording {
    const CONSTANTS: NetworkConstants = NetworkConstants {
        genesis_timestamp: 5,
        slot_time: 1_000,
        account_creation_fee: 77,
    };

    fn install() -> Arc<Self> {
        let provider = Arc::new(Self {
            calls: Mutex::new(Vec::new()),
        });
        set_active_instance(provider.clone());
        provider
    }

    fn calls(&self) -> Vec<Call> {
        self.calls.lock().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().push(call);
    }
}

#[async_trait]
impl NetworkProvider for Recording {
    async fn transaction(
        &self,
        sender: DeprecatedFeePayerSpec,
        build: TransactionCallback,
    ) -> Result<Transaction> {
        self.record(Call::Transaction(sender));
        build()?;
        Ok(Transaction::new(PublicKey::zero(), 1, 0, "recorded"))
    }

    fn current_slot(&self) -> Result<u32> {
        self.record(Call::CurrentSlot);
        Ok(12)
    }

    fn has_account(&self, public_key: PublicKey, token_id: Option<TokenId>) -> Result<bool> {
        self.record(Call::HasAccount(public_key, token_id));
        Ok(true)
    }

    fn get_account(&self, public_key: PublicKey, token_id: Option<TokenId>) -> Result<Account> {
        self.record(Call::GetAccount(public_key, token_id));
        Ok(Account::new(
            public_key,
            token_id.unwrap_or_default(),
            0,
            0,
        ))
    }

    fn get_network_state(&self) -> Result<NetworkState> {
        self.record(Call::GetNetworkState);
        Ok(NetworkState::default())
    }

    fn get_network_constants(&self) -> NetworkConstants {
        Self::CONSTANTS
    }

    async fn send_transaction(&self, transaction: Transaction) -> Result<TransactionId> {
        self.record(Call::SendTransaction(transaction));
        Ok(TransactionId::new("recorded"))
    }

    async fn fetch_events(
        &self,
        public_key: PublicKey,
        token_id: Option<TokenId>,
        filter: EventActionFilterOptions,
    ) -> Result<Vec<EventData>> {
        self.record(Call::FetchEvents(public_key, token_id, filter));
        Ok(Vec::new())
    }

    async fn fetch_actions(
        &self,
        public_key: PublicKey,
        action_states: ActionStates,
        token_id: Option<TokenId>,
    ) -> Result<Vec<ActionBatch>> {
        self.record(Call::FetchActions(public_key, action_states, token_id));
        Ok(Vec::new())
    }

    fn get_actions(
        &self,
        public_key: PublicKey,
        action_states: ActionStates,
        token_id: Option<TokenId>,
    ) -> Result<Vec<ActionBatch>> {
        self.record(Call::GetActions(public_key, action_states, token_id));
        Ok(Vec::new())
    }

    fn proofs_enabled(&self) -> bool {
        false
    }

    fn network_id(&self) -> NetworkId {
        NetworkId::MainNet
    }
}

/// Backend holding exactly one account, for the lookup consistency
/// scenario. `has_account` is derived from `get_account`, so the two can
/// never disagree.
struct SingleAccountLedger {
    account: Account,
}

#[async_trait]
impl NetworkProvider for SingleAccountLedger {
    async fn transaction(
        &self,
        _sender: DeprecatedFeePayerSpec,
        build: TransactionCallback,
    ) -> Result<Transaction> {
        build()?;
        Ok(Transaction::new(
            self.account.public_key,
            0,
            self.account.nonce,
            "",
        ))
    }

    fn current_slot(&self) -> Result<u32> {
        Ok(0)
    }

    fn has_account(&self, public_key: PublicKey, token_id: Option<TokenId>) -> Result<bool> {
        match self.get_account(public_key, token_id) {
            Ok(_) => Ok(true),
            Err(Error::MissingAccount { .. }) => Ok(false),
            Err(other) => Err(other),
        }
    }

    fn get_account(&self, public_key: PublicKey, token_id: Option<TokenId>) -> Result<Account> {
        let token_id = token_id.unwrap_or_default();
        if public_key == self.account.public_key && token_id == self.account.token_id {
            Ok(self.account.clone())
        } else {
            Err(Error::MissingAccount {
                public_key,
                token_id,
            })
        }
    }

    fn get_network_state(&self) -> Result<NetworkState> {
        Ok(NetworkState::default())
    }

    fn get_network_constants(&self) -> NetworkConstants {
        NetworkConstants::default()
    }

    async fn send_transaction(&self, _transaction: Transaction) -> Result<TransactionId> {
        Ok(TransactionId::new("sent"))
    }

    async fn fetch_events(
        &self,
        _public_key: PublicKey,
        _token_id: Option<TokenId>,
        _filter: EventActionFilterOptions,
    ) -> Result<Vec<EventData>> {
        Ok(Vec::new())
    }

    async fn fetch_actions(
        &self,
        _public_key: PublicKey,
        _action_states: ActionStates,
        _token_id: Option<TokenId>,
    ) -> Result<Vec<ActionBatch>> {
        Ok(Vec::new())
    }

    fn get_actions(
        &self,
        _public_key: PublicKey,
        _action_states: ActionStates,
        _token_id: Option<TokenId>,
    ) -> Result<Vec<ActionBatch>> {
        Ok(Vec::new())
    }

    fn proofs_enabled(&self) -> bool {
        false
    }

    fn network_id(&self) -> NetworkId {
        NetworkId::TestNet
    }
}

fn key(byte: u8) -> PublicKey {
    PublicKey::from_bytes(&[byte; 32]).expect("valid key length")
}

#[tokio::test]
#[serial]
async fn operations_forward_arguments_verbatim() {
    let provider = Recording::install();
    let public_key = key(1);
    let token = TokenId::from(Field::from_u64(9));
    let cursor = ActionStates::since(Field::from_u64(3));
    let filter = EventActionFilterOptions {
        from: Some(10),
        to: Some(20),
    };
    let built = Transaction::new(public_key, 42, 7, "hello");

    assert_eq!(mina_provider::current_slot().unwrap(), 12);
    assert!(mina_provider::has_account(public_key, Some(token)).unwrap());
    mina_provider::get_account(public_key, None).unwrap();
    mina_provider::get_network_state().unwrap();
    mina_provider::get_actions(public_key, cursor, Some(token)).unwrap();
    mina_provider::transaction(
        DeprecatedFeePayerSpec::Sender(public_key),
        Box::new(|| Ok(())),
    )
    .await
    .unwrap();
    mina_provider::send_transaction(built.clone()).await.unwrap();
    mina_provider::fetch_events(public_key, Some(token), filter)
        .await
        .unwrap();
    mina_provider::fetch_actions(public_key, cursor, None)
        .await
        .unwrap();

    assert_eq!(
        provider.calls(),
        vec![
            Call::CurrentSlot,
            Call::HasAccount(public_key, Some(token)),
            Call::GetAccount(public_key, None),
            Call::GetNetworkState,
            Call::GetActions(public_key, cursor, Some(token)),
            Call::Transaction(DeprecatedFeePayerSpec::Sender(public_key)),
            Call::SendTransaction(built),
            Call::FetchEvents(public_key, Some(token), filter),
            Call::FetchActions(public_key, cursor, None),
        ]
    );
}

#[test]
#[serial]
fn constants_and_flags_come_from_the_installed_backend() {
    let _provider = Recording::install();
    assert_eq!(mina_provider::get_network_constants(), Recording::CONSTANTS);
    assert_eq!(mina_provider::network_id(), NetworkId::MainNet);
    assert!(!mina_provider::proofs_enabled());

    #[allow(deprecated)]
    let fee = mina_provider::account_creation_fee();
    assert_eq!(fee, Recording::CONSTANTS.account_creation_fee);
}

#[test]
#[serial]
fn second_install_replaces_first_wholesale() {
    let first = Recording::install();
    mina_provider::current_slot().unwrap();

    let second = Recording::install();
    mina_provider::current_slot().unwrap();
    mina_provider::get_network_state().unwrap();

    // Nothing after the second install reaches the first instance.
    assert_eq!(first.calls(), vec![Call::CurrentSlot]);
    assert_eq!(
        second.calls(),
        vec![Call::CurrentSlot, Call::GetNetworkState]
    );
}

#[tokio::test]
#[serial]
async fn build_callback_runs_inside_the_call() {
    let _provider = Recording::install();
    let ran = Arc::new(AtomicBool::new(false));
    let flag = ran.clone();

    mina_provider::transaction(
        DeprecatedFeePayerSpec::Unset,
        Box::new(move || {
            flag.store(true, Ordering::SeqCst);
            Ok(())
        }),
    )
    .await
    .unwrap();

    assert!(ran.load(Ordering::SeqCst));
}

#[tokio::test]
#[serial]
async fn build_callback_errors_propagate_unchanged() {
    let _provider = Recording::install();

    let result = mina_provider::transaction(
        DeprecatedFeePayerSpec::Unset,
        Box::new(|| Err(Error::TransactionBuild("update rejected".to_string()))),
    )
    .await;

    assert_eq!(
        result,
        Err(Error::TransactionBuild("update rejected".to_string()))
    );
}

#[test]
#[serial]
fn has_account_agrees_with_get_account() {
    let known = key(2);
    let unknown = key(3);
    set_active_instance(Arc::new(SingleAccountLedger {
        account: Account::new(known, TokenId::default(), 5, 1_000),
    }));

    assert!(mina_provider::has_account(known, None).unwrap());
    let fetched = mina_provider::get_account(known, None).unwrap();
    assert_eq!(fetched.public_key, known);
    assert_eq!(fetched.nonce, 5);

    assert!(!mina_provider::has_account(unknown, None).unwrap());
    assert_eq!(
        mina_provider::get_account(unknown, None),
        Err(Error::MissingAccount {
            public_key: unknown,
            token_id: TokenId::default(),
        })
    );

    // A known key at an unknown token is still missing.
    let other_token = TokenId::from(Field::from_u64(7));
    assert!(!mina_provider::has_account(known, Some(other_token)).unwrap());
}
