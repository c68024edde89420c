//! Scripted wallet provider for tests.
//!
//! Stands in for the browser-injected provider so session behavior can be
//! exercised natively: scripted accounts, chain id, and balances, per-call
//! failure injection, and call counters for asserting provider traffic.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::str::FromStr;

use alloy_primitives::{Address, U256};

use crate::core::error::WalletError;
use crate::core::provider::{SessionEvents, Subscription, WalletProvider};

/// In-memory [`WalletProvider`] with scripted responses.
#[derive(Clone, Default)]
pub struct MockProvider {
    inner: Rc<RefCell<MockState>>,
}

struct MockState {
    accounts: Vec<String>,
    chain_id_hex: String,
    balances: HashMap<Address, U256>,
    fail_accounts: Option<WalletError>,
    fail_chain: Option<WalletError>,
    fail_balance: Option<WalletError>,
    accounts_calls: usize,
    chain_calls: usize,
    balance_calls: usize,
    subscribe_calls: usize,
    events: Option<SessionEvents>,
}

impl Default for MockState {
    fn default() -> Self {
        Self {
            accounts: Vec::new(),
            chain_id_hex: "0x1".to_string(),
            balances: HashMap::new(),
            fail_accounts: None,
            fail_chain: None,
            fail_balance: None,
            accounts_calls: 0,
            chain_calls: 0,
            balance_calls: 0,
            subscribe_calls: 0,
            events: None,
        }
    }
}

impl MockProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_accounts(&self, accounts: &[&str]) {
        self.inner.borrow_mut().accounts = accounts.iter().map(|a| a.to_string()).collect();
    }

    pub fn set_chain(&self, hex: &str) {
        self.inner.borrow_mut().chain_id_hex = hex.to_string();
    }

    pub fn set_balance(&self, address: &str, wei: U256) {
        let address = Address::from_str(address).expect("mock balance address must be valid");
        self.inner.borrow_mut().balances.insert(address, wei);
    }

    /// Fail the next `request_accounts` call with `error`.
    pub fn fail_accounts_with(&self, error: WalletError) {
        self.inner.borrow_mut().fail_accounts = Some(error);
    }

    /// Fail the next `chain_id` call with `error`.
    pub fn fail_chain_with(&self, error: WalletError) {
        self.inner.borrow_mut().fail_chain = Some(error);
    }

    /// Fail the next `balance_of` call with `error`.
    pub fn fail_balance_with(&self, error: WalletError) {
        self.inner.borrow_mut().fail_balance = Some(error);
    }

    pub fn accounts_calls(&self) -> usize {
        self.inner.borrow().accounts_calls
    }

    pub fn chain_calls(&self) -> usize {
        self.inner.borrow().chain_calls
    }

    pub fn balance_calls(&self) -> usize {
        self.inner.borrow().balance_calls
    }

    pub fn subscribe_calls(&self) -> usize {
        self.inner.borrow().subscribe_calls
    }

    /// Whether change listeners are currently registered.
    pub fn is_subscribed(&self) -> bool {
        self.inner.borrow().events.is_some()
    }
}

impl WalletProvider for MockProvider {
    async fn request_accounts(&self) -> Result<Vec<String>, WalletError> {
        let mut state = self.inner.borrow_mut();
        state.accounts_calls += 1;
        if let Some(error) = state.fail_accounts.take() {
            return Err(error);
        }
        Ok(state.accounts.clone())
    }

    async fn chain_id(&self) -> Result<String, WalletError> {
        let mut state = self.inner.borrow_mut();
        state.chain_calls += 1;
        if let Some(error) = state.fail_chain.take() {
            return Err(error);
        }
        Ok(state.chain_id_hex.clone())
    }

    async fn balance_of(&self, address: Address) -> Result<U256, WalletError> {
        let mut state = self.inner.borrow_mut();
        state.balance_calls += 1;
        if let Some(error) = state.fail_balance.take() {
            return Err(error);
        }
        Ok(state.balances.get(&address).copied().unwrap_or(U256::ZERO))
    }

    fn subscribe(&self, events: SessionEvents) -> Result<Subscription, WalletError> {
        let mut state = self.inner.borrow_mut();
        state.subscribe_calls += 1;
        state.events = Some(events);

        let inner = Rc::clone(&self.inner);
        Ok(Subscription::new(move || {
            inner.borrow_mut().events = None;
        }))
    }
}
