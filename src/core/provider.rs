//! EIP-1193 wallet provider access.
//!
//! Defines the [`WalletProvider`] capability trait for the four provider
//! operations the session manager needs, plus [`InjectedProvider`], the
//! concrete adapter over the `window.ethereum` object injected by
//! MetaMask-compatible wallets. Interop goes through the Reflect API, so
//! the provider object stays duck-typed on the JavaScript side while the
//! Rust side sees a typed capability. A missing `window.ethereum` is a
//! first-class [`WalletError::NotInstalled`], not a null check.

use std::rc::Rc;

use alloy_primitives::{Address, U256};
use js_sys::{Array, Function, Object, Promise, Reflect};
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen_futures::JsFuture;

use crate::core::error::WalletError;
use crate::utils::dom;

// ============================================================================
// Capability Trait
// ============================================================================

/// The wallet-provider operations the session manager consumes.
///
/// Implemented by [`InjectedProvider`] for real browser wallets and by the
/// scripted mock provider in tests.
pub trait WalletProvider {
    /// Request account authorization. Suspends until the user approves or
    /// rejects in the external wallet UI.
    async fn request_accounts(&self) -> Result<Vec<String>, WalletError>;

    /// Current chain id in its native hexadecimal encoding, e.g. `"0x1"`.
    async fn chain_id(&self) -> Result<String, WalletError>;

    /// Native-currency balance of `address` in wei.
    async fn balance_of(&self, address: Address) -> Result<U256, WalletError>;

    /// Register the account and chain change listeners. The returned
    /// [`Subscription`] deregisters them when cancelled or dropped.
    fn subscribe(&self, events: SessionEvents) -> Result<Subscription, WalletError>;
}

/// Callbacks invoked when the provider reports a session change.
pub struct SessionEvents {
    /// New set of authorized accounts; empty means externally disconnected.
    pub on_accounts_changed: Rc<dyn Fn(Vec<String>)>,
    /// New chain id as a hex string (e.g. "0x89").
    pub on_chain_changed: Rc<dyn Fn(String)>,
}

/// Handle to a live provider event subscription.
///
/// Cancelling (or dropping) removes the listeners, so handlers can never
/// fire against a torn-down owner.
pub struct Subscription {
    cleanup: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(cleanup: impl FnOnce() + 'static) -> Self {
        Self {
            cleanup: Some(Box::new(cleanup)),
        }
    }

    /// Deregister the listeners now.
    pub fn cancel(mut self) {
        self.run_cleanup();
    }

    fn run_cleanup(&mut self) {
        if let Some(cleanup) = self.cleanup.take() {
            cleanup();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.run_cleanup();
    }
}

// ============================================================================
// Chain Helpers
// ============================================================================

/// Parse a hex-encoded chain id ("0x89" or bare "89" hex) to decimal.
pub fn parse_chain_id(hex: &str) -> Option<u64> {
    let digits = hex.trim().trim_start_matches("0x");
    if digits.is_empty() {
        return None;
    }
    u64::from_str_radix(digits, 16).ok()
}

/// Convert chain ID to network name
pub fn chain_name(chain_id: u64) -> &'static str {
    match chain_id {
        1 => "Ethereum",
        11155111 => "Sepolia",
        17000 => "Holesky",
        42161 => "Arbitrum",
        10 => "Optimism",
        8453 => "Base",
        137 => "Polygon",
        56 => "BNB Chain",
        43114 => "Avalanche",
        324 => "zkSync Era",
        59144 => "Linea",
        534352 => "Scroll",
        _ => "Unknown",
    }
}

// ============================================================================
// Injected Provider Adapter
// ============================================================================

/// Get the window.ethereum object injected by MetaMask.
fn injected_object() -> Result<Object, WalletError> {
    let window = dom::window().ok_or(WalletError::NoWindow)?;
    Reflect::get(&window, &"ethereum".into())
        .ok()
        .and_then(|v| v.dyn_into::<Object>().ok())
        .ok_or(WalletError::NotInstalled)
}

/// Check if MetaMask (or compatible wallet) is installed
pub fn is_available() -> bool {
    injected_object().is_ok()
}

/// Look up a named function on the provider object.
fn provider_fn(ethereum: &Object, name: &str) -> Result<Function, WalletError> {
    Reflect::get(ethereum, &name.into())
        .map_err(|_| WalletError::RequestFailed)?
        .dyn_into::<Function>()
        .map_err(|_| WalletError::RequestFailed)
}

/// Extract the human-readable message from an EIP-1193 provider error.
fn error_message(value: &JsValue) -> String {
    Reflect::get(value, &"message".into())
        .ok()
        .and_then(|m| m.as_string())
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Helper to call ethereum.request({ method, params })
async fn request(method: &str, params: Option<Array>) -> Result<JsValue, WalletError> {
    let ethereum = injected_object()?;

    let args = Object::new();
    Reflect::set(&args, &"method".into(), &method.into())
        .map_err(|_| WalletError::RequestFailed)?;
    if let Some(params) = params {
        Reflect::set(&args, &"params".into(), &params).map_err(|_| WalletError::RequestFailed)?;
    }

    let request_fn = provider_fn(&ethereum, "request")?;
    let promise: Promise = request_fn
        .call1(&ethereum, &args)
        .map_err(|_| WalletError::RequestFailed)?
        .into();

    JsFuture::from(promise)
        .await
        .map_err(|e| WalletError::Rejected(error_message(&e)))
}

/// [`WalletProvider`] over the browser-injected `window.ethereum` object.
///
/// Stateless: the injected object is looked up on every call, so a wallet
/// installed or removed mid-session is picked up without a reload.
#[derive(Clone, Copy, Debug, Default)]
pub struct InjectedProvider;

impl InjectedProvider {
    pub fn new() -> Self {
        Self
    }
}

impl WalletProvider for InjectedProvider {
    async fn request_accounts(&self) -> Result<Vec<String>, WalletError> {
        let result = request("eth_requestAccounts", None).await?;
        Ok(Array::from(&result)
            .iter()
            .filter_map(|v| v.as_string())
            .collect())
    }

    async fn chain_id(&self) -> Result<String, WalletError> {
        let result = request("eth_chainId", None).await?;
        result
            .as_string()
            .ok_or_else(|| WalletError::InvalidResponse("chain id is not a string".to_string()))
    }

    async fn balance_of(&self, address: Address) -> Result<U256, WalletError> {
        let params = Array::new();
        params.push(&JsValue::from_str(&format!("{address:#x}")));
        params.push(&JsValue::from_str("latest"));

        let result = request("eth_getBalance", Some(params)).await?;
        let hex = result
            .as_string()
            .ok_or_else(|| WalletError::InvalidResponse("balance is not a string".to_string()))?;
        U256::from_str_radix(hex.trim_start_matches("0x"), 16)
            .map_err(|_| WalletError::InvalidResponse(format!("bad balance value: {hex}")))
    }

    fn subscribe(&self, events: SessionEvents) -> Result<Subscription, WalletError> {
        let ethereum = injected_object()?;
        let on_fn = provider_fn(&ethereum, "on")?;

        let accounts_cb = events.on_accounts_changed;
        let accounts_closure = Closure::wrap(Box::new(move |accounts: JsValue| {
            let accounts = Array::from(&accounts)
                .iter()
                .filter_map(|v| v.as_string())
                .collect();
            accounts_cb(accounts);
        }) as Box<dyn Fn(JsValue)>);

        let chain_cb = events.on_chain_changed;
        let chain_closure = Closure::wrap(Box::new(move |chain_id: JsValue| {
            if let Some(hex) = chain_id.as_string() {
                chain_cb(hex);
            }
        }) as Box<dyn Fn(JsValue)>);

        on_fn
            .call2(&ethereum, &"accountsChanged".into(), accounts_closure.as_ref())
            .map_err(|_| WalletError::RequestFailed)?;
        on_fn
            .call2(&ethereum, &"chainChanged".into(), chain_closure.as_ref())
            .map_err(|_| WalletError::RequestFailed)?;

        // The closures move into the cleanup so they outlive the listeners
        // and are only released after removeListener runs.
        Ok(Subscription::new(move || {
            if let Ok(remove_fn) = provider_fn(&ethereum, "removeListener") {
                let _ = remove_fn.call2(
                    &ethereum,
                    &"accountsChanged".into(),
                    accounts_closure.as_ref(),
                );
                let _ = remove_fn.call2(&ethereum, &"chainChanged".into(), chain_closure.as_ref());
            }
        }))
    }
}
