//! Browser smoke tests, run with `wasm-pack test --headless --chrome`.
//!
//! The headless browser has no injected wallet, so these exercise the
//! not-installed path of the provider shim.

#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

use ethlens::core::error::WalletError;
use ethlens::core::provider::{self, InjectedProvider, WalletProvider};

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn no_provider_is_detected() {
    assert!(!provider::is_available());
}

#[wasm_bindgen_test]
async fn requests_without_a_wallet_fail_cleanly() {
    let provider = InjectedProvider;
    assert_eq!(
        provider.request_accounts().await,
        Err(WalletError::NotInstalled)
    );
}
