//! End-to-end session flows against the scripted mock provider.
//!
//! Run with `cargo test --features mock`.

use alloy_primitives::U256;
use leptos::prelude::*;

use ethlens::core::mock::MockProvider;
use ethlens::core::{NoticeFeed, SessionManager};
use ethlens::models::NoticeKind;

const ACCOUNT_A: &str = "0xd8da6bf26964af9d7eed9e03e53415d37aa96045";
const ACCOUNT_B: &str = "0xab5801a7d398351b8be11c439e05c5b3259aec9b";

fn wei(milli_eth: u64) -> U256 {
    U256::from(milli_eth) * U256::from(10u64).pow(U256::from(15))
}

fn setup(provider: &MockProvider) -> (Owner, SessionManager<MockProvider>, NoticeFeed) {
    let owner = Owner::new();
    owner.set();
    let notices = NoticeFeed::new();
    (
        owner,
        SessionManager::new(provider.clone(), notices),
        notices,
    )
}

#[tokio::test]
async fn connect_scenario_mirrors_the_provider() {
    let provider = MockProvider::new();
    provider.set_accounts(&[ACCOUNT_A]);
    provider.set_chain("0x1");
    provider.set_balance(ACCOUNT_A, wei(2_500));
    let (_owner, manager, notices) = setup(&provider);

    manager.connect().await.unwrap();

    let session = manager.session().get_untracked();
    assert_eq!(session.address.as_deref(), Some(ACCOUNT_A));
    assert_eq!(session.network_id, Some(1));
    assert_eq!(session.balance.as_deref(), Some("2.5"));
    assert!(!session.connecting);

    let notices = notices.notices().get_untracked();
    assert!(
        notices
            .iter()
            .any(|n| n.kind == NoticeKind::Success && n.message.contains(ACCOUNT_A))
    );
}

#[tokio::test]
async fn wallet_side_account_switch_follows_the_provider() {
    let provider = MockProvider::new();
    provider.set_accounts(&[ACCOUNT_A]);
    provider.set_chain("0x1");
    provider.set_balance(ACCOUNT_A, wei(1_000));
    provider.set_balance(ACCOUNT_B, wei(4_250));
    let (_owner, manager, _notices) = setup(&provider);
    manager.connect().await.unwrap();

    // the wallet switches accounts from its own UI
    manager
        .handle_accounts_changed(vec![ACCOUNT_B.to_string(), ACCOUNT_A.to_string()])
        .await;

    let session = manager.session().get_untracked();
    assert_eq!(session.address.as_deref(), Some(ACCOUNT_B));
    assert_eq!(session.balance.as_deref(), Some("4.25"));

    // then switches to a chain where the account holds nothing
    provider.set_balance(ACCOUNT_B, U256::ZERO);
    manager.handle_chain_changed("0x89".to_string()).await;

    let session = manager.session().get_untracked();
    assert_eq!(session.network_id, Some(137));
    assert_eq!(session.balance.as_deref(), Some("0.0"));
}

#[tokio::test]
async fn wallet_side_disconnect_resets_everything() {
    let provider = MockProvider::new();
    provider.set_accounts(&[ACCOUNT_A]);
    provider.set_balance(ACCOUNT_A, wei(1_000));
    let (_owner, manager, notices) = setup(&provider);
    manager.connect().await.unwrap();

    manager.handle_accounts_changed(Vec::new()).await;

    let session = manager.session().get_untracked();
    assert_eq!(session.address, None);
    assert_eq!(session.network_id, None);
    assert_eq!(session.balance, None);
    assert!(!session.connecting);

    let notices = notices.notices().get_untracked();
    assert!(
        notices
            .iter()
            .any(|n| n.kind == NoticeKind::Error && n.message.contains("No account"))
    );
}

#[tokio::test]
async fn listener_registration_is_paired_and_idempotent() {
    let provider = MockProvider::new();
    let (_owner, manager, _notices) = setup(&provider);

    assert!(!provider.is_subscribed());

    manager.start();
    assert!(provider.is_subscribed());
    assert_eq!(provider.subscribe_calls(), 1);

    // redundant start does not stack listeners
    manager.start();
    assert_eq!(provider.subscribe_calls(), 1);

    manager.stop();
    assert!(!provider.is_subscribed());

    // a fresh start after teardown re-registers
    manager.start();
    assert!(provider.is_subscribed());
    assert_eq!(provider.subscribe_calls(), 2);
}

#[tokio::test]
async fn lookup_after_disconnect_still_works() {
    let provider = MockProvider::new();
    provider.set_accounts(&[ACCOUNT_A]);
    provider.set_balance(ACCOUNT_A, wei(1_000));
    provider.set_balance(ACCOUNT_B, wei(7_000));
    let (_owner, manager, _notices) = setup(&provider);
    manager.connect().await.unwrap();
    manager.disconnect();

    let balance = manager.fetch_balance(ACCOUNT_B, false).await.unwrap();

    assert_eq!(balance, "7.0");
    assert_eq!(manager.session().get_untracked().balance, None);
}
