//! Wallet connection panel.
//!
//! Connect/disconnect controls plus the connected account card showing
//! address, network, and native balance.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::NATIVE_SYMBOL;
use crate::core::provider::{self, chain_name};
use crate::utils::format_eth_address;

stylance::import_crate_style!(css, "src/components/wallet.module.css");

/// Wallet session panel: connect prompt or connected account card.
#[component]
pub fn WalletPanel() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let session = ctx.wallet.session();

    let connected = Signal::derive(move || session.with(|s| s.is_connected()));

    view! {
        <section class=css::panel>
            {move || {
                if connected.get() {
                    view! { <AccountCard /> }.into_any()
                } else {
                    view! { <ConnectPrompt /> }.into_any()
                }
            }}
        </section>
    }
}

/// Connect button shown while no account is connected.
#[component]
fn ConnectPrompt() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let manager = ctx.wallet.clone();
    let session = manager.session();

    let connecting = Signal::derive(move || session.with(|s| s.connecting));

    let on_connect = move |_: leptos::ev::MouseEvent| {
        let manager = manager.clone();
        spawn_local(async move {
            let _ = manager.connect().await;
        });
    };

    view! {
        <div class=css::prompt>
            <p class=css::hint>
                "Connect a browser wallet to see your account, network, and balance."
            </p>
            <button
                class=css::primaryButton
                on:click=on_connect
                disabled=move || connecting.get()
            >
                <Icon icon=ic::WALLET />
                {move || if connecting.get() { "Connecting..." } else { "Connect Wallet" }}
            </button>
            {move || {
                (!provider::is_available()).then(|| {
                    view! {
                        <p class=css::warning>"No wallet detected in this browser."</p>
                    }
                })
            }}
        </div>
    }
}

/// Connected account details with a disconnect control.
#[component]
fn AccountCard() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let manager = ctx.wallet.clone();
    let session = manager.session();

    let address = Signal::derive(move || session.with(|s| s.address.clone().unwrap_or_default()));
    let network = Signal::derive(move || {
        session.with(|s| {
            s.network_id
                .map(|id| format!("{} (chain_id={id})", chain_name(id)))
                .unwrap_or_else(|| "unknown".to_string())
        })
    });
    let balance = Signal::derive(move || {
        session.with(|s| {
            s.balance
                .clone()
                .map(|b| format!("{b} {NATIVE_SYMBOL}"))
                .unwrap_or_else(|| "...".to_string())
        })
    });

    let on_disconnect = move |_: leptos::ev::MouseEvent| manager.disconnect();

    view! {
        <div class=css::card>
            <div class=css::row>
                <span class=css::rowLabel>
                    <Icon icon=ic::USER />
                    "Account"
                </span>
                <span class=css::rowValue title=move || address.get()>
                    {move || format_eth_address(&address.get())}
                </span>
            </div>

            <div class=css::row>
                <span class=css::rowLabel>
                    <Icon icon=ic::NETWORK />
                    "Network"
                </span>
                <span class=css::rowValue>{network}</span>
            </div>

            <div class=css::row>
                <span class=css::rowLabel>
                    <Icon icon=ic::BALANCE />
                    "Balance"
                </span>
                <span class=css::rowValue>{balance}</span>
            </div>

            <button class=css::secondaryButton on:click=on_disconnect>
                <Icon icon=ic::DISCONNECT />
                "Disconnect"
            </button>
        </div>
    }
}
