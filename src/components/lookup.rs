//! Arbitrary-address balance lookup form.
//!
//! Lets the user check any address. The result stays local to this form
//! and never touches the connected session.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::NATIVE_SYMBOL;

stylance::import_crate_style!(css, "src/components/lookup.module.css");

/// Balance check for any address.
#[component]
pub fn BalanceLookup() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let manager = ctx.wallet.clone();

    let (input_value, set_input_value) = signal(String::new());
    let (result, set_result) = signal(Option::<String>::None);
    let (busy, set_busy) = signal(false);

    let run_lookup = move || {
        let address = input_value.get_untracked();
        if address.trim().is_empty() || busy.get_untracked() {
            return;
        }
        let manager = manager.clone();
        set_busy.set(true);
        spawn_local(async move {
            match manager.fetch_balance(&address, false).await {
                Ok(balance) => set_result.set(Some(format!("{balance} {NATIVE_SYMBOL}"))),
                Err(_) => set_result.set(None),
            }
            set_busy.set(false);
        });
    };

    let on_click = {
        let run_lookup = run_lookup.clone();
        move |_: leptos::ev::MouseEvent| run_lookup()
    };
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            run_lookup();
        }
    };

    view! {
        <section class=css::panel>
            <h2 class=css::title>"Check any address"</h2>
            <div class=css::form>
                <input
                    class=css::input
                    type="text"
                    placeholder="0x..."
                    prop:value=input_value
                    on:input=move |ev| set_input_value.set(event_target_value(&ev))
                    on:keydown=on_keydown
                />
                <button
                    class=css::button
                    on:click=on_click
                    disabled=move || busy.get()
                >
                    <Icon icon=ic::SEARCH />
                    {move || if busy.get() { "Checking..." } else { "Check" }}
                </button>
            </div>
            {move || {
                result.get().map(|balance| {
                    view! { <p class=css::result>{balance}</p> }
                })
            }}
        </section>
    }
}
