//! Header bar component.
//!
//! Displays the session owner and the current network.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::APP_NAME;
use crate::core::provider::chain_name;

stylance::import_crate_style!(css, "src/components/status.module.css");

/// Header bar with session and network information.
#[component]
pub fn Status() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let session = ctx.wallet.session();

    // Derived signals for reactive display
    let session_name = Signal::derive(move || session.with(|s| s.display_name()));
    let network_name = Signal::derive(move || {
        session.with(|s| {
            s.network_id
                .map(|id| format!("{} ({id})", chain_name(id)))
                .unwrap_or_else(|| "—".to_string())
        })
    });

    view! {
        <header class=css::bar>
            <span class=css::brand>{APP_NAME}</span>

            <div class=css::section>
                <span class=css::label>
                    <span class=css::labelIcon><Icon icon=ic::USER /></span>
                    <span class=css::value>{session_name}</span>
                </span>

                <span class=css::labelPurple>
                    <span class=css::labelIcon><Icon icon=ic::NETWORK /></span>
                    <span class=css::value>{network_name}</span>
                </span>
            </div>
        </header>
    }
}
