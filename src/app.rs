//! Root application module.
//!
//! Contains the main App component, AppContext definition, and
//! application-level setup logic following Leptos conventions.

use leptos::prelude::*;

use crate::components::{BalanceLookup, Status, Toasts, WalletPanel};
use crate::core::notify::NoticeFeed;
use crate::core::provider::InjectedProvider;
use crate::core::session::SessionManager;

stylance::import_crate_style!(css, "src/app.module.css");

/// Session manager over the browser-injected provider.
pub type WalletManager = SessionManager<InjectedProvider>;

/// Application-wide reactive context.
///
/// This context is provided at the root of the component tree and can be
/// accessed from any child component using `use_context::<AppContext>()`.
#[derive(Clone)]
pub struct AppContext {
    /// Wallet session manager (exclusive writer of the session state).
    pub wallet: WalletManager,
    /// Toast notification feed.
    pub notices: NoticeFeed,
}

impl AppContext {
    /// Creates a new application context with an empty session.
    pub fn new() -> Self {
        let notices = NoticeFeed::new();
        Self {
            wallet: SessionManager::new(InjectedProvider::new(), notices),
            notices,
        }
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Root application component with error boundary.
///
/// This component:
/// - Creates and provides the global AppContext
/// - Pairs provider event registration with teardown
/// - Wraps the app in an ErrorBoundary for graceful error handling
#[component]
pub fn App() -> impl IntoView {
    // Create and provide application context
    let ctx = AppContext::new();
    provide_context(ctx.clone());

    // Provider listeners live exactly as long as the app.
    ctx.wallet.start();
    on_cleanup({
        let wallet = ctx.wallet.clone();
        move || wallet.stop()
    });

    view! {
        <ErrorBoundary fallback=|errors| {
            view! {
                <div class=css::errorScreen>
                    <h1>"Something went wrong"</h1>
                    <p>"An unexpected error occurred. Please try reloading the page."</p>
                    <ul>
                        {move || {
                            errors
                                .get()
                                .into_iter()
                                .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                                .collect::<Vec<_>>()
                        }}
                    </ul>
                </div>
            }
        }>
            <div class=css::shell>
                <Status />
                <main class=css::content>
                    <WalletPanel />
                    <BalanceLookup />
                </main>
                <Toasts />
            </div>
        </ErrorBoundary>
    }
}
