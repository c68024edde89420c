//! Wallet session manager.
//!
//! Owns the [`WalletSession`] state and keeps it consistent with the
//! external wallet provider: the connect/disconnect/balance operations
//! triggered by the UI plus the provider's own asynchronous account and
//! chain change events. All mutation of the session goes through this
//! manager; the display layer only reads the signal.
//!
//! Everything runs on the single UI thread with cooperative suspension,
//! so there is no locking. Racing fetches resolve last-writer-wins on
//! `balance`/`network_id`; a session balance write is additionally
//! discarded when the session has moved to a different account while the
//! fetch was in flight.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use send_wrapper::SendWrapper;

use crate::core::address::parse_address;
use crate::core::error::WalletError;
use crate::core::notify::NoticeFeed;
use crate::core::provider::{SessionEvents, Subscription, WalletProvider, parse_chain_id};
use crate::models::WalletSession;
use crate::utils::format_native_balance;

/// Exclusive writer of the wallet session state.
///
/// Cheap to clone; clones share the same session signal, notice feed, and
/// provider subscription.
#[derive(Clone)]
pub struct SessionManager<P> {
    provider: P,
    session: RwSignal<WalletSession>,
    notices: NoticeFeed,
    subscription: SendWrapper<Rc<RefCell<Option<Subscription>>>>,
}

impl<P: WalletProvider + Clone + 'static> SessionManager<P> {
    pub fn new(provider: P, notices: NoticeFeed) -> Self {
        Self {
            provider,
            session: RwSignal::new(WalletSession::default()),
            notices,
            subscription: SendWrapper::new(Rc::new(RefCell::new(None))),
        }
    }

    /// Read handle to the session state for the display layer.
    pub fn session(&self) -> RwSignal<WalletSession> {
        self.session
    }

    /// Request wallet connection (shows the wallet's approval popup).
    ///
    /// A redundant call while already connected, or while another connect
    /// is in flight, resolves without touching the provider or the
    /// session. May otherwise suspend indefinitely awaiting user approval.
    pub async fn connect(&self) -> Result<(), WalletError> {
        if self
            .session
            .with_untracked(|s| s.connecting || s.is_connected())
        {
            return Ok(());
        }

        self.session.update(|s| s.connecting = true);
        let result = self.establish().await;
        // restored on every path so a failed connect never leaves the UI
        // stuck in "connecting"
        self.session.update(|s| s.connecting = false);

        if let Err(error) = &result {
            match error {
                WalletError::NoWindow | WalletError::NotInstalled => {
                    self.notices.error(error.to_string());
                }
                _ => self.notices.error(format!("Failed to connect: {error}")),
            }
        }
        result
    }

    async fn establish(&self) -> Result<(), WalletError> {
        let accounts = self.provider.request_accounts().await?;
        let address = accounts.into_iter().next().ok_or(WalletError::NoAccount)?;

        let chain_hex = self.provider.chain_id().await?;
        let network_id =
            parse_chain_id(&chain_hex).ok_or(WalletError::BadChainId(chain_hex))?;

        self.session.update(|s| {
            s.address = Some(address.clone());
            s.network_id = Some(network_id);
        });
        self.notices
            .success(format!("Connected: {address} on network {network_id}"));

        // a failed balance fetch surfaces through its own notice and does
        // not fail the connect
        let _ = self.fetch_balance(&address, true).await;
        Ok(())
    }

    /// Fetch the native balance of `input` and return it formatted.
    ///
    /// With `is_session_account` the result is also written to the
    /// session, unless the session has moved to a different account while
    /// the fetch was in flight (a stale result is discarded rather than
    /// overwriting fresher state). Without it the session is never
    /// touched, so checking an arbitrary address cannot corrupt the
    /// connected wallet's displayed balance.
    pub async fn fetch_balance(
        &self,
        input: &str,
        is_session_account: bool,
    ) -> Result<String, WalletError> {
        let address = match parse_address(input) {
            Ok(address) => address,
            Err(error) => {
                self.notices.error(error.to_string());
                return Err(error);
            }
        };

        match self.provider.balance_of(address).await {
            Ok(wei) => {
                let formatted = format_native_balance(wei);
                if is_session_account {
                    let value = formatted.clone();
                    let fetched_for = input.trim().to_string();
                    self.session.update(|s| {
                        if s.address
                            .as_deref()
                            .is_some_and(|a| a.eq_ignore_ascii_case(&fetched_for))
                        {
                            s.balance = Some(value);
                        }
                    });
                }
                Ok(formatted)
            }
            Err(error @ (WalletError::NoWindow | WalletError::NotInstalled)) => {
                self.notices.error(error.to_string());
                Err(error)
            }
            Err(error) => {
                let error = WalletError::BalanceFetch(error.to_string());
                self.notices.error(error.to_string());
                Err(error)
            }
        }
    }

    /// Clear the local session state.
    ///
    /// Idempotent; the injected-wallet model has no provider-side
    /// disconnect, so no provider call is made.
    pub fn disconnect(&self) {
        self.session.update(|s| s.clear());
        self.notices.info("Disconnected");
    }

    /// Provider notification: the set of authorized accounts changed.
    ///
    /// The first account is authoritative; an empty set means the wallet
    /// disconnected us from its own UI.
    pub async fn handle_accounts_changed(&self, accounts: Vec<String>) {
        match accounts.into_iter().next() {
            Some(address) => {
                self.session.update(|s| s.address = Some(address.clone()));
                self.notices.info(format!("Account changed to: {address}"));
                let _ = self.fetch_balance(&address, true).await;
            }
            None => {
                self.disconnect();
                self.notices.error(WalletError::NoAccount.to_string());
            }
        }
    }

    /// Provider notification: the wallet switched chains.
    ///
    /// The balance is chain-scoped, so a connected account's balance is
    /// refetched after the switch.
    pub async fn handle_chain_changed(&self, chain_id_hex: String) {
        let Some(network_id) = parse_chain_id(&chain_id_hex) else {
            self.notices
                .error(WalletError::BadChainId(chain_id_hex).to_string());
            return;
        };

        self.session.update(|s| s.network_id = Some(network_id));
        self.notices.info(format!("Network changed to: {network_id}"));

        let address = self.session.with_untracked(|s| s.address.clone());
        if let Some(address) = address {
            let _ = self.fetch_balance(&address, true).await;
        }
    }

    /// Register the provider change listeners.
    ///
    /// Idempotent while a subscription is live; pair with
    /// [`stop`](Self::stop) on teardown. When no provider is injected
    /// there is nothing to observe and the call is a no-op.
    pub fn start(&self) {
        if self.subscription.borrow().is_some() {
            return;
        }

        let accounts_manager = self.clone();
        let chain_manager = self.clone();
        let events = SessionEvents {
            on_accounts_changed: Rc::new(move |accounts| {
                let manager = accounts_manager.clone();
                spawn_local(async move { manager.handle_accounts_changed(accounts).await });
            }),
            on_chain_changed: Rc::new(move |chain_id_hex| {
                let manager = chain_manager.clone();
                spawn_local(async move { manager.handle_chain_changed(chain_id_hex).await });
            }),
        };

        if let Ok(subscription) = self.provider.subscribe(events) {
            *self.subscription.borrow_mut() = Some(subscription);
        }
    }

    /// Deregister the provider change listeners.
    pub fn stop(&self) {
        if let Some(subscription) = self.subscription.borrow_mut().take() {
            subscription.cancel();
        }
    }
}
