//! ethlens: a minimal browser dapp for watching a wallet session.
//!
//! Connects a browser-injected (EIP-1193) wallet, mirrors its account,
//! network, and native balance into reactive UI state, and lets the user
//! look up the balance of any address without disturbing the session.

pub mod app;
pub mod components;
pub mod config;
pub mod core;
pub mod models;
pub mod utils;
