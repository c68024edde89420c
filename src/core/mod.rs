//! Core wallet logic for the application.
//!
//! This module provides:
//! - [`WalletProvider`] capability trait and the [`InjectedProvider`] adapter
//! - [`SessionManager`] owning the wallet session state
//! - [`parse_address`] syntactic address validation
//! - [`NoticeFeed`] toast notification sink

pub mod address;
pub mod error;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
pub mod notify;
pub mod provider;
pub mod session;

pub use address::parse_address;
pub use error::WalletError;
pub use notify::NoticeFeed;
pub use provider::{InjectedProvider, WalletProvider};
pub use session::SessionManager;
