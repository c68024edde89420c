//! Utility modules for DOM access and display formatting.
//!
//! Provides:
//! - [`dom`] - safe access to browser APIs
//! - [`format_eth_address`], [`format_native_balance`] - display helpers

pub mod dom;
mod format;

pub use format::{format_eth_address, format_native_balance};
