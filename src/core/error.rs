//! Custom error types for the application.
//!
//! Provides structured error handling with meaningful error messages for
//! wallet connection, validation, and provider request failures. All
//! variants are recoverable: every operation leaves the session either
//! unchanged or fully reset, and the user may always retry.

use std::fmt;

/// Wallet-related errors for MetaMask/EIP-1193 integration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalletError {
    /// Browser window not available
    NoWindow,
    /// MetaMask or compatible wallet not installed
    NotInstalled,
    /// Failed to create or dispatch a provider request
    RequestFailed,
    /// Request to wallet was rejected by the user or the provider
    Rejected(String),
    /// Provider returned no accounts
    NoAccount,
    /// Input is not a well-formed Ethereum address
    InvalidAddress(String),
    /// Provider reported a chain id that is not valid hex
    BadChainId(String),
    /// Balance query failed
    BalanceFetch(String),
    /// Provider returned a payload of an unexpected shape
    InvalidResponse(String),
}

impl fmt::Display for WalletError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoWindow => write!(f, "Browser window not available"),
            Self::NotInstalled => write!(
                f,
                "No Ethereum wallet detected. Please install MetaMask!"
            ),
            Self::RequestFailed => write!(f, "Failed to create wallet request"),
            Self::Rejected(msg) => write!(f, "Wallet request rejected: {}", msg),
            Self::NoAccount => write!(f, "No account connected"),
            Self::InvalidAddress(addr) => write!(f, "Invalid Ethereum address: {}", addr),
            Self::BadChainId(hex) => write!(f, "Unrecognized chain id: {}", hex),
            Self::BalanceFetch(msg) => write!(f, "Failed to fetch balance: {}", msg),
            Self::InvalidResponse(msg) => write!(f, "Unexpected provider response: {}", msg),
        }
    }
}

impl std::error::Error for WalletError {}
