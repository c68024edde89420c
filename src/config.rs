//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name displayed in the header.
pub const APP_NAME: &str = "ethlens";

/// Application version.
pub const APP_VERSION: &str = "0.1.0";

// =============================================================================
// Wallet Configuration
// =============================================================================

/// Ticker symbol of the chain's native currency.
pub const NATIVE_SYMBOL: &str = "ETH";

/// Ethereum address display lengths (`0x1234...5678`).
pub mod eth_address {
    /// Full length of a hex-encoded address including the `0x` prefix.
    pub const FULL_LEN: usize = 42;
    /// Characters kept from the front when shortening.
    pub const PREFIX_LEN: usize = 6;
    /// Offset of the trailing characters kept when shortening.
    pub const SUFFIX_START: usize = 38;
}

// =============================================================================
// Notification Configuration
// =============================================================================

/// Maximum number of toasts kept on screen; older ones are dropped.
pub const MAX_NOTICES: usize = 5;

/// Toast auto-dismiss delay in milliseconds.
pub const NOTICE_DURATION_MS: u32 = 5_000;

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
/// Change this value to switch icon styles globally.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;
