//! UI components built with Leptos.
//!
//! - [`Status`] - header bar with session and network info
//! - [`WalletPanel`] - connect/disconnect controls and the account card
//! - [`BalanceLookup`] - arbitrary-address balance lookup form
//! - [`Toasts`] - transient notification overlay
//! - [`icons`] - centralized icon definitions (change theme here)

pub mod icons;
pub mod lookup;
pub mod status;
pub mod toast;
pub mod wallet;

pub use lookup::BalanceLookup;
pub use status::Status;
pub use toast::Toasts;
pub use wallet::WalletPanel;
