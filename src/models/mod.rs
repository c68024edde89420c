//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`WalletSession`] - Web3 wallet connection state
//! - [`Notice`], [`NoticeKind`] - toast notification payloads

mod notice;
mod session;

pub use notice::{Notice, NoticeKind};
pub use session::WalletSession;
