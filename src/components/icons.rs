//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuCoins as Balance, LuGlobe as Network, LuLogOut as Disconnect, LuSearch as Search,
        LuUser as User, LuWallet as Wallet, LuX as Close,
    };
}

mod bootstrap {
    pub use icondata::{
        BsBoxArrowRight as Disconnect, BsCoin as Balance, BsGlobe as Network, BsPerson as User,
        BsSearch as Search, BsWallet2 as Wallet, BsXLg as Close,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(BALANCE, Balance);
themed_icon!(CLOSE, Close);
themed_icon!(DISCONNECT, Disconnect);
themed_icon!(NETWORK, Network);
themed_icon!(SEARCH, Search);
themed_icon!(USER, User);
themed_icon!(WALLET, Wallet);
