use crate::utils::format_eth_address;

/// Wallet connection state mirrored from the injected provider.
///
/// Mutated only by the session manager's operations; the display layer
/// holds shared read access through the manager's signal.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WalletSession {
    /// Currently connected account, `None` when disconnected.
    pub address: Option<String>,
    /// Decimal chain id of the connected provider.
    pub network_id: Option<u64>,
    /// Native-currency balance of `address` as of the last successful
    /// session fetch, formatted as a decimal string.
    pub balance: Option<String>,
    /// True only while a connect call is in flight.
    pub connecting: bool,
}

impl WalletSession {
    /// Check if a wallet account is connected.
    pub fn is_connected(&self) -> bool {
        self.address.is_some()
    }

    /// Reset to the disconnected state.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Format the session owner for display (0x1234...5678).
    pub fn display_name(&self) -> String {
        match &self.address {
            Some(address) => format_eth_address(address),
            None if self.connecting => "connecting...".to_string(),
            None => "guest".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state() {
        let session = WalletSession::default();
        assert!(!session.is_connected());
        assert!(!session.connecting);
        assert_eq!(session.network_id, None);
        assert_eq!(session.balance, None);
        assert_eq!(session.display_name(), "guest");
    }

    #[test]
    fn test_connecting_state() {
        let session = WalletSession {
            connecting: true,
            ..Default::default()
        };
        assert!(!session.is_connected());
        assert_eq!(session.display_name(), "connecting...");
    }

    #[test]
    fn test_connected_state() {
        let session = WalletSession {
            address: Some("0x1234567890123456789012345678901234567890".to_string()),
            network_id: Some(1),
            balance: Some("2.5".to_string()),
            connecting: false,
        };
        assert!(session.is_connected());
        assert_eq!(session.display_name(), "0x1234...7890");
    }

    #[test]
    fn test_connected_short_address() {
        let session = WalletSession {
            address: Some("0x1234".to_string()),
            ..Default::default()
        };
        assert_eq!(session.display_name(), "0x1234");
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut session = WalletSession {
            address: Some("0x1234567890123456789012345678901234567890".to_string()),
            network_id: Some(137),
            balance: Some("1.0".to_string()),
            connecting: false,
        };
        session.clear();
        assert_eq!(session, WalletSession::default());
        session.clear();
        assert_eq!(session, WalletSession::default());
    }
}
