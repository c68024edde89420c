//! Formatting utilities for addresses and balance display values.

use alloy_primitives::U256;
use alloy_primitives::utils::format_ether;

use crate::config::eth_address::{FULL_LEN, PREFIX_LEN, SUFFIX_START};

/// Format a wei amount as a decimal ether string.
///
/// Keeps full precision but trims trailing zeros, always leaving at least
/// one fractional digit: 10^18 wei formats as "1.0", not
/// "1.000000000000000000".
pub fn format_native_balance(wei: U256) -> String {
    let full = format_ether(wei);
    match full.split_once('.') {
        Some((whole, fraction)) => {
            let fraction = fraction.trim_end_matches('0');
            if fraction.is_empty() {
                format!("{whole}.0")
            } else {
                format!("{whole}.{fraction}")
            }
        }
        None => format!("{full}.0"),
    }
}

/// Format an Ethereum address for display (0x1234...5678).
pub fn format_eth_address(address: &str) -> String {
    if address.len() >= FULL_LEN {
        format!("{}...{}", &address[..PREFIX_LEN], &address[SUFFIX_START..])
    } else {
        address.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wei(eth: u64, rem: u64) -> U256 {
        U256::from(eth) * U256::from(10u64).pow(U256::from(18)) + U256::from(rem)
    }

    #[test]
    fn test_whole_amounts_keep_one_fractional_digit() {
        assert_eq!(format_native_balance(wei(1, 0)), "1.0");
        assert_eq!(format_native_balance(U256::ZERO), "0.0");
        assert_eq!(format_native_balance(wei(1000, 0)), "1000.0");
    }

    #[test]
    fn test_trailing_zeros_are_trimmed() {
        // 2.5 ETH
        assert_eq!(
            format_native_balance(U256::from(2_500_000_000_000_000_000u128)),
            "2.5"
        );
        // 1.2345 ETH
        assert_eq!(
            format_native_balance(U256::from(1_234_500_000_000_000_000u128)),
            "1.2345"
        );
    }

    #[test]
    fn test_full_precision_is_preserved() {
        assert_eq!(format_native_balance(U256::from(1u64)), "0.000000000000000001");
        assert_eq!(format_native_balance(wei(1, 1)), "1.000000000000000001");
    }

    #[test]
    fn test_format_eth_address() {
        let addr = "0x1234567890abcdef1234567890abcdef12345678";
        assert_eq!(format_eth_address(addr), "0x1234...5678");
        assert_eq!(format_eth_address("short"), "short");
    }
}
