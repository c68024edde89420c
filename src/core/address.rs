//! Ethereum address validation.

use std::str::FromStr;

use alloy_primitives::Address;

use crate::core::error::WalletError;

/// Parse a user-supplied account address.
///
/// Accepts all-lowercase, all-uppercase, or EIP-55 checksummed hex with a
/// `0x` prefix; a mixed-case address whose checksum does not verify is
/// rejected. Purely syntactic, no network access.
pub fn parse_address(input: &str) -> Result<Address, WalletError> {
    let invalid = || WalletError::InvalidAddress(input.to_string());

    let trimmed = input.trim();
    let digits = trimmed.strip_prefix("0x").ok_or_else(invalid)?;
    if digits.len() != 40 {
        return Err(invalid());
    }

    let address = Address::from_str(trimmed).map_err(|_| invalid())?;

    let has_lower = digits.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = digits.chars().any(|c| c.is_ascii_uppercase());
    if has_lower && has_upper && address.to_checksum(None) != trimmed {
        return Err(invalid());
    }

    Ok(address)
}

#[cfg(test)]
mod tests {
    use super::*;

    // EIP-55 test vectors
    const CHECKSUMMED: &[&str] = &[
        "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed",
        "0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359",
        "0xdbF03B407c01E7cD3CBea99509d93f8DDDC8C6FB",
        "0xD1220A0cf47c7B9Be7A2E6BA89F429762e7b9aDb",
    ];

    #[test]
    fn test_checksummed_addresses_are_accepted() {
        for addr in CHECKSUMMED {
            assert!(parse_address(addr).is_ok(), "rejected {addr}");
        }
    }

    #[test]
    fn test_single_case_addresses_are_accepted() {
        let lower = CHECKSUMMED[0].to_lowercase();
        assert!(parse_address(&lower).is_ok());

        let upper = format!("0x{}", CHECKSUMMED[0][2..].to_uppercase());
        assert!(parse_address(&upper).is_ok());
    }

    #[test]
    fn test_bad_checksum_is_rejected() {
        // first checksummed letter lowercased
        let bad = "0x5aaeb6053F3E94C9b9A09f33669435E7Ef1BeAed";
        assert_eq!(
            parse_address(bad),
            Err(WalletError::InvalidAddress(bad.to_string()))
        );
    }

    #[test]
    fn test_malformed_inputs_are_rejected() {
        for input in [
            "not-an-address",
            "",
            "0x",
            "0x1234",
            "5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed",
            "0xzzzzb6053f3e94c9b9a09f33669435e7ef1beaed",
            "0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed00",
        ] {
            assert!(parse_address(input).is_err(), "accepted {input:?}");
        }
    }

    #[test]
    fn test_surrounding_whitespace_is_tolerated() {
        let padded = format!("  {}\n", CHECKSUMMED[1]);
        assert!(parse_address(&padded).is_ok());
    }
}
