//! Wallet address parsing and canonical (checksummed) representation.

use alloy_primitives::{Address, B256};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AddressError {
    #[error("address must start with 0x")]
    MissingPrefix,
    #[error("address must be 40 hex characters, got {0}")]
    BadLength(usize),
    #[error("address contains non-hex characters")]
    NotHex,
    #[error("address checksum mismatch")]
    BadChecksum,
}

/// A validated 20-byte wallet address.
///
/// Accepts all-lowercase and all-uppercase hex as-is; mixed-case input must
/// carry a valid EIP-55 checksum. Displays in checksummed form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WalletAddress(Address);

impl WalletAddress {
    /// Parse and validate a wallet address from operator input.
    pub fn parse(input: &str) -> Result<Self, AddressError> {
        let trimmed = input.trim();
        let hex_part = trimmed
            .strip_prefix("0x")
            .ok_or(AddressError::MissingPrefix)?;
        if hex_part.len() != 40 {
            return Err(AddressError::BadLength(hex_part.len()));
        }
        if !hex_part.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(AddressError::NotHex);
        }

        let has_lower = hex_part.chars().any(|c| c.is_ascii_lowercase());
        let has_upper = hex_part.chars().any(|c| c.is_ascii_uppercase());
        if has_lower && has_upper {
            // Mixed case is only valid as an EIP-55 checksum.
            let addr = Address::parse_checksummed(trimmed, None)
                .map_err(|_| AddressError::BadChecksum)?;
            return Ok(WalletAddress(addr));
        }

        let addr: Address = hex_part.parse().map_err(|_| AddressError::NotHex)?;
        Ok(WalletAddress(addr))
    }

    /// Canonical EIP-55 checksummed form.
    pub fn checksummed(&self) -> String {
        self.0.to_checksum(None)
    }

    /// The address left-padded to 32 bytes, as it appears in indexed
    /// event topics.
    pub fn as_topic(&self) -> B256 {
        B256::left_padding_from(self.0.as_slice())
    }

    /// The underlying 20-byte address.
    pub fn inner(&self) -> Address {
        self.0
    }
}

impl std::fmt::Display for WalletAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.checksummed())
    }
}
