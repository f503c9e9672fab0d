//! The two exchanges whose on-chain transfer activity is reported.

use alloy_primitives::{address, Address};

/// An exchange with a token contract tracked on Arbitrum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Exchange {
    Hyperliquid,
    Dydx,
}

impl Exchange {
    /// Report iteration order is fixed: hyperliquid, then dydx.
    pub const ALL: [Exchange; 2] = [Exchange::Hyperliquid, Exchange::Dydx];

    /// The contract whose Transfer logs are scanned for this exchange.
    pub fn contract(&self) -> Address {
        match self {
            Exchange::Hyperliquid => address!("C67E9Efdb8a66A4B91b1f3731C75F500130373A4"),
            Exchange::Dydx => address!("AC6a07aFa77aBB31C68E094AF4b496d81737Ff53"),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Exchange::Hyperliquid => "hyperliquid",
            Exchange::Dydx => "dydx",
        }
    }
}

impl std::fmt::Display for Exchange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_order() {
        assert_eq!(Exchange::ALL, [Exchange::Hyperliquid, Exchange::Dydx]);
    }

    #[test]
    fn test_contracts_distinct() {
        assert_ne!(
            Exchange::Hyperliquid.contract(),
            Exchange::Dydx.contract()
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Exchange::Hyperliquid.to_string(), "hyperliquid");
        assert_eq!(Exchange::Dydx.to_string(), "dydx");
    }
}
