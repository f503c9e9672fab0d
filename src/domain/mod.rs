//! Core domain types: addresses, exchanges, logs, and volume stats.

pub mod decimal;
pub mod exchange;
pub mod log;
pub mod primitives;
pub mod stats;

pub use decimal::Decimal;
pub use exchange::Exchange;
pub use log::LogEntry;
pub use primitives::{AddressError, WalletAddress};
pub use stats::{CombinedStats, ExchangeStats, FetchFailure, FetchOutcome};
