//! Pure computation over fetched logs: wallet filtering and volume
//! aggregation. No I/O here.

pub mod aggregate;
pub mod filter;

pub use aggregate::{aggregate_volume, wei_to_tokens, AggregateError};
pub use filter::filter_wallet_logs;
