//! Log source abstraction for fetching transfer event logs from a node.

use crate::domain::LogEntry;
use alloy_primitives::{keccak256, Address, B256};
use async_trait::async_trait;
use std::fmt;
use thiserror::Error;

pub mod mock;
pub mod rpc;

pub use mock::MockLogSource;
pub use rpc::JsonRpcLogSource;

/// The event signature scanned on both exchange contracts.
pub const TRANSFER_EVENT_SIGNATURE: &str = "Transfer(address,address,uint256)";

/// Topic-0 value for [`TRANSFER_EVENT_SIGNATURE`].
pub fn transfer_event_topic() -> B256 {
    keccak256(TRANSFER_EVENT_SIGNATURE.as_bytes())
}

/// Source of transfer event logs.
///
/// The network seam: the production implementation speaks JSON-RPC, tests
/// substitute [`MockLogSource`].
#[async_trait]
pub trait LogSource: Send + Sync + fmt::Debug {
    /// Current head block number.
    async fn latest_block(&self) -> Result<u64, SourceError>;

    /// Fetch Transfer logs emitted by `contract` within the inclusive
    /// block range, in node order.
    async fn transfer_logs(
        &self,
        contract: Address,
        from_block: u64,
        to_block: u64,
    ) -> Result<Vec<LogEntry>, SourceError>;
}

/// Error type for log source operations.
#[derive(Debug, Clone, Error)]
pub enum SourceError {
    #[error("network error: {0}")]
    Network(String),
    #[error("http error {status}: {message}")]
    Http { status: u16, message: String },
    #[error("rpc error {code}: {message}")]
    Rpc { code: i64, message: String },
    #[error("malformed response: {0}")]
    Parse(String),
    #[error("rate limited")]
    RateLimited,
}
