//! Event log records as returned by the node.

use alloy_primitives::{Address, Bytes, B256};

/// A single event log fetched from the node. Immutable once decoded;
/// discarded after aggregation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    /// Emitting contract.
    pub address: Address,
    /// Block the log was mined in.
    pub block_number: u64,
    /// Indexed topics, in event order. For an ERC-20 Transfer:
    /// [signature, from, to].
    pub topics: Vec<B256>,
    /// ABI-encoded non-indexed payload (the transfer amount).
    pub data: Bytes,
}

impl LogEntry {
    /// The sender topic, when present.
    pub fn sender_topic(&self) -> Option<&B256> {
        self.topics.get(1)
    }

    /// The recipient topic, when present.
    pub fn recipient_topic(&self) -> Option<&B256> {
        self.topics.get(2)
    }
}
