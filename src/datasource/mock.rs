//! Mock log source for testing without network calls.

use super::{LogSource, SourceError};
use crate::domain::LogEntry;
use alloy_primitives::Address;
use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Mock log source that serves predefined logs and can inject failures.
#[derive(Debug, Clone, Default)]
pub struct MockLogSource {
    head: u64,
    logs: Vec<LogEntry>,
    failing_contracts: Vec<Address>,
    fetch_calls: Arc<AtomicU64>,
}

impl MockLogSource {
    /// Create a new mock with no logs and head block 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the head block number reported by `latest_block`.
    pub fn with_head(mut self, head: u64) -> Self {
        self.head = head;
        self
    }

    /// Add a log to the mock source.
    pub fn with_log(mut self, log: LogEntry) -> Self {
        self.logs.push(log);
        self
    }

    /// Add multiple logs to the mock source.
    pub fn with_logs(mut self, logs: Vec<LogEntry>) -> Self {
        self.logs.extend(logs);
        self
    }

    /// Make `transfer_logs` fail for the given contract.
    pub fn with_failing_contract(mut self, contract: Address) -> Self {
        self.failing_contracts.push(contract);
        self
    }

    /// Number of `transfer_logs` calls issued against this mock (shared
    /// across clones).
    pub fn fetch_call_count(&self) -> u64 {
        self.fetch_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LogSource for MockLogSource {
    async fn latest_block(&self) -> Result<u64, SourceError> {
        Ok(self.head)
    }

    async fn transfer_logs(
        &self,
        contract: Address,
        from_block: u64,
        to_block: u64,
    ) -> Result<Vec<LogEntry>, SourceError> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);

        if self.failing_contracts.contains(&contract) {
            return Err(SourceError::Network("injected failure".to_string()));
        }

        Ok(self
            .logs
            .iter()
            .filter(|log| {
                log.address == contract
                    && log.block_number >= from_block
                    && log.block_number <= to_block
            })
            .cloned()
            .collect())
    }
}
