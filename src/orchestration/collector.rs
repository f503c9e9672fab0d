//! Stats collector: one fetch-filter-aggregate pass per exchange.

use crate::datasource::LogSource;
use crate::domain::{
    CombinedStats, Exchange, ExchangeStats, FetchFailure, FetchOutcome, WalletAddress,
};
use crate::engine::{aggregate_volume, filter_wallet_logs};
use std::sync::Arc;
use tracing::{info, warn};

/// Collects per-exchange transfer stats for one wallet.
///
/// Holds the log source by explicit handle so tests can substitute a mock.
/// Failures never cross an exchange boundary: a failed scan is recorded as
/// [`FetchOutcome::Failed`] and the sibling exchange proceeds untouched.
#[derive(Debug, Clone)]
pub struct StatsCollector {
    source: Arc<dyn LogSource>,
    chunk_blocks: u64,
}

impl StatsCollector {
    /// Create a collector scanning `chunk_blocks`-sized block windows.
    pub fn new(source: Arc<dyn LogSource>, chunk_blocks: u64) -> Self {
        Self {
            source,
            chunk_blocks,
        }
    }

    /// Run both exchange pipelines sequentially, in fixed order.
    ///
    /// `head` is the chain head observed at startup; both scans cover
    /// blocks 0..=head.
    pub async fn collect(&self, wallet: &WalletAddress, head: u64) -> CombinedStats {
        let hyperliquid = self
            .collect_exchange(Exchange::Hyperliquid, wallet, head)
            .await;
        let dydx = self.collect_exchange(Exchange::Dydx, wallet, head).await;

        CombinedStats { hyperliquid, dydx }
    }

    async fn collect_exchange(
        &self,
        exchange: Exchange,
        wallet: &WalletAddress,
        head: u64,
    ) -> FetchOutcome {
        info!("fetching {} transfer logs for {}", exchange, wallet);

        match self.scan_exchange(exchange, wallet, head).await {
            Ok(stats) => {
                info!(
                    "{}: {} trades, volume {}",
                    exchange,
                    stats.trades,
                    stats.volume.to_canonical_string()
                );
                FetchOutcome::Complete(stats)
            }
            Err(failure) => {
                warn!("{} stats degraded to zero: {}", exchange, failure);
                FetchOutcome::Failed(failure)
            }
        }
    }

    async fn scan_exchange(
        &self,
        exchange: Exchange,
        wallet: &WalletAddress,
        head: u64,
    ) -> Result<ExchangeStats, FetchFailure> {
        let contract = exchange.contract();
        let mut logs = Vec::new();
        for (from_block, to_block) in block_windows(head, self.chunk_blocks) {
            let chunk = self
                .source
                .transfer_logs(contract, from_block, to_block)
                .await
                .map_err(|e| FetchFailure::Source(e.to_string()))?;
            logs.extend(chunk);
        }

        let matched = filter_wallet_logs(&logs, wallet);
        aggregate_volume(&matched).map_err(|e| FetchFailure::Aggregate(e.to_string()))
    }
}

/// Inclusive block windows tiling 0..=head in `chunk_blocks` steps.
///
/// Windows are ascending, gap-free, and non-overlapping; the last one is
/// truncated at head.
fn block_windows(head: u64, chunk_blocks: u64) -> Vec<(u64, u64)> {
    assert!(chunk_blocks > 0, "chunk size must be positive");

    let mut windows = Vec::new();
    let mut from = 0u64;
    loop {
        let to = from.saturating_add(chunk_blocks - 1).min(head);
        windows.push((from, to));
        if to >= head {
            break;
        }
        from = to + 1;
    }
    windows
}
