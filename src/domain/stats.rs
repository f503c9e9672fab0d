//! Per-exchange and combined volume statistics.

use super::{Decimal, Exchange};

/// Aggregated transfer activity for one exchange.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExchangeStats {
    /// Total transferred amount in whole-token units.
    pub volume: Decimal,
    /// Number of matching transfer logs.
    pub trades: u64,
}

/// Why a single exchange's scan produced no stats.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchFailure {
    /// The node could not be queried (transport, HTTP, or RPC error).
    Source(String),
    /// Logs were fetched but their payloads could not be aggregated.
    Aggregate(String),
}

impl std::fmt::Display for FetchFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchFailure::Source(msg) => write!(f, "log fetch failed: {}", msg),
            FetchFailure::Aggregate(msg) => write!(f, "log aggregation failed: {}", msg),
        }
    }
}

/// Outcome of one exchange's fetch-filter-aggregate pipeline.
///
/// Keeps "no activity" and "fetch failed" distinguishable; the rendered
/// report collapses both to zeros, the types and logs do not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    Complete(ExchangeStats),
    Failed(FetchFailure),
}

impl FetchOutcome {
    /// Stats for rendering: a failed scan reads as zero activity.
    pub fn stats_or_zero(&self) -> ExchangeStats {
        match self {
            FetchOutcome::Complete(stats) => *stats,
            FetchOutcome::Failed(_) => ExchangeStats::default(),
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, FetchOutcome::Failed(_))
    }
}

/// Outcomes for both exchanges, iterated in fixed order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombinedStats {
    pub hyperliquid: FetchOutcome,
    pub dydx: FetchOutcome,
}

impl CombinedStats {
    pub fn get(&self, exchange: Exchange) -> &FetchOutcome {
        match exchange {
            Exchange::Hyperliquid => &self.hyperliquid,
            Exchange::Dydx => &self.dydx,
        }
    }

    /// Iterate outcomes in report order: hyperliquid, then dydx.
    pub fn iter(&self) -> impl Iterator<Item = (Exchange, &FetchOutcome)> + '_ {
        Exchange::ALL.iter().map(move |e| (*e, self.get(*e)))
    }
}
