pub mod config;
pub mod datasource;
pub mod domain;
pub mod engine;
pub mod orchestration;
pub mod report;

pub use config::Config;
pub use datasource::{JsonRpcLogSource, LogSource, MockLogSource, SourceError};
pub use domain::{
    AddressError, CombinedStats, Decimal, Exchange, ExchangeStats, FetchFailure, FetchOutcome,
    LogEntry, WalletAddress,
};
pub use orchestration::StatsCollector;
