//! Driving the per-exchange fetch-filter-aggregate pipelines.

pub mod collector;

pub use collector::StatsCollector;
