//! Filtering transfer logs down to a single wallet's activity.

use crate::domain::{LogEntry, WalletAddress};

/// Retain logs where the wallet is the sender (topic 1) or recipient
/// (topic 2). Comparison is on decoded 32-byte topics, so hex casing on
/// the wire is irrelevant. Order is preserved, nothing is deduplicated.
pub fn filter_wallet_logs(logs: &[LogEntry], wallet: &WalletAddress) -> Vec<LogEntry> {
    let topic = wallet.as_topic();
    logs.iter()
        .filter(|log| {
            log.sender_topic() == Some(&topic) || log.recipient_topic() == Some(&topic)
        })
        .cloned()
        .collect()
}
