//! Rendering combined stats as operator-facing text.

use crate::domain::CombinedStats;

/// Render the per-exchange summary.
///
/// Failed scans render as zeros; the distinction is carried by the types
/// and the warn logs, not by this output format.
pub fn render(stats: &CombinedStats) -> String {
    let mut out = String::from("\nUser Stats:\n");
    for (exchange, outcome) in stats.iter() {
        let s = outcome.stats_or_zero();
        out.push_str(&format!("{}:\n", exchange.name().to_uppercase()));
        out.push_str(&format!("  Volume: ${:.2}\n", s.volume.inner()));
        out.push_str(&format!("  Trades: {}\n", s.trades));
    }
    out
}
