//! Summing transfer amounts without floating-point drift.
//!
//! Amounts are accumulated in the chain's smallest unit (a 256-bit
//! integer) and converted to whole-token units exactly once at the end.

use crate::domain::{Decimal, ExchangeStats, LogEntry};
use alloy_primitives::U256;
use thiserror::Error;

/// Decimals of the token's smallest unit (wei-style, 10^18 per token).
const TOKEN_DECIMALS: usize = 18;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AggregateError {
    #[error("log data payload is {0} bytes, expected at most 32")]
    OversizedPayload(usize),
    #[error("volume sum overflowed 256 bits")]
    VolumeOverflow,
    #[error("total volume exceeds representable decimal range")]
    UnrepresentableVolume,
}

/// Sum the data payloads of the given (already filtered) logs.
///
/// The trade count is the number of logs. Summation is associative and
/// order-independent; the same input always yields the same stats.
pub fn aggregate_volume(logs: &[LogEntry]) -> Result<ExchangeStats, AggregateError> {
    let mut total = U256::ZERO;
    for log in logs {
        let amount = decode_amount(&log.data)?;
        total = total
            .checked_add(amount)
            .ok_or(AggregateError::VolumeOverflow)?;
    }

    Ok(ExchangeStats {
        volume: wei_to_tokens(total)?,
        trades: logs.len() as u64,
    })
}

/// Decode a log's data payload as a big-endian unsigned integer.
fn decode_amount(data: &[u8]) -> Result<U256, AggregateError> {
    if data.len() > 32 {
        return Err(AggregateError::OversizedPayload(data.len()));
    }
    Ok(U256::from_be_slice(data))
}

/// Convert a smallest-unit total into whole-token units, exactly.
pub fn wei_to_tokens(wei: U256) -> Result<Decimal, AggregateError> {
    let digits = wei.to_string();
    let rendered = if digits.len() <= TOKEN_DECIMALS {
        format!("0.{:0>width$}", digits, width = TOKEN_DECIMALS)
    } else {
        let (whole, frac) = digits.split_at(digits.len() - TOKEN_DECIMALS);
        format!("{}.{}", whole, frac)
    };
    Decimal::from_str_canonical(&rendered).map_err(|_| AggregateError::UnrepresentableVolume)
}
