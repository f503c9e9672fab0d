//! JSON-RPC 2.0 log source over HTTPS.

use super::{transfer_event_topic, LogSource, SourceError};
use crate::domain::LogEntry;
use alloy_primitives::{Address, Bytes, B256};
use async_trait::async_trait;
use backoff::future::retry;
use backoff::ExponentialBackoff;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

/// Log source speaking `eth_blockNumber` / `eth_getLogs` against a single
/// JSON-RPC endpoint. The HTTP client is constructed once at startup and
/// shared for the process lifetime.
#[derive(Debug, Clone)]
pub struct JsonRpcLogSource {
    client: Client,
    endpoint: String,
}

impl JsonRpcLogSource {
    pub fn new(client: Client, endpoint: String) -> Self {
        Self { client, endpoint }
    }

    async fn call(
        &self,
        method: &str,
        params: serde_json::Value,
    ) -> Result<serde_json::Value, SourceError> {
        let request = serde_json::json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": method,
            "params": params,
        });

        let backoff = ExponentialBackoff {
            max_elapsed_time: Some(Duration::from_secs(30)),
            ..Default::default()
        };

        retry(backoff, || async {
            let response = self
                .client
                .post(&self.endpoint)
                .json(&request)
                .send()
                .await
                .map_err(|e| backoff::Error::transient(SourceError::Network(e.to_string())))?;

            let status = response.status();
            if status == 429 {
                return Err(backoff::Error::transient(SourceError::RateLimited));
            }
            if status.is_server_error() {
                return Err(backoff::Error::transient(SourceError::Http {
                    status: status.as_u16(),
                    message: "server error".to_string(),
                }));
            }
            if !status.is_success() {
                return Err(backoff::Error::permanent(SourceError::Http {
                    status: status.as_u16(),
                    message: "client error".to_string(),
                }));
            }

            let envelope = response
                .json::<RpcResponse>()
                .await
                .map_err(|e| backoff::Error::permanent(SourceError::Parse(e.to_string())))?;

            if let Some(err) = envelope.error {
                return Err(backoff::Error::permanent(SourceError::Rpc {
                    code: err.code,
                    message: err.message,
                }));
            }

            envelope.result.ok_or_else(|| {
                backoff::Error::permanent(SourceError::Parse(
                    "response carries neither result nor error".to_string(),
                ))
            })
        })
        .await
    }
}

#[async_trait]
impl LogSource for JsonRpcLogSource {
    async fn latest_block(&self) -> Result<u64, SourceError> {
        let result = self.call("eth_blockNumber", serde_json::json!([])).await?;
        let quantity = result
            .as_str()
            .ok_or_else(|| SourceError::Parse("block number is not a string".to_string()))?;
        parse_quantity(quantity)
    }

    async fn transfer_logs(
        &self,
        contract: Address,
        from_block: u64,
        to_block: u64,
    ) -> Result<Vec<LogEntry>, SourceError> {
        debug!(
            "eth_getLogs contract={} from_block={} to_block={}",
            contract.to_checksum(None),
            from_block,
            to_block
        );

        let params = serde_json::json!([{
            "fromBlock": hex_quantity(from_block),
            "toBlock": hex_quantity(to_block),
            "address": contract.to_checksum(None),
            "topics": [transfer_event_topic()],
        }]);

        let result = self.call("eth_getLogs", params).await?;
        let raw_logs: Vec<RawLog> =
            serde_json::from_value(result).map_err(|e| SourceError::Parse(e.to_string()))?;

        raw_logs.into_iter().map(RawLog::into_entry).collect()
    }
}

#[derive(Debug, Deserialize)]
struct RpcResponse {
    result: Option<serde_json::Value>,
    error: Option<RpcErrorObject>,
}

#[derive(Debug, Deserialize)]
struct RpcErrorObject {
    code: i64,
    message: String,
}

/// Log object as it appears on the wire, quantities still hex-encoded.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawLog {
    address: Address,
    topics: Vec<B256>,
    data: Bytes,
    block_number: Option<String>,
}

impl RawLog {
    fn into_entry(self) -> Result<LogEntry, SourceError> {
        let block_number = self
            .block_number
            .ok_or_else(|| SourceError::Parse("log is missing blockNumber".to_string()))?;
        Ok(LogEntry {
            address: self.address,
            block_number: parse_quantity(&block_number)?,
            topics: self.topics,
            data: self.data,
        })
    }
}

/// Decode an Ethereum hex quantity ("0x1b4") into a u64.
fn parse_quantity(s: &str) -> Result<u64, SourceError> {
    let digits = s
        .strip_prefix("0x")
        .ok_or_else(|| SourceError::Parse(format!("quantity without 0x prefix: {}", s)))?;
    u64::from_str_radix(digits, 16)
        .map_err(|e| SourceError::Parse(format!("bad hex quantity {}: {}", s, e)))
}

/// Encode a u64 as an Ethereum hex quantity.
fn hex_quantity(n: u64) -> String {
    format!("{:#x}", n)
}
