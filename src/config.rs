use std::collections::HashMap;
use thiserror::Error;

const INFURA_URL_TEMPLATE: &str = "https://arbitrum-mainnet.infura.io/v3";
const DEFAULT_LOG_CHUNK_BLOCKS: u64 = 100_000;
const DEFAULT_RPC_TIMEOUT_SECS: u64 = 30;

#[derive(Clone)]
pub struct Config {
    /// Resolved JSON-RPC endpoint. Carries the project-id credential, so
    /// it is redacted from Debug output and never logged.
    pub rpc_endpoint: String,
    /// Wallet address supplied via environment; when absent the operator
    /// is prompted interactively.
    pub wallet_address: Option<String>,
    /// Block-range window size for the paginated log scan.
    pub log_chunk_blocks: u64,
    /// Per-request HTTP timeout.
    pub rpc_timeout_secs: u64,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("rpc_endpoint", &"<redacted>")
            .field("wallet_address", &self.wallet_address)
            .field("log_chunk_blocks", &self.log_chunk_blocks)
            .field("rpc_timeout_secs", &self.rpc_timeout_secs)
            .finish()
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnv(String),
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_map(std::env::vars().collect())
    }

    pub fn from_env_map(env_map: HashMap<String, String>) -> Result<Self, ConfigError> {
        let rpc_endpoint = match env_map.get("RPC_URL") {
            Some(url) => url.clone(),
            None => {
                let project_id = env_map
                    .get("INFURA_PROJECT_ID")
                    .ok_or_else(|| ConfigError::MissingEnv("INFURA_PROJECT_ID".to_string()))?;
                format!("{}/{}", INFURA_URL_TEMPLATE, project_id)
            }
        };

        let wallet_address = env_map.get("WALLET_ADDRESS").cloned();

        let log_chunk_blocks = env_map
            .get("LOG_CHUNK_BLOCKS")
            .map(|s| s.as_str())
            .map_or(Ok(DEFAULT_LOG_CHUNK_BLOCKS), |s| {
                s.parse::<u64>().map_err(|_| {
                    ConfigError::InvalidValue(
                        "LOG_CHUNK_BLOCKS".to_string(),
                        "must be a valid u64".to_string(),
                    )
                })
            })?;
        if log_chunk_blocks == 0 {
            return Err(ConfigError::InvalidValue(
                "LOG_CHUNK_BLOCKS".to_string(),
                "must be greater than zero".to_string(),
            ));
        }

        let rpc_timeout_secs = env_map
            .get("RPC_TIMEOUT_SECS")
            .map(|s| s.as_str())
            .map_or(Ok(DEFAULT_RPC_TIMEOUT_SECS), |s| {
                s.parse::<u64>().map_err(|_| {
                    ConfigError::InvalidValue(
                        "RPC_TIMEOUT_SECS".to_string(),
                        "must be a valid u64".to_string(),
                    )
                })
            })?;
        if rpc_timeout_secs == 0 {
            return Err(ConfigError::InvalidValue(
                "RPC_TIMEOUT_SECS".to_string(),
                "must be greater than zero".to_string(),
            ));
        }

        Ok(Config {
            rpc_endpoint,
            wallet_address,
            log_chunk_blocks,
            rpc_timeout_secs,
        })
    }
}
