use anyhow::{anyhow, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info};

use super::PairSource;
use crate::config::IngestionConfig;
use common::TokenAddress;

/// DexScreener REST connector
pub struct DexScreenerConnector {
    api_base_url: String,
    client: Client,
}

/// Response of `GET /latest/dex/tokens/{address}`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPairsResponse {
    #[serde(default)]
    pub schema_version: Option<String>,
    /// `null` when the token is not listed anywhere
    #[serde(default, deserialize_with = "lenient_pairs")]
    pub pairs: Option<Vec<DexPair>>,
}

impl TokenPairsResponse {
    pub fn into_pairs(self) -> Vec<DexPair> {
        self.pairs.unwrap_or_default()
    }
}

/// One trading pair as reported by DexScreener.
///
/// Numeric fields are kept as raw JSON values: the API mixes strings
/// (`priceUsd`) and numbers, and any of them may be missing. The normalizer
/// owns the parsing. Nested containers of the wrong shape read as absent
/// instead of failing the whole document.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DexPair {
    #[serde(default, deserialize_with = "lenient")]
    pub chain_id: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub dex_id: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub pair_address: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub base_token: Option<TokenInfo>,
    #[serde(default, deserialize_with = "lenient")]
    pub quote_token: Option<TokenInfo>,
    #[serde(default)]
    pub price_usd: Option<Value>,
    #[serde(default, deserialize_with = "lenient")]
    pub price_change: Option<PriceChange>,
    #[serde(default, deserialize_with = "lenient")]
    pub volume: Option<PairVolume>,
    #[serde(default, deserialize_with = "lenient")]
    pub liquidity: Option<PairLiquidity>,
    #[serde(default, deserialize_with = "lenient")]
    pub txns: Option<PairTxns>,
    #[serde(default)]
    pub market_cap: Option<Value>,
    #[serde(default)]
    pub fdv: Option<Value>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TokenInfo {
    #[serde(default, deserialize_with = "lenient")]
    pub address: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub symbol: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PriceChange {
    #[serde(default)]
    pub m5: Option<Value>,
    #[serde(default)]
    pub h1: Option<Value>,
    #[serde(default)]
    pub h6: Option<Value>,
    #[serde(default)]
    pub h24: Option<Value>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PairVolume {
    #[serde(default)]
    pub h24: Option<Value>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PairLiquidity {
    #[serde(default)]
    pub usd: Option<Value>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PairTxns {
    #[serde(default, deserialize_with = "lenient")]
    pub h24: Option<TxnCounts>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TxnCounts {
    #[serde(default)]
    pub buys: Option<Value>,
    #[serde(default)]
    pub sells: Option<Value>,
}

/// Pair list where entries that are not objects are skipped
fn lenient_pairs<'de, D>(deserializer: D) -> std::result::Result<Option<Vec<DexPair>>, D::Error>
where
    D: Deserializer<'de>,
{
    let Value::Array(items) = Value::deserialize(deserializer)? else {
        return Ok(None);
    };

    Ok(Some(
        items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect(),
    ))
}

/// Read any JSON value, keep it only if it has the expected shape
fn lenient<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

impl DexScreenerConnector {
    pub fn new(config: &IngestionConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            api_base_url: config.api_base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn token_url(&self, address: &TokenAddress) -> String {
        format!("{}/latest/dex/tokens/{}", self.api_base_url, address)
    }
}

#[async_trait]
impl PairSource for DexScreenerConnector {
    async fn fetch_token_pairs(&self, address: &TokenAddress) -> Result<Vec<DexPair>> {
        let url = self.token_url(address);
        info!("Fetching pairs from DexScreener for {}", address);
        debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(anyhow!(
                "API error ({}). The token might not exist or API is temporarily down.",
                response.status()
            ));
        }

        let body: TokenPairsResponse = response.json().await?;
        let pairs = body.into_pairs();

        info!("✅ Fetched {} pairs from DexScreener", pairs.len());

        Ok(pairs)
    }
}

/// Keep only pairs listed on one of the given chains
pub fn filter_by_chain(pairs: Vec<DexPair>, chain_ids: &[String]) -> Vec<DexPair> {
    pairs
        .into_iter()
        .filter(|pair| {
            pair.chain_id.as_deref().is_some_and(|id| {
                chain_ids
                    .iter()
                    .any(|chain| chain.eq_ignore_ascii_case(id))
            })
        })
        .collect()
}
