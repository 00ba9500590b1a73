// Token Analysis Pipeline
// Address validation, fetch, chain filter, normalization and signal evaluation

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::config::IngestionConfig;
use crate::connectors::{filter_by_chain, DexPair, PairSource, TokenPairsResponse};
use crate::normalizer::{normalize_top, NormalizeError};
use common::{AddressError, TokenAddress, TokenSnapshot};
use signal_generation::{SignalEngine, SignalResult};

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error(transparent)]
    InvalidAddress(#[from] AddressError),

    #[error(transparent)]
    Fetch(anyhow::Error),

    #[error("Failed to parse market data document: {0}")]
    Document(#[from] serde_json::Error),

    #[error("No trading pairs found. This token might not be listed on any DEX yet, or the contract address is incorrect.")]
    NotListed,

    #[error("Token found but not on {chains}. Only {chains} pairs are analyzed.")]
    WrongChain { chains: String },

    #[error(transparent)]
    Normalize(#[from] NormalizeError),
}

/// Everything the presentation layer needs for one token
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    /// Token contract address, when known
    pub token: Option<String>,
    pub chain_id: String,
    pub dex_url: Option<String>,
    pub generated_at: DateTime<Utc>,
    pub snapshot: TokenSnapshot,
    pub signal: SignalResult,
}

/// Validate, fetch and evaluate a token by contract address
pub async fn analyze_token(
    source: &dyn PairSource,
    raw_address: &str,
    config: &IngestionConfig,
) -> Result<AnalysisReport, AnalysisError> {
    let address = TokenAddress::parse(raw_address)?;

    let pairs = source
        .fetch_token_pairs(&address)
        .await
        .map_err(AnalysisError::Fetch)?;

    analyze_pairs(Some(address.to_string()), pairs, config)
}

/// Evaluate a saved DexScreener token response (offline mode)
pub fn analyze_document(
    raw_json: &str,
    config: &IngestionConfig,
) -> Result<AnalysisReport, AnalysisError> {
    let response: TokenPairsResponse = serde_json::from_str(raw_json)?;
    analyze_pairs(None, response.into_pairs(), config)
}

/// Shared tail of the pipeline: filter, select, normalize, evaluate
pub fn analyze_pairs(
    token: Option<String>,
    pairs: Vec<DexPair>,
    config: &IngestionConfig,
) -> Result<AnalysisReport, AnalysisError> {
    if pairs.is_empty() {
        return Err(AnalysisError::NotListed);
    }

    let total = pairs.len();
    let candidates = filter_by_chain(pairs, &config.chain_ids);
    debug!(
        "{} of {} pairs are on {:?}",
        candidates.len(),
        total,
        config.chain_ids
    );

    if candidates.is_empty() {
        warn!("Token is listed, but not on any configured chain");
        return Err(AnalysisError::WrongChain {
            chains: config.chain_ids.join("/"),
        });
    }

    let (top, snapshot) = normalize_top(&candidates)?;

    info!(
        pair = %snapshot.pair_label,
        dex = %snapshot.dex_name,
        liquidity = snapshot.liquidity_usd,
        "Using most liquid pair"
    );

    let signal = SignalEngine::new().evaluate(&snapshot);

    let token = token.or_else(|| {
        top.base_token
            .as_ref()
            .and_then(|t| t.address.as_ref())
            .map(|a| a.to_ascii_lowercase())
    });

    Ok(AnalysisReport {
        token,
        chain_id: top.chain_id.clone().unwrap_or_default(),
        dex_url: top.url.clone(),
        generated_at: Utc::now(),
        snapshot,
        signal,
    })
}
