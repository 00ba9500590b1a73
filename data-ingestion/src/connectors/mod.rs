pub mod dexscreener;

pub use dexscreener::{
    filter_by_chain, DexPair, DexScreenerConnector, PairLiquidity, PairTxns, PairVolume,
    PriceChange, TokenInfo, TokenPairsResponse, TxnCounts,
};

use anyhow::Result;
use common::TokenAddress;

/// Anything that can list the trading pairs of a token
#[async_trait::async_trait]
pub trait PairSource: Send + Sync {
    async fn fetch_token_pairs(&self, address: &TokenAddress) -> Result<Vec<DexPair>>;
}
