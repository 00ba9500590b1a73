//! Normalized market snapshot

use serde::{Deserialize, Serialize};

/// One point-in-time market record for a token's most liquid pair.
///
/// All numeric fields are finite. Unknown quantities are stored as `0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct TokenSnapshot {
    /// Display label, e.g. "HEX/WPLS"
    pub pair_label: String,
    pub base_symbol: String,
    pub dex_name: String,

    /// Price in USD
    pub price: f64,

    /// Price changes in percentage points (signed)
    pub price_change_24h: f64,
    pub price_change_6h: f64,
    pub price_change_1h: f64,

    /// 24h traded volume in USD
    pub volume_24h: f64,
    /// Pool liquidity in USD
    pub liquidity_usd: f64,

    pub buys_24h: u64,
    pub sells_24h: u64,

    pub market_cap: f64,
    pub fdv: f64,
}

impl TokenSnapshot {
    /// Total number of transactions over the last 24 hours
    pub fn txns_24h(&self) -> u64 {
        self.buys_24h.saturating_add(self.sells_24h)
    }
}
