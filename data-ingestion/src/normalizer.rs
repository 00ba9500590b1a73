// Market Data Normalizer
// Turns raw DexScreener pairs into a TokenSnapshot, coercing anything unknown to zero

use serde_json::Value;
use thiserror::Error;

use crate::connectors::{DexPair, TokenInfo};
use common::TokenSnapshot;

const UNKNOWN_SYMBOL: &str = "UNKNOWN";
const UNKNOWN_DEX: &str = "unknown";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NormalizeError {
    #[error("No candidate trading pairs were supplied")]
    NoCandidates,
}

/// Normalize the most liquid of the candidate pairs.
///
/// Callers are expected to have filtered the candidates to the target chain.
pub fn normalize(pairs: &[DexPair]) -> Result<TokenSnapshot, NormalizeError> {
    normalize_top(pairs).map(|(_, snapshot)| snapshot)
}

/// Like [`normalize`], but also hands back the pair the snapshot came from
pub fn normalize_top(pairs: &[DexPair]) -> Result<(&DexPair, TokenSnapshot), NormalizeError> {
    let top = select_top_pair(pairs).ok_or(NormalizeError::NoCandidates)?;
    Ok((top, normalize_pair(top)))
}

/// Pick the pair with the deepest USD liquidity.
/// Ties keep the earliest pair; missing liquidity counts as zero.
pub fn select_top_pair(pairs: &[DexPair]) -> Option<&DexPair> {
    let mut iter = pairs.iter();
    let mut best = iter.next()?;
    let mut best_liquidity = liquidity_of(best);

    for pair in iter {
        let liquidity = liquidity_of(pair);
        if liquidity > best_liquidity {
            best = pair;
            best_liquidity = liquidity;
        }
    }

    Some(best)
}

/// Map one raw pair onto the snapshot schema
pub fn normalize_pair(pair: &DexPair) -> TokenSnapshot {
    let base_symbol = symbol_of(pair.base_token.as_ref());
    let quote_symbol = symbol_of(pair.quote_token.as_ref());

    let price_change = pair.price_change.as_ref();
    let day_txns = pair.txns.as_ref().and_then(|t| t.h24.as_ref());

    TokenSnapshot {
        pair_label: format!("{}/{}", base_symbol, quote_symbol),
        base_symbol,
        dex_name: pair
            .dex_id
            .clone()
            .filter(|id| !id.is_empty())
            .unwrap_or_else(|| UNKNOWN_DEX.to_string()),
        price: number(pair.price_usd.as_ref()),
        price_change_24h: number(price_change.and_then(|p| p.h24.as_ref())),
        price_change_6h: number(price_change.and_then(|p| p.h6.as_ref())),
        price_change_1h: number(price_change.and_then(|p| p.h1.as_ref())),
        volume_24h: number(pair.volume.as_ref().and_then(|v| v.h24.as_ref())),
        liquidity_usd: liquidity_of(pair),
        buys_24h: count(day_txns.and_then(|t| t.buys.as_ref())),
        sells_24h: count(day_txns.and_then(|t| t.sells.as_ref())),
        market_cap: number(pair.market_cap.as_ref()),
        fdv: number(pair.fdv.as_ref()),
    }
}

fn liquidity_of(pair: &DexPair) -> f64 {
    number(pair.liquidity.as_ref().and_then(|l| l.usd.as_ref()))
}

fn symbol_of(token: Option<&TokenInfo>) -> String {
    token
        .and_then(|t| t.symbol.as_deref())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(UNKNOWN_SYMBOL)
        .to_string()
}

/// Lenient float parse: numbers and numeric strings pass, everything else
/// (missing, null, garbage, non-finite) becomes zero.
pub fn number(value: Option<&Value>) -> f64 {
    let parsed = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    parsed.filter(|v| v.is_finite()).unwrap_or(0.0)
}

/// Lenient transaction count: negative values clamp to zero, fractions truncate
pub fn count(value: Option<&Value>) -> u64 {
    if let Some(Value::Number(n)) = value {
        if let Some(exact) = n.as_u64() {
            return exact;
        }
    }

    let approx = number(value);
    if approx <= 0.0 {
        0
    } else {
        approx.trunc() as u64
    }
}
