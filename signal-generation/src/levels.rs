// Trade Level Derivation
// Entry, stop and take-profit prices from a fixed 2%-of-price risk unit

use super::signals::TradeLevels;

/// Risk unit as a fraction of price
pub const RISK_FRACTION: f64 = 0.02;
/// Entry is placed just under the last price
pub const ENTRY_FACTOR: f64 = 0.999;

impl TradeLevels {
    /// Derive levels from the current price.
    /// Stop sits 2 risk units under entry (floored at zero); targets sit 2, 4 and 6 units above.
    pub fn from_price(price: f64) -> Self {
        let risk = price * RISK_FRACTION;
        let entry = price * ENTRY_FACTOR;

        Self {
            entry,
            stop_loss: (entry - 2.0 * risk).max(0.0),
            take_profit_1: entry + 2.0 * risk,
            take_profit_2: entry + 4.0 * risk,
            take_profit_3: entry + 6.0 * risk,
        }
    }
}
