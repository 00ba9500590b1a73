// Scoring Rules
// Independent heuristics that each contribute a fixed delta to the signal score

use super::signals::RuleOutcome;
use common::TokenSnapshot;

/// A single rule group.
///
/// Thresholds inside a group are mutually exclusive: the most extreme matching
/// branch wins and at most one outcome is returned.
pub trait ScoringRule: Send + Sync {
    fn name(&self) -> &'static str;

    fn evaluate(&self, snapshot: &TokenSnapshot) -> Option<RuleOutcome>;
}

/// The standard rule battery, in evaluation order.
/// Order matters: it fixes the order of `reasons` and `warnings`.
pub fn default_rules() -> Vec<Box<dyn ScoringRule + Send + Sync>> {
    vec![
        Box::new(DailyMomentum),
        Box::new(SixHourMomentum),
        Box::new(HourlyMomentum),
        Box::new(BuyPressure),
        Box::new(LiquidityRisk),
        Box::new(VolumeToLiquidity),
        Box::new(TradingActivity),
        Box::new(PumpExhaustion),
        Box::new(ReversalBounce),
    ]
}

/// 24h price momentum
pub struct DailyMomentum;

impl ScoringRule for DailyMomentum {
    fn name(&self) -> &'static str {
        "daily_momentum"
    }

    fn evaluate(&self, snapshot: &TokenSnapshot) -> Option<RuleOutcome> {
        let change = snapshot.price_change_24h;

        if change > 20.0 {
            Some(RuleOutcome::bullish(25, format!("Explosive 24h momentum (+{:.1}%)", change)))
        } else if change > 10.0 {
            Some(RuleOutcome::bullish(15, format!("Strong 24h momentum (+{:.1}%)", change)))
        } else if change > 3.0 {
            Some(RuleOutcome::bullish(8, format!("Positive 24h trend (+{:.1}%)", change)))
        } else if change < -20.0 {
            Some(RuleOutcome::bearish(-25, format!("Severe 24h dump ({:.1}%)", change)))
        } else if change < -10.0 {
            Some(RuleOutcome::bearish(-15, format!("Heavy 24h losses ({:.1}%)", change)))
        } else if change < -3.0 {
            Some(RuleOutcome::bearish(-8, format!("Negative 24h trend ({:.1}%)", change)))
        } else {
            None
        }
    }
}

/// 6h momentum, extremes only
pub struct SixHourMomentum;

impl ScoringRule for SixHourMomentum {
    fn name(&self) -> &'static str {
        "six_hour_momentum"
    }

    fn evaluate(&self, snapshot: &TokenSnapshot) -> Option<RuleOutcome> {
        let change = snapshot.price_change_6h;

        if change > 10.0 {
            Some(RuleOutcome::bullish(
                15,
                format!("Accelerating momentum (+{:.1}% in 6h)", change),
            ))
        } else if change < -10.0 {
            Some(RuleOutcome::bearish(-15, format!("Sharp 6h decline ({:.1}%)", change)))
        } else {
            None
        }
    }
}

/// 1h momentum, extremes only
pub struct HourlyMomentum;

impl ScoringRule for HourlyMomentum {
    fn name(&self) -> &'static str {
        "hourly_momentum"
    }

    fn evaluate(&self, snapshot: &TokenSnapshot) -> Option<RuleOutcome> {
        let change = snapshot.price_change_1h;

        if change > 5.0 {
            Some(RuleOutcome::bullish(12, format!("Breaking out now (+{:.1}% in 1h)", change)))
        } else if change < -5.0 {
            Some(RuleOutcome::bearish(-12, format!("Recent selloff ({:.1}% in 1h)", change)))
        } else {
            None
        }
    }
}

/// Share of buys among all 24h transactions.
/// With no transactions the denominator is 1, so the ratio is 0.
pub fn buy_ratio(snapshot: &TokenSnapshot) -> f64 {
    let total = snapshot.txns_24h();
    let denominator = if total == 0 { 1 } else { total };
    snapshot.buys_24h as f64 / denominator as f64
}

/// Buy/sell pressure
pub struct BuyPressure;

impl ScoringRule for BuyPressure {
    fn name(&self) -> &'static str {
        "buy_pressure"
    }

    fn evaluate(&self, snapshot: &TokenSnapshot) -> Option<RuleOutcome> {
        let ratio = buy_ratio(snapshot);
        let buy_pct = ratio * 100.0;
        let sell_pct = (1.0 - ratio) * 100.0;

        if ratio > 0.7 {
            Some(RuleOutcome::bullish(
                18,
                format!("Overwhelming buy pressure ({:.0}% buys)", buy_pct),
            ))
        } else if ratio > 0.6 {
            Some(RuleOutcome::bullish(12, format!("Strong buy pressure ({:.0}% buys)", buy_pct)))
        } else if ratio < 0.3 {
            Some(RuleOutcome::bearish(-18, format!("Heavy sell pressure ({:.0}% sells)", sell_pct)))
        } else if ratio < 0.4 {
            Some(RuleOutcome::bearish(-12, format!("Sellers dominating ({:.0}% sells)", sell_pct)))
        } else {
            None
        }
    }
}

/// Absolute pool liquidity in USD
pub struct LiquidityRisk;

impl ScoringRule for LiquidityRisk {
    fn name(&self) -> &'static str {
        "liquidity_risk"
    }

    fn evaluate(&self, snapshot: &TokenSnapshot) -> Option<RuleOutcome> {
        let liquidity = snapshot.liquidity_usd;
        let thousands = liquidity / 1_000.0;

        if liquidity < 5_000.0 {
            Some(RuleOutcome::bearish(
                -30,
                format!("EXTREME RISK: Very low liquidity (${:.1}K)", thousands),
            ))
        } else if liquidity < 20_000.0 {
            Some(RuleOutcome::bearish(
                -20,
                format!("HIGH RISK: Low liquidity (${:.1}K)", thousands),
            ))
        } else if liquidity < 100_000.0 {
            Some(RuleOutcome::bearish(-8, format!("Medium liquidity risk (${:.1}K)", thousands)))
        } else if liquidity > 1_000_000.0 {
            Some(RuleOutcome::bullish(
                8,
                format!("Strong liquidity (${:.2}M)", liquidity / 1_000_000.0),
            ))
        } else {
            None
        }
    }
}

/// 24h volume relative to pool liquidity.
///
/// An empty pool has no meaningful ratio; it is treated as unbounded and lands
/// in the top branch without dividing by zero.
pub struct VolumeToLiquidity;

impl ScoringRule for VolumeToLiquidity {
    fn name(&self) -> &'static str {
        "volume_to_liquidity"
    }

    fn evaluate(&self, snapshot: &TokenSnapshot) -> Option<RuleOutcome> {
        if snapshot.liquidity_usd <= 0.0 {
            return Some(RuleOutcome::bullish(
                12,
                "Exceptional volume (no liquidity to measure against)",
            ));
        }

        let ratio = snapshot.volume_24h / snapshot.liquidity_usd;

        if ratio > 3.0 {
            Some(RuleOutcome::bullish(12, format!("Exceptional volume ({:.1}x liquidity)", ratio)))
        } else if ratio > 1.5 {
            Some(RuleOutcome::bullish(8, format!("High trading volume ({:.1}x liquidity)", ratio)))
        } else if ratio < 0.1 {
            Some(RuleOutcome::bearish(-10, format!("Very low volume ({:.2}x liquidity)", ratio)))
        } else {
            None
        }
    }
}

/// Raw transaction count over 24h
pub struct TradingActivity;

impl ScoringRule for TradingActivity {
    fn name(&self) -> &'static str {
        "trading_activity"
    }

    fn evaluate(&self, snapshot: &TokenSnapshot) -> Option<RuleOutcome> {
        let txns = snapshot.txns_24h();

        if txns > 1000 {
            Some(RuleOutcome::bullish(8, format!("Very active trading ({} txns/24h)", txns)))
        } else if txns > 500 {
            Some(RuleOutcome::bullish(5, format!("Active trading ({} txns/24h)", txns)))
        } else if txns < 50 {
            Some(RuleOutcome::bearish(-12, format!("Low activity ({} txns/24h)", txns)))
        } else {
            None
        }
    }
}

/// Big 24h pump that is rolling over on the 6h window
pub struct PumpExhaustion;

impl ScoringRule for PumpExhaustion {
    fn name(&self) -> &'static str {
        "pump_exhaustion"
    }

    fn evaluate(&self, snapshot: &TokenSnapshot) -> Option<RuleOutcome> {
        let day = snapshot.price_change_24h;
        let six_hour = snapshot.price_change_6h;

        if day > 50.0 && six_hour < -10.0 {
            Some(RuleOutcome::bearish(-20, "PUMP ALERT: Major pump cooling off rapidly"))
        } else if day > 30.0 && six_hour < 0.0 {
            Some(RuleOutcome::bearish(-12, "Caution: Strong pump showing weakness"))
        } else {
            None
        }
    }
}

/// Heavy 24h dump with a strong bounce in the last hour
pub struct ReversalBounce;

impl ScoringRule for ReversalBounce {
    fn name(&self) -> &'static str {
        "reversal_bounce"
    }

    fn evaluate(&self, snapshot: &TokenSnapshot) -> Option<RuleOutcome> {
        if snapshot.price_change_24h < -20.0 && snapshot.price_change_1h > 5.0 {
            Some(RuleOutcome::bullish(15, "Potential reversal: Bouncing after heavy dip"))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signals::RuleBucket;

    fn snapshot() -> TokenSnapshot {
        TokenSnapshot {
            pair_label: "TEST/WPLS".to_string(),
            base_symbol: "TEST".to_string(),
            dex_name: "pulsex".to_string(),
            price: 1.0,
            ..Default::default()
        }
    }

    fn delta(rule: &dyn ScoringRule, snapshot: &TokenSnapshot) -> Option<i32> {
        rule.evaluate(snapshot).map(|outcome| outcome.delta)
    }

    #[test]
    fn test_default_rule_order() {
        let names: Vec<&str> = default_rules().iter().map(|r| r.name()).collect();
        assert_eq!(
            names,
            vec![
                "daily_momentum",
                "six_hour_momentum",
                "hourly_momentum",
                "buy_pressure",
                "liquidity_risk",
                "volume_to_liquidity",
                "trading_activity",
                "pump_exhaustion",
                "reversal_bounce",
            ]
        );
    }

    #[test]
    fn test_daily_momentum_tiers() {
        let cases = [
            (25.0, Some(25)),
            (20.0, Some(15)),
            (10.5, Some(15)),
            (10.0, Some(8)),
            (3.1, Some(8)),
            (3.0, None),
            (0.0, None),
            (-3.0, None),
            (-3.1, Some(-8)),
            (-10.0, Some(-8)),
            (-10.1, Some(-15)),
            (-20.0, Some(-15)),
            (-20.1, Some(-25)),
        ];

        for (change, expected) in cases {
            let s = TokenSnapshot {
                price_change_24h: change,
                ..snapshot()
            };
            assert_eq!(delta(&DailyMomentum, &s), expected, "24h change {}", change);
        }
    }

    #[test]
    fn test_daily_momentum_message() {
        let s = TokenSnapshot {
            price_change_24h: 25.0,
            ..snapshot()
        };
        let outcome = DailyMomentum.evaluate(&s).unwrap();
        assert_eq!(outcome.message, "Explosive 24h momentum (+25.0%)");
        assert_eq!(outcome.bucket, RuleBucket::Bullish);

        let s = TokenSnapshot {
            price_change_24h: -12.34,
            ..snapshot()
        };
        let outcome = DailyMomentum.evaluate(&s).unwrap();
        assert_eq!(outcome.message, "Heavy 24h losses (-12.3%)");
        assert_eq!(outcome.bucket, RuleBucket::Bearish);
    }

    #[test]
    fn test_short_term_momentum_has_no_mid_tier() {
        let s = TokenSnapshot {
            price_change_6h: 8.0,
            price_change_1h: 4.0,
            ..snapshot()
        };
        assert_eq!(delta(&SixHourMomentum, &s), None);
        assert_eq!(delta(&HourlyMomentum, &s), None);

        let s = TokenSnapshot {
            price_change_6h: -11.0,
            price_change_1h: 6.0,
            ..snapshot()
        };
        assert_eq!(delta(&SixHourMomentum, &s), Some(-15));
        assert_eq!(delta(&HourlyMomentum, &s), Some(12));
    }

    #[test]
    fn test_buy_ratio_without_transactions() {
        let s = snapshot();
        assert_eq!(buy_ratio(&s), 0.0);

        let outcome = BuyPressure.evaluate(&s).unwrap();
        assert_eq!(outcome.delta, -18);
        assert_eq!(outcome.message, "Heavy sell pressure (100% sells)");
    }

    #[test]
    fn test_buy_pressure_tiers() {
        let cases = [
            (80, 20, Some(18)),
            (70, 30, Some(12)),
            (65, 35, Some(12)),
            (60, 40, None),
            (50, 50, None),
            (40, 60, None),
            (35, 65, Some(-12)),
            (30, 70, Some(-12)),
            (20, 80, Some(-18)),
        ];

        for (buys, sells, expected) in cases {
            let s = TokenSnapshot {
                buys_24h: buys,
                sells_24h: sells,
                ..snapshot()
            };
            assert_eq!(delta(&BuyPressure, &s), expected, "{} buys / {} sells", buys, sells);
        }
    }

    #[test]
    fn test_liquidity_tiers() {
        let cases = [
            (0.0, Some(-30)),
            (4_999.0, Some(-30)),
            (5_000.0, Some(-20)),
            (19_999.0, Some(-20)),
            (20_000.0, Some(-8)),
            (99_999.0, Some(-8)),
            (100_000.0, None),
            (1_000_000.0, None),
            (1_000_001.0, Some(8)),
        ];

        for (liquidity, expected) in cases {
            let s = TokenSnapshot {
                liquidity_usd: liquidity,
                ..snapshot()
            };
            assert_eq!(delta(&LiquidityRisk, &s), expected, "liquidity {}", liquidity);
        }
    }

    #[test]
    fn test_liquidity_messages() {
        let s = TokenSnapshot {
            liquidity_usd: 3_000.0,
            ..snapshot()
        };
        let outcome = LiquidityRisk.evaluate(&s).unwrap();
        assert_eq!(outcome.message, "EXTREME RISK: Very low liquidity ($3.0K)");

        let s = TokenSnapshot {
            liquidity_usd: 2_500_000.0,
            ..snapshot()
        };
        let outcome = LiquidityRisk.evaluate(&s).unwrap();
        assert_eq!(outcome.message, "Strong liquidity ($2.50M)");
    }

    #[test]
    fn test_volume_ratio_tiers() {
        let cases = [
            (400_000.0, Some(12)),
            (200_000.0, Some(8)),
            (150_000.0, None),
            (10_000.0, None),
            (9_999.0, Some(-10)),
            (0.0, Some(-10)),
        ];

        for (volume, expected) in cases {
            let s = TokenSnapshot {
                volume_24h: volume,
                liquidity_usd: 100_000.0,
                ..snapshot()
            };
            assert_eq!(delta(&VolumeToLiquidity, &s), expected, "volume {}", volume);
        }
    }

    #[test]
    fn test_volume_ratio_with_empty_pool() {
        let s = TokenSnapshot {
            volume_24h: 0.0,
            liquidity_usd: 0.0,
            ..snapshot()
        };
        let outcome = VolumeToLiquidity.evaluate(&s).unwrap();
        assert_eq!(outcome.delta, 12);
        assert_eq!(outcome.bucket, RuleBucket::Bullish);
    }

    #[test]
    fn test_activity_tiers() {
        let cases = [
            (1001, Some(8)),
            (1000, Some(5)),
            (501, Some(5)),
            (500, None),
            (50, None),
            (49, Some(-12)),
            (0, Some(-12)),
        ];

        for (buys, expected) in cases {
            let s = TokenSnapshot {
                buys_24h: buys,
                ..snapshot()
            };
            assert_eq!(delta(&TradingActivity, &s), expected, "txns {}", buys);
        }
    }

    #[test]
    fn test_pump_exhaustion_precedence() {
        let strong = TokenSnapshot {
            price_change_24h: 60.0,
            price_change_6h: -15.0,
            ..snapshot()
        };
        let outcome = PumpExhaustion.evaluate(&strong).unwrap();
        assert_eq!(outcome.delta, -20);
        assert_eq!(outcome.message, "PUMP ALERT: Major pump cooling off rapidly");

        let weakening = TokenSnapshot {
            price_change_24h: 60.0,
            price_change_6h: -5.0,
            ..snapshot()
        };
        assert_eq!(delta(&PumpExhaustion, &weakening), Some(-12));

        let healthy = TokenSnapshot {
            price_change_24h: 60.0,
            price_change_6h: 5.0,
            ..snapshot()
        };
        assert_eq!(delta(&PumpExhaustion, &healthy), None);
    }

    #[test]
    fn test_reversal_bounce() {
        let bounce = TokenSnapshot {
            price_change_24h: -30.0,
            price_change_1h: 7.0,
            ..snapshot()
        };
        assert_eq!(delta(&ReversalBounce, &bounce), Some(15));

        let still_falling = TokenSnapshot {
            price_change_24h: -30.0,
            price_change_1h: -2.0,
            ..snapshot()
        };
        assert_eq!(delta(&ReversalBounce, &still_falling), None);
    }
}
