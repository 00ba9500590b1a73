// Example: Scoring a Token Snapshot
// Runs the standard rule battery over a hand-built snapshot, then again with an extra rule

use common::TokenSnapshot;
use signal_generation::{RuleOutcome, ScoringRule, SignalEngine, SignalResult};

/// Extra rule: penalize tokens whose FDV dwarfs the circulating market cap
struct DilutionRisk;

impl ScoringRule for DilutionRisk {
    fn name(&self) -> &'static str {
        "dilution_risk"
    }

    fn evaluate(&self, snapshot: &TokenSnapshot) -> Option<RuleOutcome> {
        if snapshot.market_cap > 0.0 && snapshot.fdv > snapshot.market_cap * 10.0 {
            Some(RuleOutcome::bearish(
                -10,
                "Heavy dilution ahead (FDV > 10x market cap)",
            ))
        } else {
            None
        }
    }
}

fn print_result(result: &SignalResult) {
    println!(
        "  {} (score {}, confidence {})",
        result.tier.label(),
        result.score,
        result.confidence.label()
    );
    for reason in &result.reasons {
        println!("    + {}", reason);
    }
    for warning in &result.warnings {
        println!("    - {}", warning);
    }
    if let Some(levels) = &result.trade_levels {
        println!(
            "    entry {:.6}, stop {:.6}, TP {:.6} / {:.6} / {:.6}",
            levels.entry,
            levels.stop_loss,
            levels.take_profit_1,
            levels.take_profit_2,
            levels.take_profit_3
        );
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Signal Engine - Basic Example ===\n");

    let snapshot = TokenSnapshot {
        pair_label: "PLSX/WPLS".to_string(),
        base_symbol: "PLSX".to_string(),
        dex_name: "pulsex".to_string(),
        price: 0.0000321,
        price_change_24h: 12.4,
        price_change_6h: 3.1,
        price_change_1h: -0.4,
        volume_24h: 640_000.0,
        liquidity_usd: 420_000.0,
        buys_24h: 820,
        sells_24h: 610,
        market_cap: 900_000.0,
        fdv: 12_000_000.0,
    };

    println!("Standard rules:");
    print_result(&SignalEngine::new().evaluate(&snapshot));

    println!("\nStandard rules + dilution check:");
    let engine = SignalEngine::new().add_rule(Box::new(DilutionRisk));
    print_result(&engine.evaluate(&snapshot));
}
