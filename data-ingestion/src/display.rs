// Report Rendering
// Plain-text rendering of an AnalysisReport for the terminal

use std::fmt;

use crate::analysis::AnalysisReport;
use signal_generation::SignalTier;

const DISCLAIMER: &str = "Disclaimer: This is automated analysis based on live market data \
patterns. NOT financial advice. Always do your own research (DYOR) and never invest more than \
you can afford to lose.";

fn tier_marker(tier: SignalTier) -> &'static str {
    match tier {
        SignalTier::StrongBuy => "🚀",
        SignalTier::Buy => "📈",
        SignalTier::WeakBuy => "👍",
        SignalTier::Hold => "⏸️",
        SignalTier::WeakSell => "👎",
        SignalTier::Sell => "📉",
        SignalTier::StrongSell => "🚨",
    }
}

/// Sub-cent prices get 10 decimals, everything else 6
pub fn format_price(price: f64) -> String {
    if price < 0.01 {
        format!("${:.10}", price)
    } else {
        format!("${:.6}", price)
    }
}

/// `$1.23M` from one million up, `$45.6K` below
pub fn format_usd_compact(value: f64) -> String {
    if value >= 1_000_000.0 {
        format!("${:.2}M", value / 1_000_000.0)
    } else {
        format!("${:.1}K", value / 1_000.0)
    }
}

/// Signed percentage with two decimals
pub fn format_change(change: f64) -> String {
    if change >= 0.0 {
        format!("+{:.2}%", change)
    } else {
        format!("{:.2}%", change)
    }
}

/// Terminal rendering of a report
pub struct TextReport<'a>(pub &'a AnalysisReport);

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.0;
        let signal = &report.signal;
        let data = &report.snapshot;

        writeln!(
            f,
            "{} {}  (score {} / 100, confidence: {})",
            tier_marker(signal.tier),
            signal.tier.label(),
            signal.score,
            signal.confidence.label()
        )?;

        writeln!(f, "\nLive Market Data")?;
        writeln!(f, "  Token:            {}", data.base_symbol)?;
        writeln!(f, "  Pair:             {}", data.pair_label)?;
        writeln!(f, "  DEX:              {} ({})", data.dex_name, report.chain_id)?;
        writeln!(f, "  Price:            {}", format_price(data.price))?;
        writeln!(f, "  24h Change:       {}", format_change(data.price_change_24h))?;
        writeln!(f, "  6h Change:        {}", format_change(data.price_change_6h))?;
        writeln!(f, "  1h Change:        {}", format_change(data.price_change_1h))?;
        writeln!(f, "  24h Volume:       {}", format_usd_compact(data.volume_24h))?;
        writeln!(f, "  Liquidity:        {}", format_usd_compact(data.liquidity_usd))?;
        writeln!(f, "  24h Transactions: {}", data.txns_24h())?;
        if let Some(url) = &report.dex_url {
            writeln!(f, "  Chart:            {}", url)?;
        }

        if !signal.reasons.is_empty() {
            writeln!(f, "\nBullish Signals Detected")?;
            for reason in &signal.reasons {
                writeln!(f, "  ✓ {}", reason)?;
            }
        }

        if !signal.warnings.is_empty() {
            writeln!(f, "\nRisk Factors Identified")?;
            for warning in &signal.warnings {
                writeln!(f, "  ⚠ {}", warning)?;
            }
        }

        if let Some(levels) = &signal.trade_levels {
            writeln!(f, "\nSuggested Trade Setup")?;
            writeln!(f, "  Entry:                   {}", format_price(levels.entry))?;
            writeln!(f, "  Stop Loss:               {}", format_price(levels.stop_loss))?;
            writeln!(f, "  Take Profit 1 (2:1 R/R): {}", format_price(levels.take_profit_1))?;
            writeln!(f, "  Take Profit 2 (4:1 R/R): {}", format_price(levels.take_profit_2))?;
            writeln!(f, "  Take Profit 3 (6:1 R/R): {}", format_price(levels.take_profit_3))?;
            writeln!(
                f,
                "  Tip: consider scaling out at each level (33% at TP1, 33% at TP2, 34% at TP3)"
            )?;
        }

        writeln!(f, "\n{}", DISCLAIMER)
    }
}

pub fn render_report(report: &AnalysisReport) -> String {
    TextReport(report).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use common::TokenSnapshot;
    use signal_generation::evaluate;

    fn report_for(snapshot: TokenSnapshot) -> AnalysisReport {
        let signal = evaluate(&snapshot);
        AnalysisReport {
            token: None,
            chain_id: "pulsechain".to_string(),
            dex_url: None,
            generated_at: Utc::now(),
            snapshot,
            signal,
        }
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(0.005612), "$0.0056120000");
        assert_eq!(format_price(1.5), "$1.500000");
    }

    #[test]
    fn test_format_usd_compact() {
        assert_eq!(format_usd_compact(2_500_000.0), "$2.50M");
        assert_eq!(format_usd_compact(1_000_000.0), "$1.00M");
        assert_eq!(format_usd_compact(45_600.0), "$45.6K");
        assert_eq!(format_usd_compact(0.0), "$0.0K");
    }

    #[test]
    fn test_format_change() {
        assert_eq!(format_change(6.125), "+6.13%");
        assert_eq!(format_change(0.0), "+0.00%");
        assert_eq!(format_change(-2.5), "-2.50%");
    }

    #[test]
    fn test_buy_report_has_trade_setup() {
        let report = report_for(TokenSnapshot {
            pair_label: "HEX/WPLS".to_string(),
            base_symbol: "HEX".to_string(),
            dex_name: "pulsex".to_string(),
            price: 0.05,
            price_change_24h: 25.0,
            buys_24h: 960,
            sells_24h: 240,
            liquidity_usd: 2_000_000.0,
            volume_24h: 5_000_000.0,
            ..Default::default()
        });

        let text = render_report(&report);
        assert!(text.contains("STRONG BUY"));
        assert!(text.contains("Bullish Signals Detected"));
        assert!(text.contains("Suggested Trade Setup"));
        assert!(!text.contains("Risk Factors Identified"));
        assert!(text.contains("NOT financial advice"));
    }

    #[test]
    fn test_sell_report_has_no_trade_setup() {
        let report = report_for(TokenSnapshot {
            liquidity_usd: 3_000.0,
            ..Default::default()
        });

        let text = render_report(&report);
        assert_eq!(text, format!("{}", TextReport(&report)));
        assert!(text.contains("STRONG SELL"));
        assert!(text.contains("Risk Factors Identified"));
        assert!(!text.contains("Suggested Trade Setup"));
    }

    #[test]
    fn test_market_data_section() {
        let mut report = report_for(TokenSnapshot {
            pair_label: "HEX/WPLS".to_string(),
            base_symbol: "HEX".to_string(),
            dex_name: "pulsex".to_string(),
            price: 0.005612,
            price_change_24h: -4.0,
            buys_24h: 300,
            sells_24h: 250,
            liquidity_usd: 450_000.0,
            volume_24h: 90_000.0,
            ..Default::default()
        });
        report.dex_url = Some("https://dexscreener.com/pulsechain/pulsex".to_string());

        let text = TextReport(&report).to_string();
        assert!(text.contains("  DEX:              pulsex (pulsechain)"));
        assert!(text.contains("  Price:            $0.0056120000"));
        assert!(text.contains("  24h Change:       -4.00%"));
        assert!(text.contains("  Liquidity:        $450.0K"));
        assert!(text.contains("  24h Transactions: 550"));
        assert!(text.contains("  Chart:            https://dexscreener.com/pulsechain/pulsex"));
        assert!(text.ends_with("you can afford to lose.\n"));
    }
}
