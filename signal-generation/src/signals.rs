// Signal Types
// Verdict, confidence and trade levels produced by the signal engine

use serde::{Deserialize, Serialize};

/// Discrete signal classification derived from the final score
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SignalTier {
    StrongBuy,
    Buy,
    WeakBuy,
    Hold,
    WeakSell,
    Sell,
    StrongSell,
}

impl SignalTier {
    /// Classify a score. Thresholds are inclusive lower bounds, checked high to low,
    /// so anything above 100 saturates at StrongBuy and anything below 15 at StrongSell.
    pub fn from_score(score: i32) -> Self {
        match score {
            s if s >= 80 => SignalTier::StrongBuy,
            s if s >= 65 => SignalTier::Buy,
            s if s >= 50 => SignalTier::WeakBuy,
            s if s >= 40 => SignalTier::Hold,
            s if s >= 25 => SignalTier::WeakSell,
            s if s >= 15 => SignalTier::Sell,
            _ => SignalTier::StrongSell,
        }
    }

    pub fn confidence(&self) -> Confidence {
        match self {
            SignalTier::StrongBuy | SignalTier::StrongSell => Confidence::VeryHigh,
            SignalTier::Buy | SignalTier::Sell => Confidence::High,
            SignalTier::WeakBuy | SignalTier::WeakSell => Confidence::Medium,
            SignalTier::Hold => Confidence::Low,
        }
    }

    /// Buy-family tiers are the only ones that carry trade levels
    pub fn is_buy(&self) -> bool {
        matches!(
            self,
            SignalTier::StrongBuy | SignalTier::Buy | SignalTier::WeakBuy
        )
    }

    pub fn label(&self) -> &'static str {
        match self {
            SignalTier::StrongBuy => "STRONG BUY",
            SignalTier::Buy => "BUY",
            SignalTier::WeakBuy => "WEAK BUY",
            SignalTier::Hold => "HOLD",
            SignalTier::WeakSell => "WEAK SELL",
            SignalTier::Sell => "SELL",
            SignalTier::StrongSell => "STRONG SELL",
        }
    }
}

/// Fixed confidence label attached to each tier
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Confidence {
    VeryHigh,
    High,
    Medium,
    Low,
}

impl Confidence {
    pub fn label(&self) -> &'static str {
        match self {
            Confidence::VeryHigh => "Very High",
            Confidence::High => "High",
            Confidence::Medium => "Medium",
            Confidence::Low => "Low",
        }
    }
}

/// Which rationale list a rule's message belongs to
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum RuleBucket {
    Bullish,
    Bearish,
}

/// Contribution of a single rule that matched
#[derive(Debug, Clone, PartialEq)]
pub struct RuleOutcome {
    pub delta: i32,
    pub message: String,
    pub bucket: RuleBucket,
}

impl RuleOutcome {
    pub fn bullish(delta: i32, message: impl Into<String>) -> Self {
        Self {
            delta,
            message: message.into(),
            bucket: RuleBucket::Bullish,
        }
    }

    pub fn bearish(delta: i32, message: impl Into<String>) -> Self {
        Self {
            delta,
            message: message.into(),
            bucket: RuleBucket::Bearish,
        }
    }
}

/// Suggested entry, stop and take-profit prices
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct TradeLevels {
    pub entry: f64,
    pub stop_loss: f64,
    /// 2:1 reward/risk
    pub take_profit_1: f64,
    /// 4:1 reward/risk
    pub take_profit_2: f64,
    /// 6:1 reward/risk
    pub take_profit_3: f64,
}

/// Final verdict for one snapshot
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SignalResult {
    pub score: i32,
    pub tier: SignalTier,
    pub confidence: Confidence,
    /// Bullish rationale in rule evaluation order
    pub reasons: Vec<String>,
    /// Bearish and risk rationale in rule evaluation order
    pub warnings: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trade_levels: Option<TradeLevels>,
}
