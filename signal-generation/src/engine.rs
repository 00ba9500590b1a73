// Signal Engine
// Folds the ordered rule battery into a score, classifies it and derives trade levels

use super::rules::{default_rules, ScoringRule};
use super::signals::{RuleBucket, SignalResult, SignalTier, TradeLevels};
use common::TokenSnapshot;
use tracing::{debug, info};

/// Neutral starting score before any rule fires
pub const BASELINE_SCORE: i32 = 50;

/// Stateless evaluator over an ordered list of scoring rules
pub struct SignalEngine {
    rules: Vec<Box<dyn ScoringRule + Send + Sync>>,
}

impl SignalEngine {
    /// Create an engine with the standard rule battery
    pub fn new() -> Self {
        Self {
            rules: default_rules(),
        }
    }

    /// Create an engine with no rules; every snapshot scores the baseline
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// Append a rule to the end of the evaluation order
    pub fn add_rule(mut self, rule: Box<dyn ScoringRule + Send + Sync>) -> Self {
        debug!("Adding scoring rule: {}", rule.name());
        self.rules.push(rule);
        self
    }

    /// Evaluate one snapshot.
    ///
    /// Pure: the same snapshot always yields the same result.
    pub fn evaluate(&self, snapshot: &TokenSnapshot) -> SignalResult {
        let mut score = BASELINE_SCORE;
        let mut reasons = Vec::new();
        let mut warnings = Vec::new();

        for rule in &self.rules {
            let Some(outcome) = rule.evaluate(snapshot) else {
                continue;
            };

            debug!(
                rule = rule.name(),
                delta = outcome.delta,
                "Rule fired: {}",
                outcome.message
            );

            score = score.saturating_add(outcome.delta);
            match outcome.bucket {
                RuleBucket::Bullish => reasons.push(outcome.message),
                RuleBucket::Bearish => warnings.push(outcome.message),
            }
        }

        let tier = SignalTier::from_score(score);
        let trade_levels = tier
            .is_buy()
            .then(|| TradeLevels::from_price(snapshot.price));

        info!(
            pair = %snapshot.pair_label,
            score,
            tier = tier.label(),
            "Signal evaluated"
        );

        SignalResult {
            score,
            tier,
            confidence: tier.confidence(),
            reasons,
            warnings,
            trade_levels,
        }
    }

    /// Get the number of registered rules
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }
}

impl Default for SignalEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Evaluate a snapshot with the standard rule battery
pub fn evaluate(snapshot: &TokenSnapshot) -> SignalResult {
    SignalEngine::new().evaluate(snapshot)
}
