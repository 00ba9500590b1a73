// Signal Generation
// Deterministic buy/sell/hold scoring of a single normalized token snapshot

pub mod engine;
pub mod levels;
pub mod rules;
pub mod signals;

pub use engine::{evaluate, SignalEngine, BASELINE_SCORE};
pub use rules::{
    default_rules, BuyPressure, DailyMomentum, HourlyMomentum, LiquidityRisk, PumpExhaustion,
    ReversalBounce, ScoringRule, SixHourMomentum, TradingActivity, VolumeToLiquidity,
};
pub use signals::{Confidence, RuleBucket, RuleOutcome, SignalResult, SignalTier, TradeLevels};
