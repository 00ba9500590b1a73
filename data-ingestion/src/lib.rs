pub mod analysis;
pub mod config;
pub mod connectors;
pub mod display;
pub mod normalizer;

pub use analysis::{analyze_document, analyze_pairs, analyze_token, AnalysisError, AnalysisReport};
pub use config::{create_config_template, load_config, load_settings, IngestionConfig};
pub use connectors::{DexPair, DexScreenerConnector, PairSource, TokenPairsResponse};
pub use display::{render_report, TextReport};
pub use normalizer::{normalize, normalize_top, NormalizeError};
