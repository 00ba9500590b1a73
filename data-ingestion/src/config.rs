//! Ingestion configuration

use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

/// Environment variable prefix, e.g. `DEX_SIGNAL_LOG_LEVEL=debug`
pub const ENV_PREFIX: &str = "DEX_SIGNAL";

/// Settings for fetching and filtering market data
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IngestionConfig {
    /// DexScreener API root
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// HTTP request timeout (in seconds)
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Chains whose pairs are analyzed; everything else is filtered out
    #[serde(default = "default_chain_ids")]
    pub chain_ids: Vec<String>,

    /// Log level for the binary (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for IngestionConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            request_timeout_secs: default_request_timeout_secs(),
            chain_ids: default_chain_ids(),
            log_level: default_log_level(),
        }
    }
}

fn default_api_base_url() -> String {
    "https://api.dexscreener.com".to_string()
}

fn default_request_timeout_secs() -> u64 {
    10
}

fn default_chain_ids() -> Vec<String> {
    vec!["pulsechain".to_string(), "pulse".to_string()]
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Load layered settings: defaults, then the optional TOML file, then
/// `DEX_SIGNAL_*` environment variables (`DEX_SIGNAL_CHAIN_IDS` is comma separated).
pub fn load_settings(path: Option<&str>) -> anyhow::Result<IngestionConfig> {
    let mut builder = Config::builder();

    if let Some(path) = path {
        builder = builder.add_source(File::new(path, FileFormat::Toml).required(true));
    }

    let settings = builder
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .try_parsing(true)
                .list_separator(",")
                .with_list_parse_key("chain_ids"),
        )
        .build()?;

    Ok(settings.try_deserialize()?)
}

/// Load configuration from TOML file
pub fn load_config(path: &str) -> anyhow::Result<IngestionConfig> {
    let content = std::fs::read_to_string(path)?;
    let config: IngestionConfig = toml::from_str(&content)?;
    Ok(config)
}

/// Create a default configuration file template
pub fn create_config_template(path: &str) -> anyhow::Result<()> {
    let template = "# DEX Signal Configuration

# DexScreener API root
api_base_url = \"https://api.dexscreener.com\"

# HTTP request timeout (seconds)
request_timeout_secs = 10

# Only pairs on these chains are analyzed
chain_ids = [\"pulsechain\", \"pulse\"]

# trace, debug, info, warn or error
log_level = \"info\"
";

    std::fs::write(path, template)?;
    Ok(())
}
