use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, Level};

use data_ingestion::analysis::{analyze_document, analyze_token, AnalysisReport};
use data_ingestion::config::{create_config_template, load_config, load_settings};
use data_ingestion::connectors::DexScreenerConnector;
use data_ingestion::display::render_report;

#[derive(Parser, Debug)]
#[command(author, version, about = "Trading signals for DEX tokens from live DexScreener data")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Fetch live pairs for a token contract and print the signal.
    Analyze {
        /// Token contract address (0x followed by 40 hex digits).
        address: String,

        /// Print the report as JSON instead of text.
        #[arg(long)]
        json: bool,

        /// Optional TOML configuration file.
        #[arg(short, long)]
        config: Option<String>,
    },

    /// Evaluate a saved DexScreener token response without touching the network.
    Evaluate {
        /// Path to the saved JSON response.
        #[arg(short, long)]
        file: String,

        /// Print the report as JSON instead of text.
        #[arg(long)]
        json: bool,

        /// Optional TOML configuration file.
        #[arg(short, long)]
        config: Option<String>,
    },

    /// Write a configuration template with the default settings.
    InitConfig {
        /// Where to write the template.
        path: String,
    },
}

fn init_tracing(log_level: &str) {
    let level = log_level.parse::<Level>().unwrap_or(Level::INFO);

    // Logs go to stderr so JSON output on stdout stays clean
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn print_report(report: &AnalysisReport, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        println!("{}", render_report(report));
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze { address, json, config } => {
            let settings = load_settings(config.as_deref())?;
            init_tracing(&settings.log_level);

            info!("🔍 Analyzing token {}", address);

            let connector = DexScreenerConnector::new(&settings)?;
            let report = analyze_token(&connector, &address, &settings).await?;

            info!(
                "✅ {} scored {} ({})",
                report.snapshot.base_symbol,
                report.signal.score,
                report.signal.tier.label()
            );
            print_report(&report, json)?;
        }
        Commands::Evaluate { file, json, config } => {
            let settings = load_settings(config.as_deref())?;
            init_tracing(&settings.log_level);

            info!("📄 Evaluating saved response {}", file);

            let raw = std::fs::read_to_string(&file)
                .with_context(|| format!("Failed to read {}", file))?;
            let report = analyze_document(&raw, &settings)?;
            print_report(&report, json)?;
        }
        Commands::InitConfig { path } => {
            create_config_template(&path)?;

            // Template must parse back
            let written = load_config(&path)
                .with_context(|| format!("Template at {} does not parse", path))?;
            println!(
                "✅ Configuration template written to {} (chains: {})",
                path,
                written.chain_ids.join(", ")
            );
        }
    }

    Ok(())
}
