//! Collects school data for all prefectures and writes the run summary.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::{info, warn};

use edusalon::collect::Collector;
use edusalon::config::CollectorConfig;
use edusalon::source::DataSource;

#[derive(Parser)]
#[command(name = "collector")]
#[command(about = "Collect school data for all Japanese prefectures via DeepResearch")]
#[command(version)]
struct Cli {
    /// Output directory for per-prefecture artifacts and the summary
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    info!("Starting DeepResearch School Data Collection");

    let mut config = CollectorConfig::from_env();
    if let Some(dir) = cli.output_dir {
        config.output_dir = dir;
    }

    if !config.api_connected() {
        warn!("DEEPRESEARCH_API_KEY environment variable not set.");
        warn!("Running in placeholder mode - generating sample data.");
    }

    let source = DataSource::from_config(&config);
    let collector = Collector::new(config, source);

    let results = collector.run();
    collector.write_summary(results)?;

    info!("Data collection completed!");
    Ok(())
}
