//! Collection orchestration: iterate all prefectures, persist one artifact
//! per prefecture, then write the run summary.

mod pace;

pub use pace::IntervalGate;

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{error, info};

use crate::config::CollectorConfig;
use crate::domain::{CollectionSummary, PrefectureArtifact};
use crate::prefectures::{PREFECTURES, short_name};
use crate::source::DataSource;

/// File name of the run summary inside the output directory.
pub const SUMMARY_FILE: &str = "collection_summary.json";

/// Runs one full collection pass over the prefecture list.
pub struct Collector {
    config: CollectorConfig,
    source: DataSource,
}

impl Collector {
    pub fn new(config: CollectorConfig, source: DataSource) -> Self {
        Self { config, source }
    }

    /// Collect data for every prefecture, in list order.
    ///
    /// Each prefecture is attempted exactly once; fetch and persistence
    /// failures are recorded as `false` and the loop continues. The
    /// returned map always carries one entry per prefecture.
    pub fn run(&self) -> BTreeMap<String, bool> {
        let total = PREFECTURES.len();
        let mut results = BTreeMap::new();
        let mut gate = IntervalGate::new(self.config.pacing);

        info!("Starting data collection for {total} prefectures...");

        for (i, prefecture) in PREFECTURES.iter().enumerate() {
            info!("Processing {prefecture} ({}/{total})", i + 1);
            gate.wait();

            let ok = match self.source.fetch(prefecture) {
                Some(artifact) => {
                    info!(
                        "Successfully collected data for {prefecture}: {} schools",
                        artifact.total_schools
                    );
                    match self.persist(prefecture, &artifact) {
                        Ok(path) => {
                            info!("Saved data for {prefecture} to {}", path.display());
                            true
                        }
                        Err(e) => {
                            error!("Failed to save data for {prefecture}: {e:#}");
                            false
                        }
                    }
                }
                None => {
                    error!("Failed to collect data for {prefecture}");
                    false
                }
            };

            results.insert(prefecture.to_string(), ok);
        }

        results
    }

    /// Write one prefecture artifact as pretty-printed JSON. Non-ASCII
    /// text is written as-is; serde_json does not escape it.
    fn persist(&self, prefecture: &str, artifact: &PrefectureArtifact) -> Result<PathBuf> {
        fs::create_dir_all(&self.config.output_dir).with_context(|| {
            format!(
                "Failed to create output directory {}",
                self.config.output_dir.display()
            )
        })?;

        let path = self.artifact_path(prefecture);
        let json = serde_json::to_string_pretty(artifact)
            .with_context(|| format!("Failed to serialize artifact for {prefecture}"))?;
        fs::write(&path, json)
            .with_context(|| format!("Failed to write {}", path.display()))?;

        Ok(path)
    }

    /// Artifact file path for a prefecture, e.g. `db/schools/東京_schools.json`.
    pub fn artifact_path(&self, prefecture: &str) -> PathBuf {
        self.config
            .output_dir
            .join(format!("{}_schools.json", short_name(prefecture)))
    }

    /// Aggregate a run's results and write the summary artifact.
    pub fn write_summary(&self, results: BTreeMap<String, bool>) -> Result<CollectionSummary> {
        let summary = CollectionSummary::from_results(
            results,
            &self.config.output_dir,
            self.config.api_connected(),
        );

        fs::create_dir_all(&self.config.output_dir).with_context(|| {
            format!(
                "Failed to create output directory {}",
                self.config.output_dir.display()
            )
        })?;

        let path = self.config.output_dir.join(SUMMARY_FILE);
        let json = serde_json::to_string_pretty(&summary)
            .context("Failed to serialize collection summary")?;
        fs::write(&path, json)
            .with_context(|| format!("Failed to write {}", path.display()))?;

        info!("Collection Summary:");
        info!("  Total prefectures: {}", summary.total_prefectures);
        info!("  Successful: {}", summary.successful_collections);
        info!("  Failed: {}", summary.failed_collections);
        info!("  Success rate: {}", summary.success_rate);
        info!("  Summary saved to: {}", path.display());

        Ok(summary)
    }
}

/// Load a previously written collection summary, e.g. for the
/// collection-completion notification.
pub fn load_summary(output_dir: &Path) -> Result<CollectionSummary> {
    let path = output_dir.join(SUMMARY_FILE);
    let content = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let summary = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    Ok(summary)
}
