use std::collections::BTreeMap;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Aggregated outcome of one full collection run across all prefectures.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionSummary {
    pub collection_date: DateTime<Utc>,
    pub total_prefectures: usize,
    pub successful_collections: usize,
    pub failed_collections: usize,
    /// Formatted percentage with one decimal place, e.g. "97.9%".
    pub success_rate: String,
    /// Per-prefecture outcome. Always one entry per enumerated prefecture.
    pub results: BTreeMap<String, bool>,
    pub output_directory: String,
    /// "connected" when an API credential was configured, else "placeholder_mode".
    pub api_status: String,
}

impl CollectionSummary {
    /// Aggregate a run's outcome map into a summary. A run over zero
    /// prefectures yields a "0.0%" rate rather than dividing by zero.
    pub fn from_results(
        results: BTreeMap<String, bool>,
        output_dir: &Path,
        api_connected: bool,
    ) -> Self {
        let total = results.len();
        let successful = results.values().filter(|ok| **ok).count();
        let failed = total - successful;

        let rate = if total == 0 {
            0.0
        } else {
            successful as f64 / total as f64 * 100.0
        };

        Self {
            collection_date: Utc::now(),
            total_prefectures: total,
            successful_collections: successful,
            failed_collections: failed,
            success_rate: format!("{rate:.1}%"),
            results,
            output_directory: output_dir.display().to_string(),
            api_status: if api_connected {
                "connected".to_string()
            } else {
                "placeholder_mode".to_string()
            },
        }
    }
}
