//! Data sources for prefecture school data.
//!
//! The source is picked once at startup from the collector config: a live
//! DeepResearch client when an API key is present, otherwise the synthetic
//! generator. The orchestrator is handed the selected source and never
//! branches on credentials itself.

mod live;
pub mod synthetic;

pub use live::{LiveClient, SourceError};

use tracing::error;

use crate::config::CollectorConfig;
use crate::domain::PrefectureArtifact;

/// Where school data comes from for this run.
pub enum DataSource {
    /// Live DeepResearch API queries.
    Live(LiveClient),
    /// Deterministic placeholder data, used when no credential is configured.
    Synthetic,
}

impl DataSource {
    /// Select the source for this run based on credential presence.
    pub fn from_config(config: &CollectorConfig) -> Self {
        match &config.api_key {
            Some(key) => DataSource::Live(LiveClient::new(config.base_url.clone(), key.clone())),
            None => DataSource::Synthetic,
        }
    }

    /// Fetch school data for one prefecture.
    ///
    /// Never returns an error: live-source failures are logged and mapped
    /// to `None`, which the orchestrator records as a per-prefecture
    /// failure. The synthetic source always succeeds.
    pub fn fetch(&self, prefecture: &str) -> Option<PrefectureArtifact> {
        match self {
            DataSource::Synthetic => Some(synthetic::generate(prefecture)),
            DataSource::Live(client) => match client.search_schools(prefecture) {
                Ok(artifact) => Some(artifact),
                Err(e) => {
                    error!("API request failed for {prefecture}: {e}");
                    None
                }
            },
        }
    }

    pub fn is_live(&self) -> bool {
        matches!(self, DataSource::Live(_))
    }
}
