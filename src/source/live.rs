//! Live DeepResearch API client.

use std::time::Duration;

use crate::domain::PrefectureArtifact;

/// Error type for live API requests. The orchestrator never sees these
/// directly; the source boundary converts them to an absent result.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("HTTP {0}: {1}")]
    Status(u16, String),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("failed to parse response: {0}")]
    Parse(#[from] std::io::Error),
}

/// Blocking client for the DeepResearch `schools/search` endpoint.
pub struct LiveClient {
    base_url: String,
    api_key: String,
    agent: ureq::Agent,
}

impl LiveClient {
    const TIMEOUT: Duration = Duration::from_secs(30);

    pub fn new(base_url: String, api_key: String) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(Self::TIMEOUT).build();
        Self {
            base_url,
            api_key,
            agent,
        }
    }

    /// Query all high schools for a prefecture, with full details included.
    /// The response body is taken verbatim as the prefecture artifact; no
    /// field-level validation happens here.
    pub fn search_schools(&self, prefecture: &str) -> Result<PrefectureArtifact, SourceError> {
        let url = format!("{}/schools/search", self.base_url.trim_end_matches('/'));

        let response = self
            .agent
            .get(&url)
            .set("Authorization", &format!("Bearer {}", self.api_key))
            .set("Content-Type", "application/json")
            .query("prefecture", prefecture)
            .query("school_type", "high_school")
            .query("include_details", "true")
            .call()
            .map_err(|e| match e {
                ureq::Error::Status(code, resp) => {
                    let body = resp.into_string().unwrap_or_default();
                    SourceError::Status(code, body)
                }
                other => SourceError::Transport(other.to_string()),
            })?;

        let artifact: PrefectureArtifact = response.into_json()?;
        Ok(artifact)
    }
}
