//! Configuration snapshots for the collector and notifier.
//!
//! The environment is read exactly once at startup; every component takes
//! its config by value instead of looking up variables itself.

use std::path::PathBuf;
use std::time::Duration;

/// Default DeepResearch API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.deepresearch.com/v1";

/// Default directory for per-prefecture artifacts and the run summary.
pub const DEFAULT_OUTPUT_DIR: &str = "db/schools";

/// Default delay between prefecture fetches.
pub const DEFAULT_PACING: Duration = Duration::from_secs(1);

/// Collector configuration.
#[derive(Debug, Clone)]
pub struct CollectorConfig {
    /// DeepResearch API key. When absent the collector runs in
    /// placeholder mode and synthesizes sample data.
    pub api_key: Option<String>,
    pub base_url: String,
    pub output_dir: PathBuf,
    /// Minimum delay between prefecture fetches, to respect API rate limits.
    pub pacing: Duration,
}

impl CollectorConfig {
    /// Snapshot the collector environment (`DEEPRESEARCH_API_KEY`,
    /// `DEEPRESEARCH_BASE_URL`).
    pub fn from_env() -> Self {
        Self {
            api_key: non_empty(std::env::var("DEEPRESEARCH_API_KEY").ok()),
            base_url: std::env::var("DEEPRESEARCH_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            pacing: DEFAULT_PACING,
        }
    }

    /// Whether a live API credential is configured.
    pub fn api_connected(&self) -> bool {
        self.api_key.is_some()
    }
}

impl Default for CollectorConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            pacing: DEFAULT_PACING,
        }
    }
}

/// Notifier configuration.
#[derive(Debug, Clone)]
pub struct NotifierConfig {
    /// Slack incoming-webhook URL. When absent, notifications are written
    /// to the log instead (log-only delivery still counts as delivered).
    pub webhook_url: Option<String>,
    pub channel: String,
    pub bot_name: String,
    pub bot_icon: String,
}

impl NotifierConfig {
    /// Snapshot the notifier environment (`SLACK_WEBHOOK_URL`,
    /// `SLACK_CHANNEL`, `SLACK_BOT_NAME`, `SLACK_BOT_ICON`).
    pub fn from_env() -> Self {
        Self {
            webhook_url: non_empty(std::env::var("SLACK_WEBHOOK_URL").ok()),
            channel: std::env::var("SLACK_CHANNEL")
                .unwrap_or_else(|_| "#devin-task-devin関連の依頼と進捗".to_string()),
            bot_name: std::env::var("SLACK_BOT_NAME")
                .unwrap_or_else(|_| "Education Salon Bot".to_string()),
            bot_icon: std::env::var("SLACK_BOT_ICON").unwrap_or_else(|_| ":robot_face:".to_string()),
        }
    }
}

impl Default for NotifierConfig {
    fn default() -> Self {
        Self {
            webhook_url: None,
            channel: "#devin-task-devin関連の依頼と進捗".to_string(),
            bot_name: "Education Salon Bot".to_string(),
            bot_icon: ":robot_face:".to_string(),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_collector_config_is_placeholder_mode() {
        let config = CollectorConfig::default();
        assert!(!config.api_connected());
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.output_dir, PathBuf::from("db/schools"));
    }

    #[test]
    fn test_non_empty_filters_blank_values() {
        assert_eq!(non_empty(Some("  ".to_string())), None);
        assert_eq!(non_empty(Some(String::new())), None);
        assert_eq!(non_empty(Some("x".to_string())), Some("x".to_string()));
        assert_eq!(non_empty(None), None);
    }
}
