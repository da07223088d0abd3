//! Webhook delivery.

use std::time::Duration;

use chrono::Utc;
use serde_json::json;
use tracing::{error, info, warn};

use crate::config::NotifierConfig;
use crate::domain::Severity;

/// Delivers formatted messages to the configured Slack webhook, or to the
/// log sink when no webhook is set.
pub struct Dispatcher {
    config: NotifierConfig,
    agent: ureq::Agent,
}

impl Dispatcher {
    const TIMEOUT: Duration = Duration::from_secs(10);

    pub fn new(config: NotifierConfig) -> Self {
        if config.webhook_url.is_none() {
            warn!("SLACK_WEBHOOK_URL not set. Notifications will be logged only.");
        }
        let agent = ureq::AgentBuilder::new().timeout(Self::TIMEOUT).build();
        Self { config, agent }
    }

    /// Send one message. Returns true when delivered.
    ///
    /// Without a webhook URL, the message is written to the log and counts
    /// as delivered. Transport failures are logged and reported as false;
    /// delivery is never retried.
    pub fn send(&self, message: &str, severity: Severity) -> bool {
        let Some(webhook_url) = &self.config.webhook_url else {
            info!("[SLACK NOTIFICATION] {message}");
            return true;
        };

        let payload = json!({
            "channel": self.config.channel,
            "username": self.config.bot_name,
            "icon_emoji": self.config.bot_icon,
            "attachments": [
                {
                    "color": severity.color(),
                    "text": message,
                    "ts": Utc::now().timestamp(),
                }
            ]
        });

        match self.agent.post(webhook_url).send_json(payload) {
            Ok(_) => {
                let preview: String = message.chars().take(100).collect();
                info!("Slack notification sent successfully: {preview}...");
                true
            }
            Err(e) => {
                error!("Failed to send Slack notification: {e}");
                false
            }
        }
    }
}
