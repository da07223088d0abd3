//! Per-category notification message builders.
//!
//! Each builder is a pure function from event fields to the message text
//! and its severity. Message bodies keep the "[Devin Update]" framing the
//! downstream Slack channel filters on.

use chrono::Utc;

use crate::domain::{CollectionSummary, Severity};
use crate::git::CommitInfo;

fn now_stamp() -> String {
    Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

fn truncated(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        let cut: String = text.chars().take(max).collect();
        format!("{cut}...")
    } else {
        text.to_string()
    }
}

/// New-commit notification. Always reported as success.
pub fn commit(info: &CommitInfo) -> (String, Severity) {
    let short_hash: String = info.hash.chars().take(8).collect();
    let message = format!(
        "[Devin Update] Task: New Commit | Status: success | Details: \n\
         \n\
         📝 **New Commit Pushed**\n\
         • **Repository**: education-salon\n\
         • **Branch**: {branch}\n\
         • **Commit**: `{short_hash}`\n\
         • **Author**: {author}\n\
         • **Message**: {subject}\n\
         • **Time**: {time}\n\
         \n\
         🔗 View commit: https://github.com/ai-being-jp/education-salon/commit/{hash}",
        branch = info.branch,
        author = info.author,
        subject = truncated(&info.message, 100),
        time = now_stamp(),
        hash = info.hash,
    );
    (message, Severity::Good)
}

/// Collection-completion notification. Severity thresholds: success when
/// nothing failed, warning while failures stay under half the prefecture
/// count, danger beyond that.
pub fn collection_completion(summary: &CollectionSummary) -> (String, Severity) {
    let total = summary.total_prefectures;
    let failed = summary.failed_collections;

    let (status, severity) = if failed == 0 {
        ("success", Severity::Good)
    } else if failed * 2 < total {
        ("warning", Severity::Warning)
    } else {
        ("error", Severity::Danger)
    };

    let message = format!(
        "[Devin Update] Task: DeepResearch Data Collection | Status: {status} | Details:\n\
         \n\
         🏫 **School Data Collection Completed**\n\
         • **Total Prefectures**: {total}\n\
         • **Successful**: {successful}\n\
         • **Failed**: {failed}\n\
         • **Success Rate**: {rate}\n\
         • **Collection Time**: {time}\n\
         • **Data Source**: {api_status}\n\
         \n\
         📊 **Summary**: Collected school data for all Japanese prefectures including \
         偏差値, 学是, 進学実績, 入試情報, オープンキャンパス情報, and 公式画像URL.\n\
         \n\
         📁 Data saved to: `{output_dir}`",
        successful = summary.successful_collections,
        rate = summary.success_rate,
        time = summary.collection_date.to_rfc3339(),
        api_status = summary.api_status,
        output_dir = summary.output_directory,
    );
    (message, severity)
}

/// Error notification. Always danger.
pub fn error(error_type: &str, error_message: &str, context: &str) -> (String, Severity) {
    let message = format!(
        "[Devin Update] Task: {error_type} | Status: error | Details:\n\
         \n\
         ❌ **Error Occurred**\n\
         • **Type**: {error_type}\n\
         • **Context**: {context}\n\
         • **Error**: {detail}\n\
         • **Time**: {time}\n\
         \n\
         🔧 **Action Required**: Please check logs and investigate the issue.",
        detail = truncated(error_message, 200),
        time = now_stamp(),
    );
    (message, Severity::Danger)
}

/// Build-status notification. Severity follows the status string:
/// success → good, failed → danger, anything else → warning.
pub fn build_status(status: &str, details: &str, build_url: &str) -> (String, Severity) {
    let severity = match status {
        "success" => Severity::Good,
        "failed" => Severity::Danger,
        _ => Severity::Warning,
    };
    let emoji = match severity {
        Severity::Good => "✅",
        Severity::Danger => "❌",
        Severity::Warning => "⚠️",
    };

    let mut message = format!(
        "[Devin Update] Task: Site Build | Status: {status} | Details:\n\
         \n\
         {emoji} **Build {title}**\n\
         • **Status**: {status}\n\
         • **Details**: {details}\n\
         • **Time**: {time}",
        title = title_case(status),
        time = now_stamp(),
    );
    if !build_url.is_empty() {
        message.push_str(&format!("\n🔗 **Build URL**: {build_url}"));
    }
    (message, severity)
}

/// Deployment-status notification. Anything but success is danger.
pub fn deployment(environment: &str, status: &str, url: &str) -> (String, Severity) {
    let severity = if status == "success" {
        Severity::Good
    } else {
        Severity::Danger
    };
    let emoji = if severity == Severity::Good { "🚀" } else { "💥" };

    let mut message = format!(
        "[Devin Update] Task: Deployment | Status: {status} | Details:\n\
         \n\
         {emoji} **Deployment {title}**\n\
         • **Environment**: {environment}\n\
         • **Status**: {status}\n\
         • **Time**: {time}",
        title = title_case(status),
        time = now_stamp(),
    );
    if !url.is_empty() {
        message.push_str(&format!("\n🌐 **Live URL**: {url}"));
    }
    (message, severity)
}

/// Connection-test notification.
pub fn connection_test(channel: &str, bot_name: &str) -> (String, Severity) {
    let message = format!(
        "[Devin Update] Task: Slack Connection Test | Status: success | Details:\n\
         \n\
         🔔 **Slack Notification System Active**\n\
         • **Channel**: {channel}\n\
         • **Bot Name**: {bot_name}\n\
         • **Test Time**: {time}\n\
         \n\
         ✅ Notifications are working correctly for Education Salon project.",
        time = now_stamp(),
    );
    (message, Severity::Good)
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
