//! Sends one project status notification to Slack.
//!
//! Exit code 0 when the notification was delivered (log-only delivery
//! counts), 1 otherwise.

use std::path::Path;

use clap::{Parser, ValueEnum};
use tracing::{error, info};

use edusalon::collect;
use edusalon::config::{CollectorConfig, NotifierConfig};
use edusalon::git;
use edusalon::notify::{Dispatcher, format};

#[derive(Parser)]
#[command(name = "notifier")]
#[command(about = "Send Slack notifications for Education Salon")]
#[command(version)]
struct Cli {
    /// Type of notification to send
    #[arg(long = "type", value_enum)]
    kind: NotificationKind,

    /// Custom message for error notifications
    #[arg(long)]
    message: Option<String>,

    /// Status for build/deploy notifications
    #[arg(long, value_enum, default_value = "success")]
    status: Status,

    /// URL for build or deployment notifications
    #[arg(long)]
    url: Option<String>,

    /// Environment for deployment notifications
    #[arg(long, default_value = "production")]
    environment: String,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum NotificationKind {
    /// Latest commit pushed to the repository
    Commit,
    /// DeepResearch collection run completed
    Deepresearch,
    /// Error report
    Error,
    /// Site build status
    Build,
    /// Deployment status
    Deploy,
    /// Webhook connection test
    Test,
}

#[derive(Clone, Copy, ValueEnum)]
enum Status {
    Success,
    Failed,
    Warning,
}

impl Status {
    fn as_str(self) -> &'static str {
        match self {
            Status::Success => "success",
            Status::Failed => "failed",
            Status::Warning => "warning",
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    let config = NotifierConfig::from_env();
    let dispatcher = Dispatcher::new(config.clone());

    let (message, severity) = match cli.kind {
        NotificationKind::Test => format::connection_test(&config.channel, &config.bot_name),
        NotificationKind::Commit => {
            let info = git::latest_commit(Path::new("."));
            format::commit(&info)
        }
        NotificationKind::Deepresearch => {
            // The collector writes the summary; read it back from the
            // default output directory.
            match collect::load_summary(&CollectorConfig::default().output_dir) {
                Ok(summary) => format::collection_completion(&summary),
                Err(e) => {
                    error!("Failed to load collection results: {e:#}");
                    format::error(
                        "DeepResearch Data Collection",
                        "Could not load collection results",
                        "Collection summary file not found",
                    )
                }
            }
        }
        NotificationKind::Error => format::error(
            "Manual Error Report",
            cli.message.as_deref().unwrap_or("No error message provided"),
            "Manual notification",
        ),
        NotificationKind::Build => {
            let status = cli.status.as_str();
            let details = cli
                .message
                .clone()
                .unwrap_or_else(|| format!("Build {status}"));
            format::build_status(status, &details, cli.url.as_deref().unwrap_or(""))
        }
        NotificationKind::Deploy => format::deployment(
            &cli.environment,
            cli.status.as_str(),
            cli.url.as_deref().unwrap_or(""),
        ),
    };

    if dispatcher.send(&message, severity) {
        info!("Notification sent successfully");
    } else {
        error!("Failed to send notification");
        std::process::exit(1);
    }
}
