//! Education Salon tooling
//!
//! Two small utilities behind one library:
//!
//! 1. **Collector**: queries the DeepResearch API for high-school data in
//!    every Japanese prefecture and writes one JSON artifact per prefecture
//!    plus a run summary. Without an API key it synthesizes deterministic
//!    placeholder data instead.
//!
//! 2. **Notifier**: formats project status messages (commits, collection
//!    runs, errors, builds, deployments) and posts them to a Slack webhook,
//!    falling back to log-only delivery when no webhook is configured.

pub mod collect;
pub mod config;
pub mod domain;
pub mod git;
pub mod notify;
pub mod prefectures;
pub mod source;

pub use domain::*;
