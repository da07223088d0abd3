//! Slack notifications: message formatting and webhook delivery.

pub mod dispatch;
pub mod format;

pub use dispatch::Dispatcher;
