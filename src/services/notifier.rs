//! Notification sink interface.

use async_trait::async_trait;
use tracing::info;

use crate::services::error::NotifyError;

#[async_trait]
pub trait NotificationSink: Send + Sync {
    /// Deliver `text` to `destination` (a channel id for chat sinks).
    async fn send(&self, destination: &str, text: &str) -> Result<(), NotifyError>;
}

/// Sink that only writes messages to the log. Used when no chat
/// credentials are configured.
#[derive(Debug, Clone, Default)]
pub struct LogSink;

#[async_trait]
impl NotificationSink for LogSink {
    async fn send(&self, destination: &str, text: &str) -> Result<(), NotifyError> {
        info!(destination = %destination, message = %text, "LogSink: alert for {}", destination);
        Ok(())
    }
}
