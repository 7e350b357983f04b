use std::time::Duration;

use thiserror::Error;

/// Price history retrieval errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MarketDataError {
    #[error("network error: {0}")]
    Network(String),

    #[error("parse error: {0}")]
    Parse(String),

    /// The provider does not know the symbol.
    #[error("symbol not found")]
    NotFound,

    #[error("request timed out after {0:?}")]
    Timeout(Duration),
}

/// Notification delivery errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotifyError {
    #[error("network error: {0}")]
    Network(String),

    /// The chat platform rejected the message.
    #[error("platform error: {0}")]
    Platform(String),
}
