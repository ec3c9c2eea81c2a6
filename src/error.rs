//! Error types for DataShare.

use thiserror::Error;

/// Common error type for DataShare.
#[derive(Error, Debug)]
pub enum DataShareError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Validation error for user input.
    #[error("validation error: {0}")]
    Validation(String),

    /// Bot platform API error.
    ///
    /// Wraps HTTP-level failures and error responses returned by the bot
    /// platform. These are always per-recipient and never abort a broadcast.
    #[error("bot API error: {0}")]
    BotApi(String),

    /// The bot runtime has not been initialized yet.
    #[error("bot not initialized")]
    BotUnavailable,
}

// Conversion from reqwest errors (bot API transport)
impl From<reqwest::Error> for DataShareError {
    fn from(e: reqwest::Error) -> Self {
        DataShareError::BotApi(e.to_string())
    }
}

/// Result type alias for DataShare operations.
pub type Result<T> = std::result::Result<T, DataShareError>;
