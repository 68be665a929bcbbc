//! Error types for the bot.
//!
//! This module provides the application's error hierarchy. The `AppError` enum
//! serves as the top-level error type that wraps domain-specific errors. All
//! failures in event handlers are caught and logged at the call site; nothing
//! in this hierarchy is surfaced to end users.

pub mod config;

use thiserror::Error;

use crate::error::config::ConfigError;

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application. Most
/// variants use `#[from]` for automatic error conversion.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Filesystem or network socket error.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// JSON serialization or deserialization error.
    ///
    /// Covers both the configuration file and the ticket counter file. A
    /// corrupted ticket counter file surfaces here with no recovery attempted.
    #[error(transparent)]
    JsonErr(#[from] serde_json::Error),

    /// HTTP client request error from reqwest.
    ///
    /// Covers welcome card fetch failures, including the 15-second timeout and
    /// non-success status codes.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// URL composition error.
    #[error(transparent)]
    UrlErr(#[from] url::ParseError),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
