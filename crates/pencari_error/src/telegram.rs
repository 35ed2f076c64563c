//! Telegram-specific error types.
//!
//! Error handling for the Telegram Bot API transport, covering request
//! failures, API-level rejections, and payload decoding problems.

use derive_getters::Getters;

/// Telegram error variants.
///
/// Represents different error conditions that can occur while talking to
/// the Telegram Bot API.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
pub enum TelegramErrorKind {
    /// The HTTP request itself failed (timeout, DNS, connection).
    #[display("Request failed: {_0}")]
    Request(String),

    /// The Bot API answered with `ok: false` or a non-2xx status.
    #[display("Telegram API error (status {status}): {description}")]
    Api {
        /// HTTP status code returned by the Bot API
        status: u16,
        /// Error description from the response body, if any
        description: String,
    },

    /// The response payload could not be decoded.
    #[display("Response decode failed: {_0}")]
    Decode(String),

    /// Bot token is invalid or expired.
    #[display("Invalid or expired bot token")]
    InvalidToken,
}

/// Telegram error with source location tracking.
///
/// Captures the error kind along with the file and line where the error
/// occurred.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error, Getters)]
#[display("Telegram Error: {} at line {} in {}", kind, line, file)]
pub struct TelegramError {
    kind: TelegramErrorKind,
    line: u32,
    file: &'static str,
}

impl TelegramError {
    /// Create a new TelegramError with automatic location tracking.
    ///
    /// # Example
    /// ```
    /// use pencari_error::{TelegramError, TelegramErrorKind};
    ///
    /// let err = TelegramError::new(TelegramErrorKind::InvalidToken);
    /// ```
    #[track_caller]
    pub fn new(kind: TelegramErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

/// Result type for Telegram operations.
pub type TelegramResult<T> = Result<T, TelegramError>;
