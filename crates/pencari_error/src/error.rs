//! Top-level error wrapper types.

use crate::{ConfigError, HttpError, JsonError, TelegramError, TokenError};

/// This is the foundation error enum for the pencari workspace.
///
/// # Examples
///
/// ```
/// use pencari_error::{PencariError, HttpError};
///
/// let http_err = HttpError::new("Connection failed");
/// let err: PencariError = http_err.into();
/// assert!(format!("{}", err).contains("HTTP Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum PencariErrorKind {
    /// HTTP error
    #[from(HttpError)]
    Http(HttpError),
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Telegram transport error
    #[from(TelegramError)]
    Telegram(TelegramError),
    /// Navigation token error
    #[from(TokenError)]
    Token(TokenError),
}

/// Pencari error with kind discrimination.
///
/// # Examples
///
/// ```
/// use pencari_error::{PencariResult, ConfigError};
///
/// fn might_fail() -> PencariResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Pencari Error: {}", _0)]
pub struct PencariError(Box<PencariErrorKind>);

impl PencariError {
    /// Create a new error from a kind.
    pub fn new(kind: PencariErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &PencariErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to PencariErrorKind
impl<T> From<T> for PencariError
where
    T: Into<PencariErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for pencari operations.
///
/// # Examples
///
/// ```
/// use pencari_error::{PencariResult, HttpError};
///
/// fn fetch_data() -> PencariResult<String> {
///     Err(HttpError::new("404 Not Found"))?
/// }
/// ```
pub type PencariResult<T> = std::result::Result<T, PencariError>;
