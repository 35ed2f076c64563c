//! Navigation token error types.

use derive_getters::Getters;

/// Navigation token error variants.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
pub enum TokenErrorKind {
    /// Token did not have the expected three-field shape.
    #[display("Malformed token: {_0}")]
    Malformed(String),

    /// Direction field was neither `prev` nor `next`.
    #[display("Unknown direction: {_0}")]
    UnknownDirection(String),

    /// Page index field was not a valid integer.
    #[display("Invalid page index: {_0}")]
    InvalidPageIndex(String),

    /// Query reference could not be percent-decoded.
    #[display("Invalid query encoding: {_0}")]
    InvalidQueryEncoding(String),
}

/// Navigation token error with source location tracking.
///
/// Decoding failures are expected for stale or foreign callback data and
/// are dropped silently at the dispatch boundary, but the kind is kept
/// for logging.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error, Getters)]
#[display("Token Error: {} at line {} in {}", kind, line, file)]
pub struct TokenError {
    kind: TokenErrorKind,
    line: u32,
    file: &'static str,
}

impl TokenError {
    /// Create a new TokenError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: TokenErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
