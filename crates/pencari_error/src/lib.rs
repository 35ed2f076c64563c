//! Error types for the pencari search bot.
//!
//! This crate provides the foundation error types used throughout the
//! pencari workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern for clean
//! error handling:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use pencari_error::{PencariResult, HttpError};
//!
//! fn fetch_data() -> PencariResult<String> {
//!     Err(HttpError::new("Connection refused"))?
//! }
//!
//! match fetch_data() {
//!     Ok(data) => println!("Got: {}", data),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod http;
mod json;
mod telegram;
mod token;

pub use config::ConfigError;
pub use error::{PencariError, PencariErrorKind, PencariResult};
pub use http::HttpError;
pub use json::JsonError;
pub use telegram::{TelegramError, TelegramErrorKind, TelegramResult};
pub use token::{TokenError, TokenErrorKind};
