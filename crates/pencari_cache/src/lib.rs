//! Query result caching for the pencari search bot.
//!
//! This crate provides the process-wide store that maps query text to
//! its full result set, so repeated searches never hit the remote API
//! twice.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod cache;

pub use cache::SearchCache;
