//! Remote content search for the pencari search bot.
//!
//! This crate provides the [`SearchClient`], which consults the result
//! cache before issuing a single GET against the configured WordPress
//! REST endpoint and stores whatever a successful response decodes to.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod client;
mod json_models;

pub use client::{Credentials, SearchClient};
pub use json_models::{PostJson, RenderedText};
