//! Core data types for the pencari search bot.
//!
//! This crate provides the result model, the pager, and the navigation
//! token machinery shared by the search client and the chat front-end.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod nav;
mod page;
mod result;

pub use nav::{NavControls, NavDirection, NavToken, QueryRef, query_digest};
pub use page::{Page, paginate};
pub use result::{ResultItem, ResultSet};
