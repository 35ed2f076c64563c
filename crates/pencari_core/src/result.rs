//! Search result types.

use serde::{Deserialize, Serialize};

/// One entry returned by the remote content search.
///
/// Opaque beyond its two fields: the title may contain markup-significant
/// characters and is passed through untouched.
///
/// # Examples
///
/// ```
/// use pencari_core::ResultItem;
///
/// let item = ResultItem::new("Laporan Tahunan", "https://example.com/laporan");
/// assert_eq!(item.title(), "Laporan Tahunan");
/// assert_eq!(item.link(), "https://example.com/laporan");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct ResultItem {
    /// Rendered display title
    title: String,
    /// Link to the matching content
    link: String,
}

impl ResultItem {
    /// Create a new result item.
    pub fn new(title: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            link: link.into(),
        }
    }
}

/// Ordered sequence of results for one query.
///
/// Immutable once stored in the cache; shared via `Arc` from there on.
pub type ResultSet = Vec<ResultItem>;
