//! Bounds-checked pagination over a result set.

use crate::ResultItem;

/// A display page derived from a result set.
///
/// Pages are computed views, never stored. An out-of-range index produces
/// an empty page, which callers render as "no further results" rather
/// than treating as an error.
#[derive(Debug, Clone, PartialEq, Eq, derive_getters::Getters)]
pub struct Page {
    /// Items on this page, in result order
    items: Vec<ResultItem>,
    /// Zero-based page index as requested
    page_index: usize,
    /// One-based page number for display
    page_number: usize,
    /// Total number of pages in the result set
    total_pages: usize,
    /// Total number of items in the result set
    total_count: usize,
    /// One-based ordinal of the first item on this page
    first_ordinal: usize,
}

impl Page {
    /// True when the page holds no items (index beyond the end, or the
    /// result set itself is empty).
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Slice a result set into its page at `page_index`.
///
/// The slice is `[page_index * page_size, page_index * page_size + page_size)`
/// clipped to the data bounds. `page_size` must be positive.
///
/// # Examples
///
/// ```
/// use pencari_core::{ResultItem, paginate};
///
/// let results: Vec<_> = (1..=12)
///     .map(|i| ResultItem::new(format!("Data {i}"), format!("https://example.com/{i}")))
///     .collect();
///
/// let page = paginate(&results, 0, 5);
/// assert_eq!(page.items().len(), 5);
/// assert_eq!(*page.page_number(), 1);
/// assert_eq!(*page.total_pages(), 3);
/// ```
pub fn paginate(results: &[ResultItem], page_index: usize, page_size: usize) -> Page {
    debug_assert!(page_size > 0, "page_size must be positive");

    let start = page_index.saturating_mul(page_size).min(results.len());
    let end = start.saturating_add(page_size).min(results.len());

    Page {
        items: results[start..end].to_vec(),
        page_index,
        page_number: page_index + 1,
        total_pages: results.len().div_ceil(page_size),
        total_count: results.len(),
        first_ordinal: start + 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ResultItem;

    fn results(n: usize) -> Vec<ResultItem> {
        (1..=n)
            .map(|i| ResultItem::new(format!("Data {i}"), format!("https://example.com/{i}")))
            .collect()
    }

    #[test]
    fn first_page_of_twelve() {
        let set = results(12);
        let page = paginate(&set, 0, 5);
        assert_eq!(page.items().len(), 5);
        assert_eq!(page.items()[0].title(), "Data 1");
        assert_eq!(page.items()[4].title(), "Data 5");
        assert_eq!(*page.page_number(), 1);
        assert_eq!(*page.total_pages(), 3);
        assert_eq!(*page.total_count(), 12);
        assert_eq!(*page.first_ordinal(), 1);
    }

    #[test]
    fn last_partial_page_of_twelve() {
        let set = results(12);
        let page = paginate(&set, 2, 5);
        assert_eq!(page.items().len(), 2);
        assert_eq!(page.items()[0].title(), "Data 11");
        assert_eq!(page.items()[1].title(), "Data 12");
        assert_eq!(*page.page_number(), 3);
        assert_eq!(*page.first_ordinal(), 11);
    }

    #[test]
    fn page_beyond_end_is_empty() {
        let set = results(12);
        let page = paginate(&set, 3, 5);
        assert!(page.is_empty());
        assert_eq!(*page.total_pages(), 3);
        assert_eq!(*page.total_count(), 12);
    }

    #[test]
    fn empty_result_set_yields_empty_page() {
        let page = paginate(&[], 0, 5);
        assert!(page.is_empty());
        assert_eq!(*page.total_pages(), 0);
        assert_eq!(*page.total_count(), 0);
    }

    #[test]
    fn exact_multiple_has_no_trailing_page() {
        let set = results(10);
        let page = paginate(&set, 1, 5);
        assert_eq!(page.items().len(), 5);
        assert_eq!(*page.total_pages(), 2);
        assert!(paginate(&set, 2, 5).is_empty());
    }

    #[test]
    fn pages_concatenate_to_original_set() {
        for (n, s) in [(12, 5), (10, 5), (1, 5), (7, 3), (5, 1)] {
            let set = results(n);
            let total_pages = n.div_ceil(s);
            let mut rebuilt = Vec::new();
            for index in 0..total_pages {
                rebuilt.extend(paginate(&set, index, s).items().iter().cloned());
            }
            assert_eq!(rebuilt, set, "n={n} s={s}");
        }
    }

    #[test]
    fn huge_index_does_not_overflow() {
        let set = results(3);
        let page = paginate(&set, usize::MAX, 5);
        assert!(page.is_empty());
    }
}
