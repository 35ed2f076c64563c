//! Search result cache implementation.

use parking_lot::RwLock;
use pencari_core::{QueryRef, ResultSet, query_digest};
use std::collections::HashMap;
use std::sync::Arc;

#[derive(Debug, Default)]
struct Inner {
    /// Exact query text to its stored result set
    entries: HashMap<String, Arc<ResultSet>>,
    /// Digest prefix back to the query it was computed from
    digests: HashMap<String, String>,
}

/// Cache mapping exact query text to its full ordered result set.
///
/// Keys are the raw text as typed: no normalization is applied, so
/// "Foo" and "foo" are distinct entries. Entries are never evicted and
/// never mutated once stored; the cache only grows and is discarded
/// with the process. Reads and writes are serialized with an `RwLock`,
/// so concurrent stores of the same query cannot lose updates (the
/// second simply overwrites with equivalent data).
///
/// # Example
///
/// ```
/// use pencari_cache::SearchCache;
/// use pencari_core::ResultItem;
///
/// let cache = SearchCache::new();
/// assert!(cache.lookup("laporan").is_none());
///
/// cache.store("laporan", vec![ResultItem::new("Laporan", "https://example.com/1")]);
/// let hit = cache.lookup("laporan").unwrap();
/// assert_eq!(hit.len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct SearchCache {
    inner: RwLock<Inner>,
}

impl SearchCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the stored result set for `query`, if any.
    pub fn lookup(&self, query: &str) -> Option<Arc<ResultSet>> {
        let hit = self.inner.read().entries.get(query).cloned();
        tracing::debug!(query, hit = hit.is_some(), "Cache lookup");
        hit
    }

    /// Store the result set for `query`, returning the shared handle.
    ///
    /// Also records the query's digest so overlong navigation tokens can
    /// refer back to it. Callers check `lookup` first; a concurrent
    /// duplicate store overwrites with an equivalent snapshot.
    pub fn store(&self, query: &str, results: ResultSet) -> Arc<ResultSet> {
        let results = Arc::new(results);
        let mut inner = self.inner.write();
        inner
            .digests
            .insert(query_digest(query), query.to_string());
        inner.entries.insert(query.to_string(), results.clone());
        tracing::debug!(
            query,
            result_count = results.len(),
            cache_size = inner.entries.len(),
            "Stored result set"
        );
        results
    }

    /// Resolve a token's query reference to the query text and its
    /// stored results.
    ///
    /// Returns `None` for queries never stored in this process lifetime
    /// (stale or foreign tokens) and for unknown digests.
    pub fn resolve(&self, query_ref: &QueryRef) -> Option<(String, Arc<ResultSet>)> {
        let inner = self.inner.read();
        let query = match query_ref {
            QueryRef::Verbatim(query) => query.clone(),
            QueryRef::Digest(digest) => inner.digests.get(digest)?.clone(),
        };
        let results = inner.entries.get(&query)?.clone();
        Some((query, results))
    }

    /// Number of cached queries.
    pub fn len(&self) -> usize {
        self.inner.read().entries.len()
    }

    /// True when nothing has been stored yet.
    pub fn is_empty(&self) -> bool {
        self.inner.read().entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pencari_core::ResultItem;

    fn items(prefix: &str, n: usize) -> ResultSet {
        (1..=n)
            .map(|i| ResultItem::new(format!("{prefix} {i}"), format!("https://example.com/{i}")))
            .collect()
    }

    #[test]
    fn miss_before_store_hit_after() {
        let cache = SearchCache::new();
        assert!(cache.lookup("laporan").is_none());

        cache.store("laporan", items("Laporan", 3));
        let hit = cache.lookup("laporan").unwrap();
        assert_eq!(hit.len(), 3);
    }

    #[test]
    fn distinct_queries_do_not_interfere() {
        let cache = SearchCache::new();
        cache.store("Foo", items("a", 2));
        cache.store("foo", items("b", 5));

        assert_eq!(cache.lookup("Foo").unwrap().len(), 2);
        assert_eq!(cache.lookup("foo").unwrap().len(), 5);
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn whitespace_variants_are_distinct_keys() {
        let cache = SearchCache::new();
        cache.store("foo", items("a", 1));
        assert!(cache.lookup("foo ").is_none());
        assert!(cache.lookup(" foo").is_none());
    }

    #[test]
    fn empty_result_set_is_a_valid_entry() {
        let cache = SearchCache::new();
        cache.store("nada", Vec::new());
        let hit = cache.lookup("nada").unwrap();
        assert!(hit.is_empty());
    }

    #[test]
    fn resolve_verbatim_and_digest_refs() {
        let cache = SearchCache::new();
        cache.store("kata kunci", items("x", 4));

        let (query, results) = cache
            .resolve(&QueryRef::Verbatim("kata kunci".to_string()))
            .unwrap();
        assert_eq!(query, "kata kunci");
        assert_eq!(results.len(), 4);

        let (query, results) = cache
            .resolve(&QueryRef::Digest(query_digest("kata kunci")))
            .unwrap();
        assert_eq!(query, "kata kunci");
        assert_eq!(results.len(), 4);
    }

    #[test]
    fn resolve_unknown_refs_returns_none() {
        let cache = SearchCache::new();
        cache.store("ada", items("x", 1));

        assert!(cache.resolve(&QueryRef::Verbatim("tidak ada".to_string())).is_none());
        assert!(cache.resolve(&QueryRef::Digest(query_digest("tidak ada"))).is_none());
    }

    #[test]
    fn duplicate_store_overwrites_with_equivalent_data() {
        let cache = SearchCache::new();
        cache.store("q", items("x", 2));
        cache.store("q", items("x", 2));

        assert_eq!(cache.len(), 1);
        assert_eq!(cache.lookup("q").unwrap().len(), 2);
    }

    #[test]
    fn shared_handles_survive_concurrent_readers() {
        let cache = std::sync::Arc::new(SearchCache::new());
        cache.store("q", items("x", 8));

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let cache = cache.clone();
                std::thread::spawn(move || cache.lookup("q").unwrap().len())
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), 8);
        }
    }
}
