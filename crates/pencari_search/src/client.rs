//! Search client with cache-first lookup.

use crate::PostJson;
use pencari_cache::SearchCache;
use pencari_core::ResultSet;
use pencari_error::{HttpError, JsonError, PencariResult};
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, instrument};

/// Default bound on a single remote search call.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Basic-auth credentials for the remote API.
#[derive(Debug, Clone, PartialEq, Eq, derive_getters::Getters)]
pub struct Credentials {
    /// API username
    user: String,
    /// API password or application password
    pass: String,
}

impl Credentials {
    /// Create a new credential pair.
    pub fn new(user: impl Into<String>, pass: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            pass: pass.into(),
        }
    }
}

/// Client for the remote content search API.
///
/// Every call checks the shared [`SearchCache`] first; a miss issues
/// exactly one GET with the query as the `search` parameter and stores
/// the decoded result set, including empty ones. Failures are not
/// cached, so a failing query retries the remote API on each attempt.
///
/// # Example
///
/// ```no_run
/// use pencari_cache::SearchCache;
/// use pencari_search::SearchClient;
/// use std::sync::Arc;
///
/// # async fn run() -> pencari_error::PencariResult<()> {
/// let cache = Arc::new(SearchCache::new());
/// let client = SearchClient::new(
///     "https://example.com/wp-json/wp/v2/posts",
///     None,
///     cache,
/// )?;
/// let results = client.search("laporan").await?;
/// println!("{} hasil", results.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct SearchClient {
    client: Client,
    api_url: String,
    credentials: Option<Credentials>,
    cache: Arc<SearchCache>,
}

impl SearchClient {
    /// Create a client with the default request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(
        api_url: impl Into<String>,
        credentials: Option<Credentials>,
        cache: Arc<SearchCache>,
    ) -> PencariResult<Self> {
        Self::with_timeout(api_url, credentials, cache, DEFAULT_TIMEOUT)
    }

    /// Create a client with an explicit request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn with_timeout(
        api_url: impl Into<String>,
        credentials: Option<Credentials>,
        cache: Arc<SearchCache>,
        timeout: Duration,
    ) -> PencariResult<Self> {
        let client = Client::builder().timeout(timeout).build().map_err(|e| {
            HttpError::new(format!("Failed to build HTTP client: {e}"))
        })?;
        Ok(Self {
            client,
            api_url: api_url.into(),
            credentials,
            cache,
        })
    }

    /// Search the remote API for `query`, cache-first.
    ///
    /// Returns the stored result set, which may be empty: a 200 response
    /// carrying an empty array is cached and returned as-is, and the
    /// caller renders it the same as "not found". Transport failures,
    /// non-2xx statuses, and malformed payloads all surface as errors;
    /// the user-visible outcome is uniform, the cause lives in the logs.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-success status, or
    /// an undecodable response body. A single attempt per call, no
    /// retries.
    #[instrument(skip(self), fields(query_len = query.len()))]
    pub async fn search(&self, query: &str) -> PencariResult<Arc<ResultSet>> {
        if let Some(hit) = self.cache.lookup(query) {
            debug!(result_count = hit.len(), "Serving search from cache");
            return Ok(hit);
        }

        debug!(url = %self.api_url, "Querying remote search API");
        let mut request = self.client.get(&self.api_url).query(&[("search", query)]);
        if let Some(credentials) = &self.credentials {
            request = request.basic_auth(credentials.user(), Some(credentials.pass()));
        }

        let response = request.send().await.map_err(|e| {
            error!(error = %e, "Search request failed");
            HttpError::new(format!("Search request failed: {e}"))
        })?;

        if !response.status().is_success() {
            let status = response.status();
            error!(status = %status, "Search API returned error status");
            return Err(HttpError::new(format!("Search API returned {status}")).into());
        }

        let posts: Vec<PostJson> = response.json().await.map_err(|e| {
            error!(error = %e, "Failed to decode search response");
            JsonError::new(format!("Failed to decode search response: {e}"))
        })?;

        let results: ResultSet = posts.into_iter().map(Into::into).collect();
        debug!(result_count = results.len(), "Storing search results");
        Ok(self.cache.store(query, results))
    }
}
