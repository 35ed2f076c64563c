//! Navigation tokens and page controls.
//!
//! A [`NavToken`] is the opaque callback payload carried on pagination
//! buttons. On the wire it is three fields joined by `|`:
//! `direction|queryref|page`. The query reference is percent-encoded, so
//! arbitrary query text (including `|` and `%`) round-trips unchanged.
//! When the verbatim form would overflow the transport's callback-data
//! byte limit, the reference degrades to `#` + a hex SHA-256 digest
//! prefix of the query, resolved through the cache's digest index.

use pencari_error::{TokenError, TokenErrorKind};
use sha2::{Digest, Sha256};

const DELIMITER: char = '|';
const DIGEST_PREFIX: char = '#';
const DIGEST_BYTES: usize = 16;

/// Hex digest prefix used to reference a query when its text is too long
/// to carry verbatim.
pub fn query_digest(query: &str) -> String {
    let digest = Sha256::digest(query.as_bytes());
    hex::encode(&digest[..DIGEST_BYTES])
}

/// Direction of a pagination step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum NavDirection {
    /// Move one page back
    #[display("prev")]
    Previous,
    /// Move one page forward
    #[display("next")]
    Next,
}

impl NavDirection {
    fn parse(s: &str) -> Result<Self, TokenError> {
        match s {
            "prev" => Ok(Self::Previous),
            "next" => Ok(Self::Next),
            other => Err(TokenError::new(TokenErrorKind::UnknownDirection(
                other.to_string(),
            ))),
        }
    }
}

/// Reference to a cached query carried inside a token.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum QueryRef {
    /// Query text carried verbatim (percent-encoded on the wire)
    Verbatim(String),
    /// Hex SHA-256 digest prefix of the query text
    Digest(String),
}

/// Encoded instruction to move to a specific page of a cached query.
///
/// # Examples
///
/// ```
/// use pencari_core::NavToken;
///
/// let token = NavToken::next("laporan 2024", 1);
/// let wire = token.encode(64);
/// assert_eq!(NavToken::decode(&wire).unwrap(), token);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, derive_getters::Getters)]
pub struct NavToken {
    /// Which way this token moves
    direction: NavDirection,
    /// The query the token belongs to
    query_ref: QueryRef,
    /// Zero-based target page index
    page_index: usize,
}

impl NavToken {
    /// Token for stepping back to `target_page`.
    pub fn previous(query: impl Into<String>, target_page: usize) -> Self {
        Self {
            direction: NavDirection::Previous,
            query_ref: QueryRef::Verbatim(query.into()),
            page_index: target_page,
        }
    }

    /// Token for stepping forward to `target_page`.
    pub fn next(query: impl Into<String>, target_page: usize) -> Self {
        Self {
            direction: NavDirection::Next,
            query_ref: QueryRef::Verbatim(query.into()),
            page_index: target_page,
        }
    }

    fn wire_form(&self, query_ref: &str) -> String {
        format!(
            "{}{DELIMITER}{}{DELIMITER}{}",
            self.direction, query_ref, self.page_index
        )
    }

    /// Encode for the transport, staying within `limit` bytes.
    ///
    /// Falls back to the digest reference when the percent-encoded query
    /// would overflow the limit. The digest form itself is fixed-width
    /// (under 45 bytes), so any sane transport limit accommodates it.
    pub fn encode(&self, limit: usize) -> String {
        let encoded = match &self.query_ref {
            QueryRef::Verbatim(query) => {
                self.wire_form(&urlencoding::encode(query))
            }
            QueryRef::Digest(digest) => {
                return self.wire_form(&format!("{DIGEST_PREFIX}{digest}"));
            }
        };
        if encoded.len() <= limit {
            return encoded;
        }
        let QueryRef::Verbatim(query) = &self.query_ref else {
            return encoded;
        };
        self.wire_form(&format!("{DIGEST_PREFIX}{}", query_digest(query)))
    }

    /// Decode a wire token back into its parts.
    ///
    /// # Errors
    ///
    /// Returns an error when the payload does not have the three-field
    /// shape, names an unknown direction, carries a non-numeric page
    /// index, or holds an undecodable query reference.
    pub fn decode(data: &str) -> Result<Self, TokenError> {
        let fields: Vec<&str> = data.split(DELIMITER).collect();
        let [direction, query_ref, page_index] = fields.as_slice() else {
            return Err(TokenError::new(TokenErrorKind::Malformed(format!(
                "expected 3 fields, got {}",
                fields.len()
            ))));
        };

        let direction = NavDirection::parse(direction)?;
        let page_index: usize = page_index.parse().map_err(|_| {
            TokenError::new(TokenErrorKind::InvalidPageIndex(page_index.to_string()))
        })?;

        let query_ref = match query_ref.strip_prefix(DIGEST_PREFIX) {
            Some(digest) => QueryRef::Digest(digest.to_string()),
            None => {
                let query = urlencoding::decode(query_ref).map_err(|e| {
                    TokenError::new(TokenErrorKind::InvalidQueryEncoding(e.to_string()))
                })?;
                QueryRef::Verbatim(query.into_owned())
            }
        };

        Ok(Self {
            direction,
            query_ref,
            page_index,
        })
    }
}

/// Previous/next controls for one rendered page.
///
/// `previous` is present iff the page index is positive; `next` is
/// present iff another full or partial page exists past the current one.
/// `total_len` is the authoritative stored result count at build time; a
/// query missing from the cache passes 0 and fails safe to "no more".
#[derive(Debug, Clone, PartialEq, Eq, derive_getters::Getters)]
pub struct NavControls {
    /// Token for the preceding page, when one exists
    previous: Option<NavToken>,
    /// Token for the following page, when one exists
    next: Option<NavToken>,
}

impl NavControls {
    /// Derive the valid controls for `query` at `page_index`.
    pub fn build(query: &str, page_index: usize, page_size: usize, total_len: usize) -> Self {
        let previous = (page_index > 0).then(|| NavToken::previous(query, page_index - 1));
        let next = ((page_index + 1).saturating_mul(page_size) < total_len)
            .then(|| NavToken::next(query, page_index + 1));
        Self { previous, next }
    }
}
