//! JSON deserialization models for the WordPress REST API.
//!
//! These models match the shape of `GET /wp-json/wp/v2/posts?search=`
//! responses. Only the two fields the bot displays are decoded; the
//! rest of the payload is ignored.

use pencari_core::ResultItem;
use serde::{Deserialize, Serialize};

/// Rendered text wrapper as WordPress emits it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct RenderedText {
    /// Rendered HTML/text content
    rendered: String,
}

/// One post object from a search response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct PostJson {
    /// Post title (rendered form)
    title: RenderedText,
    /// Canonical link to the post
    link: String,
}

impl From<PostJson> for ResultItem {
    fn from(post: PostJson) -> Self {
        ResultItem::new(post.title.rendered, post.link)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_post_and_ignores_extra_fields() {
        let body = r#"{
            "id": 42,
            "date": "2024-01-01T00:00:00",
            "title": {"rendered": "Laporan Tahunan"},
            "link": "https://example.com/laporan",
            "excerpt": {"rendered": "..."}
        }"#;
        let post: PostJson = serde_json::from_str(body).unwrap();
        let item = ResultItem::from(post);
        assert_eq!(item.title(), "Laporan Tahunan");
        assert_eq!(item.link(), "https://example.com/laporan");
    }

    #[test]
    fn missing_title_is_an_error() {
        let body = r#"{"link": "https://example.com/laporan"}"#;
        assert!(serde_json::from_str::<PostJson>(body).is_err());
    }
}
