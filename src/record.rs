//! The feed post record type.

use chrono::Utc;
use serde::Serialize;

use crate::richtext::{Facet, extract_facets};

/// `app.bsky.feed.post`, the collection NSID for feed posts.
pub const FEED_POST_COLLECTION: &str = "app.bsky.feed.post";

/// A feed post record, built fresh for each createRecord call.
///
/// Serializes to the `record` body of the createRecord request: text,
/// hashtag facets, and a UTC creation timestamp with second precision
/// (`YYYY-MM-DDTHH:MM:SSZ`).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostRecord {
    pub text: String,
    pub facets: Vec<Facet>,
    pub created_at: String,
}

impl PostRecord {
    /// Build a post record from text, extracting hashtag facets and
    /// stamping the current time.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let facets = extract_facets(&text);
        Self {
            text,
            facets,
            created_at: Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn created_at_is_iso8601_seconds_utc() {
        let record = PostRecord::new("timestamp check");
        let ts = &record.created_at;
        assert_eq!(ts.len(), 20);
        assert!(ts.ends_with('Z'));
        assert_eq!(&ts[10..11], "T");
        assert!(
            chrono::NaiveDateTime::parse_from_str(ts, "%Y-%m-%dT%H:%M:%SZ").is_ok(),
            "unexpected timestamp format: {ts}"
        );
    }

    #[test]
    fn facets_are_extracted_from_text() {
        let record = PostRecord::new("shipping #skypost today");
        assert_eq!(record.facets.len(), 1);
        assert_eq!(record.facets[0].index.byte_start, 9);
        assert_eq!(record.facets[0].index.byte_end, 17);
    }

    #[test]
    fn serializes_with_camel_case_created_at() {
        let record = PostRecord::new("plain");
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["text"], "plain");
        assert!(value["createdAt"].is_string());
        assert_eq!(value["facets"], serde_json::json!([]));
    }
}
