//! Rich-text facets for hashtags.
//!
//! Bluesky post records annotate substrings of the text with "facets":
//! byte-offset spans into the UTF-8 encoding of the text, each carrying one
//! or more features. This module models the tag (hashtag) feature and
//! extracts facets from plain text.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

// \w is Unicode-aware, so non-ASCII letters and digits count as tag
// characters just like in the official clients.
static HASHTAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#\w+").expect("hashtag pattern must compile"));

/// A byte span into the UTF-8 encoding of the post text.
///
/// `byte_start` is inclusive, `byte_end` exclusive, and `byte_start <
/// byte_end` always holds. These are byte offsets, not character offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ByteSlice {
    pub byte_start: usize,
    pub byte_end: usize,
}

/// A feature attached to a facet span.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "$type")]
pub enum FacetFeature {
    /// A hashtag. `tag` holds the text without the leading `#`.
    #[serde(rename = "app.bsky.richtext.facet#tag")]
    Tag { tag: String },
}

/// One annotated span of the post text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Facet {
    pub index: ByteSlice,
    pub features: Vec<FacetFeature>,
}

/// Extract hashtag facets from post text.
///
/// Scans for non-overlapping `#word` tokens (one or more Unicode word
/// characters after the marker) and emits one facet per token, in order of
/// appearance. Byte offsets are taken directly from the match span: Rust
/// strings are UTF-8 byte-indexed, so the offsets are correct for
/// multi-byte input, including four-byte astral characters.
///
/// Pure and infallible: returns an empty vec when nothing matches, and a
/// bare `#` with no word character after it is not a match.
///
/// # Example
///
/// ```
/// use skypost::extract_facets;
///
/// let facets = extract_facets("hello #world");
/// assert_eq!(facets.len(), 1);
/// assert_eq!(facets[0].index.byte_start, 6);
/// assert_eq!(facets[0].index.byte_end, 12);
/// ```
pub fn extract_facets(text: &str) -> Vec<Facet> {
    HASHTAG
        .find_iter(text)
        .map(|m| {
            let tag = m.as_str().strip_prefix('#').unwrap_or(m.as_str());
            Facet {
                index: ByteSlice {
                    byte_start: m.start(),
                    byte_end: m.end(),
                },
                features: vec![FacetFeature::Tag {
                    tag: tag.to_string(),
                }],
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn tag_of(facet: &Facet) -> &str {
        match &facet.features[0] {
            FacetFeature::Tag { tag } => tag,
        }
    }

    #[test]
    fn no_hashtags_yields_empty() {
        assert!(extract_facets("").is_empty());
        assert!(extract_facets("just plain text").is_empty());
        assert!(extract_facets("100% effort, no tags").is_empty());
    }

    #[test]
    fn bare_marker_is_not_a_match() {
        assert!(extract_facets("#").is_empty());
        assert!(extract_facets("ending with # ").is_empty());
        assert!(extract_facets("# spaced").is_empty());
    }

    #[test]
    fn ascii_offsets_match_char_offsets() {
        let facets = extract_facets("hello #world");
        assert_eq!(facets.len(), 1);
        assert_eq!(facets[0].index, ByteSlice { byte_start: 6, byte_end: 12 });
        assert_eq!(tag_of(&facets[0]), "world");
    }

    #[test]
    fn multibyte_prefix_shifts_byte_offsets() {
        // é is two bytes, so "#tag" starts at char 5 but byte 6.
        let facets = extract_facets("café #tag");
        assert_eq!(facets.len(), 1);
        assert_eq!(facets[0].index, ByteSlice { byte_start: 6, byte_end: 10 });
        assert_eq!(tag_of(&facets[0]), "tag");
    }

    #[test]
    fn astral_prefix_counts_four_bytes() {
        // The crab emoji is four bytes in UTF-8.
        let text = "🦀 #rust";
        let facets = extract_facets(text);
        assert_eq!(facets.len(), 1);
        assert_eq!(facets[0].index, ByteSlice { byte_start: 5, byte_end: 10 });
        assert_eq!(&text[5..10], "#rust");
    }

    #[test]
    fn unicode_word_characters_are_tag_characters() {
        let facets = extract_facets("#café #日本語 #under_score #v2");
        let tags: Vec<&str> = facets.iter().map(tag_of).collect();
        assert_eq!(tags, vec!["café", "日本語", "under_score", "v2"]);
    }

    #[test]
    fn facets_come_back_in_text_order() {
        let facets = extract_facets("#a #b");
        assert_eq!(facets.len(), 2);
        assert_eq!(facets[0].index, ByteSlice { byte_start: 0, byte_end: 2 });
        assert_eq!(tag_of(&facets[0]), "a");
        assert_eq!(facets[1].index, ByteSlice { byte_start: 3, byte_end: 5 });
        assert_eq!(tag_of(&facets[1]), "b");
    }

    #[test]
    fn spans_are_nonempty_and_index_real_text() {
        let text = "intro #première, middle #中文 and #end.";
        for facet in extract_facets(text) {
            assert!(facet.index.byte_start < facet.index.byte_end);
            let span = &text[facet.index.byte_start..facet.index.byte_end];
            assert_eq!(span.strip_prefix('#').unwrap(), tag_of(&facet));
        }
    }

    #[test]
    fn extraction_is_pure() {
        let text = "repeat #after me #twice";
        assert_eq!(extract_facets(text), extract_facets(text));
    }

    #[test]
    fn serializes_to_wire_shape() {
        let facets = extract_facets("hello #world");
        let value = serde_json::to_value(&facets).unwrap();
        assert_eq!(
            value,
            json!([{
                "index": {"byteStart": 6, "byteEnd": 12},
                "features": [{"$type": "app.bsky.richtext.facet#tag", "tag": "world"}]
            }])
        );
    }
}
