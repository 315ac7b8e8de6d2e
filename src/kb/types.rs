//! Entry and match-result types for the knowledge base.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::text::{normalize, parse_tags};

/// Category applied when an entry is created with a blank one.
pub const DEFAULT_CATEGORY: &str = "General";

/// A single trainable question/answer fact.
///
/// The serialized field names (`q`, `a`) are the wire format of the
/// persisted slot and of export/import files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KbEntry {
    /// Opaque unique id, assigned at creation and kept across imports
    pub id: String,
    /// Free-text label grouping related entries
    pub category: String,
    /// Question text, stored normalized
    #[serde(rename = "q")]
    pub question: String,
    /// Answer returned verbatim to the user
    #[serde(rename = "a")]
    pub answer: String,
    /// Normalized keywords that boost matching
    pub tags: Vec<String>,
}

impl KbEntry {
    /// Build an entry from raw user input: assigns a fresh id, normalizes
    /// the question, trims the answer, defaults a blank category, and
    /// parses `tags_raw` as a comma-delimited list.
    ///
    /// Emptiness of question/answer is the store's concern, not the
    /// constructor's.
    pub fn from_raw(category: &str, question: &str, answer: &str, tags_raw: &str) -> Self {
        Self::from_fields(
            new_entry_id(),
            category,
            question,
            answer,
            parse_tags(tags_raw),
        )
    }

    /// Normalize raw field values into a well-formed entry with the given
    /// id. `tags` must already be normalized.
    pub(crate) fn from_fields(
        id: String,
        category: &str,
        question: &str,
        answer: &str,
        tags: Vec<String>,
    ) -> Self {
        Self {
            id,
            category: clean_category(category),
            question: normalize(question),
            answer: answer.trim().to_string(),
            tags,
        }
    }
}

/// Trim a category label, falling back to [`DEFAULT_CATEGORY`] when blank.
fn clean_category(category: &str) -> String {
    let category = category.trim();
    if category.is_empty() {
        DEFAULT_CATEGORY.to_string()
    } else {
        category.to_string()
    }
}

/// Generate a fresh opaque entry id.
pub fn new_entry_id() -> String {
    Uuid::new_v4().to_string()
}

/// Best-match outcome for a query: the winning entry, if any, and its score.
///
/// Transient; never persisted.
#[derive(Debug, Clone, Copy, Default)]
pub struct MatchResult<'a> {
    pub entry: Option<&'a KbEntry>,
    pub score: f32,
}
