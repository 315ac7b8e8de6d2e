//! Import decoding and export encoding for the knowledge base.
//!
//! Import is replace-or-reject: the payload is decoded and cleaned as a
//! whole, and the store is replaced only when at least one valid entry
//! survives. Any failure leaves the store untouched.

use serde::Deserialize;
use serde_json::Value;

use super::error::KbError;
use super::store::KbStore;
use super::text::normalize_tags;
use super::types::{new_entry_id, KbEntry};

/// One loosely-typed item of an import payload.
///
/// Missing fields are tolerated; `tags` is accepted in any shape but only
/// an array contributes tags.
#[derive(Debug, Deserialize)]
struct RawEntry {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    q: Option<String>,
    #[serde(default)]
    a: Option<String>,
    #[serde(default)]
    tags: Value,
}

impl RawEntry {
    /// Normalize into a well-formed entry; ids are kept when present so a
    /// re-import of an export preserves identity.
    fn clean(self) -> KbEntry {
        let id = match self.id {
            Some(id) if !id.is_empty() => id,
            _ => new_entry_id(),
        };
        let tags = match self.tags {
            Value::Array(items) => normalize_tags(items.into_iter().filter_map(|item| {
                match item {
                    Value::String(tag) => Some(tag),
                    _ => None,
                }
            })),
            _ => Vec::new(),
        };

        KbEntry::from_fields(
            id,
            self.category.as_deref().unwrap_or(""),
            self.q.as_deref().unwrap_or(""),
            self.a.as_deref().unwrap_or(""),
            tags,
        )
    }
}

/// Decode an import payload into cleaned entries.
///
/// Rejects payloads that are not a JSON array, items whose string fields
/// carry the wrong type, and payloads where no entry survives cleaning
/// with both a question and an answer.
pub fn decode_import(raw: &str) -> Result<Vec<KbEntry>, KbError> {
    let raw_entries: Vec<RawEntry> = serde_json::from_str(raw)
        .map_err(|err| KbError::InvalidImport(format!("expected a JSON array of Q/A entries: {err}")))?;

    let cleaned: Vec<KbEntry> = raw_entries
        .into_iter()
        .map(RawEntry::clean)
        .filter(|entry| !entry.question.is_empty() && !entry.answer.is_empty())
        .collect();

    if cleaned.is_empty() {
        return Err(KbError::InvalidImport(
            "no valid Q/A entries found in the payload".to_string(),
        ));
    }
    Ok(cleaned)
}

/// Decode `raw` and replace the store's whole collection with the result.
///
/// Returns the number of entries now in the store. On any decode error the
/// store keeps its previous contents.
pub fn import_all(store: &mut KbStore, raw: &str) -> Result<usize, KbError> {
    let entries = decode_import(raw)?;
    store.replace_all(entries)
}

/// Serialize every entry as pretty-printed JSON. This is the export file
/// format and matches the slot layout exactly.
pub fn export_all(store: &KbStore) -> Result<String, KbError> {
    Ok(serde_json::to_string_pretty(store.entries())?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_rejects_non_array() {
        let err = decode_import("{\"q\": \"what is dns\", \"a\": \"phonebook\"}").unwrap_err();
        assert!(matches!(err, KbError::InvalidImport(_)));
    }

    #[test]
    fn test_decode_rejects_invalid_json() {
        let err = decode_import("not json at all").unwrap_err();
        assert!(matches!(err, KbError::InvalidImport(_)));
    }

    #[test]
    fn test_decode_rejects_wrong_typed_fields() {
        // q must be a string when present
        let err = decode_import("[{\"q\": 42, \"a\": \"phonebook\"}]").unwrap_err();
        assert!(matches!(err, KbError::InvalidImport(_)));
    }

    #[test]
    fn test_decode_rejects_when_nothing_survives() {
        let err = decode_import("[{\"q\": \"only a question\"}, {\"a\": \"only an answer\"}]")
            .unwrap_err();
        assert!(matches!(err, KbError::InvalidImport(_)));
    }

    #[test]
    fn test_decode_rejects_empty_array() {
        let err = decode_import("[]").unwrap_err();
        assert!(matches!(err, KbError::InvalidImport(_)));
    }

    #[test]
    fn test_decode_cleans_minimal_entry() {
        let entries =
            decode_import("[{\"q\": \" What is DNS? \", \"a\": \" The phonebook. \"}]").unwrap();

        assert_eq!(entries.len(), 1);
        let entry = &entries[0];
        assert_eq!(entry.question, "what is dns");
        assert_eq!(entry.answer, "The phonebook.");
        assert_eq!(entry.category, "General");
        assert!(entry.tags.is_empty());
        assert!(!entry.id.is_empty());
    }

    #[test]
    fn test_decode_keeps_existing_ids() {
        let entries =
            decode_import("[{\"id\": \"keep-me\", \"q\": \"what is dns\", \"a\": \"phonebook\"}]")
                .unwrap();
        assert_eq!(entries[0].id, "keep-me");
    }

    #[test]
    fn test_decode_tolerates_non_array_tags() {
        let entries = decode_import(
            "[{\"q\": \"what is dns\", \"a\": \"phonebook\", \"tags\": \"dns, domain\"}]",
        )
        .unwrap();
        assert!(entries[0].tags.is_empty());
    }

    #[test]
    fn test_decode_normalizes_array_tags() {
        let entries = decode_import(
            "[{\"q\": \"what is dns\", \"a\": \"phonebook\", \"tags\": [\"DNS!\", \"\", \"Domain\", 7]}]",
        )
        .unwrap();
        assert_eq!(entries[0].tags, vec!["dns".to_string(), "domain".to_string()]);
    }

    #[test]
    fn test_decode_drops_invalid_keeps_valid() {
        let entries = decode_import(
            "[{\"q\": \"what is dns\", \"a\": \"phonebook\"}, {\"q\": \"?!\", \"a\": \"orphan\"}]",
        )
        .unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].question, "what is dns");
    }
}
