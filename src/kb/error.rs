//! Error type for knowledge-base operations.

use std::path::PathBuf;
use thiserror::Error;

/// Failures surfaced by the knowledge store and its codec.
///
/// A corrupt slot on load is not represented here: loading reseeds instead
/// of failing.
#[derive(Debug, Error)]
pub enum KbError {
    /// Add/update called with an empty question or answer.
    #[error("both a question and an answer are required")]
    MissingFields,

    /// Import payload rejected as a whole; the store is unchanged.
    #[error("import rejected: {0}")]
    InvalidImport(String),

    /// The slot file could not be read or written.
    #[error("failed to access knowledge slot {path}: {source}")]
    Slot {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The in-memory collection could not be encoded as JSON.
    #[error("failed to encode knowledge base: {0}")]
    Encode(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            KbError::MissingFields.to_string(),
            "both a question and an answer are required"
        );
        assert_eq!(
            KbError::InvalidImport("not an array".to_string()).to_string(),
            "import rejected: not an array"
        );
    }

    #[test]
    fn test_slot_error_names_path() {
        let err = KbError::Slot {
            path: PathBuf::from("/tmp/kb/student_kb_v1.json"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().contains("student_kb_v1.json"));
    }
}
