//! Knowledge base core: text normalization, similarity scoring, match
//! selection, and the slot-backed entry store.
//!
//! The matching pipeline is deliberately explainable. A query is scored
//! against every entry with a Jaccard word-overlap base plus small fixed
//! boosts for tag and category mentions, the best strictly-higher score
//! wins, and a confidence threshold decides between answering and falling
//! back. Students tune the bot by training entries, not by touching code.

pub mod error;
pub mod import;
pub mod resolver;
pub mod score;
pub mod store;
pub mod text;
pub mod types;

pub use error::KbError;
pub use import::{decode_import, export_all, import_all};
pub use resolver::{fallback_message, format_answer, resolve, CONFIDENCE_THRESHOLD};
pub use score::{find_best_match, jaccard, score_entry, CATEGORY_BOOST, TAG_BOOST};
pub use store::{seed_entries, KbStore, SLOT_FILE};
pub use text::{normalize, normalize_tags, parse_tags};
pub use types::{new_entry_id, KbEntry, MatchResult, DEFAULT_CATEGORY};
