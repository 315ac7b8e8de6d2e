//! Confidence gating and reply formatting.

use tracing::debug;

use crate::settings::Settings;

use super::score::find_best_match;
use super::store::KbStore;
use super::types::KbEntry;

/// Default minimum score required to answer instead of falling back.
/// Overridable per installation via `threshold` in config.toml.
pub const CONFIDENCE_THRESHOLD: f32 = 0.36;

/// Answer a query from the store, falling back when no entry clears the
/// confidence threshold.
pub fn resolve(query: &str, store: &KbStore, settings: &Settings) -> String {
    let best = find_best_match(query, store.entries());
    match best.entry {
        Some(entry) if best.score >= settings.threshold => format_answer(entry, best.score),
        _ => {
            debug!(
                score = best.score,
                threshold = settings.threshold,
                "no confident match"
            );
            fallback_message(&settings.contact)
        }
    }
}

/// Fixed reply layout: the verbatim answer, a blank line, then category and
/// rounded percentage confidence.
pub fn format_answer(entry: &KbEntry, score: f32) -> String {
    let confidence = (score * 100.0).round() as u32;
    format!(
        "{}\n\nCategory: {}\nConfidence: {confidence}%",
        entry.answer, entry.category
    )
}

/// Fixed fallback pointing at a human channel and at training.
pub fn fallback_message(contact: &str) -> String {
    format!("I'm not sure about that one yet. Try rephrasing, teach me with 'slate add', or ask {contact}.")
}
