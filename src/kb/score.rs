//! Similarity scoring and best-match selection.
//!
//! The score for a query against an entry has two parts: a Jaccard index
//! over the word sets of the query and the stored question, plus small
//! fixed boosts when the query mentions one of the entry's tags or its
//! category. Students steer matching by picking good tags, not by touching
//! the algorithm.

use std::collections::HashSet;

use tracing::debug;

use super::text::normalize;
use super::types::{KbEntry, MatchResult};

/// Score added per tag that appears in the query.
pub const TAG_BOOST: f32 = 0.08;

/// Score added when the query mentions the entry's category.
pub const CATEGORY_BOOST: f32 = 0.05;

/// Jaccard index of the word sets of two texts, in `[0, 1]`.
///
/// Both sides are normalized before splitting. If either side has no words
/// the score is 0.
pub fn jaccard(a: &str, b: &str) -> f32 {
    let a = normalize(a);
    let b = normalize(b);
    let words_a: HashSet<&str> = a.split_whitespace().collect();
    let words_b: HashSet<&str> = b.split_whitespace().collect();

    if words_a.is_empty() || words_b.is_empty() {
        return 0.0;
    }

    let intersection = words_a.intersection(&words_b).count();
    let union = words_a.len() + words_b.len() - intersection;
    intersection as f32 / union as f32
}

/// Score a query against a single entry: Jaccard base plus tag and
/// category boosts, capped at 1.0.
pub fn score_entry(query: &str, entry: &KbEntry) -> f32 {
    let mut score = jaccard(query, &entry.question);

    let query = normalize(query);
    for tag in &entry.tags {
        if !tag.is_empty() && query.contains(tag.as_str()) {
            score += TAG_BOOST;
        }
    }

    let category = normalize(&entry.category);
    if !category.is_empty() && query.contains(&category) {
        score += CATEGORY_BOOST;
    }

    score.min(1.0)
}

/// Scan candidates in order and keep the strictly highest score.
///
/// Ties go to the earliest candidate, so insertion order is the tie-break.
/// An empty candidate list yields no entry and a score of 0.
pub fn find_best_match<'a>(query: &str, candidates: &'a [KbEntry]) -> MatchResult<'a> {
    let mut best = MatchResult::default();
    for entry in candidates {
        let score = score_entry(query, entry);
        if score > best.score {
            best = MatchResult {
                entry: Some(entry),
                score,
            };
        }
    }

    debug!(
        candidates = candidates.len(),
        score = best.score,
        "best match selected"
    );
    best
}
