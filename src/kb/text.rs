//! Text canonicalization for matching and storage.
//!
//! Every piece of text that participates in matching (questions, tags,
//! queries) goes through [`normalize`] first, so comparisons never have to
//! care about case, sentence punctuation, or stray whitespace.

/// Normalize free text for comparison: lowercase, strip `?` `.` `!` `,`,
/// collapse whitespace runs to single spaces, and trim.
///
/// Idempotent: normalizing already-normalized text is a no-op.
///
/// # Examples
///
/// ```
/// use slate::kb::normalize;
///
/// assert_eq!(normalize("  What is   PING?"), "what is ping");
/// assert_eq!(normalize("!!!"), "");
/// ```
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .replace(['?', '.', '!', ','], "")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Normalize an iterator of raw tag strings, dropping blanks and duplicates
/// while preserving first-seen order.
pub fn normalize_tags<I, S>(raw: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut tags: Vec<String> = Vec::new();
    for piece in raw {
        let tag = normalize(piece.as_ref());
        if !tag.is_empty() && !tags.contains(&tag) {
            tags.push(tag);
        }
    }
    tags
}

/// Split a comma-delimited string into normalized tags.
pub fn parse_tags(raw: &str) -> Vec<String> {
    normalize_tags(raw.split(','))
}
