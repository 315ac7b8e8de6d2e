//! Input validation for user-supplied entry fields.
//!
//! These limits guard the CLI surface. The store itself only enforces the
//! non-empty rule for questions and answers, and import accepts whatever
//! lengths the payload carries.

use anyhow::{bail, Result};

/// Maximum allowed length for a question, in bytes.
pub const MAX_QUESTION_LENGTH: usize = 500;

/// Maximum allowed length for an answer, in bytes.
pub const MAX_ANSWER_LENGTH: usize = 2000;

/// Maximum allowed length for a category label, in bytes.
pub const MAX_CATEGORY_LENGTH: usize = 64;

/// Maximum number of tags on a single entry.
pub const MAX_TAGS: usize = 16;

/// Maximum allowed length for a single tag, in bytes.
pub const MAX_TAG_LENGTH: usize = 64;

/// Validates a question before it reaches the store.
///
/// # Examples
///
/// ```
/// use slate::validation::validate_question;
///
/// assert!(validate_question("What is ping?").is_ok());
/// assert!(validate_question("   ").is_err());
/// ```
pub fn validate_question(question: &str) -> Result<()> {
    if question.trim().is_empty() {
        bail!("Question cannot be empty");
    }

    if question.len() > MAX_QUESTION_LENGTH {
        bail!(
            "Question too long: {} characters (max {})",
            question.len(),
            MAX_QUESTION_LENGTH
        );
    }

    Ok(())
}

/// Validates an answer before it reaches the store.
pub fn validate_answer(answer: &str) -> Result<()> {
    if answer.trim().is_empty() {
        bail!("Answer cannot be empty");
    }

    if answer.len() > MAX_ANSWER_LENGTH {
        bail!(
            "Answer too long: {} characters (max {})",
            answer.len(),
            MAX_ANSWER_LENGTH
        );
    }

    Ok(())
}

/// Validates a category label. Empty is allowed; the store substitutes the
/// default category.
pub fn validate_category(category: &str) -> Result<()> {
    if category.len() > MAX_CATEGORY_LENGTH {
        bail!(
            "Category too long: {} characters (max {})",
            category.len(),
            MAX_CATEGORY_LENGTH
        );
    }

    Ok(())
}

/// Validates a raw comma-delimited tag list.
pub fn validate_tags(tags_raw: &str) -> Result<()> {
    let count = tags_raw.split(',').filter(|t| !t.trim().is_empty()).count();
    if count > MAX_TAGS {
        bail!("Too many tags: {count} (max {MAX_TAGS})");
    }

    for tag in tags_raw.split(',') {
        let tag = tag.trim();
        if tag.len() > MAX_TAG_LENGTH {
            bail!(
                "Tag '{}' too long: {} characters (max {})",
                tag,
                tag.len(),
                MAX_TAG_LENGTH
            );
        }
    }

    Ok(())
}

/// Validates the full field set of an add/edit command in one call.
pub fn validate_entry_fields(
    category: &str,
    question: &str,
    answer: &str,
    tags_raw: &str,
) -> Result<()> {
    validate_question(question)?;
    validate_answer(answer)?;
    validate_category(category)?;
    validate_tags(tags_raw)?;
    Ok(())
}
