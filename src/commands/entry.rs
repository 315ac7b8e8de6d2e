//! Entry commands - create, edit, delete, and inspect knowledge entries.

use anyhow::Result;
use colored::Colorize;

use crate::commands::common::{load_settings, open_store, print_count};
use crate::kb::{normalize, KbEntry};
use crate::validation::validate_entry_fields;

pub fn add(
    question: String,
    answer: String,
    category: Option<String>,
    tags: Option<String>,
) -> Result<()> {
    let category = category.unwrap_or_default();
    let tags = tags.unwrap_or_default();
    validate_entry_fields(&category, &question, &answer, &tags)?;

    let mut store = open_store()?;
    let entry = store.add(&category, &question, &answer, &tags)?;
    println!(
        "{} Added '{}' under category '{}'",
        "✓".green().bold(),
        entry.question.cyan(),
        entry.category
    );
    print_count(&store);
    Ok(())
}

pub fn edit(
    id: String,
    question: String,
    answer: String,
    category: Option<String>,
    tags: Option<String>,
) -> Result<()> {
    let category = category.unwrap_or_default();
    let tags = tags.unwrap_or_default();
    validate_entry_fields(&category, &question, &answer, &tags)?;

    let mut store = open_store()?;
    if store.update(&id, &category, &question, &answer, &tags)? {
        println!("{} Updated entry {}", "✓".green().bold(), id.cyan());
        print_count(&store);
    } else {
        println!("{} No entry with id '{id}'", "ℹ".blue());
    }
    Ok(())
}

pub fn rm(id: String) -> Result<()> {
    let mut store = open_store()?;
    if store.remove(&id)? {
        println!("{} Removed entry {}", "✓".green().bold(), id.cyan());
        print_count(&store);
    } else {
        println!("{} No entry with id '{id}'", "ℹ".blue());
    }
    Ok(())
}

pub fn list(search: Option<String>, category: Option<String>) -> Result<()> {
    let store = open_store()?;
    let search = normalize(&search.unwrap_or_default());
    let category = category.as_deref();

    let entries = store.list_entries(|e| matches_filters(e, &search, category));
    if entries.is_empty() {
        println!("{} No entries match your filters.", "ℹ".blue());
        return Ok(());
    }

    println!(
        "{} Knowledge base ({} shown, {} total)",
        "📚",
        entries.len(),
        store.len()
    );
    println!();

    for entry in entries {
        println!("{} {}", entry.id.dimmed(), entry.question.cyan().bold());
        println!("   {}", entry.answer);
        let tags = if entry.tags.is_empty() {
            "none".to_string()
        } else {
            entry.tags.join(", ")
        };
        println!(
            "   {} {}  {} {}",
            "category:".dimmed(),
            entry.category,
            "tags:".dimmed(),
            tags
        );
        println!();
    }
    Ok(())
}

pub fn categories() -> Result<()> {
    let store = open_store()?;
    let categories = store.categories();
    if categories.is_empty() {
        println!("{} No categories yet.", "ℹ".blue());
        return Ok(());
    }

    println!("{} Categories ({})", "📚", categories.len());
    for category in categories {
        let count = store.list_entries(|e| e.category == category).len();
        println!("   {} ({count})", category.cyan());
    }
    Ok(())
}

pub fn status() -> Result<()> {
    let store = open_store()?;
    let settings = load_settings()?;

    println!("{}", crate::LOGO);
    println!();
    println!("{} {}", "Entries:".bold(), store.len());
    println!("{} {}", "Threshold:".bold(), settings.threshold);
    println!("{} {}", "Slot:".bold(), store.slot_path().display());
    println!();
    println!("{}", "Categories:".bold());
    for category in store.categories() {
        let count = store.list_entries(|e| e.category == category).len();
        println!("   {} ({count})", category.cyan());
    }
    Ok(())
}

/// Listing filter: exact category match plus case-insensitive substring
/// search across category, question, answer, and tags.
fn matches_filters(entry: &KbEntry, search: &str, category: Option<&str>) -> bool {
    if let Some(wanted) = category {
        if entry.category != wanted {
            return false;
        }
    }

    if search.is_empty() {
        return true;
    }

    let haystack = format!(
        "{} {} {} {}",
        entry.category,
        entry.question,
        entry.answer,
        entry.tags.join(" ")
    )
    .to_lowercase();
    haystack.contains(search)
}
