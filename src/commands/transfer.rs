//! Export and import commands for whole-collection transfer.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use colored::Colorize;

use crate::commands::common::{open_store, print_count};
use crate::kb::{export_all, import_all};

/// Default export file name.
pub const EXPORT_FILE: &str = "student-chatbot-knowledgebase.json";

/// Write the whole knowledge base as pretty JSON to `path`, or to stdout
/// when `path` is `-`.
pub fn export(path: Option<PathBuf>) -> Result<()> {
    let store = open_store()?;
    let json = export_all(&store)?;

    match path {
        Some(path) if path.as_os_str() == "-" => println!("{json}"),
        path => {
            let path = path.unwrap_or_else(|| PathBuf::from(EXPORT_FILE));
            fs::write(&path, &json)
                .with_context(|| format!("Failed to write export file: {}", path.display()))?;
            println!(
                "{} Exported {} entries to {}",
                "✓".green().bold(),
                store.len(),
                path.display().to_string().cyan()
            );
        }
    }
    Ok(())
}

/// Read `path` once and replace the knowledge base with its content.
pub fn import(path: PathBuf) -> Result<()> {
    let raw = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read import file: {}", path.display()))?;

    let mut store = open_store()?;
    let count = import_all(&mut store, &raw)?;

    println!("{} Import successful: {count} entries", "✓".green().bold());
    print_count(&store);
    Ok(())
}
