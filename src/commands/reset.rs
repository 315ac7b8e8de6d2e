//! Reset command - wipe the knowledge base back to the seed entries.

use std::io::{stdin, stdout, Write};

use anyhow::Result;
use colored::Colorize;

use crate::commands::common::open_store;

pub fn execute(yes: bool) -> Result<()> {
    if !yes && !confirm()? {
        println!("Reset cancelled.");
        return Ok(());
    }

    let mut store = open_store()?;
    let count = store.reset()?;

    println!(
        "{} Knowledge base reset: {count} seed entries restored",
        "✓".green().bold()
    );
    println!(
        "{} Train the bot again with 'slate add'.",
        "ℹ".blue()
    );
    Ok(())
}

fn confirm() -> Result<bool> {
    print!("Reset deletes all saved Q/A data. Continue? (y/n): ");
    stdout().flush()?;

    let mut response = String::new();
    stdin().read_line(&mut response)?;
    Ok(response.trim().eq_ignore_ascii_case("y"))
}
