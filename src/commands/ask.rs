//! Ask command - answer a single question and exit.

use anyhow::Result;
use colored::Colorize;

use crate::commands::common::{load_settings, open_store};
use crate::kb::resolve;

pub fn execute(text: Vec<String>) -> Result<()> {
    let query = text.join(" ");
    if query.trim().is_empty() {
        println!("{} Nothing to ask.", "ℹ".blue());
        return Ok(());
    }

    let store = open_store()?;
    let settings = load_settings()?;

    println!("{}", resolve(&query, &store, &settings));
    Ok(())
}
