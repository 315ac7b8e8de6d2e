//! Shared helpers for command implementations.

use anyhow::Result;
use colored::Colorize;

use crate::kb::KbStore;
use crate::settings::{slate_home, Settings};

/// Open the knowledge store at the resolved slate home.
pub fn open_store() -> Result<KbStore> {
    let home = slate_home();
    Ok(KbStore::open(&home)?)
}

/// Load settings from the resolved slate home.
pub fn load_settings() -> Result<Settings> {
    Settings::load(&slate_home())
}

/// Display the current entry count, shown after every persisted mutation.
pub fn print_count(store: &KbStore) {
    println!(
        "{} {} entries in the knowledge base",
        "ℹ".blue(),
        store.len()
    );
}
