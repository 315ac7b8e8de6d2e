//! Slate home resolution and optional configuration.
//!
//! The slate home directory holds the knowledge slot plus an optional
//! `config.toml`:
//!
//! ```toml
//! # Matching threshold, tune for your class
//! threshold = 0.36
//! contact = "ms-frizzle@school.example"
//! ```

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::kb::CONFIDENCE_THRESHOLD;

/// Environment variable overriding the slate home directory.
pub const HOME_ENV: &str = "SLATE_HOME";

/// File name of the optional configuration inside the slate home.
pub const CONFIG_FILE: &str = "config.toml";

/// Contact named in the fallback reply when none is configured.
pub const DEFAULT_CONTACT: &str = "your instructor";

/// Tunable knobs read from `config.toml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Minimum match score required to answer a question
    pub threshold: f32,
    /// Human channel named when the bot is not confident
    pub contact: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            threshold: CONFIDENCE_THRESHOLD,
            contact: DEFAULT_CONTACT.to_string(),
        }
    }
}

impl Settings {
    /// Load settings from `config.toml` under `dir`.
    ///
    /// A missing file means defaults; a present but unparsable file is an
    /// error, since the config is hand-authored.
    pub fn load(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let settings = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(settings)
    }
}

/// Resolve the slate home directory: `$SLATE_HOME` when set, else the
/// platform data directory, else `.slate` under the working directory.
pub fn slate_home() -> PathBuf {
    if let Ok(home) = env::var(HOME_ENV) {
        if !home.is_empty() {
            return PathBuf::from(home);
        }
    }

    match dirs::data_dir() {
        Some(data) => data.join("slate"),
        None => PathBuf::from(".slate"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_when_config_missing() {
        let temp = TempDir::new().unwrap();
        let settings = Settings::load(temp.path()).unwrap();

        assert_eq!(settings.threshold, CONFIDENCE_THRESHOLD);
        assert_eq!(settings.contact, DEFAULT_CONTACT);
    }

    #[test]
    fn test_load_full_config() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(CONFIG_FILE),
            "threshold = 0.5\ncontact = \"the TA\"\n",
        )
        .unwrap();

        let settings = Settings::load(temp.path()).unwrap();
        assert_eq!(settings.threshold, 0.5);
        assert_eq!(settings.contact, "the TA");
    }

    #[test]
    fn test_partial_config_falls_back_per_field() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE), "contact = \"the TA\"\n").unwrap();

        let settings = Settings::load(temp.path()).unwrap();
        assert_eq!(settings.threshold, CONFIDENCE_THRESHOLD);
        assert_eq!(settings.contact, "the TA");
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE), "threshold = \"not a number\"").unwrap();

        assert!(Settings::load(temp.path()).is_err());
    }

    #[test]
    #[serial]
    fn test_home_env_override() {
        env::set_var(HOME_ENV, "/tmp/slate-test-home");
        assert_eq!(slate_home(), PathBuf::from("/tmp/slate-test-home"));
        env::remove_var(HOME_ENV);
    }

    #[test]
    #[serial]
    fn test_home_falls_back_without_env() {
        env::remove_var(HOME_ENV);
        let home = slate_home();
        assert!(home.ends_with("slate") || home.ends_with(".slate"));
    }
}
