//! JSON-slot-backed store for knowledge entries.
//!
//! The whole collection lives in memory and is re-persisted in full after
//! every mutation; the slot file is the only durable state. A missing,
//! corrupt, or empty slot is replaced by the built-in seed entries rather
//! than surfaced as an error.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::error::KbError;
use super::types::KbEntry;

/// File name of the persisted slot inside the slate home directory.
pub const SLOT_FILE: &str = "student_kb_v1.json";

/// Built-in starter entries, installed on first run and after a reset.
pub fn seed_entries() -> Vec<KbEntry> {
    vec![
        KbEntry::from_raw(
            "US Geography",
            "How many states are there in the US?",
            "There are 50 states in the US, with 13 states known as the 13 colonies.",
            "states, colonies, usa",
        ),
        KbEntry::from_raw(
            "Networking",
            "what is ping",
            "Ping tests connectivity by sending ICMP echo requests and measuring response time.",
            "ping, icmp, network",
        ),
        KbEntry::from_raw(
            "Web",
            "what is an api",
            "An API is a way for programs to communicate and share data or functions.",
            "api, json, http",
        ),
    ]
}

/// Ordered, slot-backed collection of knowledge entries.
#[derive(Debug)]
pub struct KbStore {
    path: PathBuf,
    entries: Vec<KbEntry>,
}

impl KbStore {
    /// Open the store rooted at `dir`, creating the directory if needed.
    ///
    /// When the slot is missing, unparsable, or decodes to an empty
    /// collection, the seed entries are installed and persisted
    /// immediately.
    pub fn open(dir: &Path) -> Result<Self, KbError> {
        fs::create_dir_all(dir).map_err(|source| KbError::Slot {
            path: dir.to_path_buf(),
            source,
        })?;

        let mut store = Self {
            path: dir.join(SLOT_FILE),
            entries: Vec::new(),
        };
        store.load()?;
        Ok(store)
    }

    fn load(&mut self) -> Result<(), KbError> {
        let decoded = match fs::read_to_string(&self.path) {
            Ok(raw) => match serde_json::from_str::<Vec<KbEntry>>(&raw) {
                Ok(entries) => Some(entries),
                Err(err) => {
                    warn!(path = %self.path.display(), %err, "slot unparsable, reseeding");
                    None
                }
            },
            Err(err) if err.kind() == ErrorKind::NotFound => None,
            Err(source) => {
                return Err(KbError::Slot {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        match decoded {
            Some(entries) if !entries.is_empty() => {
                self.entries = entries;
                Ok(())
            }
            _ => {
                self.entries = seed_entries();
                self.persist()
            }
        }
    }

    /// Serialize the full collection back to the slot.
    fn persist(&self) -> Result<(), KbError> {
        let json = serde_json::to_string_pretty(&self.entries)?;
        fs::write(&self.path, json).map_err(|source| KbError::Slot {
            path: self.path.clone(),
            source,
        })?;
        debug!(entries = self.entries.len(), "knowledge base persisted");
        Ok(())
    }

    /// Validate, normalize, and append a new entry, then persist.
    ///
    /// The question must normalize to something non-empty and the answer
    /// must be non-blank, otherwise [`KbError::MissingFields`] is returned
    /// and nothing changes.
    pub fn add(
        &mut self,
        category: &str,
        question: &str,
        answer: &str,
        tags_raw: &str,
    ) -> Result<&KbEntry, KbError> {
        let entry = KbEntry::from_raw(category, question, answer, tags_raw);
        if entry.question.is_empty() || entry.answer.is_empty() {
            return Err(KbError::MissingFields);
        }

        self.entries.push(entry);
        self.persist()?;
        Ok(self.entries.last().expect("entry was just appended"))
    }

    /// Overwrite an existing entry's fields in place, then persist.
    ///
    /// Returns `Ok(false)` without touching the slot when `id` is unknown.
    /// The entry keeps its id and its position in the collection.
    pub fn update(
        &mut self,
        id: &str,
        category: &str,
        question: &str,
        answer: &str,
        tags_raw: &str,
    ) -> Result<bool, KbError> {
        let fresh = KbEntry::from_raw(category, question, answer, tags_raw);
        if fresh.question.is_empty() || fresh.answer.is_empty() {
            return Err(KbError::MissingFields);
        }

        match self.entries.iter_mut().find(|e| e.id == id) {
            Some(entry) => {
                entry.category = fresh.category;
                entry.question = fresh.question;
                entry.answer = fresh.answer;
                entry.tags = fresh.tags;
            }
            None => return Ok(false),
        }

        self.persist()?;
        Ok(true)
    }

    /// Remove the entry with the given id, then persist.
    ///
    /// Returns `Ok(false)` without touching the slot when `id` is unknown.
    pub fn remove(&mut self, id: &str) -> Result<bool, KbError> {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        if self.entries.len() == before {
            return Ok(false);
        }

        self.persist()?;
        Ok(true)
    }

    /// Replace the whole collection, then persist. Returns the new count.
    ///
    /// No validation happens here; callers wanting import semantics go
    /// through [`crate::kb::import_all`], which validates first.
    pub fn replace_all(&mut self, entries: Vec<KbEntry>) -> Result<usize, KbError> {
        self.entries = entries;
        self.persist()?;
        Ok(self.entries.len())
    }

    /// Delete the slot and restore the seed entries. Returns the new count.
    pub fn reset(&mut self) -> Result<usize, KbError> {
        match fs::remove_file(&self.path) {
            Ok(()) => {}
            Err(err) if err.kind() == ErrorKind::NotFound => {}
            Err(source) => {
                return Err(KbError::Slot {
                    path: self.path.clone(),
                    source,
                })
            }
        }

        self.entries = seed_entries();
        self.persist()?;
        Ok(self.entries.len())
    }

    /// All entries in insertion order.
    pub fn entries(&self) -> &[KbEntry] {
        &self.entries
    }

    /// Look up a single entry by id.
    pub fn get(&self, id: &str) -> Option<&KbEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Entries passing the given predicate, in insertion order.
    pub fn list_entries<P>(&self, filter: P) -> Vec<&KbEntry>
    where
        P: Fn(&KbEntry) -> bool,
    {
        self.entries.iter().filter(|e| filter(e)).collect()
    }

    /// Unique category labels in use, sorted.
    pub fn categories(&self) -> Vec<String> {
        let mut categories: Vec<String> = Vec::new();
        for entry in &self.entries {
            if !entry.category.is_empty() && !categories.contains(&entry.category) {
                categories.push(entry.category.clone());
            }
        }
        categories.sort();
        categories
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Path of the backing slot file.
    pub fn slot_path(&self) -> &Path {
        &self.path
    }
}
