//! Key-value storage for the best score.
//!
//! The game only ever needs one string under one key, but the store is a
//! general string map so it can be swapped for an in-memory map in tests
//! and share a file with other settings later.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{TzError, TzResult};
use crate::score::BestScore;

/// A string key-value store injected into the game.
pub trait ScoreStore {
    /// Read the value under `key`.
    fn get(&self, key: &str) -> Option<String>;

    /// Write `value` under `key`.
    fn set(&mut self, key: &str, value: &str) -> TzResult<()>;

    /// Delete `key`. Deleting a missing key is not an error.
    fn remove(&mut self, key: &str) -> TzResult<()>;

    /// Human-readable description of where values live.
    fn location(&self) -> String;
}

/// Read the best score stored under `key`.
pub fn load_best(store: &dyn ScoreStore, key: &str) -> BestScore {
    BestScore::parse(store.get(key).as_deref())
}

/// Store `rolls` as the best score under `key`.
pub fn save_best(store: &mut dyn ScoreStore, key: &str, rolls: u32) -> TzResult<()> {
    store.set(key, &rolls.to_string())
}

/// Store kept in process memory only.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-filled with one entry.
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut entries = HashMap::new();
        entries.insert(key.to_string(), value.to_string());
        Self { entries }
    }
}

impl ScoreStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> TzResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> TzResult<()> {
        self.entries.remove(key);
        Ok(())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}

/// Store persisted as a JSON object of strings in a single file.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Open the store at `path`.
    ///
    /// A missing file is an empty store. An unreadable or corrupt file is
    /// also treated as empty and will be overwritten by the next write.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = read_entries(&path);
        Self { path, entries }
    }

    fn flush(&self) -> TzResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| TzError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let json = serde_json::to_string_pretty(&self.entries)?;
        fs::write(&self.path, json).map_err(|source| TzError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

fn read_entries(path: &Path) -> BTreeMap<String, String> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return BTreeMap::new(),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "cannot read score store");
            return BTreeMap::new();
        }
    };
    match serde_json::from_str(&content) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "ignoring corrupt score store");
            BTreeMap::new()
        }
    }
}

impl ScoreStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> TzResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush()
    }

    fn remove(&mut self, key: &str) -> TzResult<()> {
        if self.entries.remove(key).is_none() {
            return Ok(());
        }
        self.flush()
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
