//! File-backed key-value store.
//!
//! A flat JSON string map, read once at open and rewritten on every set.
//! Holds the cart counter key and the remembered-login key.

use anyhow::Context;
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use bookshelf_core::traits::KeyValueStore;

pub struct FileKeyValueStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileKeyValueStore {
    /// Open the store at `path`. A missing or malformed file starts empty;
    /// durable state is a convenience, never a hard requirement.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = fs::read_to_string(&path)
            .ok()
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default();
        Self { path, entries }
    }

    fn flush(&self) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let pretty = serde_json::to_string_pretty(&self.entries)?;
        fs::write(&self.path, pretty)
            .with_context(|| format!("failed to write {}", self.path.display()))
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush()
    }
}
