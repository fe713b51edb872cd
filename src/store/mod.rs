mod cache;
mod forms;

pub use cache::{CachedGeneration, GeneratorKind, ResultCache};
pub use forms::FormStore;

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Durable local state: one JSON file per entry, unauthenticated, scoped to
/// this client. Absence of an entry is always a valid state; malformed content
/// is treated as absence and never surfaced.
#[derive(Debug, Clone)]
pub struct StateDir {
    root: PathBuf,
}

impl StateDir {
    pub fn init(root: impl Into<PathBuf>) -> std::io::Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }

    pub fn write_entry<T: Serialize>(&self, key: &str, value: &T) -> crate::error::Result<()> {
        let text = serde_json::to_string_pretty(value)?;
        fs::write(self.entry_path(key), text)?;
        Ok(())
    }

    /// Read an entry back. Missing or malformed entries read as `None`.
    pub fn read_entry<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = fs::read_to_string(self.entry_path(key)).ok()?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::debug!("Ignoring malformed state entry '{}': {}", key, e);
                None
            }
        }
    }

    pub fn remove_entry(&self, key: &str) {
        let _ = fs::remove_file(self.entry_path(key));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn missing_entry_reads_as_none() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = StateDir::init(tmp.path()).unwrap();
        assert!(dir.read_entry::<BTreeMap<String, String>>("nope").is_none());
    }

    #[test]
    fn malformed_entry_reads_as_none() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = StateDir::init(tmp.path()).unwrap();
        fs::write(tmp.path().join("broken.json"), "{not json").unwrap();
        assert!(dir.read_entry::<BTreeMap<String, String>>("broken").is_none());
    }

    #[test]
    fn write_then_read_round_trips() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = StateDir::init(tmp.path()).unwrap();
        let mut map = BTreeMap::new();
        map.insert("a".to_string(), "1".to_string());
        dir.write_entry("entry", &map).unwrap();
        let back: BTreeMap<String, String> = dir.read_entry("entry").unwrap();
        assert_eq!(back, map);
    }
}
