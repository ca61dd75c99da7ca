//! Key-value persistence for engine aggregates.
//!
//! Each logical aggregate (provider selection, preferences, statistics,
//! recent moods, favorites) is one independently-keyed JSON document,
//! re-serialized in full after every mutation. Reads and writes are
//! synchronous local operations.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use parking_lot::RwLock;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Opaque byte-blob storage keyed by string.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Option<Vec<u8>>;
    fn set(&self, key: &str, value: Vec<u8>);
}

/// Load an aggregate, falling back to `None` on absence or corruption.
/// A corrupt blob is discarded with a warning, never a startup failure.
pub fn load_json<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Option<T> {
    let bytes = store.get(key)?;
    match serde_json::from_slice(&bytes) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("Discarding corrupt state blob '{}': {}", key, e);
            None
        }
    }
}

/// Serialize and store an aggregate. Serialization failures are logged,
/// not propagated; persistence must never take down a generation.
pub fn save_json<T: Serialize>(store: &dyn KeyValueStore, key: &str, value: &T) {
    match serde_json::to_vec(value) {
        Ok(bytes) => store.set(key, bytes),
        Err(e) => log::error!("Failed to serialize state blob '{}': {}", key, e),
    }
}

/// File-backed store: one `<key>.json` per aggregate under a state
/// directory.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Store rooted at the platform-local data directory.
    pub fn default_location() -> Self {
        let mut dir = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        dir.push("moodtune/state");
        Self::new(dir)
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<Vec<u8>> {
        fs::read(self.path_for(key)).ok()
    }

    fn set(&self, key: &str, value: Vec<u8>) {
        if let Err(e) = fs::create_dir_all(&self.dir) {
            log::error!("Failed to create state dir {:?}: {}", self.dir, e);
            return;
        }
        if let Err(e) = fs::write(self.path_for(key), value) {
            log::error!("Failed to persist state blob '{}': {}", key, e);
        }
    }
}

/// In-memory store for tests and ephemeral embedding.
#[derive(Default)]
pub struct MemoryStore {
    map: RwLock<HashMap<String, Vec<u8>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.map.read().get(key).cloned()
    }

    fn set(&self, key: &str, value: Vec<u8>) {
        self.map.write().insert(key.to_string(), value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_round_trip() {
        let store = MemoryStore::new();
        save_json(&store, "numbers", &vec![1u32, 2, 3]);
        let back: Vec<u32> = load_json(&store, "numbers").unwrap();
        assert_eq!(back, vec![1, 2, 3]);
    }

    #[test]
    fn test_missing_key_is_none() {
        let store = MemoryStore::new();
        assert!(load_json::<Vec<u32>>(&store, "absent").is_none());
    }

    #[test]
    fn test_corrupt_blob_is_discarded() {
        let store = MemoryStore::new();
        store.set("stats", b"{not json".to_vec());
        assert!(load_json::<Vec<u32>>(&store, "stats").is_none());
    }

    #[test]
    fn test_file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("state"));
        save_json(&store, "recent_moods", &vec!["happy".to_string()]);

        assert!(dir.path().join("state/recent_moods.json").exists());
        let back: Vec<String> = load_json(&store, "recent_moods").unwrap();
        assert_eq!(back, vec!["happy"]);
    }

    #[test]
    fn test_file_store_overwrites_whole_document() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());
        save_json(&store, "list", &vec![1u32, 2, 3]);
        save_json(&store, "list", &vec![9u32]);
        let back: Vec<u32> = load_json(&store, "list").unwrap();
        assert_eq!(back, vec![9]);
    }
}
