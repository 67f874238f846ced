use crate::error::{MemoryError, Result};
use crate::types::Memory;
use chrono::Utc;
use std::fs;
use std::path::{Path, PathBuf};

/// Memory store backed by a single JSON collection file
///
/// The whole collection is read before any mutation and rewritten after it,
/// never patched in place. Saves go through a sibling temp file promoted
/// with an atomic rename, so a crash mid-save leaves the previous durable
/// state intact.
pub struct Store {
    path: PathBuf,
}

impl Store {
    /// Create a store over the given collection file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[allow(dead_code)]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the full collection
    ///
    /// A missing file is an empty collection. An unreadable or corrupt file
    /// also loads as empty, with a warning on stderr, so a damaged store
    /// degrades to "no memories" instead of failing every command.
    pub fn load(&self) -> Vec<Memory> {
        if !self.path.exists() {
            return Vec::new();
        }

        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Warning: failed to read {}: {}", self.path.display(), e);
                return Vec::new();
            }
        };

        match serde_json::from_str(&content) {
            Ok(memories) => memories,
            Err(e) => {
                eprintln!("Warning: failed to parse {}: {}", self.path.display(), e);
                Vec::new()
            }
        }
    }

    /// Save the full collection, replacing any prior content
    pub fn save(&self, memories: &[Memory]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(memories)?;

        // A concurrent load sees either the old file or the new one,
        // never a partial write.
        let temp_path = self.path.with_extension("json.tmp");
        fs::write(&temp_path, json)?;
        fs::rename(&temp_path, &self.path)?;

        Ok(())
    }

    /// Add a new memory, returns the created record
    pub fn add(&self, content: &str, tags: &[String]) -> Result<Memory> {
        let content = content.trim();
        if content.is_empty() {
            return Err(MemoryError::EmptyContent);
        }

        let mut memories = self.load();
        let now = Utc::now();

        // Time-derived ID with a count disambiguator. Same-second bursts get
        // distinct counts; after deletions the count can land on a surviving
        // ID, so bump until free.
        let stamp = now.format("%Y%m%d%H%M%S").to_string();
        let mut n = memories.len();
        let mut id = format!("mem_{}_{}", stamp, n);
        while memories.iter().any(|m| m.id == id) {
            n += 1;
            id = format!("mem_{}_{}", stamp, n);
        }

        let memory = Memory {
            id,
            content: content.to_string(),
            timestamp: now,
            tags: tags.to_vec(),
        };

        memories.push(memory.clone());
        self.save(&memories)?;

        Ok(memory)
    }

    /// Delete a memory by ID, returns the deleted ID
    ///
    /// The file is only rewritten if the collection actually shrank.
    pub fn delete(&self, id: &str) -> Result<String> {
        let mut memories = self.load();
        let original_count = memories.len();

        memories.retain(|m| m.id != id);

        if memories.len() == original_count {
            return Err(MemoryError::NotFound(id.to_string()));
        }

        self.save(&memories)?;
        Ok(id.to_string())
    }

    /// Remove the backing file entirely. Clearing an empty store succeeds.
    pub fn clear(&self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn temp_store() -> (TempDir, Store) {
        let dir = TempDir::new().unwrap();
        let store = Store::new(dir.path().join("memories.json"));
        (dir, store)
    }

    #[test]
    fn test_add_and_load() {
        let (_dir, store) = temp_store();

        let memory = store
            .add("Test memory content", &["test".to_string(), "example".to_string()])
            .unwrap();
        assert!(memory.id.starts_with("mem_"));

        let memories = store.load();
        assert_eq!(memories.len(), 1);
        assert_eq!(memories[0].id, memory.id);
        assert_eq!(memories[0].content, "Test memory content");
        assert_eq!(memories[0].tags, vec!["test", "example"]);
    }

    #[test]
    fn test_add_trims_content() {
        let (_dir, store) = temp_store();

        let memory = store.add("  padded content \n", &[]).unwrap();
        assert_eq!(memory.content, "padded content");
    }

    #[test]
    fn test_empty_content_rejected() {
        let (_dir, store) = temp_store();

        assert!(matches!(store.add("", &[]), Err(MemoryError::EmptyContent)));
        assert!(matches!(store.add("   \n\t", &[]), Err(MemoryError::EmptyContent)));

        // Nothing was persisted
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_burst_adds_get_unique_ids() {
        let (_dir, store) = temp_store();

        for i in 0..5 {
            store.add(&format!("memory {}", i), &[]).unwrap();
        }

        let memories = store.load();
        let mut ids: Vec<&str> = memories.iter().map(|m| m.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 5);
    }

    #[test]
    fn test_unique_ids_after_delete() {
        let (_dir, store) = temp_store();

        let first = store.add("first", &[]).unwrap();
        let second = store.add("second", &[]).unwrap();
        store.delete(&first.id).unwrap();

        // The count disambiguator would collide with the survivor here
        let third = store.add("third", &[]).unwrap();
        assert_ne!(third.id, second.id);
        assert_eq!(store.load().len(), 2);
    }

    #[test]
    fn test_delete_removes_exactly_one() {
        let (_dir, store) = temp_store();

        let a = store.add("keep me", &[]).unwrap();
        let b = store.add("remove me", &[]).unwrap();

        let deleted = store.delete(&b.id).unwrap();
        assert_eq!(deleted, b.id);

        let memories = store.load();
        assert_eq!(memories.len(), 1);
        assert_eq!(memories[0].id, a.id);
    }

    #[test]
    fn test_delete_unknown_id_leaves_store_untouched() {
        let (_dir, store) = temp_store();

        store.add("only one", &[]).unwrap();

        match store.delete("mem_00000000000000_0") {
            Err(MemoryError::NotFound(id)) => assert_eq!(id, "mem_00000000000000_0"),
            other => panic!("expected NotFound, got {:?}", other.map(|_| ())),
        }
        assert_eq!(store.load().len(), 1);
    }

    #[test]
    fn test_clear_is_idempotent() {
        let (_dir, store) = temp_store();

        store.add("gone soon", &[]).unwrap();

        store.clear().unwrap();
        assert!(store.load().is_empty());

        // Clearing an already-empty store also succeeds
        store.clear().unwrap();
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_corrupt_file_loads_empty() {
        let (_dir, store) = temp_store();

        store.add("valid", &[]).unwrap();
        fs::write(store.path(), "{ this is not json").unwrap();

        assert!(store.load().is_empty());
    }

    #[test]
    fn test_missing_fields_get_defaults() {
        let (_dir, store) = temp_store();

        fs::write(
            store.path(),
            r#"[{"id": "mem_1", "content": "no tags or timestamp"}]"#,
        )
        .unwrap();

        let memories = store.load();
        assert_eq!(memories.len(), 1);
        assert_eq!(memories[0].content, "no tags or timestamp");
        assert!(memories[0].tags.is_empty());
        assert_eq!(memories[0].timestamp, chrono::DateTime::UNIX_EPOCH);
    }

    #[test]
    fn test_save_leaves_no_temp_file() {
        let (_dir, store) = temp_store();

        store.add("durable", &[]).unwrap();

        let temp_path = store.path().with_extension("json.tmp");
        assert!(!temp_path.exists());
        assert!(store.path().exists());

        // The promoted file parses as a whole collection
        let content = fs::read_to_string(store.path()).unwrap();
        let parsed: Vec<Memory> = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed.len(), 1);
    }
}
