use crate::config::{default_store_path, find_store_path, StoreConfig, MEMORY_FILE};
use crate::error::Result;
use crate::ranker;
use crate::store::Store;
use crate::types::{Memory, MemoryStats, SearchResult};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// The main memory interface
pub struct Memories {
    store_path: PathBuf,
    store: Store,
}

impl Memories {
    /// Open the nearest memory store
    ///
    /// Searches upward for a .mnemo directory (or MNEMO_PATH), falling back
    /// to ~/.mnemo so every command runs without a prior init.
    pub fn open() -> Self {
        let store_path = find_store_path().unwrap_or_else(default_store_path);
        Self::open_at(store_path)
    }

    /// Open a memory store at a specific path
    pub fn open_at(store_path: PathBuf) -> Self {
        let store = Store::new(store_path.join(MEMORY_FILE));
        Self { store_path, store }
    }

    /// Initialize a new memory store
    pub fn init(path: &Path) -> Result<Self> {
        let store_path = path.join(".mnemo");
        fs::create_dir_all(&store_path)?;

        Ok(Self::open_at(store_path))
    }

    /// Get the store path
    pub fn store_path(&self) -> &Path {
        &self.store_path
    }

    // =========================================================================
    // Core operations
    // =========================================================================

    /// Add a new memory
    pub fn add(&self, content: &str, tags: &[String]) -> Result<Memory> {
        self.store.add(content, tags)
    }

    /// Search memories by keyword relevance
    pub fn search(&self, query: &str, limit: usize) -> Vec<SearchResult> {
        ranker::rank(&self.store.load(), query, limit)
    }

    /// List recent memories
    pub fn list(&self, limit: usize) -> Vec<SearchResult> {
        self.search("", limit)
    }

    /// Delete a memory by ID
    pub fn delete(&self, id: &str) -> Result<String> {
        self.store.delete(id)
    }

    /// Clear all memories
    pub fn clear(&self) -> Result<()> {
        self.store.clear()
    }

    /// All memories in insertion order
    pub fn all(&self) -> Vec<Memory> {
        self.store.load()
    }

    // =========================================================================
    // Stats and metadata
    // =========================================================================

    /// Get statistics
    pub fn stats(&self) -> MemoryStats {
        let memories = self.store.load();

        let mut by_tag: HashMap<String, usize> = HashMap::new();
        for memory in &memories {
            for tag in &memory.tags {
                *by_tag.entry(tag.to_lowercase()).or_insert(0) += 1;
            }
        }

        MemoryStats {
            total_memories: memories.len(),
            total_tags: by_tag.len(),
            by_tag,
        }
    }

    /// Default result limit from the store config
    pub fn default_limit(&self) -> usize {
        StoreConfig::new(self.store_path.clone()).default_limit()
    }
}
