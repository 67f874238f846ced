use thiserror::Error;

/// Errors surfaced by store operations
///
/// A corrupt collection file is not represented here: `Store::load` recovers
/// it in place (warning on stderr, empty collection) so that a damaged store
/// degrades to "no memories" instead of failing every subsequent command.
#[derive(Error, Debug)]
pub enum MemoryError {
    /// Add called with empty or whitespace-only content
    #[error("Content cannot be empty")]
    EmptyContent,

    /// Delete called with an unknown memory ID
    #[error("Memory not found: {0}")]
    NotFound(String),

    /// The backing file could not be written or replaced
    #[error("Failed to write memory store: {0}")]
    Io(#[from] std::io::Error),

    /// The collection could not be serialized
    #[error("Failed to serialize memory store: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result type alias for store operations
pub type Result<T> = std::result::Result<T, MemoryError>;
