use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A memory entry
///
/// Fields absent in the stored file fall back to empty defaults so that
/// partially-shaped records still load as well-formed values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Memory {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub content: String,
    #[serde(default = "unix_epoch")]
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub tags: Vec<String>,
}

fn unix_epoch() -> DateTime<Utc> {
    DateTime::UNIX_EPOCH
}

/// Search result with relevance score
#[derive(Debug, Clone)]
pub struct SearchResult {
    pub memory: Memory,
    pub score: i64,
}

/// Statistics about the memory store
#[derive(Debug, Clone, Default, Serialize)]
pub struct MemoryStats {
    pub total_memories: usize,
    pub total_tags: usize,
    pub by_tag: std::collections::HashMap<String, usize>,
}

// -----------------------------------------------------------------------------
// Command result envelopes
//
// Every command prints exactly one of these on stdout, handled business
// errors included. The process exits 0 whenever an envelope was produced.
// -----------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct AddResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory: Option<Memory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub success: bool,
    pub results: Vec<Memory>,
}

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ClearResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub success: bool,
    pub stats: MemoryStats,
}
