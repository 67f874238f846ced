use crate::types::{Memory, SearchResult};

/// Weight for the full query occurring as a contiguous substring of content
pub const PHRASE_WEIGHT: i64 = 10;
/// Weight per query token occurring as a substring of content
pub const WORD_WEIGHT: i64 = 3;
/// Weight per tag containing the full query as a substring
pub const TAG_WEIGHT: i64 = 5;

/// Rank a collection against a query
///
/// An empty or whitespace-only query skips scoring and returns the `limit`
/// most recent records (browse mode). Otherwise the query is lower-cased and
/// whitespace-split; records are scored by phrase, word, and tag containment
/// and records scoring zero are dropped. Ties break by timestamp, most
/// recent first. Identical inputs always produce identical output ordering.
pub fn rank(memories: &[Memory], query: &str, limit: usize) -> Vec<SearchResult> {
    if query.trim().is_empty() {
        let mut recent: Vec<&Memory> = memories.iter().collect();
        recent.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        return recent
            .into_iter()
            .take(limit)
            .map(|m| SearchResult {
                memory: m.clone(),
                score: 0,
            })
            .collect();
    }

    let query_lower = query.to_lowercase();
    // Tokens are not deduplicated: a repeated token reinforces its own score.
    let words: Vec<&str> = query_lower.split_whitespace().collect();

    let mut scored: Vec<SearchResult> = Vec::new();

    for memory in memories {
        let content = memory.content.to_lowercase();
        let mut score = 0;

        // Full phrase match gets the highest weight
        if content.contains(&query_lower) {
            score += PHRASE_WEIGHT;
        }

        // Individual word matches, substring containment
        for word in &words {
            if content.contains(*word) {
                score += WORD_WEIGHT;
            }
        }

        // Tags match against the whole query
        for tag in &memory.tags {
            if tag.to_lowercase().contains(&query_lower) {
                score += TAG_WEIGHT;
            }
        }

        // No score means no match
        if score > 0 {
            scored.push(SearchResult {
                memory: memory.clone(),
                score,
            });
        }
    }

    scored.sort_by(|a, b| {
        b.score
            .cmp(&a.score)
            .then_with(|| b.memory.timestamp.cmp(&a.memory.timestamp))
    });
    scored.truncate(limit);

    scored
}
