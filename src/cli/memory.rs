use crate::memory::Memories;
use crate::types::{AddResponse, ClearResponse, DeleteResponse, SearchResponse, StatsResponse};
use serde::Serialize;
use std::path::Path;

/// Print a result envelope as pretty JSON on stdout
fn print_json<T: Serialize>(value: &T) -> Result<(), String> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize response: {}", e))?;
    println!("{}", json);
    Ok(())
}

/// Split a comma-separated tag list
fn parse_tags(tags: &str) -> Vec<String> {
    if tags.is_empty() {
        Vec::new()
    } else {
        tags.split(',').map(|s| s.trim().to_string()).collect()
    }
}

/// Run the init command
pub fn run_init(path: &str) -> Result<(), String> {
    let path = Path::new(path);
    let store_path = path.join(".mnemo");

    if store_path.exists() {
        return Err(format!(".mnemo already exists at {}", store_path.display()));
    }

    let mem = Memories::init(path).map_err(|e| format!("Failed to initialize store: {}", e))?;
    println!("Initialized .mnemo at {}", mem.store_path().display());

    Ok(())
}

/// Run the add command
pub fn run_add(content: &str, tags: &str) -> Result<(), String> {
    let mem = Memories::open();
    let tags_vec = parse_tags(tags);

    // Business errors and save failures both land in the envelope; the
    // command still exits 0 because a structured result was produced.
    let response = match mem.add(content, &tags_vec) {
        Ok(memory) => AddResponse {
            success: true,
            memory: Some(memory),
            error: None,
        },
        Err(e) => AddResponse {
            success: false,
            memory: None,
            error: Some(e.to_string()),
        },
    };

    print_json(&response)
}

/// Run the search command
pub fn run_search(query: Option<&str>, limit: Option<usize>) -> Result<(), String> {
    let mem = Memories::open();
    let limit = limit.unwrap_or_else(|| mem.default_limit());

    let results = mem
        .search(query.unwrap_or(""), limit)
        .into_iter()
        .map(|r| r.memory)
        .collect();

    print_json(&SearchResponse {
        success: true,
        results,
    })
}

/// Run the list command
pub fn run_list(limit: Option<usize>) -> Result<(), String> {
    let mem = Memories::open();
    let limit = limit.unwrap_or_else(|| mem.default_limit());

    let results = mem.list(limit).into_iter().map(|r| r.memory).collect();

    print_json(&SearchResponse {
        success: true,
        results,
    })
}

/// Run the delete command
pub fn run_delete(id: &str) -> Result<(), String> {
    let mem = Memories::open();

    let response = match mem.delete(id) {
        Ok(deleted_id) => DeleteResponse {
            success: true,
            deleted_id: Some(deleted_id),
            error: None,
        },
        Err(e) => DeleteResponse {
            success: false,
            deleted_id: None,
            error: Some(e.to_string()),
        },
    };

    print_json(&response)
}

/// Run the clear command
pub fn run_clear() -> Result<(), String> {
    let mem = Memories::open();

    let response = match mem.clear() {
        Ok(()) => ClearResponse {
            success: true,
            message: Some("All memories cleared".to_string()),
            error: None,
        },
        Err(e) => ClearResponse {
            success: false,
            message: None,
            error: Some(e.to_string()),
        },
    };

    print_json(&response)
}

/// Run the stats command
pub fn run_stats() -> Result<(), String> {
    let mem = Memories::open();

    print_json(&StatsResponse {
        success: true,
        stats: mem.stats(),
    })
}

/// Run the export command
pub fn run_export(format: &str) -> Result<(), String> {
    let mem = Memories::open();
    let memories = mem.all();

    match format {
        "json" => {
            let json = serde_json::to_string_pretty(&memories)
                .map_err(|e| format!("Failed to serialize: {}", e))?;
            println!("{}", json);
        }
        "md" => {
            for m in memories {
                println!("## [{}] {}", m.id, m.timestamp.to_rfc3339());
                if !m.tags.is_empty() {
                    println!("*Tags: {}*\n", m.tags.join(", "));
                }
                println!("{}\n", m.content);
                println!("---\n");
            }
        }
        _ => {
            return Err(format!("Unknown format: {}", format));
        }
    }

    Ok(())
}
