use crate::config::{default_store_path, find_store_path, StoreConfig, DEFAULT_LIMIT};

/// Run the config command
pub fn run_config(key: Option<&str>, value: Option<&str>) -> Result<(), String> {
    let store_path = find_store_path().unwrap_or_else(default_store_path);
    let mut config = StoreConfig::new(store_path);

    match (key, value) {
        (None, None) => {
            // Show current config
            println!("Current configuration:\n");
            println!("  default_limit: {}", config.default_limit());

            for (k, v) in config.entries() {
                if k != "default_limit" {
                    println!("  {}: {}", k, v);
                }
            }
        }
        (Some(k), None) => {
            // Show specific key
            if let Some(v) = config.get(k) {
                println!("{}: {}", k, v);
            } else if k == "default_limit" {
                println!("default_limit: {} (default)", DEFAULT_LIMIT);
            } else {
                println!("{}: (not set)", k);
            }
        }
        (Some(k), Some(v)) => {
            // Set key=value
            if k == "default_limit" && v.parse::<usize>().is_err() {
                return Err(format!("default_limit must be a number, got: {}", v));
            }

            config
                .set(k, v)
                .map_err(|e| format!("Failed to save config: {}", e))?;
            println!("Set {} = {}", k, v);
        }
        (None, Some(_)) => {}
    }

    Ok(())
}
