use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

/// Collection file name inside the store directory
pub const MEMORY_FILE: &str = "memories.json";

/// Default number of results for search and list
pub const DEFAULT_LIMIT: usize = 10;

/// Find the .mnemo directory, searching upward from current directory
pub fn find_store_path() -> Option<PathBuf> {
    let mut current = std::env::current_dir().ok()?;

    loop {
        let store = current.join(".mnemo");
        if store.is_dir() {
            return Some(store);
        }

        if !current.pop() {
            break;
        }
    }

    // Check MNEMO_PATH environment variable
    if let Ok(path) = std::env::var("MNEMO_PATH") {
        let store = PathBuf::from(path);
        if store.is_dir() {
            return Some(store);
        }
    }

    None
}

/// Fallback store location in the home directory
///
/// Used when no project-local .mnemo exists, so commands work without an
/// explicit init.
pub fn default_store_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".mnemo")
}

/// Configuration manager for a .mnemo directory
pub struct StoreConfig {
    store_path: PathBuf,
    config_file: PathBuf,
    config: HashMap<String, serde_yaml::Value>,
}

impl StoreConfig {
    pub fn new(store_path: PathBuf) -> Self {
        let config_file = store_path.join("_config.yaml");
        let mut instance = Self {
            store_path,
            config_file,
            config: HashMap::new(),
        };
        instance.load();
        instance
    }

    fn load(&mut self) {
        if self.config_file.exists() {
            if let Ok(content) = fs::read_to_string(&self.config_file) {
                if let Ok(config) =
                    serde_yaml::from_str::<HashMap<String, serde_yaml::Value>>(&content)
                {
                    self.config = config;
                }
            }
        }
    }

    fn save(&self) -> std::io::Result<()> {
        fs::create_dir_all(&self.store_path)?;
        let content = serde_yaml::to_string(&self.config).unwrap_or_default();
        fs::write(&self.config_file, content)
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.config.get(key).and_then(|v| match v {
            serde_yaml::Value::String(s) => Some(s.clone()),
            serde_yaml::Value::Number(n) => Some(n.to_string()),
            serde_yaml::Value::Bool(b) => Some(b.to_string()),
            _ => None,
        })
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::io::Result<()> {
        self.config
            .insert(key.to_string(), serde_yaml::Value::String(value.to_string()));
        self.save()
    }

    /// All configured entries, sorted by key
    pub fn entries(&self) -> Vec<(String, String)> {
        let mut entries: Vec<(String, String)> = self
            .config
            .keys()
            .filter_map(|k| self.get(k).map(|v| (k.clone(), v)))
            .collect();
        entries.sort();
        entries
    }

    pub fn default_limit(&self) -> usize {
        self.get("default_limit")
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_LIMIT)
    }
}
