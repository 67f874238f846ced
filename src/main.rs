use clap::{Parser, Subcommand};
use mnemo::cli;

#[derive(Parser)]
#[command(name = "mnemo")]
#[command(version)]
#[command(about = "Local memory store with keyword search")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a .mnemo directory
    Init {
        /// Directory to initialize .mnemo in
        #[arg(short, long, default_value = ".")]
        path: String,
    },

    /// Add a memory
    Add {
        /// Content to remember
        content: String,

        /// Comma-separated tags
        #[arg(short, long, default_value = "")]
        tags: String,
    },

    /// Search memories by keyword (omit query for recent)
    Search {
        /// Search query
        query: Option<String>,

        /// Maximum results
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Delete a memory by ID
    Delete {
        /// Memory ID to delete
        id: String,
    },

    /// List recent memories
    List {
        /// Maximum results
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Delete all memories
    Clear,

    /// Show statistics
    Stats,

    /// Export memories to stdout
    Export {
        /// Output format
        #[arg(short, long, default_value = "json", value_parser = ["json", "md"])]
        format: String,
    },

    /// View or set configuration
    Config {
        /// Config key
        key: Option<String>,

        /// Config value
        value: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init { path } => cli::memory::run_init(&path),
        Commands::Add { content, tags } => cli::memory::run_add(&content, &tags),
        Commands::Search { query, limit } => cli::memory::run_search(query.as_deref(), limit),
        Commands::Delete { id } => cli::memory::run_delete(&id),
        Commands::List { limit } => cli::memory::run_list(limit),
        Commands::Clear => cli::memory::run_clear(),
        Commands::Stats => cli::memory::run_stats(),
        Commands::Export { format } => cli::memory::run_export(&format),
        Commands::Config { key, value } => cli::config::run_config(key.as_deref(), value.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
