//! Local memory store with keyword search
//!
//! A single JSON collection file holds the memories; every command is a
//! short-lived load/mutate/save transaction driven by the CLI in `main`.

pub mod cli;
pub mod config;
pub mod error;
pub mod memory;
pub mod ranker;
pub mod store;
pub mod types;
