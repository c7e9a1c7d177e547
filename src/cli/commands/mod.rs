//! CLI command implementations
//!
//! Each command module handles argument parsing and execution for a specific CLI command.

pub mod completions;
pub mod config;
pub mod discover;
pub mod extract;
pub mod reindex;
pub mod search;

// Re-export argument types for use in mod.rs
pub use completions::CompletionsArgs;
pub use config::ConfigArgs;
pub use discover::DiscoverArgs;
pub use extract::ExtractArgs;
pub use reindex::ReindexArgs;
pub use search::SearchArgs;
