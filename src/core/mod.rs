//! Core domain logic
//!
//! Everything the CLI drives lives here and has no knowledge of
//! argument parsing or terminal output.
//!
//! # Architecture
//!
//! - **config**: Configuration loading (TOML + environment)
//! - **error**: Error types and Result alias
//! - **types**: Domain data structures
//! - **xdg**: Config file location
//! - **indexer**: Discovery, normalization and the reindex pipeline
//! - **solr**: Search service client
//! - **services**: Service container

pub mod config;
pub mod error;
pub mod indexer;
pub mod services;
pub mod solr;
pub mod types;
pub mod xdg;

// Re-export key types for convenience
pub use config::Config;
pub use error::{DocSyncError, Result};
pub use services::Services;
