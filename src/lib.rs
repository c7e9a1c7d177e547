//! docsync - re-index document trees into Solr
//!
//! Walks a directory for `.doc` and `.pdf` files, runs each through the
//! Solr extraction handler in extract-only mode, flattens the returned
//! markup into plain text and adds it back to the index as
//! `{id, _text_}`, keyed by the lower-cased file name.
//!
//! # Architecture
//!
//! - **core**: Domain logic
//!   - config, error, types, xdg
//!   - indexer (discovery, normalization, pipeline)
//!   - solr (HTTP client behind the `SearchIndex` trait)
//!   - services (service container)
//!
//! - **cli**: clap adapter (depends on core)

pub mod cli;
pub mod core;

// Re-export commonly used types for convenience
pub use core::config::Config;
pub use core::error::{DocSyncError, Result};
pub use core::services::Services;
pub use core::solr::{SearchIndex, SolrClient};
pub use core::types::*;
