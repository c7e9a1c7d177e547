//! Search service access.
//!
//! The pipeline only talks to the index through [`SearchIndex`], so the
//! HTTP client can be swapped for an in-memory double in tests.
//!
//! - **client**: `SolrClient`, the reqwest-backed implementation
//! - **response**: parsing of extract/select/error payloads

pub mod client;
pub mod response;

use async_trait::async_trait;
use std::path::Path;

use crate::core::error::Result;
use crate::core::types::{Extraction, IndexDocument};

pub use client::SolrClient;

/// Remote operations the reindex pipeline needs
#[async_trait]
pub trait SearchIndex: Send + Sync {
    /// Delete every document in the index (`*:*`)
    async fn delete_all(&self) -> Result<()>;

    /// Upload a file in extract-only mode and return what the service extracted
    ///
    /// A document the service cannot parse yields
    /// [`DocSyncError::Extraction`](crate::core::error::DocSyncError::Extraction).
    async fn extract(&self, path: &Path) -> Result<Extraction>;

    /// Add a single document and commit
    async fn add(&self, doc: &IndexDocument) -> Result<()>;
}
