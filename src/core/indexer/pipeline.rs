//! Reindex pipeline orchestration.
//!
//! Straight-line run against a [`SearchIndex`]:
//! 1. Wipe the index (unless disabled)
//! 2. Discover document files
//! 3. For each file: extract, normalize, add
//!
//! Files the service refuses to extract are recorded as skipped; any
//! other failure aborts the run and leaves the index as it is.

use chrono::Utc;
use std::path::Path;
use std::time::Instant;

use crate::core::config::Config;
use crate::core::error::{DocSyncError, Result};
use crate::core::indexer::normalizer::normalize;
use crate::core::indexer::DocumentWalker;
use crate::core::solr::SearchIndex;
use crate::core::types::{DocumentFile, FileOutcome, IndexDocument, ReindexSummary};

/// Orchestrates a full reindex of one document tree
pub struct ReindexPipeline {
    walker: DocumentWalker,
    wipe: bool,
}

impl ReindexPipeline {
    /// Create a new pipeline
    ///
    /// # Arguments
    ///
    /// * `extensions` - Document extensions to pick up
    /// * `wipe` - Delete every indexed document before adding
    pub fn new(extensions: &[String], wipe: bool) -> Self {
        Self {
            walker: DocumentWalker::new(extensions),
            wipe,
        }
    }

    /// Pipeline configured from `[discovery]` and `[index]`
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            &config.discovery.extensions,
            config.index.wipe_before_reindex,
        )
    }

    /// Whether [`run`](Self::run) wipes the index first
    pub fn wipes(&self) -> bool {
        self.wipe
    }

    /// Discover documents without touching the index
    pub fn discover(&self, root: &Path) -> Result<Vec<DocumentFile>> {
        self.walker.discover_documents(root)
    }

    /// Reindex every document under `root`
    ///
    /// The root is checked before the wipe, so a bad path never
    /// empties the index.
    pub async fn run<I>(&self, root: &Path, index: &I) -> Result<ReindexSummary>
    where
        I: SearchIndex + ?Sized,
    {
        self.run_with(root, index, |_| {}).await
    }

    /// Same as [`run`](Self::run), calling `on_skip` as soon as a file
    /// is skipped
    ///
    /// Skips reported before a fatal error have already been seen by
    /// `on_skip` when the error is returned.
    pub async fn run_with<I, F>(
        &self,
        root: &Path,
        index: &I,
        mut on_skip: F,
    ) -> Result<ReindexSummary>
    where
        I: SearchIndex + ?Sized,
        F: FnMut(&FileOutcome),
    {
        let start = Instant::now();
        let started_at = Utc::now();

        if !root.is_dir() {
            return Err(DocSyncError::InvalidPath(format!(
                "{} is not a readable directory",
                root.display()
            )));
        }

        if self.wipe {
            index.delete_all().await?;
            tracing::info!("Index wiped");
        }

        tracing::info!("Starting document discovery from {:?}", root);
        let documents = self.walker.discover_documents(root)?;
        tracing::info!("Found {} documents to index", documents.len());

        let mut outcomes = Vec::with_capacity(documents.len());
        for doc in &documents {
            let outcome = self.process_file(doc, index).await?;
            if outcome.is_skipped() {
                on_skip(&outcome);
            }
            outcomes.push(outcome);
        }

        let summary = ReindexSummary {
            root: root.to_path_buf(),
            wiped: self.wipe,
            discovered: documents.len(),
            outcomes,
            started_at,
            duration_ms: start.elapsed().as_millis() as u64,
        };

        tracing::info!(
            "Reindex complete: {} indexed, {} skipped in {}ms",
            summary.indexed(),
            summary.skipped(),
            summary.duration_ms
        );

        Ok(summary)
    }

    /// Extract, normalize and add a single document
    pub async fn process_file<I>(&self, doc: &DocumentFile, index: &I) -> Result<FileOutcome>
    where
        I: SearchIndex + ?Sized,
    {
        let extraction = match index.extract(&doc.path).await {
            Ok(extraction) => extraction,
            Err(e) if e.is_recoverable() => {
                tracing::warn!("Damaged file {:?}: {}", doc.path, e);
                return Ok(FileOutcome::Skipped {
                    id: doc.id.clone(),
                    path: doc.path.clone(),
                    reason: e.to_string(),
                });
            }
            Err(e) => return Err(e),
        };

        tracing::debug!(
            "Extracted {:?}: {} bytes of markup, {} metadata fields",
            doc.path,
            extraction.contents.len(),
            extraction.metadata.len()
        );

        let text = normalize(&extraction.contents);
        let chars = text.chars().count();

        index
            .add(&IndexDocument {
                id: doc.id.clone(),
                text,
            })
            .await?;

        Ok(FileOutcome::Indexed {
            id: doc.id.clone(),
            path: doc.path.clone(),
            chars,
        })
    }
}
