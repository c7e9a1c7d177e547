//! Core data types for docsync.
//!
//! Documents found on disk, what Solr extracts from them, what gets
//! written back to the index, and the per-run summary.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// A document file found during discovery
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentFile {
    /// Lower-cased file name, used as the index id
    pub id: String,

    /// Full path to the file
    pub path: PathBuf,
}

/// Result of running a file through the extraction handler
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Extraction {
    /// Extracted markup (XHTML) or plain text
    pub contents: String,

    /// Metadata reported by the extractor (name -> values)
    pub metadata: BTreeMap<String, Vec<String>>,
}

/// A single entry written to the index
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexDocument {
    pub id: String,

    #[serde(rename = "_text_")]
    pub text: String,
}

/// What happened to one discovered file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FileOutcome {
    Indexed {
        id: String,
        path: PathBuf,
        /// Length of the normalized text in characters
        chars: usize,
    },
    Skipped {
        id: String,
        path: PathBuf,
        reason: String,
    },
}

impl FileOutcome {
    pub fn id(&self) -> &str {
        match self {
            FileOutcome::Indexed { id, .. } | FileOutcome::Skipped { id, .. } => id,
        }
    }

    pub fn path(&self) -> &PathBuf {
        match self {
            FileOutcome::Indexed { path, .. } | FileOutcome::Skipped { path, .. } => path,
        }
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, FileOutcome::Skipped { .. })
    }
}

/// Summary of a reindex run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReindexSummary {
    /// Root of the scanned tree
    pub root: PathBuf,

    /// Whether the index was wiped before adding documents
    pub wiped: bool,

    /// Number of documents found (after collision resolution)
    pub discovered: usize,

    /// Per-file outcomes in processing order
    pub outcomes: Vec<FileOutcome>,

    /// When the run started
    pub started_at: DateTime<Utc>,

    /// Run duration in milliseconds
    pub duration_ms: u64,
}

impl ReindexSummary {
    pub fn indexed(&self) -> usize {
        self.outcomes.iter().filter(|o| !o.is_skipped()).count()
    }

    pub fn skipped(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_skipped()).count()
    }

    /// Outcomes for files the service rejected
    pub fn skipped_files(&self) -> impl Iterator<Item = &FileOutcome> {
        self.outcomes.iter().filter(|o| o.is_skipped())
    }
}

/// A single search hit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    pub id: String,

    #[serde(default)]
    pub score: Option<f32>,
}
