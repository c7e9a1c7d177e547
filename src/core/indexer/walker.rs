//! Document discovery.
//!
//! Walks a directory tree and collects files whose name ends in one of
//! the configured document extensions, compared case-insensitively.
//! Unlike a best-effort crawl, any walk error is fatal.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::core::error::{DocSyncError, Result};
use crate::core::types::DocumentFile;

/// File system walker that picks out document files
pub struct DocumentWalker {
    /// Lower-cased suffixes including the dot (e.g. ".pdf")
    suffixes: Vec<String>,
}

impl DocumentWalker {
    /// Create a new walker
    ///
    /// # Arguments
    ///
    /// * `extensions` - Bare extensions to match, e.g. `["doc", "pdf"]`
    pub fn new(extensions: &[String]) -> Self {
        let suffixes = extensions
            .iter()
            .map(|ext| format!(".{}", ext.trim_start_matches('.').to_lowercase()))
            .collect();

        Self { suffixes }
    }

    /// Whether a file name looks like a document
    ///
    /// `report.PDF` matches, `report.pdf.txt` and `report.docx` do not.
    pub fn is_document(&self, file_name: &str) -> bool {
        let lower = file_name.to_lowercase();
        self.suffixes.iter().any(|s| lower.ends_with(s.as_str()))
    }

    /// Collect documents under `root`, keyed by lower-cased file name
    ///
    /// Entries are visited in file-name order within each directory, so
    /// the result is deterministic. When two files share a lower-cased
    /// name the one visited last replaces the earlier one.
    pub fn discover(&self, root: &Path) -> Result<BTreeMap<String, PathBuf>> {
        if !root.is_dir() {
            return Err(DocSyncError::InvalidPath(format!(
                "{} is not a readable directory",
                root.display()
            )));
        }

        let mut found = BTreeMap::new();

        for entry in WalkDir::new(root)
            .follow_links(false)
            .sort_by_file_name()
        {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }

            // Non UTF-8 names still count; the id carries U+FFFD in their place
            let name = entry.file_name().to_string_lossy();
            if !self.is_document(&name) {
                continue;
            }

            let key = name.to_lowercase();
            if let Some(previous) = found.insert(key.clone(), entry.path().to_path_buf()) {
                tracing::debug!(
                    "Name collision on '{}': {:?} replaced by {:?}",
                    key,
                    previous,
                    entry.path()
                );
            }
        }

        tracing::debug!("Discovered {} documents under {:?}", found.len(), root);
        Ok(found)
    }

    /// Same as [`discover`](Self::discover), flattened into records
    pub fn discover_documents(&self, root: &Path) -> Result<Vec<DocumentFile>> {
        Ok(self
            .discover(root)?
            .into_iter()
            .map(|(id, path)| DocumentFile { id, path })
            .collect())
    }
}

impl Default for DocumentWalker {
    fn default() -> Self {
        Self::new(&["doc".to_string(), "pdf".to_string()])
    }
}
