// Test fixtures: document trees, config and an in-memory index

use async_trait::async_trait;
use docsync::core::config::Config;
use docsync::core::error::{DocSyncError, Result};
use docsync::core::solr::SearchIndex;
use docsync::core::types::{Extraction, IndexDocument};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Mutex;
use tempfile::TempDir;

/// Create a directory tree with the given (relative_path, content) files
#[allow(dead_code)]
pub fn create_doc_tree(files: &[(&str, &str)]) -> TempDir {
    let temp = TempDir::new().expect("Failed to create temp dir");
    for (path, content) in files {
        let full_path = temp.path().join(path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
    }
    temp
}

/// Default config pointed at `solr_url` and `root`
#[allow(dead_code)]
pub fn test_config(solr_url: &str, root: &Path) -> Config {
    let mut config = Config::default();
    config.solr.url = solr_url.to_string();
    config.solr.core = "testcore".to_string();
    config.solr.timeout_sec = 5;
    config.discovery.root = root.to_path_buf();
    config
}

/// A call made against [`RecordingIndex`]
#[allow(dead_code)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexCall {
    DeleteAll,
    Extract(String),
    Add(IndexDocument),
}

/// In-memory index that serves canned extraction results by file name
///
/// Files without a canned result extract to their own contents.
#[allow(dead_code)]
#[derive(Default)]
pub struct RecordingIndex {
    markup: HashMap<String, String>,
    damaged: Vec<String>,
    calls: Mutex<Vec<IndexCall>>,
}

#[allow(dead_code)]
impl RecordingIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `markup` when `file_name` is extracted
    pub fn with_markup(mut self, file_name: &str, markup: &str) -> Self {
        self.markup.insert(file_name.to_string(), markup.to_string());
        self
    }

    /// Reject `file_name` the way Solr rejects a corrupt document
    pub fn with_damaged(mut self, file_name: &str) -> Self {
        self.damaged.push(file_name.to_string());
        self
    }

    pub fn calls(&self) -> Vec<IndexCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn added(&self) -> Vec<IndexDocument> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                IndexCall::Add(doc) => Some(doc),
                _ => None,
            })
            .collect()
    }

    pub fn delete_count(&self) -> usize {
        self.calls()
            .iter()
            .filter(|call| **call == IndexCall::DeleteAll)
            .count()
    }
}

#[async_trait]
impl SearchIndex for RecordingIndex {
    async fn delete_all(&self) -> Result<()> {
        self.calls.lock().unwrap().push(IndexCall::DeleteAll);
        Ok(())
    }

    async fn extract(&self, path: &Path) -> Result<Extraction> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        self.calls
            .lock()
            .unwrap()
            .push(IndexCall::Extract(name.clone()));

        if self.damaged.contains(&name) {
            return Err(DocSyncError::Extraction {
                file: path.to_path_buf(),
                message: "org.apache.tika.exception.TikaException: corrupt document".to_string(),
            });
        }

        let contents = match self.markup.get(&name) {
            Some(markup) => markup.clone(),
            None => std::fs::read_to_string(path)?,
        };

        Ok(Extraction {
            contents,
            ..Extraction::default()
        })
    }

    async fn add(&self, doc: &IndexDocument) -> Result<()> {
        self.calls.lock().unwrap().push(IndexCall::Add(doc.clone()));
        Ok(())
    }
}
