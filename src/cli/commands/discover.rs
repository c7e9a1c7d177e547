//! Discover command - list the documents under a directory

use crate::cli::output::colors;
use crate::cli::OutputFormat;
use crate::core::services::Services;
use crate::core::types::DocumentFile;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;

/// Arguments for the discover command
#[derive(Args, Debug)]
pub struct DiscoverArgs {
    /// Directory to scan (defaults to the configured root)
    pub path: Option<PathBuf>,
}

/// Discovery response
#[derive(Debug, Serialize)]
pub struct DiscoverResponse {
    pub root: PathBuf,
    pub total: usize,
    pub documents: Vec<DocumentFile>,
}

/// Execute the discover command
pub async fn execute(
    args: DiscoverArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let root = args
        .path
        .unwrap_or_else(|| services.config.discovery.root.clone());

    let documents = services.create_pipeline().discover(&root)?;
    let response = DiscoverResponse {
        root,
        total: documents.len(),
        documents,
    };

    match format {
        OutputFormat::Human => {
            if response.documents.is_empty() {
                println!(
                    "No documents found under {}",
                    colors::file_path(&response.root.display().to_string())
                );
            }
            for doc in &response.documents {
                println!(
                    "{} -> {}",
                    colors::doc_id(&doc.id),
                    colors::file_path(&doc.path.display().to_string())
                );
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
