//! Reindex command - wipe the index and re-add a document tree

use crate::cli::output::{colors, format_duration, print_header, print_warning};
use crate::cli::OutputFormat;
use crate::core::indexer::ReindexPipeline;
use crate::core::services::Services;
use crate::core::types::FileOutcome;
use clap::Args;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Arguments for the reindex command
#[derive(Args, Debug)]
pub struct ReindexArgs {
    /// Document tree to index (defaults to the configured root)
    pub path: Option<PathBuf>,

    /// Add documents without deleting what is already indexed
    #[arg(long, short = 'k')]
    pub keep_existing: bool,

    /// Only list what would be indexed; never touch the index
    #[arg(long, short = 'n')]
    pub dry_run: bool,

    /// Suppress the summary line (damaged files are still reported)
    #[arg(long, short = 'q')]
    pub quiet: bool,
}

/// Dry-run response
#[derive(Debug, Serialize)]
pub struct DryRunResponse {
    pub root: PathBuf,
    pub would_wipe: bool,
    pub documents: Vec<crate::core::types::DocumentFile>,
}

/// Console line for a file the service rejected
pub fn damaged_file_line(outcome: &FileOutcome) -> String {
    format!("Damaged file {}", outcome.path().display())
}

/// Execute the reindex command
pub async fn execute(
    args: ReindexArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let root = args
        .path
        .clone()
        .unwrap_or_else(|| services.config.discovery.root.clone());

    let pipeline = if args.keep_existing {
        ReindexPipeline::new(&services.config.discovery.extensions, false)
    } else {
        services.create_pipeline()
    };

    if args.dry_run {
        return dry_run(&pipeline, &root, format);
    }

    if format == OutputFormat::Human && !args.quiet && pipeline.wipes() {
        eprintln!(
            "Wiping {} and indexing {}...",
            colors::label(services.solr.core_url()),
            colors::file_path(&root.display().to_string())
        );
    }

    // One stderr line per skip, in every output format
    let summary = pipeline
        .run_with(&root, services.solr.as_ref(), |outcome| {
            eprintln!("{}", damaged_file_line(outcome))
        })
        .await?;

    match format {
        OutputFormat::Human => {
            if summary.discovered == 0 {
                print_warning(&format!("No documents found under {}", root.display()));
            }
            if !args.quiet {
                println!(
                    "{} {} of {} documents ({} damaged) in {}",
                    colors::success("Indexed"),
                    colors::number(&summary.indexed().to_string()),
                    colors::number(&summary.discovered.to_string()),
                    colors::number(&summary.skipped().to_string()),
                    colors::number(&format_duration(summary.duration_ms as f64 / 1000.0))
                );
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
    }

    Ok(())
}

fn dry_run(
    pipeline: &ReindexPipeline,
    root: &Path,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let response = DryRunResponse {
        root: root.to_path_buf(),
        would_wipe: pipeline.wipes(),
        documents: pipeline.discover(root)?,
    };

    match format {
        OutputFormat::Human => {
            print_header(&format!(
                "Dry run: {} documents under {}",
                response.documents.len(),
                root.display()
            ));
            if response.would_wipe {
                println!("{}", colors::warning("The index would be wiped first"));
            }
            for doc in &response.documents {
                println!(
                    "  {} {}",
                    colors::doc_id(&doc.id),
                    colors::dim(&doc.path.display().to_string())
                );
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
