//! Extract command - run one file through the extraction handler

use crate::cli::output::{colors, print_header, truncate};
use crate::cli::OutputFormat;
use crate::core::indexer::normalize;
use crate::core::services::Services;
use crate::core::solr::SearchIndex;
use clap::Args;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;

/// Arguments for the extract command
#[derive(Args, Debug)]
pub struct ExtractArgs {
    /// File to extract
    pub file: PathBuf,

    /// Print the markup as returned by Solr instead of normalized text
    #[arg(long)]
    pub raw: bool,

    /// Also print extractor metadata
    #[arg(long, short = 'm')]
    pub metadata: bool,
}

/// Extraction response
#[derive(Debug, Serialize)]
pub struct ExtractResponse {
    pub file: PathBuf,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<BTreeMap<String, Vec<String>>>,
}

/// Execute the extract command
pub async fn execute(
    args: ExtractArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    if !args.file.is_file() {
        return Err(format!("'{}' is not a file", args.file.display()).into());
    }

    let extraction = services.solr.extract(&args.file).await?;

    let text = if args.raw {
        extraction.contents
    } else {
        normalize(&extraction.contents)
    };

    let response = ExtractResponse {
        file: args.file,
        text,
        metadata: args.metadata.then_some(extraction.metadata),
    };

    match format {
        OutputFormat::Human => {
            if let Some(metadata) = &response.metadata {
                print_header("Metadata:");
                for (name, values) in metadata {
                    println!(
                        "  {}: {}",
                        colors::label(name),
                        truncate(&values.join(", "), 120)
                    );
                }
                println!();
            }
            println!("{}", response.text);
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
