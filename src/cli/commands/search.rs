//! Search command - query the index

use crate::cli::output::colors;
use crate::cli::OutputFormat;
use crate::core::services::Services;
use crate::core::types::SearchHit;
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

/// Arguments for the search command
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Solr query, e.g. `_text_:invoice` or `*:*`
    pub query: String,

    /// Maximum number of results (1-1000)
    #[arg(long, short = 'k', default_value = "10")]
    pub limit: usize,
}

/// Search response
#[derive(Debug, Serialize)]
pub struct SearchResponseOutput {
    pub query: String,
    pub total_results: u64,
    pub results: Vec<SearchHit>,
}

/// Execute the search command
pub async fn execute(
    args: SearchArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    if args.query.trim().is_empty() {
        return Err("Query cannot be empty. Use '*:*' to match everything.".into());
    }

    let limit = args.limit.clamp(1, 1000);
    let (total, results) = services.solr.search(&args.query, limit).await?;

    let output = SearchResponseOutput {
        query: args.query,
        total_results: total,
        results,
    };

    match format {
        OutputFormat::Human => {
            if output.results.is_empty() {
                println!("No results found for '{}'", colors::label(&output.query));
            } else {
                println!(
                    "Found {} result(s), showing {}:\n",
                    colors::number(&output.total_results.to_string()),
                    colors::number(&output.results.len().to_string())
                );
                for (rank, hit) in output.results.iter().enumerate() {
                    let score = hit
                        .score
                        .map(|s| format!("(score: {s:.2})"))
                        .unwrap_or_default();
                    println!(
                        "[{}] {} {}",
                        rank + 1,
                        colors::doc_id(&hit.id),
                        colors::score(&score)
                    );
                }
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
