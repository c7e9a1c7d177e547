//! docsync - re-index document trees into Solr
//!
//! # Examples
//!
//! ```bash
//! # Wipe the index and re-add every .doc/.pdf under ./sample_documents
//! docsync reindex ./sample_documents
//!
//! # See what would be indexed without touching Solr
//! docsync reindex ./sample_documents --dry-run
//!
//! # Add documents to another core without wiping it
//! docsync --core reports reindex /srv/reports --keep-existing
//!
//! # Query the index
//! docsync search "_text_:invoice"
//! ```

use clap::Parser;
use docsync::cli::{init_logging, run, Cli};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.log_json);

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
