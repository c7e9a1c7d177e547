//! CLI adapter for docsync
//!
//! Parses arguments with clap, loads configuration, builds the service
//! container and dispatches to a command. All domain logic lives in
//! `core/`.

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// docsync - re-index document trees into Solr
///
/// Finds .doc and .pdf files under a directory, extracts their text through
/// the Solr extraction handler and re-adds them to the index keyed by
/// lower-cased file name.
#[derive(Parser, Debug)]
#[command(name = "docsync")]
#[command(version)]
#[command(about = "Re-index .doc/.pdf files into Solr", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    /// Solr base URL (overrides config), e.g. http://localhost:8983/solr
    #[arg(long, global = true)]
    pub solr_url: Option<String>,

    /// Solr core (overrides config)
    #[arg(long, global = true)]
    pub core: Option<String>,

    /// Log progress at info level
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for scripting
    Json,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Wipe the index and re-add every document under a directory
    Reindex(commands::ReindexArgs),

    /// List the documents a reindex would pick up
    Discover(commands::DiscoverArgs),

    /// Extract one file and print its normalized text
    Extract(commands::ExtractArgs),

    /// Query the index
    Search(commands::SearchArgs),

    /// Show current configuration
    #[command(name = "show-config")]
    ShowConfig(commands::ConfigArgs),

    /// Generate shell completion scripts
    ///
    /// Output completion script to stdout. To install:
    ///
    ///   bash:  docsync completions bash > ~/.local/share/bash-completion/completions/docsync
    ///   zsh:   docsync completions zsh > ~/.zfunc/_docsync
    ///   fish:  docsync completions fish > ~/.config/fish/completions/docsync.fish
    Completions(commands::CompletionsArgs),
}

/// Install the tracing subscriber
///
/// `RUST_LOG` wins; otherwise only warnings are shown unless `verbose`.
pub fn init_logging(verbose: bool, json: bool) {
    let default_filter = if verbose { "docsync=info" } else { "docsync=warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

/// Run the CLI with the provided arguments
pub async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    use crate::core::config::Config;
    use crate::core::services::Services;
    use std::sync::Arc;

    // Completions don't need config or a client
    if let Commands::Completions(args) = cli.command {
        return commands::completions::execute(args);
    }

    let mut config = Config::load()?;
    if let Some(url) = cli.solr_url {
        config.solr.url = url;
    }
    if let Some(core) = cli.core {
        config.solr.core = core;
    }
    config.validate()?;
    config.log_config();

    let services = Arc::new(Services::new(config)?);

    match cli.command {
        Commands::Reindex(args) => commands::reindex::execute(args, &services, cli.format).await,
        Commands::Discover(args) => commands::discover::execute(args, &services, cli.format).await,
        Commands::Extract(args) => commands::extract::execute(args, &services, cli.format).await,
        Commands::Search(args) => commands::search::execute(args, &services, cli.format).await,
        Commands::ShowConfig(args) => commands::config::execute(args, &services, cli.format).await,
        Commands::Completions(_) => unreachable!(), // Handled above
    }
}
