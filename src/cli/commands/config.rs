//! Config command - show the effective configuration

use crate::cli::OutputFormat;
use crate::core::services::Services;
use crate::core::xdg::XdgDirs;
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

/// Arguments for the config command
#[derive(Args, Debug)]
pub struct ConfigArgs {}

/// Configuration response
#[derive(Debug, Serialize)]
pub struct ConfigResponse {
    pub config_file: String,
    pub core_url: String,
    #[serde(flatten)]
    pub config: crate::core::config::Config,
}

/// Execute the config command
pub async fn execute(
    _args: ConfigArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let xdg = XdgDirs::new();

    let response = ConfigResponse {
        config_file: xdg.config_file().to_string_lossy().into_owned(),
        core_url: services.config.solr.core_url(),
        config: services.config.as_ref().clone(),
    };

    match format {
        OutputFormat::Human => {
            let config = &response.config;
            println!("Configuration:");
            println!("  config_file: {}", response.config_file);
            println!("  solr:");
            println!("    core_url: {}", response.core_url);
            println!("    timeout_sec: {}", config.solr.timeout_sec);
            println!("    extract_format: {}", config.solr.extract_format);
            println!("  discovery:");
            println!("    root: {}", config.discovery.root.display());
            println!("    extensions: {:?}", config.discovery.extensions);
            println!("  index:");
            println!(
                "    wipe_before_reindex: {}",
                config.index.wipe_before_reindex
            );
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
