//! Configuration management for docsync.
//!
//! This module handles loading configuration from TOML files and
//! environment variables, with defaults that point at a local Solr
//! `gettingstarted` core.

use crate::core::error::{DocSyncError, Result};
use crate::core::xdg::XdgDirs;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub solr: SolrConfig,
    #[serde(default)]
    pub discovery: DiscoveryConfig,
    #[serde(default)]
    pub index: IndexConfig,
}

/// Search service connection settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SolrConfig {
    /// Base URL of the Solr web app (without the core name)
    #[serde(default = "default_solr_url")]
    pub url: String,

    /// Target core (collection)
    #[serde(default = "default_core")]
    pub core: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_sec: u64,

    /// Format of extracted content: "xml" (XHTML markup) or "text"
    #[serde(default = "default_extract_format")]
    pub extract_format: String,
}

/// Document discovery settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DiscoveryConfig {
    /// Root of the document tree
    #[serde(default = "default_root")]
    pub root: PathBuf,

    /// File extensions to pick up, without the leading dot
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
}

/// Index mutation settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct IndexConfig {
    /// Delete every document (`*:*`) before re-indexing
    #[serde(default = "default_wipe")]
    pub wipe_before_reindex: bool,
}

// Default value functions
fn default_solr_url() -> String {
    "http://localhost:8983/solr".to_string()
}

fn default_core() -> String {
    "gettingstarted".to_string()
}

fn default_timeout() -> u64 {
    10
}

fn default_extract_format() -> String {
    "xml".to_string()
}

fn default_root() -> PathBuf {
    PathBuf::from("../sample_documents")
}

fn default_extensions() -> Vec<String> {
    vec!["doc".to_string(), "pdf".to_string()]
}

fn default_wipe() -> bool {
    true
}

impl Default for SolrConfig {
    fn default() -> Self {
        Self {
            url: default_solr_url(),
            core: default_core(),
            timeout_sec: default_timeout(),
            extract_format: default_extract_format(),
        }
    }
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            extensions: default_extensions(),
        }
    }
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            wipe_before_reindex: default_wipe(),
        }
    }
}

impl SolrConfig {
    /// URL of the configured core, e.g. `http://localhost:8983/solr/gettingstarted`
    pub fn core_url(&self) -> String {
        format!("{}/{}", self.url.trim_end_matches('/'), self.core)
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| DocSyncError::ConfigError(format!("Failed to read config file: {e}")))?;

        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load config with priority: env vars > TOML > defaults
    pub fn load() -> Result<Self> {
        let xdg = XdgDirs::new();
        Self::load_with_xdg(&xdg)
    }

    /// Load config with explicit XDG directories
    ///
    /// Priority order:
    /// 1. DOCSYNC_CONFIG env var
    /// 2. XDG config file (~/.config/docsync/config.toml)
    /// 3. ./docsync.toml
    /// 4. Defaults
    pub fn load_with_xdg(xdg: &XdgDirs) -> Result<Self> {
        xdg.log_paths();

        let mut config = if let Ok(config_path) = env::var("DOCSYNC_CONFIG") {
            Self::from_file(config_path)?
        } else {
            let xdg_config = xdg.config_file();
            if xdg_config.exists() {
                Self::from_file(xdg_config)?
            } else if Path::new("docsync.toml").exists() {
                Self::from_file("docsync.toml")?
            } else {
                Self::default()
            }
        };

        config.merge_env();
        config.validate()?;

        Ok(config)
    }

    /// Merge configuration with environment variables
    pub fn merge_env(&mut self) {
        if let Ok(url) = env::var("DOCSYNC_SOLR_URL") {
            self.solr.url = url;
        }
        if let Ok(core) = env::var("DOCSYNC_SOLR_CORE") {
            self.solr.core = core;
        }
        if let Ok(timeout) = env::var("DOCSYNC_TIMEOUT_SEC") {
            if let Ok(t) = timeout.parse() {
                self.solr.timeout_sec = t;
            }
        }
        if let Ok(format) = env::var("DOCSYNC_EXTRACT_FORMAT") {
            self.solr.extract_format = format;
        }

        if let Ok(root) = env::var("DOCSYNC_ROOT") {
            self.discovery.root = PathBuf::from(root);
        }
        if let Ok(exts) = env::var("DOCSYNC_EXTENSIONS") {
            self.discovery.extensions = exts
                .split(',')
                .map(|e| e.trim().to_string())
                .filter(|e| !e.is_empty())
                .collect();
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if !(self.solr.url.starts_with("http://") || self.solr.url.starts_with("https://")) {
            return Err(DocSyncError::ConfigError(format!(
                "Solr URL must start with http:// or https://, got '{}'",
                self.solr.url
            )));
        }

        if self.solr.core.trim().is_empty() {
            return Err(DocSyncError::ConfigError(
                "Solr core must be non-empty".to_string(),
            ));
        }

        if self.solr.timeout_sec == 0 {
            return Err(DocSyncError::ConfigError(
                "Request timeout must be non-zero".to_string(),
            ));
        }

        if !matches!(self.solr.extract_format.as_str(), "xml" | "text") {
            return Err(DocSyncError::ConfigError(format!(
                "Extract format must be 'xml' or 'text', got '{}'",
                self.solr.extract_format
            )));
        }

        if self.discovery.extensions.is_empty() {
            return Err(DocSyncError::ConfigError(
                "At least one document extension is required".to_string(),
            ));
        }

        for ext in &self.discovery.extensions {
            if ext.is_empty() || ext.contains('.') {
                return Err(DocSyncError::ConfigError(format!(
                    "Invalid extension '{ext}': use the bare suffix, e.g. 'pdf'"
                )));
            }
        }

        Ok(())
    }

    /// Log the effective configuration
    pub fn log_config(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Solr core URL: {}", self.solr.core_url());
        tracing::info!("  Timeout: {}s", self.solr.timeout_sec);
        tracing::info!("  Extract format: {}", self.solr.extract_format);
        tracing::info!("  Document root: {:?}", self.discovery.root);
        tracing::info!("  Extensions: {:?}", self.discovery.extensions);
        tracing::info!("  Wipe before reindex: {}", self.index.wipe_before_reindex);
    }
}
