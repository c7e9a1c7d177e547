//! Service container for docsync
//!
//! Holds the effective configuration and the one Solr client the run
//! uses. Built once at startup and passed down explicitly.

use crate::core::config::Config;
use crate::core::error::Result;
use crate::core::indexer::ReindexPipeline;
use crate::core::solr::SolrClient;
use std::sync::Arc;

/// Shared services
#[derive(Clone)]
pub struct Services {
    /// Client for the configured Solr core
    pub solr: Arc<SolrClient>,

    /// Application configuration
    pub config: Arc<Config>,
}

impl Services {
    /// Create services from configuration
    pub fn new(config: Config) -> Result<Self> {
        let solr = Arc::new(SolrClient::new(&config.solr)?);

        Ok(Self {
            solr,
            config: Arc::new(config),
        })
    }

    /// Create a pipeline honoring `[discovery]` and `[index]`
    pub fn create_pipeline(&self) -> ReindexPipeline {
        ReindexPipeline::from_config(&self.config)
    }
}
