//! HTTP client for a single Solr core.

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, StatusCode};
use serde::Serialize;
use std::path::Path;
use std::time::Duration;

use crate::core::config::SolrConfig;
use crate::core::error::{DocSyncError, Result};
use crate::core::solr::response::{error_message, parse_extract_response, parse_search_response};
use crate::core::solr::SearchIndex;
use crate::core::types::{Extraction, IndexDocument, SearchHit};

/// Client bound to one core, e.g. `http://localhost:8983/solr/gettingstarted`
#[derive(Debug, Clone)]
pub struct SolrClient {
    client: Client,
    core_url: String,
    extract_format: String,
}

impl SolrClient {
    /// Build a client with the configured request timeout
    pub fn new(config: &SolrConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("docsync/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.timeout_sec))
            .build()?;

        Ok(Self::with_client(client, config))
    }

    /// Use a pre-built reqwest client
    pub fn with_client(client: Client, config: &SolrConfig) -> Self {
        Self {
            client,
            core_url: config.core_url(),
            extract_format: config.extract_format.clone(),
        }
    }

    pub fn core_url(&self) -> &str {
        &self.core_url
    }

    /// Run a query against `/select` and return (total hits, hits)
    pub async fn search(&self, query: &str, rows: usize) -> Result<(u64, Vec<SearchHit>)> {
        let rows = rows.to_string();
        let response = self
            .client
            .get(format!("{}/select", self.core_url))
            .query(&[
                ("q", query),
                ("rows", rows.as_str()),
                ("fl", "id,score"),
                ("wt", "json"),
            ])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(DocSyncError::Solr {
                status: status.as_u16(),
                message: error_message(&body),
            });
        }

        parse_search_response(&body)
    }

    /// POST a JSON update command and commit
    async fn update<T: Serialize + ?Sized>(&self, payload: &T) -> Result<()> {
        let response = self
            .client
            .post(format!("{}/update", self.core_url))
            .query(&[("commit", "true"), ("wt", "json")])
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DocSyncError::Solr {
                status: status.as_u16(),
                message: error_message(&body),
            });
        }

        Ok(())
    }
}

#[async_trait]
impl SearchIndex for SolrClient {
    async fn delete_all(&self) -> Result<()> {
        tracing::info!("Deleting all documents from {}", self.core_url);
        self.update(&serde_json::json!({ "delete": { "query": "*:*" } }))
            .await
    }

    async fn extract(&self, path: &Path) -> Result<Extraction> {
        let file = tokio::fs::File::open(path).await?;
        let length = file.metadata().await?.len();
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "file".to_string());

        // Streamed from disk; the known length keeps the upload non-chunked
        let part = Part::stream_with_length(file, length).file_name(file_name.clone());
        let form = Form::new().part("file", part);

        let response = self
            .client
            .post(format!("{}/update/extract", self.core_url))
            .query(&[
                ("extractOnly", "true"),
                ("lowernames", "true"),
                ("wt", "json"),
                ("extractFormat", self.extract_format.as_str()),
            ])
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        // A missing handler or core is a setup problem, not a bad document
        if status == StatusCode::NOT_FOUND {
            return Err(DocSyncError::Solr {
                status: status.as_u16(),
                message: error_message(&body),
            });
        }

        if !status.is_success() {
            return Err(DocSyncError::Extraction {
                file: path.to_path_buf(),
                message: error_message(&body),
            });
        }

        let value: serde_json::Value = serde_json::from_str(&body)?;
        parse_extract_response(&value, &file_name)
    }

    async fn add(&self, doc: &IndexDocument) -> Result<()> {
        tracing::debug!("Adding {} ({} chars)", doc.id, doc.text.chars().count());
        self.update(&[doc]).await
    }
}
