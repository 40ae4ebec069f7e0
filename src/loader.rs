//! Catalog loading
//!
//! Sources for the destination catalog JSON. The catalog is fetched
//! fresh on every search call; nothing here caches or mutates it.

use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::Result;
use crate::config::CatalogConfig;
use crate::error::TravelRecError;
use crate::models::Catalog;

/// A source the destination catalog can be fetched from
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch and parse the catalog. Called once per search.
    async fn fetch(&self) -> Result<Catalog>;

    /// Human-readable description of the source, for logging
    fn describe(&self) -> String;
}

/// Reads the catalog from a JSON file on disk
pub struct FileCatalogSource {
    path: PathBuf,
}

impl FileCatalogSource {
    #[must_use]
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl CatalogSource for FileCatalogSource {
    async fn fetch(&self) -> Result<Catalog> {
        debug!("Reading catalog from {}", self.path.display());
        let bytes = tokio::fs::read(&self.path).await.map_err(|e| {
            TravelRecError::data(format!(
                "Failed to read catalog file {}: {e}",
                self.path.display()
            ))
        })?;
        Catalog::from_json(&bytes)
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}

/// Fetches the catalog from an HTTP(S) URL
pub struct HttpCatalogSource {
    client: reqwest::Client,
    url: String,
}

impl HttpCatalogSource {
    /// Build a source with a request timeout. No retries: a failed
    /// fetch is terminal for that search invocation.
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("travelrec/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| TravelRecError::general(format!("Failed to create HTTP client: {e}")))?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

#[async_trait]
impl CatalogSource for HttpCatalogSource {
    async fn fetch(&self) -> Result<Catalog> {
        debug!("Fetching catalog from {}", self.url);
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|e| TravelRecError::data(format!("Catalog request failed: {e}")))?;
        let bytes = response
            .bytes()
            .await
            .map_err(|e| TravelRecError::data(format!("Catalog response truncated: {e}")))?;
        Catalog::from_json(&bytes)
    }

    fn describe(&self) -> String {
        format!("url {}", self.url)
    }
}

/// Build the configured catalog source. An `http://` or `https://`
/// source is fetched over the network, anything else is a file path.
pub fn source_from_config(config: &CatalogConfig) -> Result<Box<dyn CatalogSource>> {
    if config.source.starts_with("http://") || config.source.starts_with("https://") {
        let timeout = Duration::from_secs(u64::from(config.timeout_seconds));
        Ok(Box::new(HttpCatalogSource::new(&config.source, timeout)?))
    } else {
        Ok(Box::new(FileCatalogSource::new(&config.source)))
    }
}
