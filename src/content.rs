//! Page content resolution: local cache or remote Confluence fetch.
//!
//! Cache files are never invalidated automatically; a stale cache masks
//! upstream updates until the file is deleted by hand.

use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

use crate::common::ensure_dir;
use crate::config::Config;

#[derive(Debug, Deserialize)]
struct PageResponse {
    body: PageBody,
}

#[derive(Debug, Deserialize)]
struct PageBody {
    view: PageView,
}

#[derive(Debug, Deserialize)]
struct PageView {
    value: String,
}

/// Resolves page content from the cache directory, falling back to one
/// authenticated GET against the Confluence REST API.
#[derive(Debug, Clone)]
pub struct PageSource {
    config: Config,
    contents_dir: PathBuf,
    client: reqwest::Client,
}

impl PageSource {
    pub fn new(config: Config, contents_dir: PathBuf) -> Self {
        Self {
            config,
            contents_dir,
            client: reqwest::Client::new(),
        }
    }

    /// Cache file path for a page id.
    pub fn cache_path(&self, page_id: &str) -> PathBuf {
        self.contents_dir.join(format!("content_{page_id}.json"))
    }

    /// Return the rendered view markup for a page.
    ///
    /// On cache miss the fetched content is persisted as a JSON-encoded
    /// string before being returned, so the next run is served locally.
    /// Fetch failures abort the run.
    pub async fn get(&self, page_id: &str) -> Result<String, String> {
        ensure_dir(&self.contents_dir)?;
        let cache_path = self.cache_path(page_id);

        if cache_path.exists() {
            tracing::debug!("Using cached page content at {}", cache_path.display());
            let raw = fs::read_to_string(&cache_path).map_err(|err| {
                format!("Failed to read cached page {}: {err}", cache_path.display())
            })?;
            return serde_json::from_str(&raw).map_err(|err| {
                format!("Failed to parse cached page {}: {err}", cache_path.display())
            });
        }

        let content = self.fetch(page_id).await.inspect_err(|err| {
            tracing::error!("Failed to fetch page {page_id}: {err}");
        })?;

        let encoded = serde_json::to_string(&content)
            .map_err(|err| format!("Failed to encode page content: {err}"))?;
        fs::write(&cache_path, encoded).map_err(|err| {
            format!("Failed to write cache file {}: {err}", cache_path.display())
        })?;

        Ok(content)
    }

    /// One authenticated GET for the expanded view representation.
    async fn fetch(&self, page_id: &str) -> Result<String, String> {
        let url = format!("{}/content/{}", self.config.base_url, page_id);
        tracing::info!("Fetching page {page_id} from {url}");

        let response = self
            .client
            .get(&url)
            .query(&[("expand", "body.view")])
            .basic_auth(&self.config.user_email, Some(&self.config.api_token))
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|err| format!("Request failed: {err}"))?;

        if !response.status().is_success() {
            return Err(format!("HTTP {}", response.status()));
        }

        let page: PageResponse = response
            .json()
            .await
            .map_err(|err| format!("Malformed page response: {err}"))?;

        Ok(page.body.view.value)
    }
}
