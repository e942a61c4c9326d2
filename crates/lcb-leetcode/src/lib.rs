//! LeetCode adapter (problem dataset).
//!
//! Fetches the public `api/problems/all/` listing and hands the body to the
//! core ingestion.

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, info};

use lcb_core::{catalog::CatalogStore, errors::Error, ports::CatalogSource, Result};

const USER_AGENT: &str = concat!("lcb/", env!("CARGO_PKG_VERSION"));

#[derive(Clone, Debug)]
pub struct LeetCodeClient {
    pub api_url: String,
    http: reqwest::Client,
}

impl LeetCodeClient {
    pub fn new(api_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| Error::External(format!("leetcode client build error: {e}")))?;
        Ok(Self {
            api_url: api_url.into(),
            http,
        })
    }

    /// Raw response body of the dataset endpoint.
    pub async fn fetch_body(&self) -> Result<Vec<u8>> {
        debug!(url = %self.api_url, "fetching problem catalog");

        let resp = self
            .http
            .get(&self.api_url)
            .send()
            .await
            .map_err(|e| Error::External(format!("leetcode request error: {e}")))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(Error::External(format!(
                "leetcode catalog fetch failed: {status} {}",
                body.chars().take(200).collect::<String>()
            )));
        }

        let bytes = resp
            .bytes()
            .await
            .map_err(|e| Error::External(format!("leetcode body error: {e}")))?;
        info!(bytes = bytes.len(), "fetched problem catalog");
        Ok(bytes.to_vec())
    }
}

#[async_trait]
impl CatalogSource for LeetCodeClient {
    async fn fetch(&self) -> Result<CatalogStore> {
        let body = self.fetch_body().await?;
        CatalogStore::from_json(&body)
    }
}
