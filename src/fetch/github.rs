//! HTTP fetcher for raw GitHub content.

use async_trait::async_trait;
use reqwest::header::USER_AGENT;

use super::ContentFetcher;
use crate::domain::SampleError;

/// Identifying tag sent with every request
const CLIENT_TAG: &str = concat!("udf-samples/", env!("CARGO_PKG_VERSION"));

/// Fetches raw file contents over HTTPS with a shared client
pub struct GithubFetcher {
    client: reqwest::Client,
}

impl Default for GithubFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl GithubFetcher {
    /// Create a fetcher with a fresh connection pool
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl ContentFetcher for GithubFetcher {
    async fn fetch(&self, url: &str) -> Result<String, SampleError> {
        let response = self
            .client
            .get(url)
            .header(USER_AGENT, CLIENT_TAG)
            .send()
            .await
            .map_err(|e| SampleError::Transport {
                url: url.to_string(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(SampleError::Status {
                url: url.to_string(),
                status,
            });
        }

        response.text().await.map_err(|e| SampleError::Transport {
            url: url.to_string(),
            message: e.to_string(),
        })
    }
}
