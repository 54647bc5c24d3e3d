//! Remote content retrieval.
//!
//! The fetcher is a trait seam so the orchestrator can be exercised against
//! scripted fakes in tests. The only real implementation issues HTTP GETs
//! against raw GitHub content.

pub mod github;

use async_trait::async_trait;

use crate::domain::SampleError;

// Re-export the HTTP fetcher
pub use github::GithubFetcher;

/// Trait for fetching one remote document.
///
/// One attempt per call, no retries. Implementations never touch the cache;
/// caching is the orchestrator's concern.
#[async_trait]
pub trait ContentFetcher: Send + Sync {
    /// Fetch the raw UTF-8 text at `url`
    async fn fetch(&self, url: &str) -> Result<String, SampleError>;
}
