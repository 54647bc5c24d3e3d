//! Core retrieval engine.
//!
//! This module contains:
//! - ContentCache: process-lifetime cache of fetched documents
//! - SampleService: the fetch orchestrator

pub mod cache;
pub mod service;

// Re-export commonly used types
pub use cache::{CacheKey, ContentCache};
pub use service::SampleService;
