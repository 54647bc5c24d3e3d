//! udf-samples - cached retrieval of Fabric User Data Functions samples
//!
//! A content-retrieval facade over the public
//! `microsoft/fabric-user-data-functions-samples` repository: a request names
//! a resource category and an optional action, the static catalog resolves it
//! to an ordered list of remote files, each file is fetched at most once per
//! process through an in-memory cache, and the results are combined into one
//! document with per-file headers.
//!
//! # Architecture
//!
//! - `domain`: request vocabulary and error taxonomy
//! - `catalog`: static (resource, action) -> file list table and remote URLs
//! - `fetch`: the `ContentFetcher` seam and its HTTP implementation
//! - `core`: the content cache and the `SampleService` orchestrator
//! - `embedded`: documents compiled into the binary
//! - `cli`: command-line interface
//!
//! # Usage
//!
//! ```bash
//! # Index of all available samples
//! udf-samples list
//!
//! # All warehouse samples, combined
//! udf-samples get --resource warehouse --action all
//!
//! # One specific file
//! udf-samples get --resource lakehouse --action specific \
//!     --filename Lakehouse/query_data_from_tables.py
//! ```

pub mod catalog;
pub mod cli;
pub mod core;
pub mod domain;
pub mod embedded;
pub mod fetch;

// Re-export main types at crate root for convenience
pub use crate::core::{CacheKey, ContentCache, SampleService};
pub use crate::domain::{Action, ResourceCategory, SampleError, SampleRequest};
pub use crate::fetch::{ContentFetcher, GithubFetcher};
