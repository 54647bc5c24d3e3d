//! Domain types for the sample retrieval engine.
//!
//! This module contains the request vocabulary and error taxonomy:
//! - ResourceCategory / Action: the closed request enums
//! - SampleRequest: the raw inbound request
//! - SampleError: validation, no-mapping and fetch failures

pub mod error;
pub mod request;

// Re-export commonly used types
pub use error::SampleError;
pub use request::{Action, ResourceCategory, SampleRequest};
