//! Error taxonomy for sample retrieval.
//!
//! Three kinds surface to the caller unmodified:
//! - `Validation`: the request is structurally invalid; raised before any
//!   network activity
//! - `NoMapping`: the request is valid but the catalog has no entry for the
//!   (resource, action) pair
//! - `Status` / `Transport`: the remote fetch failed, with enough detail to
//!   tell a missing remote file from an unreachable network

use reqwest::StatusCode;
use thiserror::Error;

use super::request::{Action, ResourceCategory};

/// Errors produced by the sample retrieval engine
#[derive(Debug, Clone, Error)]
pub enum SampleError {
    #[error("the '{field}' parameter {reason}")]
    Validation { field: &'static str, reason: String },

    #[error("no sample files are mapped for resource '{resource}' with action '{action}'")]
    NoMapping {
        resource: ResourceCategory,
        action: Action,
    },

    #[error("fetching '{url}' returned HTTP {status}")]
    Status { url: String, status: StatusCode },

    #[error("fetching '{url}' failed: {message}")]
    Transport { url: String, message: String },
}

impl SampleError {
    /// Shorthand for a validation failure on a named field
    pub fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Validation {
            field,
            reason: reason.into(),
        }
    }
}
