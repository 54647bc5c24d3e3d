//! Request types for sample retrieval.
//!
//! A request names a resource category, optionally narrowed by an action,
//! plus a caller-supplied filename when the action is `specific`.

use serde::{Deserialize, Serialize};

use super::error::SampleError;

/// Top-level classification of a content request.
///
/// Closed set, fixed for the process lifetime. `SamplesList` is the index
/// document; all other categories map to sample code files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceCategory {
    /// Markdown index of every available sample
    #[serde(rename = "samples-list")]
    SamplesList,

    /// Fabric warehouse operations
    #[serde(rename = "warehouse")]
    Warehouse,

    /// Fabric lakehouse operations
    #[serde(rename = "lakehouse")]
    Lakehouse,

    /// SQL database operations
    #[serde(rename = "sqldb")]
    SqlDb,

    /// Variable Library operations
    #[serde(rename = "variablelibrary")]
    VariableLibrary,

    /// Data manipulation with pandas/numpy
    #[serde(rename = "datamanipulation")]
    DataManipulation,

    /// UDF data type demonstrations
    #[serde(rename = "udfdatatypes")]
    UdfDataTypes,
}

impl std::fmt::Display for ResourceCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ResourceCategory::SamplesList => "samples-list",
            ResourceCategory::Warehouse => "warehouse",
            ResourceCategory::Lakehouse => "lakehouse",
            ResourceCategory::SqlDb => "sqldb",
            ResourceCategory::VariableLibrary => "variablelibrary",
            ResourceCategory::DataManipulation => "datamanipulation",
            ResourceCategory::UdfDataTypes => "udfdatatypes",
        };
        write!(f, "{}", s)
    }
}

impl std::str::FromStr for ResourceCategory {
    type Err = SampleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "samples-list" => Ok(ResourceCategory::SamplesList),
            "warehouse" => Ok(ResourceCategory::Warehouse),
            "lakehouse" => Ok(ResourceCategory::Lakehouse),
            "sqldb" => Ok(ResourceCategory::SqlDb),
            "variablelibrary" => Ok(ResourceCategory::VariableLibrary),
            "datamanipulation" => Ok(ResourceCategory::DataManipulation),
            "udfdatatypes" => Ok(ResourceCategory::UdfDataTypes),
            other => Err(SampleError::validation(
                "resource",
                format!(
                    "must be 'samples-list', 'warehouse', 'lakehouse', 'sqldb', \
                     'variablelibrary', 'datamanipulation', or 'udfdatatypes', got '{}'",
                    other
                ),
            )),
        }
    }
}

/// Sub-selection filter narrowing a category to specific files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    /// Every sample file for the category
    All,

    /// Query/read samples
    Query,

    /// Write/export samples
    Write,

    /// One caller-named file (requires a filename)
    Specific,
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Action::All => "all",
            Action::Query => "query",
            Action::Write => "write",
            Action::Specific => "specific",
        };
        write!(f, "{}", s)
    }
}

impl std::str::FromStr for Action {
    type Err = SampleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Action::All),
            "query" => Ok(Action::Query),
            "write" => Ok(Action::Write),
            "specific" => Ok(Action::Specific),
            other => Err(SampleError::validation(
                "action",
                format!("must be 'all', 'query', 'write', or 'specific', got '{}'", other),
            )),
        }
    }
}

/// Raw inbound request as the command layer hands it over.
///
/// Fields are unvalidated strings; the service validates and parses them
/// before doing anything else.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SampleRequest {
    /// Resource category name
    pub resource: String,

    /// Action name (required for every category except samples-list)
    #[serde(default)]
    pub action: Option<String>,

    /// File identifier (required when action is 'specific')
    #[serde(default)]
    pub filename: Option<String>,
}

impl SampleRequest {
    /// Create a request with just a resource
    pub fn new(resource: impl Into<String>) -> Self {
        Self {
            resource: resource.into(),
            action: None,
            filename: None,
        }
    }

    /// Set the action
    pub fn with_action(mut self, action: impl Into<String>) -> Self {
        self.action = Some(action.into());
        self
    }

    /// Set the filename
    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }
}
