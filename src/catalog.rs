//! Static catalog mapping (resource, action) pairs to remote sample files.
//!
//! The table is fixed data so exhaustiveness and ordering can be verified
//! directly in tests. File identifiers are relative paths under
//! [`BASE_CODE_URL`]; within each entry they are listed in ascending
//! file-name order, and that order is preserved in combined output.

use crate::domain::{Action, ResourceCategory};

/// Index document listing every available sample with descriptions and links
pub const SAMPLES_LIST_URL: &str =
    "https://raw.githubusercontent.com/microsoft/fabric-user-data-functions-samples/refs/heads/main/PYTHON/samples-llms.txt";

/// Base location every sample file identifier is relative to
pub const BASE_CODE_URL: &str =
    "https://raw.githubusercontent.com/microsoft/fabric-user-data-functions-samples/refs/heads/main/PYTHON/";

/// One catalog row: a (resource, action) pair and its ordered file list
#[derive(Debug, Clone, Copy)]
pub struct CatalogEntry {
    pub resource: ResourceCategory,
    pub action: Action,
    pub files: &'static [&'static str],
}

/// The full catalog table.
///
/// `samples-list` never appears here (it is a distinguished single-document
/// path), and neither does the `specific` action (the caller supplies the
/// file identifier verbatim).
pub static CATALOG: &[CatalogEntry] = &[
    CatalogEntry {
        resource: ResourceCategory::Warehouse,
        action: Action::All,
        files: &[
            "Warehouse/export_warehouse_data_to_lakehouse.py",
            "Warehouse/query_data_from_warehouse.py",
        ],
    },
    CatalogEntry {
        resource: ResourceCategory::Warehouse,
        action: Action::Query,
        files: &["Warehouse/query_data_from_warehouse.py"],
    },
    CatalogEntry {
        resource: ResourceCategory::Warehouse,
        action: Action::Write,
        files: &["Warehouse/export_warehouse_data_to_lakehouse.py"],
    },
    CatalogEntry {
        resource: ResourceCategory::Lakehouse,
        action: Action::All,
        files: &[
            "Lakehouse/query_data_from_tables.py",
            "Lakehouse/read_csv_file_from_lakehouse.py",
            "Lakehouse/write_csv_file_in_lakehouse.py",
        ],
    },
    CatalogEntry {
        resource: ResourceCategory::Lakehouse,
        action: Action::Query,
        files: &[
            "Lakehouse/query_data_from_tables.py",
            "Lakehouse/read_csv_file_from_lakehouse.py",
        ],
    },
    CatalogEntry {
        resource: ResourceCategory::Lakehouse,
        action: Action::Write,
        files: &["Lakehouse/write_csv_file_in_lakehouse.py"],
    },
    CatalogEntry {
        resource: ResourceCategory::SqlDb,
        action: Action::All,
        files: &[
            "SQLDB/read_from_sql_db.py",
            "SQLDB/write_many_rows_to_sql_db.py",
            "SQLDB/write_one_row_to_sql_db.py",
        ],
    },
    CatalogEntry {
        resource: ResourceCategory::SqlDb,
        action: Action::Query,
        files: &["SQLDB/read_from_sql_db.py"],
    },
    CatalogEntry {
        resource: ResourceCategory::SqlDb,
        action: Action::Write,
        files: &[
            "SQLDB/write_many_rows_to_sql_db.py",
            "SQLDB/write_one_row_to_sql_db.py",
        ],
    },
    CatalogEntry {
        resource: ResourceCategory::VariableLibrary,
        action: Action::All,
        files: &[
            "VariableLibrary/chat_completion_with_azure_openai.py",
            "VariableLibrary/get_variables_from_library.py",
        ],
    },
    CatalogEntry {
        resource: ResourceCategory::DataManipulation,
        action: Action::All,
        files: &[
            "DataManipulation/manipulate_data_with_pandas.py",
            "DataManipulation/transform_data_with_numpy.py",
        ],
    },
    CatalogEntry {
        resource: ResourceCategory::UdfDataTypes,
        action: Action::All,
        files: &[
            "UDFDataTypes/raise_userthrownerror.py",
            "UDFDataTypes/use_userdatafunctioncontext.py",
        ],
    },
];

/// Resolve a request to its ordered list of file identifiers.
///
/// `Action::Specific` bypasses the table and returns the caller's filename
/// verbatim; the file's existence is only discovered at fetch time. Unknown
/// (resource, action) pairs resolve to an empty list, which callers must
/// treat as "no mapping", not "zero files, success".
pub fn resolve(resource: ResourceCategory, action: Action, filename: Option<&str>) -> Vec<String> {
    if action == Action::Specific {
        return filename
            .filter(|f| !f.trim().is_empty())
            .map(|f| vec![f.to_string()])
            .unwrap_or_default();
    }

    CATALOG
        .iter()
        .find(|entry| entry.resource == resource && entry.action == action)
        .map(|entry| entry.files.iter().map(|f| f.to_string()).collect())
        .unwrap_or_default()
}
