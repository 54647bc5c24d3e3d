//! Fetch orchestrator for sample retrieval.
//!
//! Coordinates request validation, catalog resolution, cached per-file
//! fetching and deterministic combination into one document.

use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::catalog::{self, BASE_CODE_URL, SAMPLES_LIST_URL};
use crate::domain::{Action, ResourceCategory, SampleError, SampleRequest};
use crate::fetch::{ContentFetcher, GithubFetcher};

use super::cache::{CacheKey, ContentCache};

/// Separator between file sections in a combined document
const FILE_SEPARATOR: &str = "\n\n# ========================================\n\n";

/// A request after validation: either the index document or a code lookup
enum ValidatedRequest {
    SamplesList,
    Code {
        resource: ResourceCategory,
        action: Action,
        filename: Option<String>,
    },
}

/// The sample retrieval engine.
///
/// Owns a fetcher seam and a shared cache handle; the service is the cache's
/// sole mutator. Requests are processed sequentially within one call so that
/// combined documents always come out in catalog order.
pub struct SampleService {
    fetcher: Arc<dyn ContentFetcher>,
    cache: ContentCache,
}

impl Default for SampleService {
    fn default() -> Self {
        Self::new()
    }
}

impl SampleService {
    /// Create a service with the HTTP fetcher and a fresh cache
    pub fn new() -> Self {
        Self::with_fetcher(Arc::new(GithubFetcher::new()), ContentCache::new())
    }

    /// Create a service with an injected fetcher and cache.
    ///
    /// Used by tests and by hosts that share one cache across services.
    pub fn with_fetcher(fetcher: Arc<dyn ContentFetcher>, cache: ContentCache) -> Self {
        Self { fetcher, cache }
    }

    /// The cache handle this service reads and fills
    pub fn cache(&self) -> &ContentCache {
        &self.cache
    }

    /// Retrieve the combined document for a request.
    ///
    /// Validation runs before any network activity. A fetch failure on any
    /// file aborts the whole request with no partial document; files fetched
    /// earlier in the same request stay cached, since those fetches did
    /// succeed and are valid for future requests.
    #[instrument(skip(self, request), fields(resource = %request.resource))]
    pub async fn get(&self, request: &SampleRequest) -> Result<String, SampleError> {
        match validate(request)? {
            ValidatedRequest::SamplesList => self.samples_list().await,
            ValidatedRequest::Code {
                resource,
                action,
                filename,
            } => self.sample_code(resource, action, filename.as_deref()).await,
        }
    }

    /// The index document: a raw passthrough, no header injected
    async fn samples_list(&self) -> Result<String, SampleError> {
        if let Some(cached) = self.cache.try_get(&CacheKey::SamplesIndex) {
            debug!("samples list served from cache");
            return Ok(cached);
        }

        info!("fetching samples list");
        let content = self.fetcher.fetch(SAMPLES_LIST_URL).await?;
        self.cache.insert(CacheKey::SamplesIndex, content.clone());
        Ok(content)
    }

    /// Resolve, fetch and combine sample code files in catalog order
    async fn sample_code(
        &self,
        resource: ResourceCategory,
        action: Action,
        filename: Option<&str>,
    ) -> Result<String, SampleError> {
        let files = catalog::resolve(resource, action, filename);
        if files.is_empty() {
            return Err(SampleError::NoMapping { resource, action });
        }

        let mut combined = String::new();

        for file in &files {
            let key = CacheKey::file(resource, file.clone());

            let content = match self.cache.try_get(&key) {
                Some(cached) => {
                    debug!(file = %file, "sample served from cache");
                    cached
                }
                None => {
                    info!(file = %file, "fetching sample code");
                    let url = format!("{}{}", BASE_CODE_URL, file);
                    let content = self.fetcher.fetch(&url).await?;
                    self.cache.insert(key, content.clone());
                    content
                }
            };

            if !combined.is_empty() {
                combined.push_str(FILE_SEPARATOR);
            }
            combined.push_str(&format!("# File: {}\n\n", file));
            combined.push_str(&content);
        }

        Ok(combined)
    }
}

/// Validate the raw request and parse its fields.
///
/// Runs before any network activity. Whitespace-only strings count as
/// missing. For `samples-list`, action and filename are ignored entirely.
fn validate(request: &SampleRequest) -> Result<ValidatedRequest, SampleError> {
    if request.resource.trim().is_empty() {
        return Err(SampleError::validation("resource", "is required"));
    }

    let resource: ResourceCategory = request.resource.parse()?;

    if resource == ResourceCategory::SamplesList {
        return Ok(ValidatedRequest::SamplesList);
    }

    let action = match request.action.as_deref().map(str::trim) {
        Some(a) if !a.is_empty() => a.parse::<Action>()?,
        _ => {
            return Err(SampleError::validation(
                "action",
                "is required for code resource types",
            ))
        }
    };

    let filename = request
        .filename
        .as_deref()
        .map(str::trim)
        .filter(|f| !f.is_empty())
        .map(str::to_string);

    if action == Action::Specific && filename.is_none() {
        return Err(SampleError::validation(
            "filename",
            "is required when action is 'specific'",
        ));
    }

    Ok(ValidatedRequest::Code {
        resource,
        action,
        filename,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use reqwest::StatusCode;

    use super::*;

    /// Scripted fetcher: serves canned responses per URL and counts calls
    struct FakeFetcher {
        responses: HashMap<String, Result<String, SampleError>>,
        calls: AtomicUsize,
    }

    impl FakeFetcher {
        fn new() -> Self {
            Self {
                responses: HashMap::new(),
                calls: AtomicUsize::new(0),
            }
        }

        fn with_file(mut self, file: &str, content: &str) -> Self {
            self.responses
                .insert(format!("{}{}", BASE_CODE_URL, file), Ok(content.to_string()));
            self
        }

        fn with_failing_file(mut self, file: &str, status: StatusCode) -> Self {
            let url = format!("{}{}", BASE_CODE_URL, file);
            self.responses
                .insert(url.clone(), Err(SampleError::Status { url, status }));
            self
        }

        fn with_samples_list(mut self, content: &str) -> Self {
            self.responses
                .insert(SAMPLES_LIST_URL.to_string(), Ok(content.to_string()));
            self
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ContentFetcher for FakeFetcher {
        async fn fetch(&self, url: &str) -> Result<String, SampleError> {
            self.calls.fetch_add(1, Ordering::SeqCst);

            match self.responses.get(url) {
                Some(result) => result.clone(),
                None => Err(SampleError::Status {
                    url: url.to_string(),
                    status: StatusCode::NOT_FOUND,
                }),
            }
        }
    }

    fn service(fetcher: FakeFetcher) -> (SampleService, Arc<FakeFetcher>) {
        let fetcher = Arc::new(fetcher);
        let service = SampleService::with_fetcher(fetcher.clone(), ContentCache::new());
        (service, fetcher)
    }

    #[tokio::test]
    async fn test_unknown_resource_fails_before_any_fetch() {
        let (service, fetcher) = service(FakeFetcher::new());

        let request = SampleRequest::new("badcategory").with_action("all");
        let err = service.get(&request).await.unwrap_err();

        assert!(matches!(err, SampleError::Validation { field: "resource", .. }));
        assert_eq!(fetcher.call_count(), 0);
    }

    #[tokio::test]
    async fn test_missing_action_fails_validation() {
        let (service, fetcher) = service(FakeFetcher::new());

        let err = service.get(&SampleRequest::new("warehouse")).await.unwrap_err();
        assert!(matches!(err, SampleError::Validation { field: "action", .. }));

        // Whitespace counts as missing
        let request = SampleRequest::new("warehouse").with_action("   ");
        let err = service.get(&request).await.unwrap_err();
        assert!(matches!(err, SampleError::Validation { field: "action", .. }));

        assert_eq!(fetcher.call_count(), 0);
    }

    #[tokio::test]
    async fn test_specific_without_filename_fails_validation() {
        let (service, fetcher) = service(FakeFetcher::new());

        let request = SampleRequest::new("warehouse").with_action("specific");
        let err = service.get(&request).await.unwrap_err();

        assert!(matches!(err, SampleError::Validation { field: "filename", .. }));
        assert_eq!(fetcher.call_count(), 0);
    }

    #[tokio::test]
    async fn test_unmapped_pair_is_no_mapping_not_success() {
        let (service, fetcher) = service(FakeFetcher::new());

        let request = SampleRequest::new("variablelibrary").with_action("query");
        let err = service.get(&request).await.unwrap_err();

        assert!(matches!(
            err,
            SampleError::NoMapping {
                resource: ResourceCategory::VariableLibrary,
                action: Action::Query,
            }
        ));
        assert_eq!(fetcher.call_count(), 0);
    }

    #[tokio::test]
    async fn test_samples_list_is_raw_passthrough() {
        let (service, _) = service(FakeFetcher::new().with_samples_list("# Samples\n\n- one\n"));

        let content = service.get(&SampleRequest::new("samples-list")).await.unwrap();
        assert_eq!(content, "# Samples\n\n- one\n");
    }

    #[tokio::test]
    async fn test_samples_list_ignores_action_and_filename() {
        let (service, _) = service(FakeFetcher::new().with_samples_list("index"));

        let request = SampleRequest::new("samples-list")
            .with_action("all")
            .with_filename("whatever.py");
        assert_eq!(service.get(&request).await.unwrap(), "index");
    }

    #[tokio::test]
    async fn test_single_catalog_file_gets_header_no_separator() {
        let (service, _) = service(
            FakeFetcher::new()
                .with_file("Warehouse/export_warehouse_data_to_lakehouse.py", "print('export')"),
        );

        let request = SampleRequest::new("warehouse").with_action("write");
        let content = service.get(&request).await.unwrap();

        assert_eq!(
            content,
            "# File: Warehouse/export_warehouse_data_to_lakehouse.py\n\nprint('export')"
        );
        assert!(!content.contains(FILE_SEPARATOR));
    }

    #[tokio::test]
    async fn test_multi_file_combination_preserves_catalog_order() {
        let (service, _) = service(
            FakeFetcher::new()
                .with_file("Warehouse/export_warehouse_data_to_lakehouse.py", "export body")
                .with_file("Warehouse/query_data_from_warehouse.py", "query body"),
        );

        let request = SampleRequest::new("warehouse").with_action("all");
        let content = service.get(&request).await.unwrap();

        assert_eq!(
            content,
            "# File: Warehouse/export_warehouse_data_to_lakehouse.py\n\n\
             export body\
             \n\n# ========================================\n\n\
             # File: Warehouse/query_data_from_warehouse.py\n\n\
             query body"
        );
    }

    #[tokio::test]
    async fn test_second_identical_request_fetches_nothing() {
        let (service, fetcher) = service(
            FakeFetcher::new()
                .with_file("Warehouse/export_warehouse_data_to_lakehouse.py", "export body")
                .with_file("Warehouse/query_data_from_warehouse.py", "query body"),
        );

        let request = SampleRequest::new("warehouse").with_action("all");
        let first = service.get(&request).await.unwrap();
        assert_eq!(fetcher.call_count(), 2);

        let second = service.get(&request).await.unwrap();
        assert_eq!(first, second);
        assert_eq!(fetcher.call_count(), 2);
    }

    #[tokio::test]
    async fn test_overlapping_request_reuses_cached_file() {
        let (service, fetcher) = service(
            FakeFetcher::new()
                .with_file("SQLDB/read_from_sql_db.py", "read")
                .with_file("SQLDB/write_many_rows_to_sql_db.py", "write many")
                .with_file("SQLDB/write_one_row_to_sql_db.py", "write one"),
        );

        let query = SampleRequest::new("sqldb").with_action("query");
        service.get(&query).await.unwrap();
        assert_eq!(fetcher.call_count(), 1);

        // "all" shares read_from_sql_db.py with "query"; only the two
        // write files are fetched
        let all = SampleRequest::new("sqldb").with_action("all");
        service.get(&all).await.unwrap();
        assert_eq!(fetcher.call_count(), 3);
    }

    #[tokio::test]
    async fn test_specific_fetch_failure_surfaces_status() {
        let (service, fetcher) = service(
            FakeFetcher::new()
                .with_failing_file("Warehouse/custom_file.py", StatusCode::NOT_FOUND),
        );

        let request = SampleRequest::new("warehouse")
            .with_action("specific")
            .with_filename("Warehouse/custom_file.py");
        let err = service.get(&request).await.unwrap_err();

        match err {
            SampleError::Status { url, status } => {
                assert!(url.ends_with("Warehouse/custom_file.py"));
                assert_eq!(status, StatusCode::NOT_FOUND);
            }
            other => panic!("expected status error, got {:?}", other),
        }
        assert_eq!(fetcher.call_count(), 1);
    }

    #[tokio::test]
    async fn test_partial_failure_returns_no_document_but_keeps_early_fetches() {
        let (service, fetcher) = service(
            FakeFetcher::new()
                .with_file("Warehouse/export_warehouse_data_to_lakehouse.py", "export body")
                .with_failing_file(
                    "Warehouse/query_data_from_warehouse.py",
                    StatusCode::INTERNAL_SERVER_ERROR,
                ),
        );

        let request = SampleRequest::new("warehouse").with_action("all");
        let err = service.get(&request).await.unwrap_err();
        assert!(matches!(err, SampleError::Status { .. }));

        // The first file's successful fetch stays cached for future requests
        let first_key = CacheKey::file(
            ResourceCategory::Warehouse,
            "Warehouse/export_warehouse_data_to_lakehouse.py",
        );
        assert!(service.cache().contains(&first_key));

        // A later request for just that file is a pure cache hit
        let write = SampleRequest::new("warehouse").with_action("write");
        let calls_before = fetcher.call_count();
        service.get(&write).await.unwrap();
        assert_eq!(fetcher.call_count(), calls_before);
    }

    #[tokio::test]
    async fn test_cache_is_namespaced_by_category() {
        // The same caller-supplied path under two categories is fetched twice
        let (service, fetcher) =
            service(FakeFetcher::new().with_file("Shared/util.py", "shared body"));

        let warehouse = SampleRequest::new("warehouse")
            .with_action("specific")
            .with_filename("Shared/util.py");
        let lakehouse = SampleRequest::new("lakehouse")
            .with_action("specific")
            .with_filename("Shared/util.py");

        service.get(&warehouse).await.unwrap();
        service.get(&lakehouse).await.unwrap();
        assert_eq!(fetcher.call_count(), 2);
    }
}
