use std::path::Path;

use async_trait::async_trait;

use crate::errors::VtScanError;
use crate::models::ScanSubmission;

#[async_trait]
pub trait ScanService: Send + Sync {
    /// Upload a file for analysis and return the service's acknowledgement.
    async fn submit_file(&self, path: &Path) -> Result<ScanSubmission, VtScanError>;

    /// Fetch the report for a submitted resource once, returning the raw body.
    async fn fetch_report(&self, resource_id: &str) -> Result<Vec<u8>, VtScanError>;

    /// Service name for logging
    fn service_name(&self) -> &str;
}
