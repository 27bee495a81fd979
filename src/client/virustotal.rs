use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{ACCEPT_ENCODING, USER_AGENT};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response, StatusCode};
use tracing::{debug, info};

use super::service::ScanService;
use crate::config::credentials::redact_api_key;
use crate::config::ScanConfig;
use crate::errors::VtScanError;
use crate::models::ScanSubmission;

pub const DEFAULT_BASE_URL: &str = "https://www.virustotal.com/vtapi/v2";

/// User agent sent with report lookups.
pub const REPORT_USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64; rv:2.0b4) Gecko/20100818 Firefox/4.0b4";

pub struct VirusTotalClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl VirusTotalClient {
    pub fn new(api_key: &str, base_url: &str, timeout: Option<Duration>) -> Result<Self, VtScanError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| VtScanError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_key: api_key.to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &ScanConfig) -> Result<Self, VtScanError> {
        Self::new(&config.api_key, &config.base_url, config.timeout)
    }

    fn transport_error(&self, what: &str, err: reqwest::Error) -> VtScanError {
        let message = redact_api_key(&format!("{} failed: {}", what, err), &self.api_key);
        if err.is_timeout() {
            VtScanError::Timeout(message)
        } else {
            VtScanError::Network(message)
        }
    }

    /// Map the HTTP status onto the error taxonomy. 204 is how the service
    /// signals an exhausted request quota.
    fn check_status(&self, what: &str, resp: &Response) -> Result<(), VtScanError> {
        let status = resp.status();
        if status == StatusCode::NO_CONTENT {
            return Err(VtScanError::RateLimit);
        }
        if status == StatusCode::FORBIDDEN {
            return Err(VtScanError::Config(format!(
                "{} rejected with HTTP 403, check the API key",
                what
            )));
        }
        if !status.is_success() {
            return Err(VtScanError::Network(format!("{} returned HTTP {}", what, status)));
        }
        Ok(())
    }
}

#[async_trait]
impl ScanService for VirusTotalClient {
    async fn submit_file(&self, path: &Path) -> Result<ScanSubmission, VtScanError> {
        let data = tokio::fs::read(path).await.map_err(|source| VtScanError::FileAccess {
            path: path.to_path_buf(),
            source,
        })?;
        let size = data.len();

        let part = Part::bytes(data).file_name(path.display().to_string());
        let form = Form::new().part("file", part);

        let url = format!("{}/file/scan", self.base_url);
        debug!(url = %url, bytes = size, "Submitting file");

        let resp = self
            .client
            .post(&url)
            .query(&[("apikey", self.api_key.as_str())])
            .multipart(form)
            .send()
            .await
            .map_err(|e| self.transport_error("Scan submission", e))?;
        self.check_status("Scan submission", &resp)?;

        let body = resp
            .bytes()
            .await
            .map_err(|e| self.transport_error("Reading scan submission", e))?;
        let submission = ScanSubmission::from_slice(&body)?;

        info!(
            resource = %submission.resource_id,
            msg = submission.verbose_msg.as_deref().unwrap_or(""),
            "File submitted"
        );
        Ok(submission)
    }

    async fn fetch_report(&self, resource_id: &str) -> Result<Vec<u8>, VtScanError> {
        let url = format!("{}/file/report", self.base_url);
        debug!(url = %url, resource = %resource_id, "Requesting report");

        let resp = self
            .client
            .get(&url)
            .query(&[("apikey", self.api_key.as_str()), ("resource", resource_id)])
            .header(ACCEPT_ENCODING, "gzip, deflate")
            .header(USER_AGENT, REPORT_USER_AGENT)
            .send()
            .await
            .map_err(|e| self.transport_error("Report request", e))?;
        self.check_status("Report request", &resp)?;

        let body = resp
            .bytes()
            .await
            .map_err(|e| self.transport_error("Reading report", e))?;

        info!(bytes = body.len(), "Report received");
        Ok(body.to_vec())
    }

    fn service_name(&self) -> &str { "virustotal" }
}
