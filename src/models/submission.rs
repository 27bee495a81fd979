use serde::{Deserialize, Serialize};

use crate::errors::VtScanError;

/// Acknowledgement returned by the scan-submission endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanSubmission {
    /// Opaque token used to look the report up later.
    #[serde(rename = "resource")]
    pub resource_id: String,
    #[serde(default)]
    pub scan_id: Option<String>,
    #[serde(default)]
    pub permalink: Option<String>,
    #[serde(default)]
    pub verbose_msg: Option<String>,
}

impl ScanSubmission {
    pub fn from_slice(body: &[u8]) -> Result<Self, VtScanError> {
        serde_json::from_slice(body).map_err(|e| {
            VtScanError::MalformedResponse(format!("scan submission: {}", e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_submission() {
        let body = br#"{
            "scan_id": "abc-123",
            "sha1": "da39a3ee5e6b4b0d3255bfef95601890afd80709",
            "resource": "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855",
            "response_code": 1,
            "permalink": "https://www.virustotal.com/file/e3b0/analysis/1/",
            "verbose_msg": "Scan request successfully queued, come back later for the report"
        }"#;
        let sub = ScanSubmission::from_slice(body).unwrap();
        assert_eq!(
            sub.resource_id,
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
        assert_eq!(sub.scan_id.as_deref(), Some("abc-123"));
    }

    #[test]
    fn test_missing_resource_is_malformed() {
        let body = br#"{"response_code": 0, "verbose_msg": "Invalid file"}"#;
        let err = ScanSubmission::from_slice(body).unwrap_err();
        assert!(matches!(err, VtScanError::MalformedResponse(_)));
    }

    #[test]
    fn test_non_json_is_malformed() {
        let err = ScanSubmission::from_slice(b"<html>oops</html>").unwrap_err();
        assert!(matches!(err, VtScanError::MalformedResponse(_)));
    }
}
