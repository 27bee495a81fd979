use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum VtScanError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Request rate limit exceeded")]
    RateLimit,

    #[error("Cannot read {}: {source}", .path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Timeout: {0}")]
    Timeout(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Invalid report: {0}")]
    InvalidReport(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
