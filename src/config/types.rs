use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Contents of the optional YAML config file.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct VtScanConfig {
    pub api: Option<ApiConfig>,
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct ApiConfig {
    /// Literal key or `$VAR` reference to an environment variable.
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct OutputConfig {
    pub quiet: Option<bool>,
    pub positive_only: Option<bool>,
    pub clear: Option<bool>,
}

/// How the report should be presented.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutputOptions {
    /// Skip the vendor table entirely.
    pub quiet: bool,
    /// Only list engines that flagged the file.
    pub positive_only: bool,
    /// Clear the terminal before printing results.
    pub clear: bool,
}

/// Fully resolved settings for one run. Built once at startup.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    pub file_path: PathBuf,
    pub api_key: String,
    pub base_url: String,
    pub timeout: Option<Duration>,
    /// Where to dump the raw report body, if anywhere.
    pub out_path: Option<PathBuf>,
    pub output: OutputOptions,
}

impl ScanConfig {
    /// Name shown in the results header: the path exactly as given.
    pub fn display_name(&self) -> String {
        self.file_path.display().to_string()
    }
}
