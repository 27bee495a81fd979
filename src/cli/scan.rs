use std::sync::Arc;
use std::time::Duration;

use tracing::info;

use crate::cli::commands::Cli;
use crate::client::virustotal::DEFAULT_BASE_URL;
use crate::client::VirusTotalClient;
use crate::config::credentials::{resolve_credential, API_KEY_ENV};
use crate::config::{self, OutputOptions, ScanConfig, VtScanConfig};
use crate::errors::VtScanError;
use crate::models::ReportOutcome;
use crate::pipeline::ScanPipeline;

pub async fn handle_scan(cli: Cli) -> Result<(), VtScanError> {
    // Parse config file if provided
    let file_config = match &cli.config {
        Some(path) => Some(config::parse_config(path).await?),
        None => None,
    };

    let scan_config = build_scan_config(&cli, file_config.as_ref())?;
    let client = VirusTotalClient::from_config(&scan_config)?;
    let pipeline = ScanPipeline::new(scan_config, Arc::new(client));

    let mut stdout = std::io::stdout();
    let outcome = pipeline.run(&mut stdout).await?;

    match outcome {
        ReportOutcome::Found(report) => info!(
            positives = report.positives,
            total = report.total,
            "Scan completed"
        ),
        ReportOutcome::Queued => info!("Resource queued; run again later"),
        ReportOutcome::Unavailable { code, .. } => {
            info!(response_code = code.as_i64(), "Report unavailable")
        }
    }

    Ok(())
}

/// Merge CLI args (which already carry the environment fallback for the key)
/// with the optional config file. CLI wins.
pub fn build_scan_config(cli: &Cli, file_config: Option<&VtScanConfig>) -> Result<ScanConfig, VtScanError> {
    let api = file_config.and_then(|c| c.api.as_ref());
    let output = file_config.and_then(|c| c.output.as_ref());

    let api_key = cli.key.clone()
        .filter(|k| !k.is_empty())
        .or_else(|| api.and_then(|a| a.api_key.as_deref()).map(resolve_credential))
        .filter(|k| !k.is_empty())
        .ok_or_else(|| VtScanError::Config(format!(
            "No API key: pass -k/--key or set {}",
            API_KEY_ENV
        )))?;

    let base_url = api
        .and_then(|a| a.base_url.clone())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    let timeout = cli.timeout
        .or_else(|| api.and_then(|a| a.timeout_secs))
        .map(Duration::from_secs);

    let from_file = |pick: fn(&config::OutputConfig) -> Option<bool>| {
        output.and_then(pick).unwrap_or(false)
    };

    Ok(ScanConfig {
        file_path: cli.file.clone(),
        api_key,
        base_url,
        timeout,
        out_path: cli.out.clone(),
        output: OutputOptions {
            quiet: cli.quiet || from_file(|o| o.quiet),
            positive_only: cli.positive || from_file(|o| o.positive_only),
            clear: cli.clear || from_file(|o| o.clear),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ApiConfig, OutputConfig};
    use clap::Parser;

    fn cli(args: &[&str]) -> Cli {
        let mut argv = vec!["vtscan"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_cli_key_wins_over_file() {
        let file = VtScanConfig {
            api: Some(ApiConfig {
                api_key: Some("from-file".into()),
                ..Default::default()
            }),
            ..Default::default()
        };
        let config = build_scan_config(&cli(&["-k", "from-cli", "a.bin"]), Some(&file)).unwrap();
        assert_eq!(config.api_key, "from-cli");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, None);
    }

    #[test]
    fn test_file_key_resolves_env_reference() {
        std::env::set_var("TEST_VTSCAN_FILE_KEY", "resolved-key");
        let file = VtScanConfig {
            api: Some(ApiConfig {
                api_key: Some("$TEST_VTSCAN_FILE_KEY".into()),
                base_url: Some("http://127.0.0.1:9999/vtapi/v2".into()),
                timeout_secs: Some(15),
            }),
            ..Default::default()
        };
        let mut args = cli(&["a.bin"]);
        args.key = None;
        let config = build_scan_config(&args, Some(&file)).unwrap();
        std::env::remove_var("TEST_VTSCAN_FILE_KEY");

        assert_eq!(config.api_key, "resolved-key");
        assert_eq!(config.base_url, "http://127.0.0.1:9999/vtapi/v2");
        assert_eq!(config.timeout, Some(Duration::from_secs(15)));
    }

    #[test]
    fn test_missing_key_is_config_error() {
        let mut args = cli(&["a.bin"]);
        args.key = None;
        let err = build_scan_config(&args, None).unwrap_err();
        assert!(matches!(err, VtScanError::Config(_)));
    }

    #[test]
    fn test_empty_key_is_config_error() {
        let err = build_scan_config(&cli(&["-k", "", "a.bin"]), None).unwrap_err();
        assert!(matches!(err, VtScanError::Config(_)));
    }

    #[test]
    fn test_output_flags_merge() {
        let file = VtScanConfig {
            output: Some(OutputConfig {
                positive_only: Some(true),
                ..Default::default()
            }),
            ..Default::default()
        };
        let config = build_scan_config(&cli(&["-k", "k", "-q", "-o", "r.json", "a.bin"]), Some(&file)).unwrap();
        assert!(config.output.quiet);
        assert!(config.output.positive_only);
        assert!(!config.output.clear);
        assert_eq!(config.out_path.as_deref(), Some(std::path::Path::new("r.json")));
        assert_eq!(config.display_name(), "a.bin");
    }

    #[test]
    fn test_cli_timeout_wins() {
        let file = VtScanConfig {
            api: Some(ApiConfig { timeout_secs: Some(99), ..Default::default() }),
            ..Default::default()
        };
        let config = build_scan_config(&cli(&["-k", "k", "--timeout", "5", "a.bin"]), Some(&file)).unwrap();
        assert_eq!(config.timeout, Some(Duration::from_secs(5)));
    }
}
