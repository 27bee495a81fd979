use std::path::Path;
use crate::errors::VtScanError;
use super::types::VtScanConfig;
use super::schema::CONFIG_SCHEMA;
use tracing::{debug, warn};

pub async fn parse_config(path: &Path) -> Result<VtScanConfig, VtScanError> {
    if !path.exists() {
        return Err(VtScanError::Config(format!("Config file not found: {}", path.display())));
    }

    let metadata = tokio::fs::metadata(path).await?;
    if metadata.len() > 65_536 {
        return Err(VtScanError::Config("Config file exceeds 64KB limit".into()));
    }

    let content = tokio::fs::read_to_string(path).await?;
    let config = parse_config_str(&content)?;
    debug!(path = %path.display(), "Loaded config file");
    Ok(config)
}

pub fn parse_config_str(content: &str) -> Result<VtScanConfig, VtScanError> {
    let yaml: serde_yaml::Value = serde_yaml::from_str(content)?;

    // An empty file parses as null
    if yaml.is_null() {
        return Ok(VtScanConfig::default());
    }

    validate_schema(&yaml)?;

    let config: VtScanConfig = serde_yaml::from_value(yaml)?;
    validate_values(&config)?;

    Ok(config)
}

/// Validate config against the JSON schema for structural correctness.
fn validate_schema(yaml: &serde_yaml::Value) -> Result<(), VtScanError> {
    // Convert YAML value to JSON for schema validation
    let json_str = serde_json::to_string(yaml)
        .map_err(|e| VtScanError::Config(format!("Config conversion error: {}", e)))?;
    let json_value: serde_json::Value = serde_json::from_str(&json_str)
        .map_err(|e| VtScanError::Config(format!("Config conversion error: {}", e)))?;

    let compiled = jsonschema::JSONSchema::compile(&CONFIG_SCHEMA)
        .map_err(|e| VtScanError::Config(format!("Schema compilation error: {}", e)))?;

    let result = compiled.validate(&json_value);
    if let Err(errors) = result {
        // Advisory only; typed parsing below is the hard gate
        for e in errors {
            warn!(validation_error = %format!("{} at {}", e, e.instance_path), "Config schema warning");
        }
    }

    Ok(())
}

/// Reject values that parse but cannot work.
fn validate_values(config: &VtScanConfig) -> Result<(), VtScanError> {
    if let Some(api) = &config.api {
        if let Some(base_url) = &api.base_url {
            if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
                return Err(VtScanError::Config(format!(
                    "base_url must be an http(s) URL, got '{}'",
                    base_url
                )));
            }
        }
        if api.timeout_secs == Some(0) {
            return Err(VtScanError::Config("timeout_secs must be at least 1".into()));
        }
        if api.api_key.as_deref() == Some("") {
            warn!("api_key is present in config file but empty");
        }
    }

    Ok(())
}
