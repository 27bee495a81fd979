use tracing::debug;

/// Environment variable consulted when no key is passed on the command line.
pub const API_KEY_ENV: &str = "VTSCAN_API_KEY";

/// Resolve a credential value. If the value starts with '$', treat it as an
/// environment variable reference and resolve from the environment.
pub fn resolve_credential(value: &str) -> String {
    if let Some(var_name) = value.strip_prefix('$') {
        match std::env::var(var_name) {
            Ok(resolved) => {
                debug!(var = %var_name, "Resolved credential from environment");
                resolved
            }
            Err(_) => {
                debug!(var = %var_name, "Environment variable not set, using literal");
                value.to_string()
            }
        }
    } else {
        value.to_string()
    }
}

/// Replace every occurrence of the API key with [REDACTED].
/// Keys shorter than 4 characters are left alone.
pub fn redact_api_key(text: &str, api_key: &str) -> String {
    if api_key.len() >= 4 {
        text.replace(api_key, "[REDACTED]")
    } else {
        text.to_string()
    }
}
