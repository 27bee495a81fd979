use super::types::VtScanError;

#[derive(Debug, Clone)]
pub struct ErrorClassification {
    pub error_type: &'static str,
    pub exit_code: i32,
}

impl VtScanError {
    /// Classify this error to determine its type name and process exit code.
    pub fn classify(&self) -> ErrorClassification {
        match self {
            VtScanError::Config(_) => ErrorClassification {
                error_type: "ConfigError",
                exit_code: 2,
            },
            VtScanError::RateLimit => ErrorClassification {
                error_type: "RateLimitError",
                exit_code: 3,
            },
            VtScanError::MalformedResponse(_) => ErrorClassification {
                error_type: "MalformedResponseError",
                exit_code: 4,
            },
            VtScanError::InvalidReport(_) => ErrorClassification {
                error_type: "InvalidReportError",
                exit_code: 4,
            },
            VtScanError::FileAccess { .. } => ErrorClassification {
                error_type: "FileAccessError",
                exit_code: 5,
            },

            // Everything else is a generic failure
            VtScanError::Network(_) => ErrorClassification {
                error_type: "NetworkError",
                exit_code: 1,
            },
            VtScanError::Timeout(_) => ErrorClassification {
                error_type: "TimeoutError",
                exit_code: 1,
            },
            VtScanError::Io(_) => ErrorClassification {
                error_type: "IoError",
                exit_code: 1,
            },
            VtScanError::Yaml(_) => ErrorClassification {
                error_type: "YamlError",
                exit_code: 1,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_rate_limit_has_own_exit_code() {
        let class = VtScanError::RateLimit.classify();
        assert_eq!(class.error_type, "RateLimitError");
        assert_eq!(class.exit_code, 3);
    }

    #[test]
    fn test_config_error_exit_code() {
        let err = VtScanError::Config("no API key".into());
        assert_eq!(err.classify().exit_code, 2);
    }

    #[test]
    fn test_response_shape_errors_share_exit_code() {
        let malformed = VtScanError::MalformedResponse("missing field".into());
        let invalid = VtScanError::InvalidReport("total is zero".into());
        assert_eq!(malformed.classify().exit_code, 4);
        assert_eq!(invalid.classify().exit_code, 4);
        assert_ne!(malformed.classify().error_type, invalid.classify().error_type);
    }

    #[test]
    fn test_file_access_error() {
        let err = VtScanError::FileAccess {
            path: PathBuf::from("/nope"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(err.classify().exit_code, 5);
        assert!(err.to_string().contains("/nope"));
    }

    #[test]
    fn test_network_error_is_generic_failure() {
        let err = VtScanError::Network("connection refused".into());
        assert_eq!(err.classify().exit_code, 1);
    }

    #[test]
    fn test_never_exits_zero() {
        let errors = [
            VtScanError::Timeout("timed out".into()),
            VtScanError::Io(std::io::Error::new(std::io::ErrorKind::Other, "boom")),
        ];
        for err in errors {
            assert_ne!(err.classify().exit_code, 0);
        }
    }
}
