//! Error types for configuration operations.

use thiserror::Error;

/// Result alias for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Primary error type for configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration document was not valid JSON for the expected shape.
    #[error("configuration document could not be parsed")]
    Parse {
        /// Underlying serde error.
        source: serde_json::Error,
    },
    /// Field contained an invalid value.
    #[error("invalid configuration field")]
    InvalidField {
        /// Field that failed validation.
        field: &'static str,
        /// Machine-readable reason for the failure.
        reason: &'static str,
        /// Offending value when available.
        value: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn parse_errors_keep_source() {
        let source = match serde_json::from_str::<serde_json::Value>("{") {
            Ok(_) => return,
            Err(err) => err,
        };
        let err = ConfigError::Parse { source };
        assert_eq!(err.to_string(), "configuration document could not be parsed");
        assert!(err.source().is_some());
    }

    #[test]
    fn invalid_field_message_is_constant() {
        let err = ConfigError::InvalidField {
            field: "module_url",
            reason: "empty",
            value: None,
        };
        assert_eq!(err.to_string(), "invalid configuration field");
        assert!(err.source().is_none());
    }
}
