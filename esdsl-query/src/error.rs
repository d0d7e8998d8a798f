//! Error types for query encoding.

use thiserror::Error;

/// Query builder error type.
///
/// Builder methods never fail; these surface only from the encode step or
/// from reading configuration.
#[derive(Error, Debug)]
pub enum QueryError {
    /// The JSON encoder rejected the document, or the output writer failed.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid encoder configuration.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for query encoding.
pub type Result<T> = std::result::Result<T, QueryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialization_error_converts() {
        let err: QueryError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(matches!(err, QueryError::Serialization(_)));
        assert!(err.to_string().starts_with("Serialization error:"));
    }

    #[test]
    fn test_config_error_message() {
        let err = QueryError::Config("ESDSL_INDENT must be a number".to_string());
        assert_eq!(
            err.to_string(),
            "Configuration error: ESDSL_INDENT must be a number"
        );
    }
}
