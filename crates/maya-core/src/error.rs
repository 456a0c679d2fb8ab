use thiserror::Error;

/// Top-level error type for the Maya dialogue engine.
///
/// Loading and persistence failures surface here. The engine itself never
/// propagates these to the end user: resource errors fall back to the
/// built-in tables and snapshot errors fall back to an empty history.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum MayaError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Resource error: {0}")]
    Resource(String),

    #[error("Snapshot error: {0}")]
    Snapshot(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<toml::de::Error> for MayaError {
    fn from(err: toml::de::Error) -> Self {
        MayaError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for MayaError {
    fn from(err: toml::ser::Error) -> Self {
        MayaError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for MayaError {
    fn from(err: serde_json::Error) -> Self {
        MayaError::Serialization(err.to_string())
    }
}

/// A specialized `Result` type for Maya operations.
pub type Result<T> = std::result::Result<T, MayaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MayaError::Config("missing field".to_string());
        assert_eq!(err.to_string(), "Configuration error: missing field");
    }

    #[test]
    fn test_error_display_all_variants() {
        let cases: Vec<(MayaError, &str)> = vec![
            (
                MayaError::Config("bad key".to_string()),
                "Configuration error: bad key",
            ),
            (
                MayaError::Resource("categories missing".to_string()),
                "Resource error: categories missing",
            ),
            (
                MayaError::Snapshot("truncated".to_string()),
                "Snapshot error: truncated",
            ),
            (
                MayaError::Serialization("invalid json".to_string()),
                "Serialization error: invalid json",
            ),
        ];

        for (error, expected) in cases {
            assert_eq!(error.to_string(), expected);
        }
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let maya_err: MayaError = io_err.into();
        assert!(matches!(maya_err, MayaError::Io(_)));
        assert!(maya_err.to_string().contains("file not found"));
    }

    #[test]
    fn test_error_from_io_preserves_kind() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        match MayaError::from(io_err) {
            MayaError::Io(e) => assert_eq!(e.kind(), std::io::ErrorKind::PermissionDenied),
            other => panic!("Expected Io variant, got {:?}", other),
        }
    }

    #[test]
    fn test_error_from_toml_de() {
        let err: std::result::Result<toml::Value, _> = toml::from_str("invalid = [[[");
        let maya_err: MayaError = err.unwrap_err().into();
        assert!(matches!(maya_err, MayaError::Config(_)));
    }

    #[test]
    fn test_error_from_serde_json() {
        let err: std::result::Result<serde_json::Value, _> = serde_json::from_str("{ nope }");
        let maya_err: MayaError = err.unwrap_err().into();
        assert!(matches!(maya_err, MayaError::Serialization(_)));
    }

    #[test]
    fn test_result_type_with_question_mark() {
        fn inner() -> Result<String> {
            let io_result: std::result::Result<i32, std::io::Error> = Ok(42);
            let value = io_result?;
            Ok(format!("value {}", value))
        }

        assert_eq!(inner().unwrap(), "value 42");
    }
}
