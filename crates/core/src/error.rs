//! Error types for DroidScout
//!
//! Centralized error handling using thiserror.

use thiserror::Error;

/// Main error type for configuration handling
#[derive(Error, Debug)]
pub enum ScoutError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for DroidScout operations
pub type Result<T> = std::result::Result<T, ScoutError>;

impl ScoutError {
    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            ScoutError::Io(e) => format!("File operation failed: {}", e),
            ScoutError::Config(msg) => format!("Configuration error: {}", msg),
            ScoutError::TomlParse(e) => format!("Configuration file is not valid TOML: {}", e),
            _ => self.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message() {
        let err = ScoutError::Config("scan.max_depth must be at least 1".into());
        assert_eq!(
            err.user_message(),
            "Configuration error: scan.max_depth must be at least 1"
        );
    }

    #[test]
    fn test_toml_error_converts() {
        let parsed: std::result::Result<toml::Value, _> = toml::from_str("[android");
        let err: ScoutError = parsed.unwrap_err().into();
        assert!(matches!(err, ScoutError::TomlParse(_)));
        assert!(err.user_message().starts_with("Configuration file is not valid TOML"));
    }
}
