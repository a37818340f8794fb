//! Shared error types for the analytics engine
//!
//! Only static misconfiguration is an error here. Short histories are
//! reported as `None` by the trend and forecast functions, and malformed
//! numbers are normalized to zero before they reach any formula.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for forecourt operations
#[derive(Debug, Error)]
pub enum Error {
    /// Unknown benchmark category, missing threshold or invalid weight.
    /// Indicates a programming or deployment error, never bad period data.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Configuration values that parsed but break an invariant
    #[error("Validation error: {0}")]
    Validation(String),

    /// File system related errors
    #[error("File system error: {message}")]
    FileSystem {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    /// Generic errors with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// TOML errors
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

impl Error {
    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Create a file system error with path context
    pub fn file_system(
        message: impl Into<String>,
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::FileSystem {
            message: message.into(),
            path: Some(path.into()),
            source: Some(source),
        }
    }

    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        Self::WithContext {
            context: context.into(),
            message: self.to_string(),
        }
    }

    /// Fatal errors come from static configuration and must not be retried
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_) | Self::Validation(_))
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_error_display() {
        let err = Error::configuration("unknown benchmark category 'speed'");
        assert_eq!(
            err.to_string(),
            "Configuration error: unknown benchmark category 'speed'"
        );
        assert!(err.is_configuration());
    }

    #[test]
    fn test_context_wraps_message() {
        let result: Result<()> = Err(Error::Validation("weight is negative".into()));
        let err = result.context("Loading forecourt.toml").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Loading forecourt.toml: Validation error: weight is negative"
        );
        assert!(!err.is_configuration());
    }
}
