//! Error handling module for immo-tui
//!
//! Provides centralized error handling with proper error types using thiserror.
//! Library code returns these; the binary wraps them in `anyhow` at the edges.

use thiserror::Error;

/// Main error type for immo-tui
#[derive(Error, Debug)]
pub enum ImmoError {
    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Validation errors (ids, filter values)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Backend answered with a non-success status
    #[error("API error: {status} {message}")]
    Api { status: u16, message: String },

    /// Transport-level HTTP failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Wizard state machine transition errors
    #[error("Wizard transition error: {0}")]
    WizardTransition(String),
}

/// Result type alias for immo-tui operations
pub type Result<T> = std::result::Result<T, ImmoError>;

// Convenient error constructors
impl ImmoError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create an API error from a status code and body
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ImmoError::validation("min price above max price");
        assert_eq!(err.to_string(), "Validation error: min price above max price");

        let err = ImmoError::api(404, "listing not found");
        assert_eq!(err.to_string(), "API error: 404 listing not found");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ImmoError = io_err.into();
        assert!(matches!(err, ImmoError::Io(_)));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: ImmoError = json_err.into();
        assert!(matches!(err, ImmoError::Json(_)));
    }
}
