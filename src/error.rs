//! Error types for localization editing operations.
//!
//! All surfaced errors normalize to one taxonomy so the CLI can present a
//! consistent message and decide whether a retry makes sense. Timestamps on
//! surfaced errors come from the tracing subscriber rather than the error
//! value itself.

use thiserror::Error;

/// Errors that can occur while editing, importing, exporting, or syncing
/// localization resources.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    /// Invalid input or state (empty export set, blank key, bad config).
    #[error("validation error: {0}")]
    Validation(String),

    /// A file could not be read, parsed, or written.
    #[error("file processing error: {file}: {message}")]
    FileProcessing { file: String, message: String },

    /// A remote API answered with a non-success status or malformed body.
    #[error("api error{}: {message}", status_suffix(.status))]
    Api { status: Option<u16>, message: String },

    /// Missing or rejected credentials.
    #[error("authentication error: {0}")]
    Authentication(String),

    /// Transport-level failure (DNS, connect, timeout).
    #[error("network error: {0}")]
    Network(String),

    /// Fallback for anything that escaped classification.
    #[error("unexpected error: {0}")]
    Unknown(String),
}

fn status_suffix(status: &Option<u16>) -> String {
    match status {
        Some(code) => format!(" ({})", code),
        None => String::new(),
    }
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn file(file: impl Into<String>, message: impl Into<String>) -> Self {
        Self::FileProcessing {
            file: file.into(),
            message: message.into(),
        }
    }

    pub fn api(status: Option<u16>, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Returns a user-friendly message suitable for terminal display.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(message) => format!("Validation error: {}", message),
            Self::FileProcessing { file, message } => {
                format!("File processing error: {} ({})", message, file)
            }
            Self::Api { message, .. } => format!("Service error: {}", message),
            Self::Network(_) => {
                "Network connection failed. Please check your internet connection.".to_string()
            }
            Self::Authentication(_) => {
                "Authentication required. Please check your API keys.".to_string()
            }
            Self::Unknown(_) => "An unexpected error occurred. Please try again.".to_string(),
        }
    }

    /// Returns whether this error is potentially recoverable with a retry.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Network(_) | Self::Api { .. } | Self::Unknown(_))
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_connect() || err.is_timeout() || err.is_request() {
            Self::Network(err.to_string())
        } else if let Some(status) = err.status() {
            Self::Api {
                status: Some(status.as_u16()),
                message: err.to_string(),
            }
        } else {
            Self::Unknown(err.to_string())
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::FileProcessing {
            file: String::new(),
            message: err.to_string(),
        }
    }
}

impl From<zip::result::ZipError> for AppError {
    fn from(err: zip::result::ZipError) -> Self {
        Self::FileProcessing {
            file: String::new(),
            message: format!("archive error: {}", err),
        }
    }
}

/// Result type alias for localization operations.
pub type Result<T> = std::result::Result<T, AppError>;
