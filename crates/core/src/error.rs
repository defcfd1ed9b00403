//! Error types for siteaudit operations.
//!
//! This module defines the main error type [`AuditError`] which represents
//! all possible errors that can occur while fetching a page, extracting its
//! text, and analyzing it with the model.
//!
//! # Example
//!
//! ```rust
//! use siteaudit_core::{AuditError, Result};
//!
//! fn check_url(url: &str) -> Result<()> {
//!     if url.trim().is_empty() {
//!         return Err(AuditError::EmptyUrl);
//!     }
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// Main error type for audit pipeline operations.
///
/// Every external-call failure is caught at its own stage boundary and
/// converted into one of these variants; nothing escapes the pipeline as a
/// raw panic or library error.
#[derive(Error, Debug)]
pub enum AuditError {
    /// Required API key is missing from the environment.
    ///
    /// Surfaced before any network call is attempted.
    #[error("GEMINI_API_KEY is not set")]
    MissingApiKey,

    /// No URL was provided.
    ///
    /// Returned for empty or whitespace-only input, before any network call.
    #[error("URL must not be empty")]
    EmptyUrl,

    /// Invalid URL provided.
    ///
    /// Returned when a URL cannot be parsed or is malformed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// HTTP request errors from reqwest.
    ///
    /// This variant wraps network errors, DNS failures, connection issues,
    /// and other HTTP-related problems.
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Request timeout.
    ///
    /// Returned when the page fetch or the model call exceeds its configured
    /// timeout duration.
    #[error("Request timed out after {timeout} seconds")]
    Timeout { timeout: u64 },

    /// Non-success HTTP status from the fetched page.
    #[error("Server returned HTTP {status}")]
    HttpStatus { status: u16 },

    /// Inference service returned an error.
    ///
    /// Covers authentication failures, quota errors, and responses with no
    /// usable candidate text.
    #[error("Analysis service error: {0}")]
    ApiError(String),

    /// Model output that does not satisfy the JSON contract.
    #[error("Malformed analysis response: {0}")]
    MalformedResponse(String),
}

/// Result type alias for AuditError.
///
/// This is a convenience alias for `std::result::Result<T, AuditError>`.
pub type Result<T> = std::result::Result<T, AuditError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AuditError::InvalidUrl("not a url".to_string());
        assert!(err.to_string().contains("Invalid URL"));
    }

    #[test]
    fn test_timeout_error() {
        let err = AuditError::Timeout { timeout: 10 };
        assert!(err.to_string().contains("10"));
    }

    #[test]
    fn test_http_status_error() {
        let err = AuditError::HttpStatus { status: 404 };
        assert!(err.to_string().contains("404"));
    }

    #[test]
    fn test_missing_api_key_mentions_variable() {
        let err = AuditError::MissingApiKey;
        assert!(err.to_string().contains("GEMINI_API_KEY"));
    }
}
