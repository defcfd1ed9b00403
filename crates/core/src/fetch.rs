//! Page fetching over HTTP.
//!
//! This module retrieves the raw HTML for a user-supplied URL. The fetch is a
//! single GET with a bounded timeout and a browser-like User-Agent; there are
//! no retries and redirects follow the client library's default policy.

use std::time::Duration;

use reqwest::Client;
use url::Url;

use crate::{AuditError, Result};

/// Browser-impersonating User-Agent, used to reduce anti-bot rejections.
const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// HTTP client configuration for fetching web pages.
///
/// This struct controls timeout and user agent settings for HTTP requests.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Request timeout in seconds.
    pub timeout: u64,
    /// Custom User-Agent string.
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self { timeout: 10, user_agent: DEFAULT_USER_AGENT.to_string() }
    }
}

/// Fetches HTML content from a URL.
///
/// This function performs an HTTP GET request and returns the response body
/// as text. A failure is always a discriminated [`AuditError`], never an
/// error message disguised as page content, so callers can short-circuit the
/// rest of the pipeline without inspecting the body.
///
/// # Errors
///
/// - [`AuditError::InvalidUrl`] when the URL cannot be parsed (no network
///   call is made).
/// - [`AuditError::Timeout`] when the request exceeds the configured timeout.
/// - [`AuditError::HttpStatus`] for any non-2xx response.
/// - [`AuditError::HttpError`] for other transport failures.
pub async fn fetch_url(url: &str, config: &FetchConfig) -> Result<String> {
    let parsed_url = Url::parse(url).map_err(|e| AuditError::InvalidUrl(e.to_string()))?;

    if parsed_url.scheme().is_empty() {
        return Err(AuditError::InvalidUrl(
            "URL must include a scheme (http:// or https://)".to_string(),
        ));
    }

    let client = Client::builder()
        .timeout(Duration::from_secs(config.timeout))
        .build()
        .map_err(AuditError::HttpError)?;

    let response = client
        .get(parsed_url)
        .header("User-Agent", &config.user_agent)
        .header(
            "Accept",
            "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
        )
        .header("Accept-Language", "en-US,en;q=0.9")
        .send()
        .await
        .map_err(|e| {
            if e.is_timeout() {
                AuditError::Timeout { timeout: config.timeout }
            } else {
                AuditError::HttpError(e)
            }
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(AuditError::HttpStatus { status: status.as_u16() });
    }

    let content = response.text().await.map_err(|e| {
        if e.is_timeout() {
            AuditError::Timeout { timeout: config.timeout }
        } else {
            AuditError::HttpError(e)
        }
    })?;

    Ok(content)
}
