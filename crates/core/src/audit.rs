//! The audit pipeline: fetch, extract, analyze.
//!
//! This module wires the three stages together with strict short-circuiting:
//! input is validated before any network call, a fetch failure skips
//! extraction and analysis entirely, and every stage failure surfaces as a
//! discriminated [`AuditError`](crate::AuditError). Each invocation owns its
//! data end to end; nothing is shared or persisted between runs.
//!
//! # Example
//!
//! ```rust,no_run
//! use siteaudit_core::{AuditConfig, GeminiAnalyzer, audit_url};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let analyzer = GeminiAnalyzer::from_env()?;
//! let report = audit_url("https://example.com", &analyzer, &AuditConfig::default()).await?;
//! println!("{}", report.to_text());
//! # Ok(())
//! # }
//! ```

use crate::analyze::ContentAnalyzer;
use crate::extract::{ExtractConfig, extract_text};
use crate::fetch::{FetchConfig, fetch_url};
use crate::report::AuditReport;
use crate::{AuditError, Result};

/// Configuration for a full audit run.
#[derive(Debug, Clone, Default)]
pub struct AuditConfig {
    /// Page fetch settings.
    pub fetch: FetchConfig,
    /// Text extraction settings.
    pub extract: ExtractConfig,
}

/// Runs the full pipeline against a URL.
///
/// Empty or whitespace-only input fails with [`AuditError::EmptyUrl`] before
/// any network call. The analyzer is only invoked after a successful fetch
/// and extraction.
pub async fn audit_url<A: ContentAnalyzer>(
    url: &str, analyzer: &A, config: &AuditConfig,
) -> Result<AuditReport> {
    if url.trim().is_empty() {
        return Err(AuditError::EmptyUrl);
    }

    let html = fetch_url(url.trim(), &config.fetch).await?;
    let text = extract_text(&html, &config.extract);

    analyzer.analyze(&text).await
}
