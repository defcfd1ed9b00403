//! Marketing analysis via a generative-language model.
//!
//! This module wraps the Gemini `generateContent` REST API. Extracted page
//! text is wrapped in a fixed instruction prompt, submitted with JSON-mime
//! response formatting, and the returned candidate text is parsed strictly
//! as an [`AuditReport`]. One outbound call per invocation, no retries.
//!
//! The [`ContentAnalyzer`] trait is the seam the pipeline is generic over,
//! so tests can substitute a stub for the real service.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::report::AuditReport;
use crate::{AuditError, Result};

/// Default Gemini API endpoint root.
const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default model identifier.
const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Default model-call timeout in seconds.
///
/// The inference call is bounded so an unresponsive service cannot hang an
/// invocation indefinitely.
const DEFAULT_TIMEOUT: u64 = 30;

/// Fixed instruction preamble; the page text is appended verbatim.
const PROMPT_PREAMBLE: &str = r#"You are a strict marketing analyst. Analyze the provided website text.
Return the output ONLY as a valid JSON object with exactly these keys:
1. "hook_score": A number between 0-100 based on how compelling the opening is.
2. "audience_persona": A single concise sentence describing the target audience.
3. "conversion_killers": A list of 3 strings (confusing phrases or jargon found in the text).

Do not add markdown formatting. Just return the raw JSON string.

Website Content:
"#;

/// Analyzes extracted page text into an [`AuditReport`].
///
/// The pipeline is generic over this trait so the inference service can be
/// stubbed out in tests.
#[async_trait]
pub trait ContentAnalyzer: Send + Sync {
    /// Submits the text for analysis and returns the structured verdict.
    async fn analyze(&self, text: &str) -> Result<AuditReport>;
}

/// Configuration for the Gemini analyzer.
///
/// The API key is loaded once before first use and is immutable for the
/// lifetime of the analyzer; nothing reads process-global state afterwards.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// API key for the inference service.
    pub api_key: String,
    /// Model identifier, e.g. `gemini-2.5-flash`.
    pub model: String,
    /// Endpoint root, overridable for proxies.
    pub base_url: String,
    /// Model-call timeout in seconds.
    pub timeout: u64,
}

impl GeminiConfig {
    /// Creates a configuration with the given API key and default settings.
    ///
    /// # Errors
    ///
    /// Returns [`AuditError::MissingApiKey`] when the key is empty, so a
    /// missing secret is caught before any network call is attempted.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(AuditError::MissingApiKey);
        }

        Ok(Self {
            api_key,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        })
    }

    /// Creates a configuration from the `GEMINI_API_KEY` environment variable.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("GEMINI_API_KEY").map_err(|_| AuditError::MissingApiKey)?;
        Self::new(api_key)
    }

    /// Sets a custom model identifier.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Sets a custom endpoint root.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the model-call timeout in seconds.
    pub fn with_timeout(mut self, timeout: u64) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Content analyzer backed by the Gemini REST API.
pub struct GeminiAnalyzer {
    http_client: Client,
    config: GeminiConfig,
}

impl GeminiAnalyzer {
    /// Creates an analyzer from the given configuration.
    pub fn new(config: GeminiConfig) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .build()
            .map_err(AuditError::HttpError)?;

        Ok(Self { http_client, config })
    }

    /// Creates an analyzer configured from the environment.
    pub fn from_env() -> Result<Self> {
        Self::new(GeminiConfig::from_env()?)
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.base_url, self.config.model
        )
    }
}

#[async_trait]
impl ContentAnalyzer for GeminiAnalyzer {
    async fn analyze(&self, text: &str) -> Result<AuditReport> {
        let request = GenerateContentRequest::from_prompt(build_prompt(text));

        let response = self
            .http_client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.config.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AuditError::Timeout { timeout: self.config.timeout }
                } else {
                    warn!(error = %e, "Gemini request failed");
                    AuditError::HttpError(e)
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            warn!(status = %status, error = %error_text, "Gemini API error");
            return Err(AuditError::ApiError(format!("HTTP {}: {}", status.as_u16(), error_text)));
        }

        let body: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| AuditError::ApiError(e.to_string()))?;

        debug!(model = %self.config.model, "Gemini analysis complete");

        parse_response(body)
    }
}

/// Builds the full prompt: fixed preamble plus the page text verbatim.
fn build_prompt(text: &str) -> String {
    format!("{}{}", PROMPT_PREAMBLE, text)
}

/// Extracts the first candidate's text and parses it as a report.
fn parse_response(body: GenerateContentResponse) -> Result<AuditReport> {
    let text = body
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content.parts.into_iter().next())
        .map(|p| p.text)
        .ok_or_else(|| AuditError::ApiError("no candidates in response".to_string()))?;

    AuditReport::from_json(&text)
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

impl GenerateContentRequest {
    fn from_prompt(prompt: String) -> Self {
        Self {
            contents: vec![Content { parts: vec![Part { text: prompt }] }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
            },
        }
    }
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_empty_key_rejected() {
        assert!(matches!(GeminiConfig::new(""), Err(AuditError::MissingApiKey)));
        assert!(matches!(GeminiConfig::new("   "), Err(AuditError::MissingApiKey)));
    }

    #[test]
    fn test_config_defaults() {
        let config = GeminiConfig::new("test-key").unwrap();

        assert_eq!(config.model, "gemini-2.5-flash");
        assert_eq!(config.timeout, 30);
        assert!(config.base_url.contains("generativelanguage.googleapis.com"));
    }

    #[test]
    fn test_config_builders() {
        let config = GeminiConfig::new("test-key")
            .unwrap()
            .with_model("gemini-2.0-pro")
            .with_base_url("http://localhost:8080")
            .with_timeout(5);

        assert_eq!(config.model, "gemini-2.0-pro");
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.timeout, 5);
    }

    #[test]
    fn test_build_prompt_appends_text() {
        let prompt = build_prompt("Page text here");

        assert!(prompt.starts_with("You are a strict marketing analyst"));
        assert!(prompt.ends_with("Page text here"));
        assert!(prompt.contains("hook_score"));
        assert!(prompt.contains("audience_persona"));
        assert!(prompt.contains("conversion_killers"));
    }

    #[test]
    fn test_request_serialization() {
        let request = GenerateContentRequest::from_prompt("hello".to_string());
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["contents"][0]["parts"][0]["text"], "hello");
        assert_eq!(json["generationConfig"]["responseMimeType"], "application/json");
    }

    #[test]
    fn test_parse_response_success() {
        let body: GenerateContentResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"parts":[{"text":"{\"hook_score\": 72, \"audience_persona\": \"Busy parents seeking quick meals\", \"conversion_killers\": [\"jargon A\", \"jargon B\", \"jargon C\"]}"}]}}]}"#,
        )
        .unwrap();

        let report = parse_response(body).unwrap();
        assert_eq!(report.hook_score, 72);
        assert_eq!(report.conversion_killers.len(), 3);
    }

    #[test]
    fn test_parse_response_no_candidates() {
        let body: GenerateContentResponse = serde_json::from_str(r#"{"candidates":[]}"#).unwrap();
        assert!(matches!(parse_response(body), Err(AuditError::ApiError(_))));
    }

    #[test]
    fn test_parse_response_non_json_text() {
        let body: GenerateContentResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"parts":[{"text":"not json"}]}}]}"#,
        )
        .unwrap();

        match parse_response(body) {
            Err(AuditError::MalformedResponse(msg)) => assert!(!msg.is_empty()),
            other => panic!("expected MalformedResponse, got {:?}", other),
        }
    }

    #[test]
    fn test_endpoint_includes_model() {
        let analyzer = GeminiAnalyzer::new(GeminiConfig::new("test-key").unwrap()).unwrap();
        assert!(
            analyzer
                .endpoint()
                .ends_with("/models/gemini-2.5-flash:generateContent")
        );
    }
}
