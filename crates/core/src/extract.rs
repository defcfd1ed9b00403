//! HTML to visible-text reduction.
//!
//! This module strips a fetched page down to the prose a visitor would
//! actually read. Whole subtrees that carry no user-visible content (scripts,
//! styles, navigation chrome) are discarded, the remaining text nodes are
//! joined with single spaces, and the result is capped at a fixed character
//! budget to protect downstream token limits.
//!
//! # Example
//!
//! ```rust
//! use siteaudit_core::extract::{ExtractConfig, extract_text};
//!
//! let html = "<html><body><script>x()</script><p>Hello World</p></body></html>";
//! let text = extract_text(html, &ExtractConfig::default());
//! assert_eq!(text, "Hello World");
//! ```

use scraper::Html;

/// Element kinds whose entire subtree is discarded before text extraction.
///
/// This is a noise-reduction heuristic, not full content detection: these
/// tags overwhelmingly hold markup, chrome, or code rather than prose.
const STRIP_TAGS: [&str; 6] = ["script", "style", "nav", "footer", "header", "noscript"];

/// Configuration for text extraction.
#[derive(Debug, Clone)]
pub struct ExtractConfig {
    /// Hard cap on extracted text length, in characters.
    pub max_chars: usize,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self { max_chars: 4000 }
    }
}

/// Reduces raw HTML to plain visible text.
///
/// The parser is tolerant of malformed markup, so this function never fails;
/// pathological input simply yields little or no text. Truncation is
/// positional (first `max_chars` characters), with no sentence-boundary
/// awareness — a documented precision/cost trade-off.
pub fn extract_text(html: &str, config: &ExtractConfig) -> String {
    let document = Html::parse_document(html);

    let mut pieces: Vec<String> = Vec::new();

    for node in document.root_element().descendants() {
        if let Some(text) = node.value().as_text() {
            // Skip text whose enclosing subtree is one of the stripped kinds.
            let stripped = node.ancestors().any(|ancestor| {
                ancestor
                    .value()
                    .as_element()
                    .is_some_and(|el| STRIP_TAGS.contains(&el.name()))
            });
            if stripped {
                continue;
            }

            let trimmed = text.trim();
            if !trimmed.is_empty() {
                pieces.push(trimmed.to_string());
            }
        }
    }

    let joined = pieces.join(" ");
    let normalized = joined.split_whitespace().collect::<Vec<_>>().join(" ");

    truncate_chars(&normalized, config.max_chars)
}

/// Truncates a string to at most `max_chars` characters.
///
/// Char-based rather than byte-based so multibyte input cannot be split
/// mid-codepoint.
fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        text.chars().take(max_chars).collect()
    }
}
