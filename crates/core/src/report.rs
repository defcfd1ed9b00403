//! Audit report type with strict JSON parsing and rendering.
//!
//! This module defines the [`AuditReport`] struct, the structured verdict the
//! model returns for a page: how compelling the opening is, who the page is
//! written for, and which phrases are likely to hurt conversion.

use serde::{Deserialize, Serialize};

use crate::{AuditError, Result};

/// The structured result of a marketing audit.
///
/// Field values are taken from the model verbatim. The prompt contract asks
/// for a `hook_score` in 0-100 and exactly three `conversion_killers`, but
/// out-of-contract output is passed through unmodified rather than clamped
/// or rejected, so callers see exactly what the model said.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditReport {
    /// Model-assigned rating of how compelling the opening content is,
    /// intended range 0-100.
    pub hook_score: i64,

    /// One-sentence description of the inferred target audience.
    pub audience_persona: String,

    /// Phrases or jargon likely to reduce visitor conversion.
    pub conversion_killers: Vec<String>,
}

impl AuditReport {
    /// Parses a report from the model's raw JSON text.
    ///
    /// The text must be a bare JSON object with the three contracted keys;
    /// markdown fencing or commentary around it is a contract violation.
    ///
    /// # Errors
    ///
    /// Returns [`AuditError::MalformedResponse`] when the text is not valid
    /// JSON or is missing a required key.
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| AuditError::MalformedResponse(e.to_string()))
    }

    /// Serializes the report as a JSON value.
    pub fn to_json(&self) -> Result<serde_json::Value> {
        serde_json::to_value(self).map_err(|e| AuditError::MalformedResponse(e.to_string()))
    }

    /// Renders the report as human-readable plain text.
    pub fn to_text(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("Hook score: {}/100\n", self.hook_score));
        output.push_str(&format!("Target audience: {}\n", self.audience_persona));

        if !self.conversion_killers.is_empty() {
            output.push_str("Conversion killers:\n");
            for killer in &self.conversion_killers {
                output.push_str(&format!("  - {}\n", killer));
            }
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CANONICAL: &str = r#"{"hook_score": 72, "audience_persona": "Busy parents seeking quick meals", "conversion_killers": ["jargon A", "jargon B", "jargon C"]}"#;

    #[test]
    fn test_from_json_canonical() {
        let report = AuditReport::from_json(CANONICAL).unwrap();

        assert_eq!(report.hook_score, 72);
        assert_eq!(report.audience_persona, "Busy parents seeking quick meals");
        assert_eq!(report.conversion_killers, vec!["jargon A", "jargon B", "jargon C"]);
    }

    #[test]
    fn test_from_json_not_json() {
        let result = AuditReport::from_json("not json");

        match result {
            Err(AuditError::MalformedResponse(msg)) => assert!(!msg.is_empty()),
            other => panic!("expected MalformedResponse, got {:?}", other),
        }
    }

    #[test]
    fn test_from_json_missing_key() {
        let result = AuditReport::from_json(r#"{"hook_score": 50}"#);
        assert!(matches!(result, Err(AuditError::MalformedResponse(_))));
    }

    #[test]
    fn test_from_json_markdown_fenced_is_rejected() {
        let fenced = format!("```json\n{}\n```", CANONICAL);
        assert!(matches!(
            AuditReport::from_json(&fenced),
            Err(AuditError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_out_of_contract_values_pass_through() {
        let json = r#"{"hook_score": 150, "audience_persona": "Everyone", "conversion_killers": ["a", "b", "c", "d", "e"]}"#;
        let report = AuditReport::from_json(json).unwrap();

        assert_eq!(report.hook_score, 150);
        assert_eq!(report.conversion_killers.len(), 5);
    }

    #[test]
    fn test_to_text_rendering() {
        let report = AuditReport::from_json(CANONICAL).unwrap();
        let text = report.to_text();

        assert!(text.contains("72/100"));
        assert!(text.contains("Busy parents"));
        assert!(text.contains("jargon A"));
    }

    #[test]
    fn test_to_json_round_trip() {
        let report = AuditReport::from_json(CANONICAL).unwrap();
        let json = report.to_json().unwrap();

        assert_eq!(json.get("hook_score").and_then(|v| v.as_i64()), Some(72));
        assert!(json.get("conversion_killers").is_some());
    }
}
