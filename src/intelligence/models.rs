//! Compliance Q&A payloads

use serde::{Deserialize, Serialize};

/// Scope used when the caller does not send one
pub const DEFAULT_CONTEXT_FILTER: &str = "general";

fn default_confidence() -> f64 {
    0.95
}

/// A question about energy regulations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryRequest {
    /// The user's question
    pub question: String,
    /// Scope: "general", "audit" or "compliance"; missing or null means general
    #[serde(default)]
    pub context_filter: Option<String>,
}

impl QueryRequest {
    pub fn context_filter(&self) -> &str {
        self.context_filter.as_deref().unwrap_or(DEFAULT_CONTEXT_FILTER)
    }
}

/// Reference to the source material backing an answer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SourceCitation {
    pub document: String,
    pub section: String,
}

impl SourceCitation {
    pub fn new(document: impl Into<String>, section: impl Into<String>) -> Self {
        Self {
            document: document.into(),
            section: section.into(),
        }
    }
}

/// The assistant's answer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QueryResponse {
    /// Generated answer text
    pub answer: String,
    /// Sources, in display order
    #[serde(default)]
    pub citations: Vec<SourceCitation>,
    /// Confidence metric between 0 and 1
    #[serde(default = "default_confidence")]
    pub confidence_score: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_filter_defaults_to_general() {
        let req: QueryRequest = serde_json::from_str(r#"{"question": "What is EED?"}"#).unwrap();
        assert_eq!(req.context_filter(), "general");
    }

    #[test]
    fn test_null_context_filter_is_general() {
        let req: QueryRequest =
            serde_json::from_str(r#"{"question": "What is EED?", "context_filter": null}"#)
                .unwrap();
        assert_eq!(req.context_filter(), "general");

        let req: QueryRequest =
            serde_json::from_str(r#"{"question": "q", "context_filter": "audit"}"#).unwrap();
        assert_eq!(req.context_filter(), "audit");
    }

    #[test]
    fn test_response_defaults() {
        let resp: QueryResponse = serde_json::from_str(r#"{"answer": "3%"}"#).unwrap();
        assert!(resp.citations.is_empty());
        assert_eq!(resp.confidence_score, 0.95);
    }
}
