//! Wire types shared by the transport client and the views

use serde::{Deserialize, Serialize};

/// Scope sent with every copilot question
pub const CONTEXT_FILTER: &str = "general";

/// One smart-meter reading as served by the gateway
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EnergyReading {
    pub device_id: String,
    /// Kept as received; only parsed for display
    pub timestamp: String,
    pub value: f64,
    pub unit: String,
    /// Free text; "Peak" is highlighted
    pub status: String,
}

/// Source backing a copilot answer
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct Citation {
    pub document: String,
    pub section: String,
}

/// Copilot answer
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct ChatResponse {
    pub answer: String,
    /// Display order matters
    #[serde(default)]
    pub citations: Vec<Citation>,
    /// Part of the contract, not displayed
    #[serde(default)]
    pub confidence_score: f64,
}

/// Result of asking the copilot
#[derive(Clone, Debug, PartialEq)]
pub enum AskOutcome {
    /// The service answered
    Answered(ChatResponse),
    /// No usable response: network error, non-2xx status or bad body
    Unreachable,
}

#[derive(Debug, Serialize)]
pub(crate) struct QuestionPayload<'a> {
    pub question: &'a str,
    pub context_filter: &'a str,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TokenResponse {
    pub access_token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reading_accepts_gateway_json() {
        let reading: EnergyReading = serde_json::from_str(
            r#"{"deviceId":"METER-001","timestamp":"2024-06-01T14:00:00Z","value":15.0,"unit":"kWh","status":"Normal"}"#,
        )
        .unwrap();

        assert_eq!(reading.device_id, "METER-001");
        assert_eq!(reading.timestamp, "2024-06-01T14:00:00Z");
        assert_eq!(reading.value, 15.0);
    }

    #[test]
    fn test_chat_response_tolerates_missing_optionals() {
        let response: ChatResponse = serde_json::from_str(r#"{"answer":"X"}"#).unwrap();
        assert_eq!(response.answer, "X");
        assert!(response.citations.is_empty());
    }

    #[test]
    fn test_question_payload_shape() {
        let json = serde_json::to_value(QuestionPayload {
            question: "What is EED?",
            context_filter: CONTEXT_FILTER,
        })
        .unwrap();

        assert_eq!(json, serde_json::json!({"question": "What is EED?", "context_filter": "general"}));
    }
}
