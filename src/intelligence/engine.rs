//! Compliance Engine
//!
//! Answers regulatory questions against the static knowledge base. Every
//! failure is folded into a well-formed [`QueryResponse`] so the HTTP layer
//! never has to special-case the LLM.

use async_trait::async_trait;

use super::knowledge::{system_prompt, CONTEXT_DOCUMENT_NAME};
use super::llm::{LlmClient, LlmConfig, LlmError};
use super::models::{QueryResponse, SourceCitation};

/// Answer text used when no API key is configured
pub const SIMULATION_ANSWER: &str = "[SIMULATION MODE - NO API KEY] The EU Energy Efficiency Directive requires 3% renovation of public buildings annually.";

/// Answer text used when the LLM call fails
pub const LLM_ERROR_ANSWER: &str =
    "Error contacting Intelligence Service. Please check API Key configuration.";

/// Something that can answer a compliance question
#[async_trait]
pub trait AnswerEngine: Send + Sync {
    /// Answer a question; never fails
    async fn ask(&self, question: &str) -> QueryResponse;

    /// Short label for health reporting ("llm" or "simulation")
    fn mode(&self) -> &'static str;
}

/// RAG-style engine grounded on the EED excerpt
pub struct ComplianceEngine {
    /// `None` runs the engine in simulation mode
    llm: Option<LlmClient>,
    system_prompt: String,
}

impl ComplianceEngine {
    /// Build an engine; without an API key it answers in simulation mode
    pub fn new(config: LlmConfig) -> Result<Self, LlmError> {
        let llm = if config.has_api_key() {
            Some(LlmClient::new(config)?)
        } else {
            None
        };

        Ok(Self {
            llm,
            system_prompt: system_prompt(),
        })
    }

    /// Engine that always answers from the simulation database
    pub fn simulated() -> Self {
        Self {
            llm: None,
            system_prompt: system_prompt(),
        }
    }

    fn simulation_response() -> QueryResponse {
        QueryResponse {
            answer: SIMULATION_ANSWER.to_string(),
            citations: vec![SourceCitation::new("Simulation DB", "Mock Section")],
            confidence_score: 1.0,
        }
    }

    fn error_response() -> QueryResponse {
        QueryResponse {
            answer: LLM_ERROR_ANSWER.to_string(),
            citations: Vec::new(),
            confidence_score: 0.0,
        }
    }
}

#[async_trait]
impl AnswerEngine for ComplianceEngine {
    async fn ask(&self, question: &str) -> QueryResponse {
        let Some(llm) = &self.llm else {
            tracing::debug!("No API key configured, answering in simulation mode");
            return Self::simulation_response();
        };

        match llm.complete(&self.system_prompt, question).await {
            Ok(answer) => QueryResponse {
                answer,
                citations: vec![SourceCitation::new(CONTEXT_DOCUMENT_NAME, "Derived from Context")],
                confidence_score: 0.98,
            },
            Err(e) => {
                tracing::error!(error = %e, model = %llm.config().model, "LLM request failed");
                Self::error_response()
            }
        }
    }

    fn mode(&self) -> &'static str {
        if self.llm.is_some() {
            "llm"
        } else {
            "simulation"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_simulation_mode_without_key() {
        let engine = ComplianceEngine::new(LlmConfig::default()).unwrap();
        assert_eq!(engine.mode(), "simulation");

        let response = engine.ask("What is the renovation target?").await;
        assert!(response.answer.starts_with("[SIMULATION MODE - NO API KEY]"));
        assert_eq!(
            response.citations,
            vec![SourceCitation::new("Simulation DB", "Mock Section")]
        );
        assert_eq!(response.confidence_score, 1.0);
    }

    #[tokio::test]
    async fn test_llm_failure_degrades_to_error_answer() {
        // Reserve a free port, then close it so connections are refused
        let port = std::net::TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap()
            .port();

        let engine = ComplianceEngine::new(LlmConfig {
            api_key: Some("sk-test".to_string()),
            base_url: format!("http://127.0.0.1:{}/v1", port),
            request_timeout_ms: 2_000,
            ..Default::default()
        })
        .unwrap();
        assert_eq!(engine.mode(), "llm");

        let response = engine.ask("What is the renovation target?").await;
        assert_eq!(response.answer, LLM_ERROR_ANSWER);
        assert!(response.citations.is_empty());
        assert_eq!(response.confidence_score, 0.0);
    }
}
