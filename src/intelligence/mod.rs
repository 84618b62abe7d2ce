//! Regulatory Intelligence
//!
//! Compliance assistant for energy regulations.
//!
//! - **models**: request/response payloads of `/api/compliance/ask`
//! - **knowledge**: static EED excerpt and system prompt
//! - **llm**: OpenAI-compatible chat-completions client
//! - **engine**: the [`AnswerEngine`] seam and its [`ComplianceEngine`] implementation

pub mod engine;
pub mod knowledge;
pub mod llm;
pub mod models;

pub use engine::{AnswerEngine, ComplianceEngine, LLM_ERROR_ANSWER, SIMULATION_ANSWER};
pub use llm::{LlmClient, LlmConfig, LlmError};
pub use models::{QueryRequest, QueryResponse, SourceCitation, DEFAULT_CONTEXT_FILTER};
