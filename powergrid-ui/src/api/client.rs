//! HTTP API Client
//!
//! Sole point of contact with the PowerGrid gateway. Every call makes one
//! best-effort attempt and folds any failure into a safe value, so views
//! only ever check for emptiness or [`AskOutcome::Unreachable`].

use async_trait::async_trait;
use gloo_net::http::Request;
use std::rc::Rc;

use super::types::{
    AskOutcome, ChatResponse, EnergyReading, QuestionPayload, TokenResponse, CONTEXT_FILTER,
};

/// Default gateway base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:8080";

/// Gateway base URL, overridable at build time with `POWERGRID_API_URL`
pub fn api_base() -> String {
    resolve_api_base(option_env!("POWERGRID_API_URL"))
}

fn resolve_api_base(configured: Option<&str>) -> String {
    let url = configured
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .unwrap_or(DEFAULT_API_BASE);
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

/// Backend operations used by the dashboard.
///
/// None of these fail: errors are logged and replaced by an empty or
/// absent value.
#[async_trait(?Send)]
pub trait GridApi {
    /// Mock sign-in; empty string on failure
    async fn obtain_token(&self) -> String;

    /// Current telemetry; empty on failure
    async fn fetch_telemetry(&self) -> Vec<EnergyReading>;

    /// Ask the regulatory copilot
    async fn ask_question(&self, question: &str) -> AskOutcome;
}

/// Shared handle provided to the views through context
pub type ApiHandle = Rc<dyn GridApi>;

/// [`GridApi`] over HTTP with `gloo-net`
#[derive(Clone, Debug)]
pub struct GatewayClient {
    base_url: String,
}

impl GatewayClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: resolve_api_base(Some(&base_url.into())),
        }
    }

    /// Client for the build-time configured gateway
    pub fn from_build_env() -> Self {
        Self { base_url: api_base() }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn try_obtain_token(&self) -> Result<String, String> {
        let response = Request::get(&self.url("/auth/token"))
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            return Err(format!("HTTP {}", response.status()));
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| format!("Parse error: {}", e))?;

        Ok(token.access_token)
    }

    async fn try_fetch_telemetry(&self) -> Result<Vec<EnergyReading>, String> {
        let response = Request::get(&self.url("/api/energy/telemetry"))
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            return Err(format!("HTTP {}", response.status()));
        }

        response
            .json()
            .await
            .map_err(|e| format!("Parse error: {}", e))
    }

    async fn try_ask_question(&self, question: &str) -> Result<ChatResponse, String> {
        let response = Request::post(&self.url("/api/compliance/ask"))
            .json(&QuestionPayload {
                question,
                context_filter: CONTEXT_FILTER,
            })
            .map_err(|e| format!("Request build error: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            return Err(format!("HTTP {}", response.status()));
        }

        response
            .json()
            .await
            .map_err(|e| format!("Parse error: {}", e))
    }
}

#[async_trait(?Send)]
impl GridApi for GatewayClient {
    async fn obtain_token(&self) -> String {
        self.try_obtain_token().await.unwrap_or_else(|e| {
            log_failure("Auth failed", &e);
            String::new()
        })
    }

    async fn fetch_telemetry(&self) -> Vec<EnergyReading> {
        self.try_fetch_telemetry().await.unwrap_or_else(|e| {
            log_failure("Telemetry fetch failed", &e);
            Vec::new()
        })
    }

    async fn ask_question(&self, question: &str) -> AskOutcome {
        match self.try_ask_question(question).await {
            Ok(response) => AskOutcome::Answered(response),
            Err(e) => {
                log_failure("Copilot request failed", &e);
                AskOutcome::Unreachable
            }
        }
    }
}

fn log_failure(context: &str, error: &str) {
    web_sys::console::error_1(&format!("{}: {}", context, error).into());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base() {
        assert_eq!(resolve_api_base(None), "http://localhost:8080");
        assert_eq!(resolve_api_base(Some("  ")), "http://localhost:8080");
    }

    #[test]
    fn test_base_trailing_slash_trimmed() {
        assert_eq!(resolve_api_base(Some("https://grid.example.com/")), "https://grid.example.com");
    }

    #[test]
    fn test_endpoint_urls() {
        let client = GatewayClient::new("http://gateway:8080/");
        assert_eq!(client.base_url(), "http://gateway:8080");
        assert_eq!(client.url("/api/energy/telemetry"), "http://gateway:8080/api/energy/telemetry");
    }
}
