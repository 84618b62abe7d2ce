//! Compliance Routes
//!
//! - POST /api/compliance/ask - Ask the regulatory assistant a question

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::intelligence::{QueryRequest, QueryResponse};

/// POST /api/compliance/ask
///
/// Delegates to the answer engine, which grounds the answer on the
/// regulatory knowledge base.
pub async fn ask_question(
    State(state): State<Arc<AppState>>,
    Json(req): Json<QueryRequest>,
) -> ApiResult<Json<QueryResponse>> {
    if req.question.is_empty() {
        return Err(ApiError::Validation("Question cannot be empty".to_string()));
    }

    tracing::info!(
        context_filter = %req.context_filter(),
        question_len = req.question.len(),
        "Compliance question received"
    );

    let response = state.engine.ask(&req.question).await;

    Ok(Json(response))
}
