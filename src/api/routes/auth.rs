//! Auth Routes
//!
//! Mock identity provider used by the dashboard on startup.
//!
//! - GET /auth/token - Issue an access token
//!
//! Tokens are opaque and never checked by any other route.

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::dto::TokenResponse;
use crate::api::state::AppState;

/// Scope granted to every mock token
pub const DASHBOARD_SCOPE: &str = "grid.read compliance.ask";

/// GET /auth/token
pub async fn issue_token(State(state): State<Arc<AppState>>) -> Json<TokenResponse> {
    let token = uuid::Uuid::new_v4().simple().to_string();
    tracing::debug!("Issued mock access token");

    Json(TokenResponse {
        access_token: token,
        token_type: "Bearer".to_string(),
        expires_in: state.config.token_ttl_secs,
        scope: DASHBOARD_SCOPE.to_string(),
    })
}
