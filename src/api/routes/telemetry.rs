//! Telemetry Routes
//!
//! - GET /api/energy/telemetry - Latest reading of every simulated meter

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::state::AppState;
use crate::telemetry::EnergyReading;

/// GET /api/energy/telemetry
///
/// Returns the current snapshot as a JSON array, ordered by device id.
pub async fn get_telemetry(State(state): State<Arc<AppState>>) -> Json<Vec<EnergyReading>> {
    let readings = state.simulator.readings().await;
    tracing::debug!(count = readings.len(), "Serving telemetry snapshot");
    Json(readings)
}
