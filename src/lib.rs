//! # PowerGrid
//!
//! Gateway service behind the PowerGrid dashboard: a smart-meter telemetry
//! simulator and a regulatory compliance assistant, served over HTTP.
//!
//! ## Modules
//!
//! - [`telemetry`]: Simulated smart meters and their latest readings
//! - [`intelligence`]: Compliance Q&A grounded on the EU Energy Efficiency Directive
//! - [`api`]: REST API server with Axum
//! - [`config`]: TOML + environment configuration
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use powergrid::telemetry::Simulator;
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() {
//!     let simulator = Arc::new(Simulator::new());
//!     let handle = simulator.start(50, Duration::from_secs(2));
//!
//!     tokio::time::sleep(Duration::from_millis(100)).await;
//!     for reading in simulator.readings().await.iter().take(3) {
//!         println!("{} {} {}", reading.device_id, reading.value, reading.status);
//!     }
//!
//!     simulator.shutdown().await;
//!     let _ = handle.await;
//! }
//! ```

pub mod api;
pub mod config;
pub mod intelligence;
pub mod telemetry;

// Re-export top-level types for convenience
pub use api::{build_router, serve, ApiConfig, ApiError, AppState};

pub use config::{generate_default_config, Config, ConfigError, LoggingConfig};

pub use intelligence::{
    AnswerEngine, ComplianceEngine, LlmClient, LlmConfig, LlmError, QueryRequest, QueryResponse,
    SourceCitation,
};

pub use telemetry::{EnergyReading, MeterStatus, Simulator, SimulatorConfig};
