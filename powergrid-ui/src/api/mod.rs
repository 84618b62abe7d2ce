//! Gateway API
//!
//! Transport client and wire types.

pub mod client;
pub mod types;

pub use client::{api_base, ApiHandle, GatewayClient, GridApi, DEFAULT_API_BASE};
pub use types::{AskOutcome, ChatResponse, Citation, EnergyReading, CONTEXT_FILTER};
