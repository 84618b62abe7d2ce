//! API Routes
//!
//! Route handlers organized by functionality.

pub mod auth;
pub mod compliance;
pub mod health;
pub mod telemetry;
