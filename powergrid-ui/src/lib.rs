//! PowerGrid Dashboard
//!
//! Client-side rendered Leptos application showing live smart-meter
//! telemetry next to a regulatory compliance copilot.
//!
//! # Architecture
//!
//! - [`api`]: transport to the PowerGrid gateway behind the [`api::GridApi`] trait
//! - [`state`]: view state machines and the poll timer
//! - [`components`]: the telemetry and chat panels
//! - [`app`]: the shell that wires them together

pub mod api;
pub mod app;
pub mod components;
pub mod state;

pub use app::{App, Shell};
