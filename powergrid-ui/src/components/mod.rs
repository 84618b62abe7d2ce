//! UI Components
//!
//! The two dashboard panels.

pub mod copilot_chat;
pub mod energy_dashboard;

pub use copilot_chat::CopilotChat;
pub use energy_dashboard::EnergyDashboard;
