//! State Management
//!
//! Plain view-state machines kept free of DOM code, plus the poll timer.

pub mod chat;
pub mod poller;
pub mod session;
pub mod telemetry;

pub use chat::{ChatReply, ChatSession, FALLBACK_MESSAGE};
pub use poller::PollHandle;
pub use session::SessionStatus;
pub use telemetry::{
    PollTicket, TelemetryFeed, TelemetryRow, MAX_VISIBLE_ROWS, PEAK_STATUS, POLL_INTERVAL_MS,
};
