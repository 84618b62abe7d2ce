//! Grid Telemetry
//!
//! Simulated smart-meter data served to the dashboard.
//!
//! - **reading**: the `EnergyReading` packet and the daily load curve
//! - **simulator**: in-memory latest state of every meter, refreshed on a tick

pub mod reading;
pub mod simulator;

pub use reading::{
    device_id, simulated_reading, simulated_usage, EnergyReading, MeterStatus,
    PEAK_THRESHOLD_KWH, UNIT_KWH,
};
pub use simulator::{Simulator, SimulatorConfig};
