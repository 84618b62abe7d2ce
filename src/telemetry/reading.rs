//! Smart-meter readings
//!
//! Defines the telemetry packet served to the dashboard and the load curve
//! used to simulate it.

use chrono::{DateTime, TimeZone, Timelike, Utc};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Unit reported by every simulated meter
pub const UNIT_KWH: &str = "kWh";

/// Usage above this level is flagged as peak load
pub const PEAK_THRESHOLD_KWH: f64 = 22.0;

// Load curve: AMPLITUDE * sin(2π/24 * (hour - PHASE_SHIFT)) + BASE_LOAD
const AMPLITUDE: f64 = 10.0;
const PHASE_SHIFT_HOURS: f64 = 14.0;
const BASE_LOAD: f64 = 15.0;

/// A single telemetry packet from a smart meter
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EnergyReading {
    /// Meter identifier, e.g. "METER-001"
    pub device_id: String,
    /// When the reading was taken (RFC 3339 on the wire)
    pub timestamp: DateTime<Utc>,
    /// Energy consumption
    pub value: f64,
    /// Unit of measurement
    pub unit: String,
    /// Load status: "Normal", "Peak" or "Maintenance"
    pub status: String,
}

/// Meter load status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeterStatus {
    Normal,
    Peak,
}

impl MeterStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MeterStatus::Normal => "Normal",
            MeterStatus::Peak => "Peak",
        }
    }
}

impl std::fmt::Display for MeterStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifier of the n-th simulated meter (1-based)
pub fn device_id(n: usize) -> String {
    format!("METER-{:03}", n)
}

/// Simulated usage for a wall-clock time.
///
/// Follows a daily sine curve over the local hour of `at`, so consumption
/// is lowest in the early morning and highest in the evening.
pub fn simulated_usage<Tz: TimeZone>(at: &DateTime<Tz>) -> f64 {
    let hour = at.hour() as f64 + at.minute() as f64 / 60.0;
    let period = 2.0 * PI / 24.0;

    AMPLITUDE * (period * (hour - PHASE_SHIFT_HOURS)).sin() + BASE_LOAD
}

/// Create the reading a meter reports at `at`
pub fn simulated_reading<Tz: TimeZone>(device_id: &str, at: &DateTime<Tz>) -> EnergyReading {
    let usage = simulated_usage(at);

    let status = if usage > PEAK_THRESHOLD_KWH {
        MeterStatus::Peak
    } else {
        MeterStatus::Normal
    };

    EnergyReading {
        device_id: device_id.to_string(),
        timestamp: at.with_timezone(&Utc),
        value: (usage * 100.0).round() / 100.0,
        unit: UNIT_KWH.to_string(),
        status: status.to_string(),
    }
}
