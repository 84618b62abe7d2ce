//! Meter Simulator
//!
//! Holds the latest reading of every simulated smart meter in memory and
//! refreshes them from a background task.

use chrono::{DateTime, Local, TimeZone};
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::time::{interval, MissedTickBehavior};

use super::reading::{device_id, simulated_reading, EnergyReading};

/// In-memory state of the simulated grid
pub struct Simulator {
    /// Latest reading per device, keyed by device id
    readings: RwLock<BTreeMap<String, EnergyReading>>,
    /// Set when the background task should exit
    shutdown: RwLock<bool>,
}

/// Simulation settings
#[derive(Debug, Clone, serde::Deserialize)]
pub struct SimulatorConfig {
    /// Number of meters to simulate
    #[serde(default = "default_meter_count")]
    pub meter_count: usize,
    /// How often every meter reports a new reading (ms)
    #[serde(default = "default_tick_interval")]
    pub tick_interval_ms: u64,
}

fn default_meter_count() -> usize {
    50
}

fn default_tick_interval() -> u64 {
    2000
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            meter_count: default_meter_count(),
            tick_interval_ms: default_tick_interval(),
        }
    }
}

impl Simulator {
    pub fn new() -> Self {
        Self {
            readings: RwLock::new(BTreeMap::new()),
            shutdown: RwLock::new(false),
        }
    }

    /// Run one simulation cycle for `count` meters at the current local time
    pub async fn generate(&self, count: usize) {
        self.generate_at(count, &Local::now()).await;
    }

    /// Run one simulation cycle for `count` meters at a given time
    pub async fn generate_at<Tz: TimeZone>(&self, count: usize, at: &DateTime<Tz>) {
        let mut readings = self.readings.write().await;

        for n in 1..=count {
            let id = device_id(n);
            let reading = simulated_reading(&id, at);
            readings.insert(id, reading);
        }
    }

    /// Snapshot of the latest reading of every meter, ordered by device id
    pub async fn readings(&self) -> Vec<EnergyReading> {
        self.readings.read().await.values().cloned().collect()
    }

    /// Number of meters that have reported at least once
    pub async fn meter_count(&self) -> usize {
        self.readings.read().await.len()
    }

    /// Start the background simulation task.
    ///
    /// The first cycle runs immediately, then every `tick` until
    /// [`Simulator::shutdown`] is called.
    pub fn start(self: &Arc<Self>, count: usize, tick: Duration) -> tokio::task::JoinHandle<()> {
        let simulator = Arc::clone(self);

        tracing::info!("Starting simulation for {} meters every {:?}", count, tick);

        tokio::spawn(async move {
            let mut ticker = interval(tick);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                ticker.tick().await;

                if *simulator.shutdown.read().await {
                    break;
                }

                simulator.generate(count).await;
                tracing::trace!("Simulation cycle complete for {} meters", count);
            }

            tracing::info!("Simulation stopped");
        })
    }

    /// Signal the background task to stop at its next tick
    pub async fn shutdown(&self) {
        *self.shutdown.write().await = true;
    }
}

impl Default for Simulator {
    fn default() -> Self {
        Self::new()
    }
}
