//! Telemetry Feed
//!
//! State behind the live telemetry table. Polls are numbered when issued and
//! a response is only applied if it is newer than the last applied one, so a
//! slow request can never overwrite fresher data.

use chrono::{DateTime, Local};

use crate::api::EnergyReading;

/// Delay between telemetry polls
pub const POLL_INTERVAL_MS: u32 = 3000;

/// Rows shown in the table, regardless of how many meters report
pub const MAX_VISIBLE_ROWS: usize = 8;

/// Status value rendered with the alert badge
pub const PEAK_STATUS: &str = "Peak";

/// Sequence number of an issued poll
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct PollTicket(u64);

/// Latest telemetry held by the view
#[derive(Clone, Debug, PartialEq)]
pub struct TelemetryFeed {
    readings: Vec<EnergyReading>,
    last_updated: DateTime<Local>,
    issued: u64,
    applied: u64,
}

impl TelemetryFeed {
    /// Empty feed; "last updated" starts at activation time
    pub fn new(activated_at: DateTime<Local>) -> Self {
        Self {
            readings: Vec::new(),
            last_updated: activated_at,
            issued: 0,
            applied: 0,
        }
    }

    /// Number the next poll
    pub fn begin_poll(&mut self) -> PollTicket {
        self.issued += 1;
        PollTicket(self.issued)
    }

    /// Replace the held readings with a poll result.
    ///
    /// Returns `false` and changes nothing if a newer poll was already applied.
    pub fn apply(
        &mut self,
        ticket: PollTicket,
        readings: Vec<EnergyReading>,
        arrived_at: DateTime<Local>,
    ) -> bool {
        if ticket.0 <= self.applied {
            return false;
        }

        self.applied = ticket.0;
        self.readings = readings;
        self.last_updated = arrived_at;
        true
    }

    /// Whether any poll has completed yet
    pub fn has_data(&self) -> bool {
        self.applied > 0
    }

    pub fn readings(&self) -> &[EnergyReading] {
        &self.readings
    }

    pub fn last_updated(&self) -> DateTime<Local> {
        self.last_updated
    }

    pub fn last_updated_label(&self) -> String {
        format_time_of_day(&self.last_updated)
    }

    /// Table rows: the first [`MAX_VISIBLE_ROWS`] readings in received order
    pub fn visible_rows(&self) -> Vec<TelemetryRow> {
        self.readings
            .iter()
            .take(MAX_VISIBLE_ROWS)
            .map(TelemetryRow::from)
            .collect()
    }
}

/// One rendered table row
#[derive(Clone, Debug, PartialEq)]
pub struct TelemetryRow {
    pub device_id: String,
    pub status: String,
    pub is_peak: bool,
    pub value: String,
    pub time: String,
}

impl From<&EnergyReading> for TelemetryRow {
    fn from(reading: &EnergyReading) -> Self {
        Self {
            device_id: reading.device_id.clone(),
            status: reading.status.clone(),
            is_peak: reading.status == PEAK_STATUS,
            value: reading.value.to_string(),
            time: local_time_of_day(&reading.timestamp),
        }
    }
}

pub fn format_time_of_day(at: &DateTime<Local>) -> String {
    at.format("%H:%M:%S").to_string()
}

/// Render an RFC 3339 timestamp as local time of day; anything else verbatim
pub fn local_time_of_day(timestamp: &str) -> String {
    DateTime::parse_from_rfc3339(timestamp)
        .map(|dt| format_time_of_day(&dt.with_timezone(&Local)))
        .unwrap_or_else(|_| timestamp.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};

    fn reading(device: &str, value: f64, status: &str) -> EnergyReading {
        EnergyReading {
            device_id: device.to_string(),
            timestamp: "2024-06-01T14:00:00Z".to_string(),
            value,
            unit: "kWh".to_string(),
            status: status.to_string(),
        }
    }

    fn meters(count: usize) -> Vec<EnergyReading> {
        (1..=count)
            .map(|n| reading(&format!("METER-{:03}", n), n as f64, "Normal"))
            .collect()
    }

    #[test]
    fn test_starts_without_data() {
        let feed = TelemetryFeed::new(Local::now());
        assert!(!feed.has_data());
        assert!(feed.visible_rows().is_empty());
    }

    #[test]
    fn test_single_reading_renders_id_and_value() {
        let mut feed = TelemetryFeed::new(Local::now());
        let ticket = feed.begin_poll();

        let sample = EnergyReading {
            device_id: "METER-001".to_string(),
            timestamp: "12:00".to_string(),
            value: 50.5,
            unit: "kWh".to_string(),
            status: "Normal".to_string(),
        };
        assert!(feed.apply(ticket, vec![sample], Local::now()));

        let rows = feed.visible_rows();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].device_id, "METER-001");
        assert_eq!(rows[0].value, "50.5");
        assert_eq!(rows[0].time, "12:00");
        assert!(!rows[0].is_peak);
        assert!(feed.has_data());
    }

    #[test]
    fn test_truncates_to_first_eight_in_order() {
        let mut feed = TelemetryFeed::new(Local::now());
        let ticket = feed.begin_poll();
        feed.apply(ticket, meters(12), Local::now());

        let rows = feed.visible_rows();
        assert_eq!(rows.len(), MAX_VISIBLE_ROWS);

        let ids: Vec<&str> = rows.iter().map(|r| r.device_id.as_str()).collect();
        assert_eq!(
            ids,
            ["METER-001", "METER-002", "METER-003", "METER-004", "METER-005", "METER-006", "METER-007", "METER-008"]
        );
        // Held data is not truncated
        assert_eq!(feed.readings().len(), 12);
    }

    #[test]
    fn test_received_order_is_kept() {
        let mut feed = TelemetryFeed::new(Local::now());
        let ticket = feed.begin_poll();
        feed.apply(
            ticket,
            vec![reading("METER-009", 1.0, "Normal"), reading("METER-002", 2.0, "Normal")],
            Local::now(),
        );

        let rows = feed.visible_rows();
        assert_eq!(rows[0].device_id, "METER-009");
        assert_eq!(rows[1].device_id, "METER-002");
    }

    #[test]
    fn test_identical_polls_only_move_last_updated() {
        let start = Local::now();
        let mut feed = TelemetryFeed::new(start);

        let first = feed.begin_poll();
        feed.apply(first, meters(3), start + Duration::seconds(1));
        let rows_before = feed.visible_rows();

        let second = feed.begin_poll();
        feed.apply(second, meters(3), start + Duration::seconds(4));

        assert_eq!(feed.visible_rows(), rows_before);
        assert_eq!(feed.last_updated(), start + Duration::seconds(4));
    }

    #[test]
    fn test_failed_poll_clears_table() {
        let mut feed = TelemetryFeed::new(Local::now());
        let first = feed.begin_poll();
        feed.apply(first, meters(3), Local::now());

        let second = feed.begin_poll();
        assert!(feed.apply(second, Vec::new(), Local::now()));
        assert!(feed.visible_rows().is_empty());
        assert!(feed.has_data());
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let start = Local::now();
        let mut feed = TelemetryFeed::new(start);

        let slow = feed.begin_poll();
        let fast = feed.begin_poll();

        assert!(feed.apply(fast, vec![reading("METER-001", 20.0, "Normal")], start + Duration::seconds(3)));
        assert!(!feed.apply(slow, vec![reading("METER-001", 10.0, "Normal")], start + Duration::seconds(5)));

        assert_eq!(feed.readings()[0].value, 20.0);
        assert_eq!(feed.last_updated(), start + Duration::seconds(3));
    }

    #[test]
    fn test_peak_flag_is_exact_match() {
        assert!(TelemetryRow::from(&reading("METER-001", 24.0, "Peak")).is_peak);
        assert!(!TelemetryRow::from(&reading("METER-001", 24.0, "peak")).is_peak);
        assert!(!TelemetryRow::from(&reading("METER-001", 24.0, "Maintenance")).is_peak);
    }

    #[test]
    fn test_rfc3339_timestamp_shown_as_local_time() {
        let expected = Utc
            .with_ymd_and_hms(2024, 6, 1, 14, 5, 9)
            .unwrap()
            .with_timezone(&Local)
            .format("%H:%M:%S")
            .to_string();

        assert_eq!(local_time_of_day("2024-06-01T14:05:09Z"), expected);
        assert_eq!(local_time_of_day("2024-06-01T16:05:09.250+02:00"), expected);
    }
}
