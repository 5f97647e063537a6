//! CSV serialization of a finished [`EventLog`].
//!
//! One row per event, preceded by a header row. Columns, in order:
//! `event_id, activity, timestamp, product, shipment, transport, location,
//! status`. Optional entity references render as empty cells; timestamps use
//! [`TIMESTAMP_FORMAT`].
//!
//! Writes are single-shot: open, serialize every row, flush, close. Any
//! failure propagates immediately, there is no partial-write recovery.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use serde::Serialize;
use tracing::debug;

use crate::error::Result;
use crate::model::event::Event;
use crate::sim::generator::EventLog;

/// Timestamp layout used in the CSV output, e.g. `2025-04-29 08:00:00`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Flat serde view of one event row.
///
/// Field order defines the column order; field names define the header.
#[derive(Debug, Serialize)]
struct CsvRecord<'a> {
    event_id: u64,
    activity: &'a str,
    timestamp: String,
    product: Option<&'a str>,
    shipment: Option<&'a str>,
    transport: Option<&'a str>,
    location: &'a str,
    status: &'a str,
}

impl<'a> From<&'a Event> for CsvRecord<'a> {
    fn from(event: &'a Event) -> Self {
        Self {
            event_id: event.event_id,
            activity: event.activity.as_str(),
            timestamp: event.timestamp.format(TIMESTAMP_FORMAT).to_string(),
            product: event.product.as_ref().map(|p| p.as_str()),
            shipment: event.shipment.as_ref().map(|s| s.as_str()),
            transport: event.transport.as_ref().map(|t| t.as_str()),
            location: &event.location,
            status: event.status.as_str(),
        }
    }
}

/// Write the log as CSV to a file at `path`.
///
/// The parent directory must already exist; creating it is the caller's
/// responsibility.
pub fn write_csv<P: AsRef<Path>>(log: &EventLog, path: P) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    write_csv_to(log, file)?;
    debug!(path = %path.display(), rows = log.len(), "event log written");
    Ok(())
}

/// Write the log as CSV to an arbitrary sink.
pub fn write_csv_to<W: Write>(log: &EventLog, writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for event in log.iter() {
        csv_writer.serialize(CsvRecord::from(event))?;
    }
    csv_writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{GeneratorConfig, LogSize};
    use crate::sim::generator::EventLogGenerator;
    use chrono::NaiveDateTime;

    fn small_log() -> EventLog {
        EventLogGenerator::new(GeneratorConfig::new(LogSize::Small))
            .unwrap()
            .generate()
    }

    fn render(log: &EventLog) -> String {
        let mut buffer = Vec::new();
        write_csv_to(log, &mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_header_row_is_exact() {
        let output = render(&small_log());
        let header = output.lines().next().unwrap();
        assert_eq!(
            header,
            "event_id,activity,timestamp,product,shipment,transport,location,status"
        );
    }

    #[test]
    fn test_row_count_matches_log() {
        let log = small_log();
        let output = render(&log);
        assert_eq!(output.lines().count(), log.len() + 1);
    }

    #[test]
    fn test_first_row_shape() {
        let output = render(&small_log());
        let first = output.lines().nth(1).unwrap();
        let fields: Vec<&str> = first.split(',').collect();
        assert_eq!(fields.len(), 8);
        assert_eq!(fields[0], "1");
        assert_eq!(fields[1], "Create Product");
        assert_eq!(fields[3], "prod_001");
        assert_eq!(fields[4], "", "shipment cell should be empty");
        assert_eq!(fields[5], "", "transport cell should be empty");
        assert_eq!(fields[6], "Factory");
        assert_eq!(fields[7], "Normal");
    }

    #[test]
    fn test_timestamps_parse_with_declared_format() {
        let output = render(&small_log());
        for line in output.lines().skip(1) {
            let timestamp = line.split(',').nth(2).unwrap();
            NaiveDateTime::parse_from_str(timestamp, TIMESTAMP_FORMAT)
                .unwrap_or_else(|e| panic!("bad timestamp '{}': {}", timestamp, e));
        }
    }

    #[test]
    fn test_write_csv_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(LogSize::Small.file_name());
        let log = small_log();
        write_csv(&log, &path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, render(&log));
    }

    #[test]
    fn test_write_csv_fails_on_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.csv");
        let err = write_csv(&small_log(), &path).unwrap_err();
        assert!(err.is_io());
    }
}
