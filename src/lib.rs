//! # Freightlog
//!
//! Deterministic, seeded generator of synthetic logistics event logs for
//! process mining.
//!
//! Freightlog simulates a fixed logistics flow (product creation,
//! warehousing, shipment assembly, transport, delivery) and emits the
//! resulting events as a CSV table. Runs are pure functions of their
//! configuration: the same size, seed, delay probability, and start instant
//! always reproduce the same log.
//!
//! ## Quick Start
//!
//! ```ignore
//! use freightlog::prelude::*;
//!
//! // Generate with defaults (seed 42, 5% delay rate)
//! let log = freightlog::generate(LogSize::Small)?;
//!
//! // Write it out for process mining tools
//! write_csv(&log, "data/logistics_event_log_small.csv")?;
//!
//! println!("{} events, {} delayed", log.len(), log.stats().delayed);
//! ```
//!
//! ## Tuning a run
//!
//! ```ignore
//! use freightlog::prelude::*;
//!
//! let config = GeneratorConfig::new(LogSize::Large)
//!     .with_seed(7)
//!     .with_delay_probability(0.25);
//! let log = freightlog::generate_with(config)?;
//! ```
//!
//! ## Crate layout
//!
//! This crate is a thin facade over [`freightlog_core`], re-exporting its
//! public surface:
//!
//! - [`LogSize`] / [`GeneratorConfig`] - size presets and run configuration
//! - [`EventLogGenerator`] / [`EventLog`] - the seven-phase simulation
//! - [`Event`], [`Activity`], [`EventStatus`] - the event model
//! - [`write_csv`] / [`write_csv_to`] - CSV export

#![warn(missing_docs)]

pub mod prelude;

// Re-export the full core surface
pub use freightlog_core::{
    write_csv, write_csv_to, Activity, EntityPools, Error, Event, EventLog, EventLogGenerator,
    EventStatus, GeneratorConfig, GeneratorStats, LogSize, ProductId, Result, ShipmentId,
    SimClock, SizePreset, TransportId, DESTINATIONS, FACTORY, ON_ROAD, TIMESTAMP_FORMAT,
    WAREHOUSES,
};

/// Generate an event log for `size` with default seed, delay probability,
/// and start instant.
pub fn generate(size: LogSize) -> Result<EventLog> {
    generate_with(GeneratorConfig::new(size))
}

/// Generate an event log from a full configuration.
pub fn generate_with(config: GeneratorConfig) -> Result<EventLog> {
    Ok(EventLogGenerator::new(config)?.generate())
}
