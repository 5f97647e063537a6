//! Simulation core for the freightlog event log generator.
//!
//! This crate contains everything needed to produce a synthetic logistics
//! event log and write it out as CSV:
//!
//! - [`config`]: size presets and the seeded [`GeneratorConfig`]
//! - [`model`]: the [`Event`] record, activity/status enums, identifier pools
//! - [`sim`]: the simulated clock and the seven-phase [`EventLogGenerator`]
//! - [`export`]: CSV serialization of a finished [`EventLog`]
//!
//! The generator is fully deterministic: the same configuration (size, seed,
//! delay probability, start instant) always produces the same log.

pub mod config;
pub mod error;
pub mod export;
pub mod model;
pub mod sim;

pub use config::{GeneratorConfig, LogSize, SizePreset};
pub use error::{Error, Result};
pub use export::csv::{write_csv, write_csv_to, TIMESTAMP_FORMAT};
pub use model::event::{Activity, Event, EventStatus};
pub use model::pools::{
    EntityPools, ProductId, ShipmentId, TransportId, DESTINATIONS, FACTORY, ON_ROAD, WAREHOUSES,
};
pub use sim::clock::SimClock;
pub use sim::generator::{EventLog, EventLogGenerator, GeneratorStats};
