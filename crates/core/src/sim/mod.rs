//! Deterministic simulation: the advancing clock and the event generator.

pub mod clock;
pub mod generator;
