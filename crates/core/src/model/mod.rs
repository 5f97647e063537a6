//! Domain model: event records and entity identifier pools.

pub mod event;
pub mod pools;
