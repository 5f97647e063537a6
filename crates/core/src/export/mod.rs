//! Output serialization for finished event logs.

pub mod csv;
