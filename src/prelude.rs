//! Convenient imports for freightlog.
//!
//! This module re-exports the most commonly used types so you can get
//! started with a single import:
//!
//! ```ignore
//! use freightlog::prelude::*;
//!
//! let log = freightlog::generate(LogSize::Medium)?;
//! write_csv(&log, "data/logistics_event_log_medium.csv")?;
//! ```

// Generation entry points
pub use crate::{generate, generate_with};

// Configuration
pub use crate::{GeneratorConfig, LogSize, SizePreset};

// Error handling
pub use crate::{Error, Result};

// Event model
pub use crate::{Activity, Event, EventStatus};

// Generator surface
pub use crate::{EventLog, EventLogGenerator, GeneratorStats};

// CSV export
pub use crate::{write_csv, write_csv_to, TIMESTAMP_FORMAT};
