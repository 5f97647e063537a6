//! Generator configuration and size presets.
//!
//! The single required knob is the [`LogSize`] preset, which fixes the entity
//! pool sizes and the target event count. Everything else (seed, delay
//! probability, start instant) has a default and a `with_*` builder override
//! on [`GeneratorConfig`].

use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Default random seed, chosen so that repeated runs agree out of the box.
pub const DEFAULT_SEED: u64 = 42;

/// Default probability that a delay-eligible event is flagged `Delayed`.
pub const DEFAULT_DELAY_PROBABILITY: f64 = 0.05;

/// Scale preset for a generation run.
///
/// Each preset fixes the identifier pool sizes and the cap on the number of
/// emitted events. Unknown selector strings are rejected with
/// [`Error::InvalidConfiguration`] before any generation runs.
///
/// # Examples
///
/// ```
/// use freightlog_core::config::LogSize;
///
/// let size: LogSize = "small".parse().unwrap();
/// assert_eq!(size, LogSize::Small);
/// assert_eq!(size.preset().target_events, 500);
/// assert!("tiny".parse::<LogSize>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogSize {
    /// 100 products, 30 shipments, 15 transports, capped at 500 events.
    Small,
    /// 200 products, 50 shipments, 30 transports, capped at 1000 events.
    Medium,
    /// 1000 products, 300 shipments, 150 transports, capped at 5000 events.
    Large,
}

impl LogSize {
    /// All presets, smallest first.
    pub const fn all() -> [LogSize; 3] {
        [LogSize::Small, LogSize::Medium, LogSize::Large]
    }

    /// The lowercase selector string for this size.
    pub fn as_str(&self) -> &'static str {
        match self {
            LogSize::Small => "small",
            LogSize::Medium => "medium",
            LogSize::Large => "large",
        }
    }

    /// Entity pool sizes and event cap for this preset.
    pub fn preset(&self) -> SizePreset {
        match self {
            LogSize::Small => SizePreset {
                products: 100,
                shipments: 30,
                transports: 15,
                target_events: 500,
            },
            LogSize::Medium => SizePreset {
                products: 200,
                shipments: 50,
                transports: 30,
                target_events: 1000,
            },
            LogSize::Large => SizePreset {
                products: 1000,
                shipments: 300,
                transports: 150,
                target_events: 5000,
            },
        }
    }

    /// Conventional output file name for this size.
    pub fn file_name(&self) -> &'static str {
        match self {
            LogSize::Small => "logistics_event_log_small.csv",
            LogSize::Medium => "logistics_event_log_medium.csv",
            LogSize::Large => "logistics_event_log_large.csv",
        }
    }
}

impl FromStr for LogSize {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "small" => Ok(LogSize::Small),
            "medium" => Ok(LogSize::Medium),
            "large" => Ok(LogSize::Large),
            other => Err(Error::InvalidConfiguration(format!(
                "unknown size '{}' (expected small, medium, or large)",
                other
            ))),
        }
    }
}

impl std::fmt::Display for LogSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fixed entity counts and event cap derived from a [`LogSize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizePreset {
    /// Number of product identifiers in the pool.
    pub products: usize,
    /// Number of shipment identifiers in the pool.
    pub shipments: usize,
    /// Number of transport identifiers in the pool.
    pub transports: usize,
    /// Maximum number of events kept in the final log.
    pub target_events: usize,
}

impl SizePreset {
    /// Events produced by the seven phases before the cap is applied.
    ///
    /// Products appear in four phases (create, store, assign, deliver),
    /// shipments in two (create, load), transports in two (order, start).
    /// For all three presets this total stays below `target_events`, so the
    /// cap only bites for hypothetical larger pools.
    pub const fn raw_event_count(&self) -> usize {
        4 * self.products + 2 * self.shipments + 2 * self.transports
    }
}

/// Full configuration for one generation run.
///
/// # Examples
///
/// ```
/// use freightlog_core::config::{GeneratorConfig, LogSize};
///
/// let config = GeneratorConfig::new(LogSize::Small)
///     .with_seed(7)
///     .with_delay_probability(0.2);
/// assert_eq!(config.seed, 7);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    /// Scale preset for this run.
    pub size: LogSize,
    /// Random seed; identical seeds reproduce identical logs.
    pub seed: u64,
    /// Probability in `[0, 1]` that a delay-eligible event is `Delayed`.
    pub delay_probability: f64,
    /// Simulated instant of the first event.
    pub start_time: NaiveDateTime,
}

impl GeneratorConfig {
    /// Create a configuration for `size` with default seed, delay
    /// probability, and start instant.
    pub fn new(size: LogSize) -> Self {
        Self {
            size,
            seed: DEFAULT_SEED,
            delay_probability: DEFAULT_DELAY_PROBABILITY,
            start_time: default_start_time(),
        }
    }

    /// Set the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the delay probability. Values outside `[0, 1]` are rejected when
    /// the generator is constructed.
    pub fn with_delay_probability(mut self, probability: f64) -> Self {
        self.delay_probability = probability;
        self
    }

    /// Set the simulated start instant.
    pub fn with_start_time(mut self, start_time: NaiveDateTime) -> Self {
        self.start_time = start_time;
        self
    }
}

/// Default simulated start instant: 2025-04-29 08:00:00.
fn default_start_time() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 4, 29)
        .and_then(|d| d.and_hms_opt(8, 0, 0))
        .unwrap_or(NaiveDateTime::MIN)
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== LogSize Tests =====

    #[test]
    fn test_size_parses_all_selectors() {
        assert_eq!("small".parse::<LogSize>().unwrap(), LogSize::Small);
        assert_eq!("medium".parse::<LogSize>().unwrap(), LogSize::Medium);
        assert_eq!("large".parse::<LogSize>().unwrap(), LogSize::Large);
    }

    #[test]
    fn test_size_rejects_unknown_selector() {
        let err = "tiny".parse::<LogSize>().unwrap_err();
        assert!(err.is_invalid_configuration());
        assert!(
            err.to_string().contains("tiny"),
            "error should name the bad selector: {}",
            err
        );
    }

    #[test]
    fn test_size_rejects_case_variants() {
        assert!("Small".parse::<LogSize>().is_err());
        assert!("LARGE".parse::<LogSize>().is_err());
        assert!("".parse::<LogSize>().is_err());
    }

    #[test]
    fn test_size_display_round_trips() {
        for size in LogSize::all() {
            let parsed: LogSize = size.to_string().parse().unwrap();
            assert_eq!(parsed, size);
        }
    }

    #[test]
    fn test_preset_table() {
        let small = LogSize::Small.preset();
        assert_eq!((small.products, small.shipments, small.transports), (100, 30, 15));
        assert_eq!(small.target_events, 500);

        let medium = LogSize::Medium.preset();
        assert_eq!((medium.products, medium.shipments, medium.transports), (200, 50, 30));
        assert_eq!(medium.target_events, 1000);

        let large = LogSize::Large.preset();
        assert_eq!((large.products, large.shipments, large.transports), (1000, 300, 150));
        assert_eq!(large.target_events, 5000);
    }

    #[test]
    fn test_raw_event_counts() {
        assert_eq!(LogSize::Small.preset().raw_event_count(), 490);
        assert_eq!(LogSize::Medium.preset().raw_event_count(), 960);
        assert_eq!(LogSize::Large.preset().raw_event_count(), 4900);
    }

    #[test]
    fn test_raw_counts_stay_under_target() {
        for size in LogSize::all() {
            let preset = size.preset();
            assert!(
                preset.raw_event_count() <= preset.target_events,
                "{} preset would be capped",
                size
            );
        }
    }

    #[test]
    fn test_file_names() {
        assert_eq!(LogSize::Small.file_name(), "logistics_event_log_small.csv");
        assert_eq!(LogSize::Medium.file_name(), "logistics_event_log_medium.csv");
        assert_eq!(LogSize::Large.file_name(), "logistics_event_log_large.csv");
    }

    // ===== GeneratorConfig Tests =====

    #[test]
    fn test_config_defaults() {
        let config = GeneratorConfig::new(LogSize::Medium);
        assert_eq!(config.size, LogSize::Medium);
        assert_eq!(config.seed, 42);
        assert_eq!(config.delay_probability, 0.05);

        let expected =
            NaiveDateTime::parse_from_str("2025-04-29 08:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
        assert_eq!(config.start_time, expected);
    }

    #[test]
    fn test_config_builders_override_defaults() {
        let start = NaiveDate::from_ymd_opt(2030, 1, 1)
            .unwrap()
            .and_hms_opt(12, 30, 0)
            .unwrap();
        let config = GeneratorConfig::new(LogSize::Small)
            .with_seed(1234)
            .with_delay_probability(0.5)
            .with_start_time(start);
        assert_eq!(config.seed, 1234);
        assert_eq!(config.delay_probability, 0.5);
        assert_eq!(config.start_time, start);
    }
}
