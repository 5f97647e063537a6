//! freightlog — deterministic logistics event log generator.
//!
//! Generates a seeded synthetic event log for the chosen size preset and
//! writes it as CSV into the output directory:
//!
//! ```bash
//! freightlog --size small
//! freightlog --size medium --seed 7
//! freightlog --size large --output-dir /tmp/logs --verbose
//! ```
//!
//! An unrecognized size or a malformed seed is rejected before any
//! generation or file output happens.

mod commands;

use std::fs;
use std::path::Path;
use std::process;

use tracing::debug;
use tracing_subscriber::EnvFilter;

use freightlog_core::{
    write_csv, Error, EventLogGenerator, GeneratorConfig, LogSize, Result,
};

use commands::build_cli;

fn main() {
    let cli = build_cli();
    let matches = cli.get_matches();

    setup_logging(matches.get_flag("verbose"), matches.get_flag("quiet"));

    if let Err(e) = run(&matches) {
        eprintln!("{}", e);
        process::exit(1);
    }
}

fn run(matches: &clap::ArgMatches) -> Result<()> {
    let size: LogSize = matches
        .get_one::<String>("size")
        .map(String::as_str)
        .unwrap_or_default()
        .parse()?;

    let seed_raw = matches
        .get_one::<String>("seed")
        .map(String::as_str)
        .unwrap_or("42");
    let seed: u64 = seed_raw
        .parse()
        .map_err(|e| Error::InvalidConfiguration(format!("invalid seed '{}': {}", seed_raw, e)))?;

    let output_dir = Path::new(
        matches
            .get_one::<String>("output-dir")
            .map(String::as_str)
            .unwrap_or("data"),
    );

    debug!(size = %size, seed, output_dir = %output_dir.display(), "resolved run configuration");

    let config = GeneratorConfig::new(size).with_seed(seed);
    let log = EventLogGenerator::new(config)?.generate();

    fs::create_dir_all(output_dir)?;
    let path = output_dir.join(size.file_name());
    write_csv(&log, &path)?;

    if !matches.get_flag("quiet") {
        println!(
            "Event log generated: {} with {} events.",
            path.display(),
            log.len()
        );
    }
    Ok(())
}

fn setup_logging(verbose: bool, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();
}
