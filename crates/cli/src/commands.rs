//! CLI argument surface for the freightlog binary.

use clap::{Arg, ArgAction, Command};

/// Build the clap command.
///
/// The size selector is deliberately a free string validated by the library,
/// so an unrecognized value surfaces as a configuration error rather than a
/// clap usage error.
pub fn build_cli() -> Command {
    Command::new("freightlog")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Generate a simulated logistics event log")
        .arg(
            Arg::new("size")
                .long("size")
                .value_name("SIZE")
                .required(true)
                .help("Size of the event log: small (~500 events), medium (~1000), or large (~5000)"),
        )
        .arg(
            Arg::new("output-dir")
                .long("output-dir")
                .value_name("DIR")
                .default_value("data")
                .help("Directory the CSV file is written to (created if missing)"),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .value_name("N")
                .default_value("42")
                .help("Random seed; identical seeds reproduce identical logs"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .action(ArgAction::SetTrue)
                .help("Enable debug logging"),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .short('q')
                .action(ArgAction::SetTrue)
                .help("Suppress all output except errors"),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_is_required() {
        let result = build_cli().try_get_matches_from(["freightlog"]);
        assert!(result.is_err(), "missing --size should be a usage error");
    }

    #[test]
    fn test_defaults() {
        let matches = build_cli()
            .try_get_matches_from(["freightlog", "--size", "small"])
            .unwrap();
        assert_eq!(matches.get_one::<String>("size").unwrap(), "small");
        assert_eq!(matches.get_one::<String>("seed").unwrap(), "42");
        assert_eq!(matches.get_one::<String>("output-dir").unwrap(), "data");
        assert!(!matches.get_flag("verbose"));
        assert!(!matches.get_flag("quiet"));
    }

    #[test]
    fn test_overrides() {
        let matches = build_cli()
            .try_get_matches_from([
                "freightlog",
                "--size",
                "large",
                "--seed",
                "7",
                "--output-dir",
                "/tmp/logs",
                "-v",
            ])
            .unwrap();
        assert_eq!(matches.get_one::<String>("size").unwrap(), "large");
        assert_eq!(matches.get_one::<String>("seed").unwrap(), "7");
        assert_eq!(matches.get_one::<String>("output-dir").unwrap(), "/tmp/logs");
        assert!(matches.get_flag("verbose"));
    }

    #[test]
    fn test_unknown_size_still_parses_as_argument() {
        // Validation happens in the library, not in clap
        let matches = build_cli()
            .try_get_matches_from(["freightlog", "--size", "tiny"])
            .unwrap();
        assert_eq!(matches.get_one::<String>("size").unwrap(), "tiny");
    }
}
