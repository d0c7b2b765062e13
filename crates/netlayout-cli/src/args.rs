//! Command-line argument definitions for the netlayout CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, configuration file
//! selection, the random seed and logging verbosity.

use clap::Parser;

/// Command-line arguments for the netlayout topology layout tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input topology JSON file
    #[arg(help = "Path to the input topology file")]
    pub input: String,

    /// Path to the output topology JSON file
    #[arg(short, long, default_value = "out.json")]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Seed for reproducible layouts, overriding any configured seed
    #[arg(long)]
    pub seed: Option<u64>,

    /// Also write the rounded positions as a layout payload JSON file
    #[arg(long)]
    pub payload: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["netlayout", "topology.json"]);
        assert_eq!(args.input, "topology.json");
        assert_eq!(args.output, "out.json");
        assert_eq!(args.config, None);
        assert_eq!(args.seed, None);
        assert_eq!(args.payload, None);
        assert_eq!(args.log_level, "info");
    }

    #[test]
    fn test_all_flags() {
        let args = Args::parse_from([
            "netlayout",
            "in.json",
            "-o",
            "laid_out.json",
            "-c",
            "layout.toml",
            "--seed",
            "42",
            "--payload",
            "payload.json",
            "--log-level",
            "debug",
        ]);
        assert_eq!(args.output, "laid_out.json");
        assert_eq!(args.config.as_deref(), Some("layout.toml"));
        assert_eq!(args.seed, Some(42));
        assert_eq!(args.payload.as_deref(), Some("payload.json"));
        assert_eq!(args.log_level, "debug");
    }
}
