//! Defines the command-line arguments for harness binaries.
//!
//! This module uses the `clap` crate with its "derive" feature to create a
//! declarative and type-safe argument parsing structure; the core consumes
//! the parsed result as a plain configuration value.

use clap::Parser;
use std::path::PathBuf;

/// The harness argument structure.
#[derive(Debug, Parser)]
#[command(
    name = "sensei",
    version,
    about = "A lightweight test harness with self-registering test subjects."
)]
pub struct HarnessArgs {
    /// Short names of the test subjects to run; absent or empty runs all.
    ///
    /// Names are collected up to the next flag, so `--test Circle Square`
    /// selects both.
    #[arg(long = "test", value_name = "NAME", num_args = 0..)]
    pub tests: Vec<String>,

    /// Destination directory for log output.
    #[arg(long = "log-folder", value_name = "PATH")]
    pub log_folder: Option<PathBuf>,

    /// Logging verbosity: -2 disables logging entirely, -1 config, 0 off,
    /// 1 severe, 2 warning, 3 info, 4 fine, 5 finer, 6 finest, 7 all.
    #[arg(
        long = "log-level",
        value_name = "LEVEL",
        allow_hyphen_values = true,
        default_value_t = 6
    )]
    pub log_level: i8,

    /// Resolve unit marker files under this root instead of running every
    /// registered subject; with no value, the current working directory is
    /// scanned.
    #[arg(
        long = "scan",
        value_name = "ROOT",
        num_args = 0..=1,
        default_missing_value = "."
    )]
    pub scan: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_are_collected_until_the_next_flag() {
        let args =
            HarnessArgs::parse_from(["sensei", "--test", "Circle", "Square", "--log-level", "3"]);
        assert_eq!(args.tests, vec!["Circle", "Square"]);
        assert_eq!(args.log_level, 3);
    }

    #[test]
    fn defaults_run_everything_at_finest() {
        let args = HarnessArgs::parse_from(["sensei"]);
        assert!(args.tests.is_empty());
        assert!(args.log_folder.is_none());
        assert_eq!(args.log_level, 6);
        assert!(args.scan.is_none());
    }

    #[test]
    fn a_bare_scan_flag_means_the_working_directory() {
        let args = HarnessArgs::parse_from(["sensei", "--scan"]);
        assert_eq!(args.scan, Some(PathBuf::from(".")));

        let args = HarnessArgs::parse_from(["sensei", "--scan", "build"]);
        assert_eq!(args.scan, Some(PathBuf::from("build")));
    }

    #[test]
    fn negative_log_levels_parse() {
        let args = HarnessArgs::parse_from(["sensei", "--log-level", "-2"]);
        assert_eq!(args.log_level, -2);
    }
}
