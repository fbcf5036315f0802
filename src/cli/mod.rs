//! The harness command-line entry point.
//!
//! A consuming project builds a [`SubjectRegistry`] in its own `main` and
//! hands it to [`run`]; everything else, from argument parsing to the final
//! summary line, happens here.

use clap::Parser;
use tracing::Level;

use crate::cli::args::HarnessArgs;
use crate::discovery::{self, ResolvedUnit};
use crate::logging::{self, LogSession, Verbosity};
use crate::registry::SubjectRegistry;
use crate::runner::{self, RunReport};
use crate::selection::Selection;

pub mod args;
pub mod output;

/// Parses the process arguments and runs the harness over the registry.
pub fn run(registry: &SubjectRegistry) -> RunReport {
    run_with_args(registry, HarnessArgs::parse())
}

/// Runs the harness with an already-parsed configuration.
///
/// The run completes after the summary is printed; a fatal discovery error
/// aborts it with zero statistics. A log session that cannot be started is
/// reported as a warning and the run proceeds unlogged.
pub fn run_with_args(registry: &SubjectRegistry, args: HarnessArgs) -> RunReport {
    let verbosity = Verbosity::from_flag(args.log_level).unwrap_or_default();
    let folder = args
        .log_folder
        .unwrap_or_else(logging::default_log_folder);
    let _session = match LogSession::start(&folder, verbosity) {
        Ok(session) => Some(session),
        Err(e) => {
            logging::log_and_print_with_cause(Level::WARN, "Logging could not be started.", &e);
            None
        }
    };

    logging::log_and_print(Level::INFO, "Start running tests.");

    let units: Vec<ResolvedUnit> = if let Some(root) = &args.scan {
        match discovery::discover_scanned(root, registry) {
            Ok(units) => units,
            Err(e) => {
                logging::log_and_print_with_cause(
                    Level::ERROR,
                    "The search for unit files failed.",
                    &e,
                );
                logging::log_and_print(Level::WARN, "Testing aborted.");
                return RunReport::aborted();
            }
        }
    } else {
        discovery::discover_registered(registry).collect()
    };

    let selection = Selection::from_names(args.tests);
    let report = runner::run_units(units, &selection);
    output::print_recap(&report);
    logging::log_and_print(Level::INFO, "Finished testing.");
    report
}
