//! End-of-run console reporting.
//!
//! The engine already logs each outcome as it happens; this module prints
//! the closing recap of units that did not pass, colorized when the terminal
//! supports it.

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::runner::{RunReport, UnitOutcome};

/// Prints a recap of failed and broken units, if any.
pub fn print_recap(report: &RunReport) {
    if report.failed_count() == 0 && report.broken_count() == 0 {
        return;
    }

    let mut stderr = StandardStream::stderr(ColorChoice::Auto);
    eprintln!();
    for unit in report.units() {
        match unit.outcome() {
            UnitOutcome::Pass => {}
            UnitOutcome::Fail(failure) => {
                print_tag(&mut stderr, "FAIL", Color::Red);
                eprintln!(": {}", unit.qualified_name());
                eprintln!("  {}", failure.message());
                if let Some(cause) = failure.cause() {
                    eprintln!("  Unexpected fault: {}", cause);
                }
            }
            UnitOutcome::Broken(error) => {
                print_tag(&mut stderr, "BROKEN", Color::Yellow);
                eprintln!(": {}", unit.qualified_name());
                eprintln!("  {}", error);
            }
        }
    }
}

fn print_tag(stream: &mut StandardStream, tag: &str, color: Color) {
    let _ = stream.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true));
    eprint!("{tag}");
    let _ = stream.reset();
}
