//! The execution engine.
//!
//! Runs every selected unit in discovery order, strictly sequentially, and
//! isolates failures per unit: a failed or broken subject never affects
//! another unit's execution or the statistics beyond its own contribution.
//! Per unit the life cycle is Pending, Running, then exactly one terminal
//! outcome; there are no retries, timeouts, or cancellation, so a hung
//! subject hangs the run.

use std::panic::{self, AssertUnwindSafe};

use tracing::Level;

use crate::discovery::ResolvedUnit;
use crate::errors::{InfraError, TestFailure};
use crate::logging;
use crate::selection::Selection;

// ============================================================================
// OUTCOMES AND STATISTICS
// ============================================================================

/// The terminal classification of one executed unit, produced exactly once.
#[derive(Debug)]
pub enum UnitOutcome {
    /// The entry point returned normally.
    Pass,
    /// The entry point propagated an assertion failure.
    Fail(TestFailure),
    /// The subject could not be constructed or invoked.
    Broken(InfraError),
}

/// One executed unit together with its outcome.
#[derive(Debug)]
pub struct UnitReport {
    qualified_name: String,
    outcome: UnitOutcome,
}

impl UnitReport {
    pub fn qualified_name(&self) -> &str {
        &self.qualified_name
    }

    pub fn outcome(&self) -> &UnitOutcome {
        &self.outcome
    }
}

/// Attempted and succeeded counters for one run.
///
/// Owned by the engine for the duration of the run: exactly one increment to
/// `attempted` and at most one to `succeeded` per unit, read once at run end.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunStatistics {
    attempted: usize,
    succeeded: usize,
}

impl RunStatistics {
    pub fn attempted(&self) -> usize {
        self.attempted
    }

    pub fn succeeded(&self) -> usize {
        self.succeeded
    }

    /// The final summary line.
    pub fn summary(&self) -> String {
        format!("{}/{} tests successful.", self.succeeded, self.attempted)
    }
}

/// Everything one run produced.
#[derive(Debug)]
pub struct RunReport {
    statistics: RunStatistics,
    units: Vec<UnitReport>,
    aborted: bool,
}

impl RunReport {
    /// The report of a run that never executed: discovery failed fatally.
    /// Statistics are zero and not meaningful.
    pub fn aborted() -> Self {
        Self {
            statistics: RunStatistics::default(),
            units: Vec::new(),
            aborted: true,
        }
    }

    pub fn statistics(&self) -> RunStatistics {
        self.statistics
    }

    pub fn units(&self) -> &[UnitReport] {
        &self.units
    }

    pub fn is_aborted(&self) -> bool {
        self.aborted
    }

    pub fn failed_count(&self) -> usize {
        self.units
            .iter()
            .filter(|u| matches!(u.outcome, UnitOutcome::Fail(_)))
            .count()
    }

    pub fn broken_count(&self) -> usize {
        self.units
            .iter()
            .filter(|u| matches!(u.outcome, UnitOutcome::Broken(_)))
            .count()
    }
}

// ============================================================================
// EXECUTION
// ============================================================================

/// Runs every unit matching the selection and emits the summary line.
///
/// Units are taken in the order the iterator yields them; that order is not
/// guaranteed to be sorted or stable across runs. Every classified outcome
/// is logged: info for success, severe for assertion failures and for units
/// that could not run, each with a distinguishable message.
pub fn run_units(
    units: impl IntoIterator<Item = ResolvedUnit>,
    selection: &Selection,
) -> RunReport {
    let mut statistics = RunStatistics::default();
    let mut reports = Vec::new();

    for unit in units {
        if !selection.matches(&unit) {
            continue;
        }
        logging::log_and_print(
            Level::INFO,
            &format!("Testing unit {}.", unit.qualified_name()),
        );
        statistics.attempted += 1;

        let outcome = execute_unit(&unit);
        match &outcome {
            UnitOutcome::Pass => {
                statistics.succeeded += 1;
            }
            UnitOutcome::Fail(failure) => {
                logging::log_and_print_with_cause(
                    Level::ERROR,
                    &format!("Some tests of {} failed.", unit.qualified_name()),
                    failure,
                );
            }
            UnitOutcome::Broken(error) => {
                logging::log_and_print_with_cause(
                    Level::ERROR,
                    &format!("Unit {} could not be tested.", unit.qualified_name()),
                    error,
                );
            }
        }
        reports.push(UnitReport {
            qualified_name: unit.qualified_name().to_string(),
            outcome,
        });
    }

    logging::log_and_print(Level::INFO, &statistics.summary());
    RunReport {
        statistics,
        units: reports,
        aborted: false,
    }
}

/// Constructs and invokes one subject under panic isolation.
///
/// Construction and invocation are caught separately so the two
/// infrastructure failures stay distinguishable in the report.
fn execute_unit(unit: &ResolvedUnit) -> UnitOutcome {
    let construct = unit.construct();
    let mut subject = match panic::catch_unwind(AssertUnwindSafe(construct)) {
        Ok(subject) => subject,
        Err(payload) => {
            return UnitOutcome::Broken(InfraError::Construction(panic_detail(payload)));
        }
    };
    match panic::catch_unwind(AssertUnwindSafe(|| subject.run_all_tests())) {
        Ok(Ok(())) => UnitOutcome::Pass,
        Ok(Err(failure)) => UnitOutcome::Fail(failure),
        Err(payload) => UnitOutcome::Broken(InfraError::Invocation(panic_detail(payload))),
    }
}

/// Extracts a readable message from a panic payload.
fn panic_detail(payload: Box<dyn std::any::Any + Send>) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
