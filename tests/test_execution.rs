//! Execution engine classification, isolation, and statistics.

mod common;

use std::fs;

use sensei::discovery::discover_scanned;
use sensei::runner::{run_units, UnitOutcome};
use sensei::{Selection, SubjectRegistry};

#[test]
fn end_to_end_scan_runs_only_loadable_units() {
    // Three marker files on disk; two resolve to registered subjects (one
    // passing, one failing), the third is not a loadable unit.
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("geometry")).unwrap();
    fs::write(dir.path().join("geometry/Circle.unit"), b"").unwrap();
    fs::write(dir.path().join("geometry/Square.unit"), b"").unwrap();
    fs::write(dir.path().join("geometry/Helper.unit"), b"").unwrap();

    let mut registry = SubjectRegistry::new();
    registry.register("geometry.Circle", common::passing);
    registry.register("geometry.Square", common::failing);

    let units = discover_scanned(dir.path(), &registry).unwrap();
    let report = run_units(units, &Selection::all());

    assert_eq!(report.statistics().attempted(), 2);
    assert_eq!(report.statistics().succeeded(), 1);
    assert_eq!(report.statistics().summary(), "1/2 tests successful.");
}

#[test]
fn non_empty_selection_runs_matching_short_names_only() {
    let mut registry = SubjectRegistry::new();
    registry.register("geometry.Circle", common::passing);
    registry.register("geometry.Square", common::passing);
    registry.register("physics.Spring", common::passing);

    let selection = Selection::from_names(["Circle", "Spring"]);
    let report = run_units(registry.units(), &selection);

    assert_eq!(report.statistics().attempted(), 2);
    let names: Vec<_> = report.units().iter().map(|u| u.qualified_name()).collect();
    assert_eq!(names, vec!["geometry.Circle", "physics.Spring"]);
}

#[test]
fn empty_selection_runs_everything() {
    let mut registry = SubjectRegistry::new();
    registry.register("a.One", common::passing);
    registry.register("b.Two", common::failing);
    registry.register("c.Three", common::panicking);

    let report = run_units(registry.units(), &Selection::all());
    assert_eq!(report.statistics().attempted(), 3);
}

#[test]
fn failures_are_isolated_per_unit() {
    // Units failing or panicking must not keep later units from running.
    let mut registry = SubjectRegistry::new();
    registry.register("a.Fails", common::failing);
    registry.register("b.Panics", common::panicking);
    registry.register("c.Passes", common::passing);

    let report = run_units(registry.units(), &Selection::all());
    assert_eq!(report.statistics().attempted(), 3);
    assert_eq!(report.statistics().succeeded(), 1);
    assert!(matches!(
        report.units()[2].outcome(),
        UnitOutcome::Pass
    ));
}

#[test]
fn assertion_failures_and_panics_are_classified_apart() {
    let mut registry = SubjectRegistry::new();
    registry.register("a.Fails", common::failing);
    registry.register("b.Panics", common::panicking);
    registry.register("c.Unbuildable", common::broken_constructor);

    let report = run_units(registry.units(), &Selection::all());

    match report.units()[0].outcome() {
        UnitOutcome::Fail(failure) => assert_eq!(failure.message(), "forced failure"),
        other => panic!("expected an assertion failure, got {other:?}"),
    }
    match report.units()[1].outcome() {
        UnitOutcome::Broken(error) => {
            assert!(error.to_string().contains("entry point blew up"))
        }
        other => panic!("expected a broken unit, got {other:?}"),
    }
    match report.units()[2].outcome() {
        UnitOutcome::Broken(error) => {
            assert!(error.to_string().contains("constructing"))
        }
        other => panic!("expected a construction failure, got {other:?}"),
    }
}

#[test]
fn outcome_counts_always_account_for_every_attempt() {
    let mut registry = SubjectRegistry::new();
    registry.register("a.One", common::passing);
    registry.register("b.Two", common::failing);
    registry.register("c.Three", common::panicking);
    registry.register("d.Four", common::passing);

    let report = run_units(registry.units(), &Selection::all());
    let statistics = report.statistics();
    assert_eq!(
        statistics.attempted(),
        statistics.succeeded() + report.failed_count() + report.broken_count()
    );
    // One outcome per executed unit, no more.
    assert_eq!(report.units().len(), statistics.attempted());
}

#[test]
fn an_empty_run_reports_zero_of_zero() {
    let registry = SubjectRegistry::new();
    let report = run_units(registry.units(), &Selection::all());
    assert_eq!(report.statistics().summary(), "0/0 tests successful.");
    assert!(!report.is_aborted());
}
