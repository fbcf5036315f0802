//! Filesystem scan and shrinking-prefix resolution behavior.

mod common;

use std::fs;

use sensei::discovery::{discover_registered, discover_scanned};
use sensei::SubjectRegistry;

#[test]
fn shrinking_prefix_finds_the_namespace_root() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("a/b")).unwrap();
    fs::write(dir.path().join("a/b/C.unit"), b"").unwrap();

    let mut registry = SubjectRegistry::new();
    registry.register("b.C", common::passing);
    // Even with the bare short name loadable, the marker file must resolve
    // exactly once, at the longest matching suffix.
    registry.register("C", common::passing);

    let units = discover_scanned(dir.path(), &registry).unwrap();
    assert_eq!(units.len(), 1);
    assert_eq!(units[0].qualified_name(), "b.C");
    assert_eq!(units[0].short_name(), "C");
}

#[test]
fn unresolvable_candidates_are_silently_dropped() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("x")).unwrap();
    fs::write(dir.path().join("x/Orphan.unit"), b"").unwrap();

    let registry = SubjectRegistry::new();
    let units = discover_scanned(dir.path(), &registry).unwrap();
    assert!(units.is_empty());
}

#[test]
fn module_declarations_are_excluded_from_the_scan() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("b")).unwrap();
    fs::write(dir.path().join("b/mod-info.unit"), b"").unwrap();

    let mut registry = SubjectRegistry::new();
    registry.register("b.mod-info", common::passing);

    let units = discover_scanned(dir.path(), &registry).unwrap();
    assert!(units.is_empty());
}

#[test]
fn only_unit_marker_files_are_considered() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("b")).unwrap();
    fs::write(dir.path().join("b/D.txt"), b"").unwrap();
    fs::write(dir.path().join("b/D"), b"").unwrap();

    let mut registry = SubjectRegistry::new();
    registry.register("b.D", common::passing);

    let units = discover_scanned(dir.path(), &registry).unwrap();
    assert!(units.is_empty());
}

#[test]
fn a_missing_root_is_a_fatal_discovery_error() {
    let dir = tempfile::tempdir().unwrap();
    let registry = SubjectRegistry::new();

    let error = discover_scanned(dir.path().join("does-not-exist"), &registry).unwrap_err();
    assert!(error.root().ends_with("does-not-exist"));
}

#[test]
fn registered_discovery_enumerates_the_whole_registry() {
    let mut registry = SubjectRegistry::new();
    registry.register("geometry.Circle", common::passing);
    registry.register("geometry.Square", common::failing);

    let names: Vec<_> = discover_registered(&registry)
        .map(|u| u.qualified_name().to_string())
        .collect();
    assert_eq!(names, vec!["geometry.Circle", "geometry.Square"]);
}
