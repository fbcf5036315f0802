//! The subject registry.
//!
//! Registration replaces the reflective class scan of classic harnesses:
//! each consuming project wires its test subjects into a registry at startup,
//! and discovery becomes a lookup over registered names. Because only
//! [`TestSubject`] constructors can be registered, "does this unit expose the
//! test capability" is answered at compile time; the runtime capability
//! filter collapses into "is this name registered".
//!
//! Registry Invariant: a registry is the single source of truth for loadable
//! units. Construct it once at the entrypoint and pass it by reference to
//! discovery and the runner; never build a second, hidden registry mid-run.

use std::collections::BTreeMap;

use crate::discovery::ResolvedUnit;
use crate::subject::SubjectFactory;

/// A mapping from fully-qualified unit names to subject constructors.
///
/// Names are dot-separated segment sequences, e.g. `"geometry.Circle"`; the
/// last segment is the unit's short name used for selection. The map is
/// ordered, so enumeration order is deterministic for a given registration
/// set (callers must not rely on any particular order across versions).
#[derive(Debug, Default)]
pub struct SubjectRegistry {
    entries: BTreeMap<String, SubjectFactory>,
}

impl SubjectRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a subject constructor under a fully-qualified name.
    /// Re-registering a name replaces the previous constructor.
    pub fn register(&mut self, qualified_name: impl Into<String>, construct: SubjectFactory) {
        self.entries.insert(qualified_name.into(), construct);
    }

    /// Resolves a qualified name to a loadable unit.
    ///
    /// `None` is the expected miss result used by shrinking-prefix
    /// resolution, not an error.
    pub fn try_load(&self, qualified_name: &str) -> Option<ResolvedUnit> {
        self.entries
            .get(qualified_name)
            .map(|&construct| ResolvedUnit::new(qualified_name, construct))
    }

    /// Enumerates every registered unit.
    pub fn units(&self) -> impl Iterator<Item = ResolvedUnit> + '_ {
        self.entries
            .iter()
            .map(|(name, &construct)| ResolvedUnit::new(name, construct))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
