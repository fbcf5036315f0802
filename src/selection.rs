//! User-supplied selection of which test subjects to run.

use crate::discovery::ResolvedUnit;

/// A set of unit short names supplied by the caller.
///
/// An empty selection matches everything; once constructed, a selection is
/// immutable for the duration of a run.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    names: Vec<String>,
}

impl Selection {
    /// The match-everything selection.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn from_names(names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Pure predicate: true iff the selection is empty or contains the
    /// unit's short name.
    pub fn matches(&self, unit: &ResolvedUnit) -> bool {
        self.is_empty() || self.names.iter().any(|name| name == unit.short_name())
    }
}
