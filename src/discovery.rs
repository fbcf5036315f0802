//! Discovers test units and resolves them to loadable, invocable handles.
//!
//! Two discovery sources feed the runner:
//!
//! 1. **Registered**: enumerate the [`SubjectRegistry`] directly. This is the
//!    default path; the registry already holds every loadable unit.
//! 2. **Scanned**: walk a root directory for unit marker files and resolve
//!    each path against the registry with a shrinking-prefix strategy. This
//!    preserves filesystem-driven selection for projects that lay units out
//!    on disk, without requiring the namespace depth of the root to be
//!    configured anywhere.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::errors::DiscoveryError;
use crate::registry::SubjectRegistry;
use crate::subject::SubjectFactory;

/// The file extension marking a unit on disk.
pub const UNIT_EXTENSION: &str = "unit";
/// The file stem of module-declaration artifacts, excluded from scans.
pub const MODULE_DECLARATION: &str = "mod-info";
/// Joins name segments into a fully-qualified unit name.
pub const NAMESPACE_SEPARATOR: &str = ".";

/// A unit not yet resolved against the registry.
#[derive(Debug, Clone)]
pub enum Candidate {
    /// A name taken directly from the registry.
    Registered(String),
    /// A marker-file path found by a filesystem scan.
    Scanned(PathBuf),
}

impl Candidate {
    /// Resolves this candidate to a loadable unit, or `None` if the registry
    /// holds nothing for it. A miss is expected, not an error.
    pub fn resolve(&self, registry: &SubjectRegistry) -> Option<ResolvedUnit> {
        match self {
            Self::Registered(name) => registry.try_load(name),
            Self::Scanned(path) => resolve_scanned(path, registry),
        }
    }
}

/// A candidate successfully mapped to an invocable, named unit.
#[derive(Debug, Clone)]
pub struct ResolvedUnit {
    qualified_name: String,
    construct: SubjectFactory,
}

impl ResolvedUnit {
    pub(crate) fn new(qualified_name: impl Into<String>, construct: SubjectFactory) -> Self {
        Self {
            qualified_name: qualified_name.into(),
            construct,
        }
    }

    /// The full dot-separated unit name.
    pub fn qualified_name(&self) -> &str {
        &self.qualified_name
    }

    /// The unqualified (last-segment) name used for selection.
    pub fn short_name(&self) -> &str {
        self.qualified_name
            .rsplit(NAMESPACE_SEPARATOR)
            .next()
            .unwrap_or(&self.qualified_name)
    }

    pub fn construct(&self) -> SubjectFactory {
        self.construct
    }
}

/// Enumerates every registered unit, lazily.
pub fn discover_registered(registry: &SubjectRegistry) -> impl Iterator<Item = ResolvedUnit> + '_ {
    registry.units()
}

/// Recursively scans `root` for unit marker files and resolves each against
/// the registry.
///
/// Marker files carry the [`UNIT_EXTENSION`]; module-declaration artifacts
/// are skipped. Paths that resolve to no registered unit are silently
/// dropped. A failure of the walk itself is fatal and yields no partial
/// results.
pub fn discover_scanned(
    root: impl AsRef<Path>,
    registry: &SubjectRegistry,
) -> Result<Vec<ResolvedUnit>, DiscoveryError> {
    let root = root.as_ref();
    let mut units = Vec::new();
    for entry in WalkDir::new(root) {
        let entry = entry.map_err(|e| DiscoveryError::new(root, e))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if !is_unit_file(path) {
            continue;
        }
        if let Some(unit) = Candidate::Scanned(path.to_path_buf()).resolve(registry) {
            units.push(unit);
        }
    }
    Ok(units)
}

/// Shrinking-prefix resolution of a marker-file path.
///
/// The depth of the scan root relative to the unit namespace root is not
/// known a priori, so the resolver trims leading path segments one at a time
/// and asks the registry for each remaining suffix, stopping at the first
/// loadable name. A path that never resolves is discarded: intermediate
/// prefixes are not valid unit names.
fn resolve_scanned(path: &Path, registry: &SubjectRegistry) -> Option<ResolvedUnit> {
    let stem = path.file_stem()?.to_str()?;
    let mut segments: Vec<&str> = path
        .parent()
        .into_iter()
        .flat_map(|parent| parent.iter())
        .filter_map(|segment| segment.to_str())
        .collect();
    segments.push(stem);

    for i in 0..segments.len() {
        let qualified = segments[i..].join(NAMESPACE_SEPARATOR);
        if let Some(unit) = registry.try_load(&qualified) {
            return Some(unit);
        }
    }
    None
}

/// Returns true for unit marker files that are not module declarations.
fn is_unit_file(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == UNIT_EXTENSION)
        && path
            .file_stem()
            .map_or(true, |stem| stem != MODULE_DECLARATION)
}
