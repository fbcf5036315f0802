//! The harness error taxonomy.
//!
//! Four error families with strictly separated roles:
//!
//! - [`TestFailure`]: a test subject's expectation was not met. Recovered at
//!   the per-unit boundary; never aborts a run.
//! - [`InfraError`]: the harness could not even run a would-be test subject.
//!   Also recovered per unit, but reported distinctly so operators can tell
//!   "test failed" from "test could not run".
//! - [`DiscoveryError`]: the filesystem walk itself failed. Fatal to the
//!   entire run; no partial statistics are reported.
//! - [`Fault`]/[`FaultKind`]: the tagged error vocabulary fallible actions
//!   raise inside `assert_throws` checks.

use std::path::PathBuf;

use thiserror::Error;

// ============================================================================
// ASSERTION FAILURES
// ============================================================================

/// The distinguished error a failed assertion raises.
///
/// Carries a human-readable message and, for expected-fault assertions that
/// observed a fault of the wrong kind, the unexpected fault as its cause.
/// The execution engine recognizes this type specifically and classifies it
/// apart from all other failures.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct TestFailure {
    message: String,
    #[source]
    cause: Option<Fault>,
}

impl TestFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            cause: None,
        }
    }

    /// A failure caused by a fault of an unexpected kind.
    pub fn with_cause(message: impl Into<String>, cause: Fault) -> Self {
        Self {
            message: message.into(),
            cause: Some(cause),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// The unexpected fault, if this failure wraps one. `None` for plain
    /// condition failures and for the "raised nothing" case of
    /// `assert_throws`.
    pub fn cause(&self) -> Option<&Fault> {
        self.cause.as_ref()
    }
}

// ============================================================================
// FAULTS - the error vocabulary of code under test
// ============================================================================

/// An error raised by a fallible action under test.
#[derive(Debug, Error)]
#[error("{kind} fault: {message}")]
pub struct Fault {
    kind: FaultKind,
    message: String,
}

impl Fault {
    pub fn new(kind: FaultKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn kind(&self) -> FaultKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// The kinds a [`Fault`] can carry, with an explicit subkind relation.
///
/// `Any` is the root of the hierarchy; `Range` and `Type` are declared
/// subkinds of `Validation`. Expected-fault assertions accept a raised kind
/// iff it equals the expected kind or descends from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaultKind {
    Any,
    Io,
    Parse,
    Validation,
    Range,
    Type,
    Internal,
}

impl FaultKind {
    /// The declared parent kind, `None` only for the root.
    const fn parent(self) -> Option<FaultKind> {
        match self {
            Self::Any => None,
            Self::Io | Self::Parse | Self::Validation | Self::Internal => Some(Self::Any),
            Self::Range | Self::Type => Some(Self::Validation),
        }
    }

    /// Returns true if a fault of kind `raised` satisfies an expectation of
    /// `self`, walking the declared parent chain of `raised`.
    pub fn accepts(self, raised: FaultKind) -> bool {
        let mut current = Some(raised);
        while let Some(kind) = current {
            if kind == self {
                return true;
            }
            current = kind.parent();
        }
        false
    }
}

impl std::fmt::Display for FaultKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Any => "any",
            Self::Io => "io",
            Self::Parse => "parse",
            Self::Validation => "validation",
            Self::Range => "range",
            Self::Type => "type",
            Self::Internal => "internal",
        };
        f.write_str(name)
    }
}

// ============================================================================
// HARNESS-LEVEL ERRORS
// ============================================================================

/// The harness failed to instantiate or invoke a test subject.
///
/// Construction and invocation panics are kept apart so a broken constructor
/// reads differently from a test body that panicked outside an assertion.
#[derive(Debug, Error)]
pub enum InfraError {
    #[error("constructing the test subject panicked: {0}")]
    Construction(String),
    #[error("the test subject panicked outside an assertion: {0}")]
    Invocation(String),
}

/// The filesystem walk of a scanned discovery failed. Run-fatal.
#[derive(Debug, Error)]
#[error("failed to walk '{}' for unit files", .root.display())]
pub struct DiscoveryError {
    root: PathBuf,
    #[source]
    source: walkdir::Error,
}

impl DiscoveryError {
    pub(crate) fn new(root: impl Into<PathBuf>, source: walkdir::Error) -> Self {
        Self {
            root: root.into(),
            source,
        }
    }

    pub fn root(&self) -> &std::path::Path {
        &self.root
    }
}

/// Log output could not be opened. Non-fatal: the run proceeds unlogged.
#[derive(Debug, Error)]
#[error("could not open log output under '{}'", .folder.display())]
pub struct LogError {
    folder: PathBuf,
    #[source]
    source: std::io::Error,
}

impl LogError {
    pub(crate) fn new(folder: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self {
            folder: folder.into(),
            source,
        }
    }
}
