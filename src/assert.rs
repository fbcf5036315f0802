//! The assertion vocabulary test subjects call into.
//!
//! All assertions are synchronous and side-effect-free apart from control
//! transfer on failure: each returns `Result<(), TestFailure>` so a failing
//! check propagates out of `run_all_tests` with `?`. The macro forms defer
//! message formatting to the failure path, so a passing assertion never pays
//! the formatting cost.

use crate::errors::{Fault, FaultKind, TestFailure};

/// Asserts that `holds` is true, failing with `message` otherwise.
pub fn assert_condition(holds: bool, message: impl Into<String>) -> Result<(), TestFailure> {
    if holds {
        Ok(())
    } else {
        Err(TestFailure::new(message))
    }
}

/// The logical dual of [`assert_condition`]: fails with `message` when
/// `holds` is true.
pub fn assert_fails_when(holds: bool, message: impl Into<String>) -> Result<(), TestFailure> {
    assert_condition(!holds, message)
}

/// Asserts that `action` raises a fault accepted by `expected_kind`.
///
/// The action is invoked exactly once. Three outcomes:
///
/// - the action raises a fault whose kind is `expected_kind` or one of its
///   declared subkinds: success;
/// - the action raises a fault of any other kind: failure carrying `message`
///   with the unexpected fault attached as cause;
/// - the action completes without raising: failure carrying `message` alone.
///
/// The two failure shapes are distinguishable through
/// [`TestFailure::cause`].
pub fn assert_throws<F>(
    action: F,
    expected_kind: FaultKind,
    message: impl Into<String>,
) -> Result<(), TestFailure>
where
    F: FnOnce() -> Result<(), Fault>,
{
    match action() {
        Err(fault) if expected_kind.accepts(fault.kind()) => Ok(()),
        Err(fault) => Err(TestFailure::with_cause(message, fault)),
        Ok(()) => Err(TestFailure::new(message)),
    }
}

/// [`assert_condition`] with a format-template message, built only on the
/// failure path.
///
/// Evaluates to `Result<(), TestFailure>`; use with `?`.
#[macro_export]
macro_rules! assert_condition {
    ($holds:expr, $($message:tt)+) => {
        if $holds {
            Ok::<(), $crate::errors::TestFailure>(())
        } else {
            Err($crate::errors::TestFailure::new(format!($($message)+)))
        }
    };
}

/// [`assert_fails_when`] with a format-template message, built only on the
/// failure path.
#[macro_export]
macro_rules! assert_fails_when {
    ($holds:expr, $($message:tt)+) => {
        $crate::assert_condition!(!$holds, $($message)+)
    };
}

/// [`assert_throws`] with a format-template message, built only on the
/// failure path.
#[macro_export]
macro_rules! assert_throws {
    ($action:expr, $expected_kind:expr, $($message:tt)+) => {{
        // Pin the action's error type so callers may pass closures whose
        // return type is otherwise unconstrained, such as `|| Ok(())`.
        let result: ::core::result::Result<(), $crate::errors::Fault> = ($action)();
        match result {
            Err(fault) if $expected_kind.accepts(fault.kind()) => {
                Ok::<(), $crate::errors::TestFailure>(())
            }
            Err(fault) => Err($crate::errors::TestFailure::with_cause(
                format!($($message)+),
                fault,
            )),
            Ok(()) => Err($crate::errors::TestFailure::new(format!($($message)+))),
        }
    }};
}
