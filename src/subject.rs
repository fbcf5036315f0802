//! The contract every test subject fulfills.

use crate::errors::TestFailure;

/// A unit of code that can run a self-contained battery of checks.
///
/// Implementors report failed expectations through the assertion vocabulary
/// in [`crate::assert`], propagated with `?`. The harness constructs one
/// fresh instance per run through the constructor registered alongside the
/// subject's name.
pub trait TestSubject {
    /// Run all predefined tests on this subject.
    ///
    /// Returning `Err` marks the unit as failed; panicking marks it as
    /// broken. Neither aborts the surrounding run.
    fn run_all_tests(&mut self) -> Result<(), TestFailure>;
}

/// A zero-argument constructor for a registered test subject.
///
/// A plain function pointer rather than a boxed closure: registration is a
/// static wiring step, and `Copy` lets resolved units own their handle.
pub type SubjectFactory = fn() -> Box<dyn TestSubject>;
