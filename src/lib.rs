//! Sensei: a lightweight test harness with self-registering test subjects.
//!
//! Consuming projects implement [`TestSubject`] for each unit under test,
//! register a constructor for it in a [`SubjectRegistry`], and hand the
//! registry to [`cli::run`] from their own binary. The harness filters the
//! units by the user's selection, executes each entry point under failure
//! isolation, and reports `<succeeded>/<attempted> tests successful.` at the
//! end of the run.
//!
//! ```rust,no_run
//! use sensei::assert::assert_condition;
//! use sensei::{SubjectRegistry, TestFailure, TestSubject};
//!
//! #[derive(Default)]
//! struct CircleTests;
//!
//! impl TestSubject for CircleTests {
//!     fn run_all_tests(&mut self) -> Result<(), TestFailure> {
//!         assert_condition(2 + 2 == 4, "arithmetic broke")?;
//!         Ok(())
//!     }
//! }
//!
//! fn main() {
//!     let mut registry = SubjectRegistry::new();
//!     registry.register("geometry.CircleTests", || Box::new(CircleTests::default()));
//!     sensei::cli::run(&registry);
//! }
//! ```

pub mod assert;
pub mod cli;
pub mod discovery;
pub mod errors;
pub mod logging;
pub mod registry;
pub mod runner;
pub mod selection;
pub mod subject;

pub use crate::errors::{DiscoveryError, Fault, FaultKind, InfraError, TestFailure};
pub use crate::registry::SubjectRegistry;
pub use crate::selection::Selection;
pub use crate::subject::{SubjectFactory, TestSubject};
