//! Shared test-subject fixtures for the integration tests.
#![allow(dead_code)]

use sensei::assert::assert_condition;
use sensei::{TestFailure, TestSubject};

pub struct AlwaysPasses;

impl TestSubject for AlwaysPasses {
    fn run_all_tests(&mut self) -> Result<(), TestFailure> {
        assert_condition(true, "must never trip")?;
        Ok(())
    }
}

pub struct AlwaysFails;

impl TestSubject for AlwaysFails {
    fn run_all_tests(&mut self) -> Result<(), TestFailure> {
        assert_condition(false, "forced failure")?;
        Ok(())
    }
}

pub struct PanicsWhenRun;

impl TestSubject for PanicsWhenRun {
    fn run_all_tests(&mut self) -> Result<(), TestFailure> {
        panic!("entry point blew up");
    }
}

pub fn passing() -> Box<dyn TestSubject> {
    Box::new(AlwaysPasses)
}

pub fn failing() -> Box<dyn TestSubject> {
    Box::new(AlwaysFails)
}

pub fn panicking() -> Box<dyn TestSubject> {
    Box::new(PanicsWhenRun)
}

/// A registered constructor that itself panics.
pub fn broken_constructor() -> Box<dyn TestSubject> {
    panic!("no accessible constructor");
}
