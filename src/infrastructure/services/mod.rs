//! Infrastructure services

mod validated_cases_runner;

pub use validated_cases_runner::{ValidatedCasesRunner, ValidationReport};
