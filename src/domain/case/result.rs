//! Validation and run result types

use serde::{Deserialize, Serialize};

use crate::domain::judge::{Label, Verdict};

/// Observed outcome for one example string
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExampleOutcome {
    /// The example text
    pub text: String,
    /// Label the example was declared with
    pub expected: Label,
    /// PASS when the judge agreed with the declared label
    pub label: Label,
    /// Judge explanation
    pub explanation: String,
}

impl ExampleOutcome {
    /// Compare a verdict against the declared polarity of an example
    pub fn judged(text: impl Into<String>, expected: Label, verdict: Verdict) -> Self {
        let agreed = verdict.label() == expected;
        Self {
            text: text.into(),
            expected,
            label: Label::from_passed(agreed),
            explanation: verdict.explanation,
        }
    }

    pub fn is_failure(&self) -> bool {
        !self.label.is_pass()
    }
}

/// Result of checking every example string of a case
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    examples: Vec<ExampleOutcome>,
    has_failure: bool,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, outcome: ExampleOutcome) {
        self.has_failure |= outcome.is_failure();
        self.examples.push(outcome);
    }

    pub fn examples(&self) -> &[ExampleOutcome] {
        &self.examples
    }

    pub fn has_failure(&self) -> bool {
        self.has_failure
    }

    /// Examples the judge disagreed with
    pub fn failures(&self) -> impl Iterator<Item = &ExampleOutcome> {
        self.examples.iter().filter(|e| e.is_failure())
    }

    pub fn failure_count(&self) -> usize {
        self.failures().count()
    }
}

impl FromIterator<ExampleOutcome> for ValidationResult {
    fn from_iter<I: IntoIterator<Item = ExampleOutcome>>(iter: I) -> Self {
        let mut result = Self::new();
        for outcome in iter {
            result.push(outcome);
        }
        result
    }
}

/// Judgement of the executor's real output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseOutcome {
    pub passed: bool,
    pub explanation: String,
    /// Text produced by the executor
    pub output: String,
}

impl CaseOutcome {
    pub fn new(verdict: Verdict, output: impl Into<String>) -> Self {
        Self {
            passed: verdict.passed,
            explanation: verdict.explanation,
            output: output.into(),
        }
    }

    pub fn into_pair(self) -> (bool, String) {
        (self.passed, self.explanation)
    }
}

/// Everything produced for one case by a full run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunResult {
    pub case_name: String,
    pub validation: ValidationResult,
    pub outcome: CaseOutcome,
}

impl RunResult {
    pub fn new(
        case_name: impl Into<String>,
        validation: ValidationResult,
        outcome: CaseOutcome,
    ) -> Self {
        Self {
            case_name: case_name.into(),
            validation,
            outcome,
        }
    }

    /// Examples all behaved and the real output passed
    pub fn is_success(&self) -> bool {
        !self.validation.has_failure() && self.outcome.passed
    }
}

/// Totals over a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub validation_failures: usize,
}

impl RunSummary {
    pub fn from_results(results: &[RunResult]) -> Self {
        let passed = results.iter().filter(|r| r.outcome.passed).count();
        Self {
            total: results.len(),
            passed,
            failed: results.len() - passed,
            validation_failures: results
                .iter()
                .filter(|r| r.validation.has_failure())
                .count(),
        }
    }

    pub fn all_passed(&self) -> bool {
        self.failed == 0 && self.validation_failures == 0
    }
}
