//! Case entity - one declared test scenario

use serde_json::{Map, Value};
use tracing::{debug, info, warn};

use super::prompt::{build_full_prompt, build_judge_prompt};
use super::result::{CaseOutcome, ExampleOutcome, ValidationResult};
use super::{CaseInputs, Executor};
use crate::domain::DomainError;
use crate::domain::judge::{Judge, Label};

/// A test scenario: executor, inputs, pass condition and example strings
///
/// Cases are immutable once built. The prompt prefix is rendered at
/// construction since the condition cannot change afterwards.
#[derive(Debug, Clone)]
pub struct Case {
    name: Option<String>,
    executor: Executor,
    inputs: CaseInputs,
    case_pass_condition: String,
    pass_cases: Vec<String>,
    fail_cases: Vec<String>,
    full_prompt: String,
}

impl Case {
    pub fn new(
        executor: Executor,
        input_args: Vec<Value>,
        input_kwargs: Map<String, Value>,
        case_pass_condition: impl Into<String>,
        pass_cases: Vec<String>,
        fail_cases: Vec<String>,
    ) -> Result<Self, DomainError> {
        Self::builder()
            .executor(executor)
            .inputs(CaseInputs::new(input_args, input_kwargs))
            .condition(case_pass_condition)
            .pass_cases(pass_cases)
            .fail_cases(fail_cases)
            .build()
    }

    pub fn builder() -> CaseBuilder {
        CaseBuilder::new()
    }

    // Getters
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn executor(&self) -> &Executor {
        &self.executor
    }

    pub fn inputs(&self) -> &CaseInputs {
        &self.inputs
    }

    pub fn case_pass_condition(&self) -> &str {
        &self.case_pass_condition
    }

    pub fn pass_cases(&self) -> &[String] {
        &self.pass_cases
    }

    pub fn fail_cases(&self) -> &[String] {
        &self.fail_cases
    }

    /// Instruction prefix with the pass condition filled in
    pub fn full_prompt(&self) -> &str {
        &self.full_prompt
    }

    /// Name used in reports, falling back to the position in the run
    pub fn display_name(&self, index: usize) -> String {
        self.name
            .clone()
            .unwrap_or_else(|| format!("case_{}", index))
    }

    fn judge_prompt(&self, input: &str) -> String {
        build_judge_prompt(&self.case_pass_condition, input)
    }

    /// Check every example string against the pass condition
    ///
    /// Pass cases are expected to be judged PASS, fail cases FAIL. An
    /// example the judge disagrees with is recorded with label FAIL and
    /// sets `has_failure`; it is not an error.
    pub async fn validate<J>(&self, judge: &J) -> Result<ValidationResult, DomainError>
    where
        J: Judge + ?Sized,
    {
        let examples = self
            .pass_cases
            .iter()
            .map(|text| (text, Label::Pass))
            .chain(self.fail_cases.iter().map(|text| (text, Label::Fail)));

        let mut result = ValidationResult::new();

        for (text, expected) in examples {
            let verdict = judge.verdict(&self.judge_prompt(text)).await?;
            let outcome = ExampleOutcome::judged(text.as_str(), expected, verdict);

            if outcome.is_failure() {
                warn!(
                    "Example judged against its declared label {}: {:?} ({})",
                    expected, outcome.text, outcome.explanation
                );
            } else {
                debug!("Example behaved as expected: {:?}", outcome.text);
            }

            result.push(outcome);
        }

        Ok(result)
    }

    /// Run the executor and judge its output against the pass condition
    pub async fn run_case<J>(&self, judge: &J) -> Result<CaseOutcome, DomainError>
    where
        J: Judge + ?Sized,
    {
        debug!("Running {} executor", self.executor.kind());

        let output = self.executor.execute(&self.inputs).await?;
        let verdict = judge.verdict(&self.judge_prompt(&output)).await?;

        info!(
            "Executor output judged {}: {}",
            verdict.label(),
            verdict.explanation
        );

        Ok(CaseOutcome::new(verdict, output))
    }
}

/// Builder for Case
#[derive(Debug, Default)]
pub struct CaseBuilder {
    name: Option<String>,
    executor: Option<Executor>,
    inputs: CaseInputs,
    case_pass_condition: String,
    pass_cases: Vec<String>,
    fail_cases: Vec<String>,
}

impl CaseBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn executor(mut self, executor: Executor) -> Self {
        self.executor = Some(executor);
        self
    }

    pub fn inputs(mut self, inputs: CaseInputs) -> Self {
        self.inputs = inputs;
        self
    }

    pub fn arg(mut self, value: impl Into<Value>) -> Self {
        self.inputs.args.push(value.into());
        self
    }

    pub fn kwarg(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.inputs.kwargs.insert(name.into(), value.into());
        self
    }

    pub fn condition(mut self, condition: impl Into<String>) -> Self {
        self.case_pass_condition = condition.into();
        self
    }

    pub fn pass_case(mut self, example: impl Into<String>) -> Self {
        self.pass_cases.push(example.into());
        self
    }

    pub fn pass_cases<I, S>(mut self, examples: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.pass_cases.extend(examples.into_iter().map(Into::into));
        self
    }

    pub fn fail_case(mut self, example: impl Into<String>) -> Self {
        self.fail_cases.push(example.into());
        self
    }

    pub fn fail_cases<I, S>(mut self, examples: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fail_cases.extend(examples.into_iter().map(Into::into));
        self
    }

    /// Fails with `InvalidExecutor` when no executor was supplied
    pub fn build(self) -> Result<Case, DomainError> {
        let executor = self.executor.ok_or_else(DomainError::invalid_executor)?;

        let full_prompt = build_full_prompt(&self.case_pass_condition);

        Ok(Case {
            name: self.name,
            executor,
            inputs: self.inputs,
            case_pass_condition: self.case_pass_condition,
            pass_cases: self.pass_cases,
            fail_cases: self.fail_cases,
            full_prompt,
        })
    }
}
