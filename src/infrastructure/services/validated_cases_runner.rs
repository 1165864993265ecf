//! Validated cases runner - validates examples, then judges real output

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::domain::DomainError;
use crate::domain::case::{Case, RunResult, ValidationResult};
use crate::domain::judge::Judge;

/// Validation phase result for one case
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub case_name: String,
    pub validation: ValidationResult,
}

/// Runs cases one after another against a single judge
///
/// The judge is always injected by the caller.
pub struct ValidatedCasesRunner<J: Judge + ?Sized> {
    cases: Vec<Case>,
    judge: Arc<J>,
}

impl<J: Judge + ?Sized> ValidatedCasesRunner<J> {
    pub fn new(cases: Vec<Case>, judge: Arc<J>) -> Self {
        Self { cases, judge }
    }

    pub fn cases(&self) -> &[Case] {
        &self.cases
    }

    /// Validate then run every case, in declaration order
    ///
    /// The first error aborts the run; no partial results are returned.
    pub async fn run(&self) -> Result<Vec<RunResult>, DomainError> {
        let mut results = Vec::with_capacity(self.cases.len());

        for (index, case) in self.cases.iter().enumerate() {
            let case_name = case.display_name(index);
            info!("Running case '{}'", case_name);

            let validation = case.validate(self.judge.as_ref()).await?;
            let outcome = case.run_case(self.judge.as_ref()).await?;

            info!(
                "Case '{}' finished: passed={}, has_failure={}",
                case_name,
                outcome.passed,
                validation.has_failure()
            );

            results.push(RunResult::new(case_name, validation, outcome));
        }

        Ok(results)
    }

    /// Run only the validation phase of every case
    pub async fn validate_all(&self) -> Result<Vec<ValidationReport>, DomainError> {
        let mut reports = Vec::with_capacity(self.cases.len());

        for (index, case) in self.cases.iter().enumerate() {
            let case_name = case.display_name(index);
            info!("Validating examples of case '{}'", case_name);

            let validation = case.validate(self.judge.as_ref()).await?;
            reports.push(ValidationReport {
                case_name,
                validation,
            });
        }

        Ok(reports)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::case::{Executor, RunSummary};
    use crate::domain::judge::{Label, MockJudge, Verdict};
    use crate::domain::llm::MockLlmProvider;
    use crate::infrastructure::judge::LlmJudge;

    const CONDITION: &str = "Chatbot should ask user to restart app";

    fn trouble_logging_in_case() -> Case {
        Case::builder()
            .name("trouble logging in")
            .executor(Executor::from_fn(|_| "Please restart your app".to_string()))
            .arg("User: I can't log in. App spins forever when I press login.")
            .condition(CONDITION)
            .pass_cases([
                "Chatbot: Please restart your app.",
                "Chatbot: This sounds frustrating. Please restart your app.",
            ])
            .fail_cases(["Chatbot: Please check your internet connection."])
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn test_end_to_end_with_passing_judge() {
        let provider = Arc::new(
            MockLlmProvider::new("mock").with_content(r#"{"result":"PASS","explanation":"matches"}"#),
        );
        let judge = Arc::new(LlmJudge::with_default_model(provider.clone()));
        let case = Case::builder()
            .executor(Executor::from_async_fn(|_| async {
                "Please restart your app".to_string()
            }))
            .condition(CONDITION)
            .pass_case("Chatbot: Please restart your app.")
            .build()
            .unwrap();

        let (passed, explanation) = case.run_case(judge.as_ref()).await.unwrap().into_pair();
        assert!(passed);
        assert_eq!(explanation, "matches");

        let validation = case.validate(judge.as_ref()).await.unwrap();
        assert!(!validation.has_failure());

        let runner = ValidatedCasesRunner::new(vec![case], judge);
        let results = runner.run().await.unwrap();

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].case_name, "case_0");
        assert!(results[0].is_success());
        assert_eq!(results[0].outcome.output, "Please restart your app");

        // run_case + validate, then validate + run_case again through the runner
        assert_eq!(provider.call_count(), 4);
        let (_, last_request) = provider.calls().pop().unwrap();
        assert!(last_request.messages[0]
            .content_text()
            .ends_with("Input: Please restart your app"));
    }

    #[tokio::test]
    async fn test_run_keeps_case_order() {
        let second = Case::builder()
            .name("second")
            .executor(Executor::ready("Have you tried reinstalling the app?"))
            .condition(CONDITION)
            .build()
            .unwrap();

        let mut judge = MockJudge::new();
        judge.expect_verdict().returning(|prompt| {
            if prompt.ends_with("reinstalling the app?") {
                Ok(Verdict::fail("asks to reinstall"))
            } else if prompt.ends_with("internet connection.") {
                Ok(Verdict::fail("asks about connectivity"))
            } else {
                Ok(Verdict::pass("asks to restart"))
            }
        });

        let runner = ValidatedCasesRunner::new(
            vec![trouble_logging_in_case(), second],
            Arc::new(judge),
        );
        let results = runner.run().await.unwrap();

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].case_name, "trouble logging in");
        assert!(results[0].is_success());
        assert_eq!(results[1].case_name, "second");
        assert!(!results[1].outcome.passed);
        assert_eq!(results[1].outcome.explanation, "asks to reinstall");

        let summary = RunSummary::from_results(&results);
        assert_eq!(summary.passed, 1);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.validation_failures, 0);
    }

    #[tokio::test]
    async fn test_run_surfaces_validation_disagreement() {
        let mut judge = MockJudge::new();
        judge
            .expect_verdict()
            .returning(|_| Ok(Verdict::pass("everything matches")));

        let runner = ValidatedCasesRunner::new(vec![trouble_logging_in_case()], Arc::new(judge));
        let results = runner.run().await.unwrap();

        let validation = &results[0].validation;
        assert!(validation.has_failure());
        let failure = validation.failures().next().unwrap();
        assert_eq!(failure.text, "Chatbot: Please check your internet connection.");
        assert_eq!(failure.label, Label::Fail);
        assert!(results[0].outcome.passed);
        assert!(!results[0].is_success());
    }

    #[tokio::test]
    async fn test_run_aborts_on_first_error() {
        let provider = Arc::new(
            MockLlmProvider::new("mock")
                .with_contents([r#"{"result": "PASS", "explanation": "ok"}"#])
                .with_queued_error("connection reset"),
        );
        let judge = Arc::new(LlmJudge::with_default_model(provider.clone()));

        let runner = ValidatedCasesRunner::new(
            vec![trouble_logging_in_case(), trouble_logging_in_case()],
            judge,
        );
        let err = runner.run().await.unwrap_err();

        assert!(matches!(err, DomainError::Provider { .. }));
        assert_eq!(provider.call_count(), 2);
    }

    #[tokio::test]
    async fn test_validate_all_skips_executor() {
        let case = Case::builder()
            .executor(Executor::try_from_fn(|_| {
                Err(DomainError::executor("must not run"))
            }))
            .condition(CONDITION)
            .pass_case("Chatbot: Please restart your app.")
            .build()
            .unwrap();

        let mut judge = MockJudge::new();
        judge
            .expect_verdict()
            .times(1)
            .returning(|_| Ok(Verdict::pass("ok")));

        let runner = ValidatedCasesRunner::new(vec![case], Arc::new(judge));
        let reports = runner.validate_all().await.unwrap();

        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].case_name, "case_0");
        assert!(!reports[0].validation.has_failure());
    }

    #[tokio::test]
    async fn test_empty_runner() {
        let mut judge = MockJudge::new();
        judge.expect_verdict().never();

        let runner = ValidatedCasesRunner::new(Vec::new(), Arc::new(judge));
        assert!(runner.run().await.unwrap().is_empty());
        assert!(runner.cases().is_empty());
    }
}
