//! Validated AI Tests
//!
//! LLM-judged test cases whose example strings are checked before the
//! judge is trusted with the real output:
//! - Cases pair an executor with a plain-language pass condition
//! - Pass and fail examples validate the condition against the judge
//! - An OpenAI-compatible chat model returns the JSON verdict

pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;
pub use domain::case::{Case, CaseBuilder, CaseInputs, CaseOutcome, Executor, ValidationResult};
pub use domain::{DomainError, Judge, Label, Verdict};
pub use infrastructure::judge::{LlmJudge, get_llm_json_response};
pub use infrastructure::services::ValidatedCasesRunner;
