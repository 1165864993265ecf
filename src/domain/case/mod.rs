//! Case domain - test scenario declarations, executors and results

mod entity;
mod executor;
mod prompt;
mod result;

pub use entity::{Case, CaseBuilder};
pub use executor::{CaseInputs, Executor};
pub(crate) use executor::value_text;
pub use prompt::{
    PROMPT_VERSION, VALIDATOR_PROMPT_TEMPLATE, build_full_prompt, build_judge_prompt,
};
pub use result::{CaseOutcome, ExampleOutcome, RunResult, RunSummary, ValidationResult};
