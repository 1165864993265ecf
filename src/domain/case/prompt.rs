//! Judge prompt template
//!
//! The template is versioned so that verdicts stay reproducible: any change
//! to its wording must bump [`PROMPT_VERSION`].

/// Version of [`VALIDATOR_PROMPT_TEMPLATE`]
pub const PROMPT_VERSION: &str = "2";

/// Placeholder replaced by the case pass condition
const DESCRIPTION_PLACEHOLDER: &str = "${description}";

/// Instructions sent to the judge ahead of the judged input
pub const VALIDATOR_PROMPT_TEMPLATE: &str = r#"You are given an input and a description that may describe this input.
Your goal is to determine if the input matches the description.
Judge the meaning of the input rather than its exact wording. A paraphrase that conveys what the description asks for matches it.
An input written in a different language than the description does not match, unless the description explicitly allows other languages.

Respond with exactly one JSON object and nothing else.
If the input matches, respond with {"result": "PASS", "explanation": "..."}.
If it does not, respond with {"result": "FAIL", "explanation": "..."}.

Description: ${description}
Input: "#;

/// Render the instruction prefix for a pass condition
///
/// The returned text ends right where the judged input must be appended.
pub fn build_full_prompt(case_pass_condition: &str) -> String {
    VALIDATOR_PROMPT_TEMPLATE.replacen(DESCRIPTION_PLACEHOLDER, case_pass_condition, 1)
}

/// Render the complete prompt for one judged input
pub fn build_judge_prompt(case_pass_condition: &str, input: &str) -> String {
    let mut prompt = build_full_prompt(case_pass_condition);
    prompt.push_str(input);
    prompt
}
