//! LLM-backed judge

mod llm_judge;

pub use llm_judge::{DEFAULT_JUDGE_MODEL, JudgeReply, LlmJudge, get_llm_json_response};
