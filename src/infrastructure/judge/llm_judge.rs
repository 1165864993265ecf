//! LLM judge
//!
//! Sends one JSON-constrained request per judged string and reads the
//! `result` / `explanation` pair out of the reply.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, warn};

use crate::domain::judge::{Judge, Label, Verdict};
use crate::domain::llm::{LlmProvider, LlmRequest};
use crate::domain::DomainError;

/// Model used when none is configured
pub const DEFAULT_JUDGE_MODEL: &str = "gpt-4o";

/// Parsed judge reply
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JudgeReply {
    /// `PASS` or `FAIL`, compared case-insensitively
    pub result: String,
    explanation: Option<String>,
}

impl JudgeReply {
    pub fn explanation(&self) -> &str {
        self.explanation.as_deref().unwrap_or_default()
    }

    pub fn label(&self) -> Label {
        Label::from_result_field(&self.result)
    }

    pub fn into_verdict(self) -> Verdict {
        let passed = self.label().is_pass();
        Verdict::new(passed, self.explanation.unwrap_or_default())
    }
}

/// Send `prompt` as a single system message and parse the JSON reply
///
/// Exactly one request is made. A reply that is not a JSON object, or that
/// has no `result` key, is a [`DomainError::JudgeResponse`].
pub async fn get_llm_json_response<P>(
    provider: &P,
    model: &str,
    prompt: &str,
) -> Result<JudgeReply, DomainError>
where
    P: LlmProvider + ?Sized,
{
    let request = LlmRequest::builder().system(prompt).json_object().build();

    let response = provider.chat(model, request).await?;
    parse_reply(response.content())
}

fn parse_reply(content: &str) -> Result<JudgeReply, DomainError> {
    let value: Value = serde_json::from_str(content.trim()).map_err(|e| {
        warn!("Judge reply is not JSON: {} - Reply: {}", e, content);
        DomainError::judge_response(format!("reply is not valid JSON: {}", e))
    })?;

    let Value::Object(object) = value else {
        return Err(DomainError::judge_response("reply is not a JSON object"));
    };

    let Some(result) = object.get("result") else {
        warn!("Judge reply has no 'result' key: {}", content);
        return Err(DomainError::judge_response("reply has no 'result' key"));
    };

    // lowercase key wins when the model sends both spellings
    let explanation = object
        .get("explanation")
        .or_else(|| object.get("Explanation"))
        .filter(|v| !v.is_null())
        .map(field_text);

    Ok(JudgeReply {
        result: field_text(result),
        explanation,
    })
}

fn field_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Judge backed by an LLM provider and a fixed model
#[derive(Debug)]
pub struct LlmJudge<P>
where
    P: LlmProvider + ?Sized,
{
    provider: Arc<P>,
    model: String,
}

impl<P: LlmProvider + ?Sized> LlmJudge<P> {
    pub fn new(provider: Arc<P>, model: impl Into<String>) -> Self {
        Self {
            provider,
            model: model.into(),
        }
    }

    /// Create a judge using [`DEFAULT_JUDGE_MODEL`]
    pub fn with_default_model(provider: Arc<P>) -> Self {
        Self::new(provider, DEFAULT_JUDGE_MODEL)
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }
}

#[async_trait]
impl<P: LlmProvider + ?Sized> Judge for LlmJudge<P> {
    async fn verdict(&self, prompt: &str) -> Result<Verdict, DomainError> {
        debug!(
            "Judging with {} (model: {}, prompt: {} bytes)",
            self.provider.provider_name(),
            self.model,
            prompt.len()
        );

        let reply = get_llm_json_response(self.provider.as_ref(), &self.model, prompt).await?;

        debug!("Judge replied {}: {}", reply.label(), reply.explanation());

        Ok(reply.into_verdict())
    }
}
