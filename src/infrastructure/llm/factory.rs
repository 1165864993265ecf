use std::sync::Arc;
use std::time::Duration;

use super::OpenAiProvider;
use super::http_client::HttpClient;
use crate::config::JudgeConfig;
use crate::domain::{DomainError, LlmProvider};

/// Factory for creating LLM providers
#[derive(Debug)]
pub struct LlmProviderFactory;

impl LlmProviderFactory {
    /// Create the judging provider described by configuration
    pub fn create(config: &JudgeConfig) -> Result<Arc<dyn LlmProvider>, DomainError> {
        let api_key = config
            .api_key
            .as_deref()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                DomainError::configuration(
                    "judge.api_key is not set (use APP__JUDGE__API_KEY or config/local.toml)",
                )
            })?;

        if config.timeout_secs == 0 {
            return Err(DomainError::configuration(
                "judge.timeout_secs must be greater than 0",
            ));
        }

        let http_client = HttpClient::with_timeout(Duration::from_secs(config.timeout_secs))?;

        Ok(Arc::new(OpenAiProvider::with_base_url(
            http_client,
            api_key,
            &config.base_url,
        )))
    }
}
