use thiserror::Error;

/// Message carried by [`DomainError::InvalidExecutor`]
pub const INVALID_EXECUTOR_MESSAGE: &str = "expected a callable or an awaitable executor";

/// Core domain errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Provider error: {provider} - {message}")]
    Provider { provider: String, message: String },

    #[error("Invalid judge response: {message}")]
    JudgeResponse { message: String },

    #[error("Invalid executor: {message}")]
    InvalidExecutor { message: String },

    #[error("Executor failed: {message}")]
    Executor { message: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    pub fn provider(provider: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Provider {
            provider: provider.into(),
            message: message.into(),
        }
    }

    pub fn judge_response(message: impl Into<String>) -> Self {
        Self::JudgeResponse {
            message: message.into(),
        }
    }

    /// The executor is neither callable nor awaitable
    pub fn invalid_executor() -> Self {
        Self::InvalidExecutor {
            message: INVALID_EXECUTOR_MESSAGE.to_string(),
        }
    }

    pub fn executor(message: impl Into<String>) -> Self {
        Self::Executor {
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Check if this error was raised for an unusable executor
    pub fn is_invalid_executor(&self) -> bool {
        matches!(self, Self::InvalidExecutor { .. })
    }
}
