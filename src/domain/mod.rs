//! Domain layer - Core business logic and entities

pub mod case;
pub mod error;
pub mod judge;
pub mod llm;

pub use case::{Case, CaseBuilder, CaseInputs, Executor};
pub use error::DomainError;
pub use judge::{Judge, Label, Verdict};
pub use llm::{
    FinishReason, LlmProvider, LlmRequest, LlmRequestBuilder, LlmResponse, Message, MessageRole,
    Usage,
};
