//! Judge trait

use async_trait::async_trait;

use super::Verdict;
use crate::domain::DomainError;

#[cfg(test)]
use mockall::automock;

/// Renders a PASS/FAIL verdict for a fully assembled prompt
#[cfg_attr(test, automock)]
#[async_trait]
pub trait Judge: Send + Sync {
    /// Ask for a verdict; one external call per invocation
    async fn verdict(&self, prompt: &str) -> Result<Verdict, DomainError>;
}
