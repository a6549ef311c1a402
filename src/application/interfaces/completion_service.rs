use async_trait::async_trait;

use crate::domain::{Credential, DomainError};

/// Sends a single user-role prompt to a text-completion endpoint and returns
/// the generated text.
///
/// Implementors own transport, serialization and vendor-specific details.
/// Every failure (rejected credential, network error, non-success status,
/// malformed or empty response) surfaces as [`DomainError::ServiceError`].
#[async_trait]
pub trait CompletionService: Send + Sync {
    /// Model identifier sent with every request.
    fn model_name(&self) -> &str;

    async fn complete(&self, credential: &Credential, prompt: &str) -> Result<String, DomainError>;
}
