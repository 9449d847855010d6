use async_trait::async_trait;

use crate::domain::{ChatMessage, DomainError, ModelOutput};

/// An interface for sending a system instruction plus an ordered
/// conversation to an LLM and receiving its structured reply.
///
/// Implementors encapsulate transport, serialization, and vendor-specific
/// API details. Consumers (e.g. [`super::LlmChatPipeline`]) remain decoupled
/// from any particular provider or HTTP client library.
#[async_trait]
pub trait ChatModel: Send + Sync {
    /// Send the `system` instruction and `conversation` (ending with the
    /// current user turn) and return the model's reply parts.
    async fn generate(
        &self,
        system: &str,
        conversation: &[ChatMessage],
    ) -> Result<ModelOutput, DomainError>;
}
