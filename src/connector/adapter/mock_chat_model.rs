use async_trait::async_trait;
use tracing::debug;

use crate::connector::adapter::ChatModel;
use crate::domain::{ChatMessage, DomainError, ModelOutput};

/// A deterministic, offline [`ChatModel`] for development and tests.
///
/// Without a canned reply it echoes the latest user message; with one it
/// always returns that fixed text. Wired in with the `--mock-model` flag so
/// the full turn flow can be exercised without an API key or network.
pub struct MockChatModel {
    reply: Option<String>,
}

impl MockChatModel {
    pub fn new() -> Self {
        Self { reply: None }
    }

    /// Always return `reply`, regardless of input.
    pub fn with_reply(reply: impl Into<String>) -> Self {
        Self {
            reply: Some(reply.into()),
        }
    }
}

impl Default for MockChatModel {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChatModel for MockChatModel {
    async fn generate(
        &self,
        _system: &str,
        conversation: &[ChatMessage],
    ) -> Result<ModelOutput, DomainError> {
        let text = match &self.reply {
            Some(fixed) => fixed.clone(),
            None => {
                let latest = conversation
                    .iter()
                    .rev()
                    .find(|msg| msg.is_user())
                    .map(|msg| msg.content())
                    .unwrap_or_default();
                format!("You said: {latest}")
            }
        };

        debug!("MockChatModel: returning canned reply");
        Ok(ModelOutput::from_text(text))
    }
}
