use std::sync::Arc;

use crate::application::ChatPipeline;
use crate::domain::{ChatMessage, ConversationTurn, DomainError, InvocationBundle};

/// A thin adapter between the UI chat history and the pipeline.
///
/// Stateless except for the pipeline handle: each call converts the UI
/// history into pipeline-native messages, bundles it with the latest user
/// text, and delegates to [`ChatPipeline::invoke`].
#[derive(Clone)]
pub struct RespondUseCase {
    pipeline: Arc<dyn ChatPipeline>,
}

impl RespondUseCase {
    pub fn new(pipeline: Arc<dyn ChatPipeline>) -> Self {
        Self { pipeline }
    }

    /// Convert UI history into pipeline-native messages.
    ///
    /// Order is preserved. Turns whose role is neither `user` nor
    /// `assistant` are skipped, so the output is never longer than the
    /// input and the conversion has no failure modes.
    pub fn convert_history(turns: &[ConversationTurn]) -> Vec<ChatMessage> {
        turns
            .iter()
            .filter_map(|turn| match turn.role() {
                "user" => Some(ChatMessage::user(turn.content())),
                "assistant" => Some(ChatMessage::assistant(turn.content())),
                _ => None,
            })
            .collect()
    }

    /// Run one conversational turn and return the assistant's reply.
    ///
    /// Side effect: one call to the underlying model service. Whatever the
    /// pipeline raises is propagated unmodified — no translation, no retry,
    /// no fallback reply.
    pub async fn execute(
        &self,
        user_text: &str,
        turns: &[ConversationTurn],
    ) -> Result<String, DomainError> {
        let history = Self::convert_history(turns);
        let bundle = InvocationBundle::new(user_text, history);
        self.pipeline.invoke(&bundle).await
    }
}
