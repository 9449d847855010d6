use std::sync::Arc;

use async_trait::async_trait;

use crate::application::ChatPipeline;
use crate::connector::adapter::{
    ChatModel, GeminiClient, PromptTemplate, DEFAULT_MODEL, DEFAULT_TEMPERATURE,
};
use crate::domain::{DomainError, InvocationBundle, ModelOutput, SYSTEM_PROMPT};

/// The end-to-end pipeline: prompt template → chat model → text extraction.
///
/// Assembled once at application start; the composition is static and each
/// invocation is an independent call to the model with no caching, retries,
/// or streaming.
pub struct LlmChatPipeline {
    template: PromptTemplate,
    model: Arc<dyn ChatModel>,
}

impl std::fmt::Debug for LlmChatPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LlmChatPipeline")
            .field("template", &self.template)
            .field("model", &"Arc<dyn ChatModel>")
            .finish()
    }
}

impl LlmChatPipeline {
    /// Compose the pipeline around `model` with the persona template.
    pub fn new(model: Arc<dyn ChatModel>) -> Self {
        Self {
            template: PromptTemplate::new(SYSTEM_PROMPT),
            model,
        }
    }

    pub fn with_template(model: Arc<dyn ChatModel>, template: PromptTemplate) -> Self {
        Self { template, model }
    }

    /// Compose the pipeline around the default Gemini model, configured from
    /// the environment. Fails with a configuration error when the API key is
    /// absent, before any network attempt.
    pub fn from_env() -> Result<Self, DomainError> {
        let model = GeminiClient::from_env(DEFAULT_MODEL, DEFAULT_TEMPERATURE)?;
        Ok(Self::new(Arc::new(model)))
    }

    /// The parser stage: reduce the model's structured reply to plain text.
    ///
    /// Parts are concatenated in order; an output with no text parts means
    /// the model returned nothing extractable.
    fn extract_text(output: &ModelOutput) -> Result<String, DomainError> {
        if output.is_empty() {
            return Err(DomainError::parse("model reply contained no text"));
        }
        Ok(output.parts().concat().trim().to_string())
    }
}

#[async_trait]
impl ChatPipeline for LlmChatPipeline {
    async fn invoke(&self, bundle: &InvocationBundle) -> Result<String, DomainError> {
        let prompt = self.template.render(bundle);
        let output = self
            .model
            .generate(prompt.system(), prompt.conversation())
            .await?;
        Self::extract_text(&output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connector::adapter::MockChatModel;
    use crate::domain::ChatMessage;

    #[test]
    fn extract_text_concatenates_parts() {
        let output = ModelOutput::new(vec!["Good ".to_string(), "morning.".to_string()]);
        assert_eq!(LlmChatPipeline::extract_text(&output).unwrap(), "Good morning.");
    }

    #[test]
    fn extract_text_trims_whitespace() {
        let output = ModelOutput::from_text("\n  reply  \n");
        assert_eq!(LlmChatPipeline::extract_text(&output).unwrap(), "reply");
    }

    #[test]
    fn extract_text_fails_on_empty_output() {
        let output = ModelOutput::new(vec![]);
        let err = LlmChatPipeline::extract_text(&output).unwrap_err();
        assert!(matches!(err, DomainError::ParseError(_)));
    }

    #[tokio::test]
    async fn invoke_runs_all_three_stages() {
        let pipeline = LlmChatPipeline::new(Arc::new(MockChatModel::new()));
        let bundle = InvocationBundle::new("ping", vec![ChatMessage::assistant("old")]);

        let reply = pipeline.invoke(&bundle).await.unwrap();
        assert_eq!(reply, "You said: ping");
    }

    #[tokio::test]
    async fn invoke_passes_fixed_reply_through_unmodified() {
        let pipeline = LlmChatPipeline::new(Arc::new(MockChatModel::with_reply("Turing: echo")));
        let bundle = InvocationBundle::new("anything", vec![]);

        let reply = pipeline.invoke(&bundle).await.unwrap();
        assert_eq!(reply, "Turing: echo");
    }
}
