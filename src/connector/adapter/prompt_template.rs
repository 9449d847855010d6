use crate::domain::{ChatMessage, InvocationBundle};

/// A rendered prompt: the system instruction plus the full ordered
/// conversation ending with the current user turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPrompt {
    system: String,
    conversation: Vec<ChatMessage>,
}

impl RenderedPrompt {
    pub fn system(&self) -> &str {
        &self.system
    }

    pub fn conversation(&self) -> &[ChatMessage] {
        &self.conversation
    }
}

/// The template stage of the pipeline.
///
/// Merges three pieces in fixed order: the persona text as the system
/// instruction, the bundle's converted history, and a final user turn bound
/// to the bundle's `input`.
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    system: String,
}

impl PromptTemplate {
    pub fn new(system: impl Into<String>) -> Self {
        Self {
            system: system.into(),
        }
    }

    pub fn render(&self, bundle: &InvocationBundle) -> RenderedPrompt {
        let mut conversation = bundle.history().to_vec();
        conversation.push(ChatMessage::user(bundle.input()));
        RenderedPrompt {
            system: self.system.clone(),
            conversation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MessageRole;

    #[test]
    fn render_appends_input_as_final_user_turn() {
        let template = PromptTemplate::new("persona");
        let bundle = InvocationBundle::new(
            "Test",
            vec![ChatMessage::user("Hello"), ChatMessage::assistant("Hi")],
        );

        let prompt = template.render(&bundle);

        assert_eq!(prompt.system(), "persona");
        assert_eq!(prompt.conversation().len(), 3);
        assert_eq!(prompt.conversation()[0].content(), "Hello");
        assert_eq!(prompt.conversation()[1].content(), "Hi");
        let last = &prompt.conversation()[2];
        assert_eq!(last.role(), MessageRole::User);
        assert_eq!(last.content(), "Test");
    }

    #[test]
    fn render_with_empty_history_yields_single_user_turn() {
        let template = PromptTemplate::new("persona");
        let bundle = InvocationBundle::new("X", vec![]);

        let prompt = template.render(&bundle);

        assert_eq!(prompt.conversation().len(), 1);
        assert_eq!(prompt.conversation()[0].content(), "X");
    }
}
