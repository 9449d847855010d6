use super::ChatMessage;

/// The transient input structure passed to the pipeline for one turn.
///
/// Constructed fresh per turn and discarded after the call returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationBundle {
    input: String,
    history: Vec<ChatMessage>,
}

impl InvocationBundle {
    pub fn new(input: impl Into<String>, history: Vec<ChatMessage>) -> Self {
        Self {
            input: input.into(),
            history,
        }
    }

    /// The latest user text, never conflated with historical content.
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn history(&self) -> &[ChatMessage] {
        &self.history
    }
}
