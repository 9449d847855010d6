use serde::{Deserialize, Serialize};

/// One role-tagged entry in the UI-visible chat history.
///
/// The UI layer owns the full ordered sequence and appends the new
/// user/assistant pair after each successful exchange; turns are never
/// mutated once created. `role` is free text at this boundary — only
/// `"user"` and `"assistant"` are forwarded to the model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationTurn {
    #[serde(default)]
    role: String,
    #[serde(default)]
    content: String,
}

impl ConversationTurn {
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new("user", content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new("assistant", content)
    }

    pub fn role(&self) -> &str {
        &self.role
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}
