pub mod application;
pub mod cli;
pub mod connector;
pub mod domain;

pub use application::{ChatPipeline, RespondUseCase};

pub use cli::Commands;

pub use connector::{
    ChatModel, GeminiClient, LlmChatPipeline, MockChatModel, PromptTemplate, RenderedPrompt,
};

pub use domain::{
    ChatMessage, ConversationTurn, DomainError, InvocationBundle, MessageRole, ModelOutput,
    SYSTEM_PROMPT,
};
