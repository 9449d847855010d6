mod chat_model;
mod gemini_client;
mod llm_pipeline;
mod mock_chat_model;
mod prompt_template;
pub mod web;

pub use chat_model::*;
pub use gemini_client::*;
pub use llm_pipeline::*;
pub use mock_chat_model::*;
pub use prompt_template::*;
