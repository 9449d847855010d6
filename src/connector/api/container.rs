use std::sync::Arc;

use anyhow::Result;
use tracing::debug;

use crate::application::{ChatPipeline, RespondUseCase};
use crate::connector::adapter::{ChatModel, GeminiClient, LlmChatPipeline, MockChatModel};

pub struct ContainerConfig {
    pub model: String,
    pub temperature: f32,
    /// Use the offline mock model instead of the Gemini API.
    pub mock_model: bool,
}

/// Builds the pipeline once at application start and hands out use cases.
pub struct Container {
    pipeline: Arc<dyn ChatPipeline>,
    config: ContainerConfig,
}

impl Container {
    pub fn new(config: ContainerConfig) -> Result<Self> {
        let model: Arc<dyn ChatModel> = if config.mock_model {
            debug!("Using mock chat model");
            Arc::new(MockChatModel::new())
        } else {
            debug!("Using Gemini model {}", config.model);
            Arc::new(GeminiClient::from_env(
                config.model.clone(),
                config.temperature,
            )?)
        };

        let pipeline: Arc<dyn ChatPipeline> = Arc::new(LlmChatPipeline::new(model));

        Ok(Self { pipeline, config })
    }

    pub fn respond_use_case(&self) -> RespondUseCase {
        RespondUseCase::new(self.pipeline.clone())
    }

    pub fn model_name(&self) -> &str {
        &self.config.model
    }

    pub fn temperature(&self) -> f32 {
        self.config.temperature
    }

    pub fn mock_model(&self) -> bool {
        self.config.mock_model
    }
}
