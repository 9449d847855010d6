use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::connector::adapter::ChatModel;
use crate::domain::{ChatMessage, DomainError, MessageRole, ModelOutput};

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_TEMPERATURE: f32 = 0.7;
const GENERATE_PATH_PREFIX: &str = "/v1beta/models";

#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct ApiRequest<'a> {
    system_instruction: ApiContent<'a>,
    contents: Vec<ApiContent<'a>>,
    generation_config: GenerationConfig,
}

#[derive(serde::Serialize)]
struct ApiContent<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'a str>,
    parts: Vec<ApiPart<'a>>,
}

#[derive(serde::Serialize)]
struct ApiPart<'a> {
    text: &'a str,
}

#[derive(serde::Serialize)]
struct GenerationConfig {
    temperature: f32,
}

/// Minimal subset of the generateContent response we care about.
#[derive(Deserialize)]
struct ApiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

/// HTTP client for the Gemini `generateContent` API.
///
/// Implements [`ChatModel`] so the pipeline stays decoupled from transport
/// and serialization details. Model name and temperature are passed through
/// unvalidated; range constraints are the remote service's responsibility.
///
/// Configuration:
///
/// ```text
/// GEMINI_API_KEY=...                                    # required
/// GEMINI_BASE_URL=https://generativelanguage.googleapis.com   # optional override
/// ```
///
/// The API key is resolved before any network call; a missing key is a
/// configuration error, fatal to startup.
#[derive(Debug)]
pub struct GeminiClient {
    client: reqwest::Client,
    api_key: String,
    model: String,
    temperature: f32,
    /// Full endpoint URL (base + `/v1beta/models/<model>:generateContent`).
    url: String,
}

impl GeminiClient {
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
        base_url: impl Into<String>,
        temperature: f32,
    ) -> Self {
        let base: String = base_url.into();
        let model: String = model.into();
        let url = format!(
            "{}{}/{}:generateContent",
            base.trim_end_matches('/'),
            GENERATE_PATH_PREFIX,
            model
        );
        Self {
            client: reqwest::Client::builder()
                .timeout(Duration::from_secs(30))
                .build()
                .unwrap_or_default(),
            api_key: api_key.into(),
            model,
            temperature,
            url,
        }
    }

    /// Construct from environment variables:
    /// - `GEMINI_API_KEY`  — required; its absence is a configuration error
    ///   raised here, before any network attempt
    /// - `GEMINI_BASE_URL` — optional; defaults to the Google endpoint
    pub fn from_env(model: impl Into<String>, temperature: f32) -> Result<Self, DomainError> {
        let api_key = std::env::var("GEMINI_API_KEY").map_err(|_| {
            DomainError::config(
                "GEMINI_API_KEY not set; create a .env file or set the environment variable",
            )
        })?;
        let base = std::env::var("GEMINI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Ok(Self::new(api_key, model, base, temperature))
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn temperature(&self) -> f32 {
        self.temperature
    }

    fn wire_role(role: MessageRole) -> &'static str {
        match role {
            MessageRole::User => "user",
            MessageRole::Assistant => "model",
        }
    }
}

#[async_trait]
impl ChatModel for GeminiClient {
    async fn generate(
        &self,
        system: &str,
        conversation: &[ChatMessage],
    ) -> Result<ModelOutput, DomainError> {
        let request = ApiRequest {
            system_instruction: ApiContent {
                role: None,
                parts: vec![ApiPart { text: system }],
            },
            contents: conversation
                .iter()
                .map(|msg| ApiContent {
                    role: Some(Self::wire_role(msg.role())),
                    parts: vec![ApiPart {
                        text: msg.content(),
                    }],
                })
                .collect(),
            generation_config: GenerationConfig {
                temperature: self.temperature,
            },
        };

        debug!(
            "GeminiClient: sending {} conversation messages to {}",
            conversation.len(),
            self.model
        );

        let response = self
            .client
            .post(&self.url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| DomainError::api(format!("GeminiClient: request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!("GeminiClient: API returned {status}: {body}");
            return Err(DomainError::api(format!(
                "GeminiClient: API returned {status}"
            )));
        }

        let api_response: ApiResponse = response.json().await.map_err(|e| {
            DomainError::api(format!("GeminiClient: failed to parse response: {e}"))
        })?;

        let parts = api_response
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|p| p.text)
                    .collect::<Vec<String>>()
            })
            .unwrap_or_default();

        Ok(ModelOutput::new(parts))
    }
}
