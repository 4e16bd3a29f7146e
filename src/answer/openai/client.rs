//! OpenAI chat completions client

use async_trait::async_trait;
use tracing::debug;

use crate::answer::error::AnswerError;
use crate::answer::provider::AnswerProvider;
use crate::models::AskResponse;

use super::types::{ApiMessage, ApiRequest, ApiResponse};

const DEFAULT_API_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Model requested for every completion
pub const MODEL: &str = "gpt-4o-mini";

/// Sampling temperature requested for every completion
pub const TEMPERATURE: f32 = 0.2;

/// System prompt steering answers toward concise Korean regulatory summaries
pub const SYSTEM_PROMPT: &str =
    "너는 규제·법령을 알기 쉽게 요약하고, 모르면 보수적으로 한계를 밝히는 도우미다. 간결하게 한국어로 답해라.";

/// Answer text used when the upstream reply carries no message content
pub const NO_CONTENT_FALLBACK: &str = "(no content)";

/// Client for the OpenAI chat completions endpoint
pub struct OpenAiClient {
    api_key: String,
    api_url: String,
    client: reqwest::Client,
}

impl OpenAiClient {
    /// Create a client against the official OpenAI endpoint
    pub fn new(api_key: String) -> Self {
        Self::with_url(api_key, DEFAULT_API_URL.to_string())
    }

    /// Create a client with a custom API URL (for OpenAI-compatible APIs)
    pub fn with_url(api_key: String, api_url: String) -> Self {
        Self {
            api_key,
            api_url,
            client: reqwest::Client::new(),
        }
    }

    fn build_request(&self, question: &str) -> ApiRequest {
        ApiRequest {
            model: MODEL.to_string(),
            messages: vec![
                ApiMessage {
                    role: "system".to_string(),
                    content: SYSTEM_PROMPT.to_string(),
                },
                ApiMessage {
                    role: "user".to_string(),
                    content: question.to_string(),
                },
            ],
            temperature: TEMPERATURE,
        }
    }
}

#[async_trait]
impl AnswerProvider for OpenAiClient {
    fn id(&self) -> &'static str {
        "openai"
    }

    async fn answer(&self, question: &str) -> Result<AskResponse, AnswerError> {
        let api_request = self.build_request(question);
        debug!("Sending chat completion request to model {}", MODEL);

        let response = self
            .client
            .post(&self.api_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&api_request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(AnswerError::UpstreamStatus { status, body });
        }

        let api_response: ApiResponse = response.json().await?;
        let answer = api_response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message)
            .and_then(|message| message.content)
            .unwrap_or_else(|| NO_CONTENT_FALLBACK.to_string());

        Ok(AskResponse::new(answer))
    }
}
