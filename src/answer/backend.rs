//! Retrieval backend client
//!
//! Forwards questions to a separately hosted answer service that speaks
//! the same ask wire format and may attach citation sources.

use async_trait::async_trait;
use tracing::debug;

use crate::models::{AskRequest, AskResponse};

use super::error::AnswerError;
use super::provider::AnswerProvider;

/// Client for an external answer backend
pub struct BackendClient {
    url: String,
    client: reqwest::Client,
}

impl BackendClient {
    /// Create a client posting to the given ask endpoint URL
    pub fn new(url: String) -> Self {
        Self {
            url,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl AnswerProvider for BackendClient {
    fn id(&self) -> &'static str {
        "backend"
    }

    async fn answer(&self, question: &str) -> Result<AskResponse, AnswerError> {
        debug!("Forwarding question to retrieval backend at {}", self.url);

        let request = AskRequest {
            question: question.to_string(),
        };
        let response = self.client.post(&self.url).json(&request).send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(AnswerError::UpstreamStatus { status, body });
        }

        // Same wire format as this server, sources included, so the
        // payload passes through unchanged.
        Ok(response.json::<AskResponse>().await?)
    }
}
