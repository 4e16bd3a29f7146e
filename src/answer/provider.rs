//! Provider trait for answer backends

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::config::AppConfig;
use crate::models::AskResponse;

use super::backend::BackendClient;
use super::demo::DemoProvider;
use super::error::AnswerError;
use super::openai::OpenAiClient;

/// Main interface that all answer backends must satisfy
#[async_trait]
pub trait AnswerProvider: Send + Sync {
    /// Short identifier used in logs and tests
    fn id(&self) -> &'static str;

    /// Produce an answer for a single question
    ///
    /// # Arguments
    /// * `question` - The user's question as plain text
    ///
    /// # Returns
    /// The answer payload for the HTTP response, or an error if the
    /// upstream call fails
    async fn answer(&self, question: &str) -> Result<AskResponse, AnswerError>;
}

/// Create an answer provider from the server configuration
///
/// The retrieval backend wins when both it and an OpenAI key are
/// configured; with neither present the server falls back to canned
/// demo answers so the chat page stays usable without credentials.
///
/// # Arguments
///
/// * `config` - Server configuration read at startup
///
/// # Returns
///
/// A shared trait object implementing `AnswerProvider`
///
/// # Example
///
/// ```rust,no_run
/// use globalreg::answer::create_provider;
/// use globalreg::config::AppConfig;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = AppConfig::from_env()?;
/// let provider = create_provider(&config);
/// # Ok(())
/// # }
/// ```
pub fn create_provider(config: &AppConfig) -> Arc<dyn AnswerProvider> {
    if let Some(url) = &config.backend_url {
        info!("Answers served by retrieval backend at {}", url);
        return Arc::new(BackendClient::new(url.clone()));
    }

    match &config.openai_api_key {
        Some(key) => {
            info!("Answers served by OpenAI chat completions");
            Arc::new(OpenAiClient::new(key.clone()))
        }
        None => {
            warn!("OPENAI_API_KEY not set, serving demo answers");
            Arc::new(DemoProvider)
        }
    }
}
