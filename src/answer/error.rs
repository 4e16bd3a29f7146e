//! Error types for the answer layer

use thiserror::Error;

/// Errors that can occur while producing an answer
#[derive(Debug, Error)]
pub enum AnswerError {
    /// Upstream service replied with a non-success status
    #[error("Upstream error (status {status}): {body}")]
    UpstreamStatus { status: u16, body: String },

    /// Network-level request failures
    #[error("Request failed: {0}")]
    Network(String),

    /// JSON decoding issues on an otherwise successful response
    #[error("Invalid upstream response: {0}")]
    Decode(String),
}

// Implement conversion from reqwest errors
impl From<reqwest::Error> for AnswerError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            AnswerError::Decode(err.to_string())
        } else {
            AnswerError::Network(err.to_string())
        }
    }
}
