//! Answer Layer
//!
//! This module provides a unified interface for producing answers to user
//! questions, backed by the OpenAI chat completions API, an external
//! retrieval backend, or canned demo replies when no credential is set.

pub mod backend;
pub mod demo;
pub mod error;
pub mod openai;
pub mod provider;

// Re-export commonly used types
pub use backend::BackendClient;
pub use demo::{demo_answer, DemoProvider, DEMO_NOTICE};
pub use error::AnswerError;
pub use openai::OpenAiClient;
pub use provider::{create_provider, AnswerProvider};
