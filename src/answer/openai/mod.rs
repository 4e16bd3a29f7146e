//! OpenAI provider implementation
//!
//! This module implements the answer provider against the OpenAI chat
//! completions API with a fixed model, temperature, and system prompt.

pub mod client;
pub mod types;

// Re-export commonly used types
pub use client::{OpenAiClient, MODEL, NO_CONTENT_FALLBACK, SYSTEM_PROMPT, TEMPERATURE};
