//! Demo answers for credential-less operation

use async_trait::async_trait;

use crate::models::AskResponse;

use super::error::AnswerError;
use super::provider::AnswerProvider;

/// Notice prefixed to every demo-mode answer
pub const DEMO_NOTICE: &str = "Demo 모드: OPENAI_API_KEY가 설정되지 않아 간단 회신만 합니다.";

/// Build the canned demo answer for a question
pub fn demo_answer(question: &str) -> String {
    format!("{}\n\n질문: {}", DEMO_NOTICE, question)
}

/// Provider used when no upstream credential is configured
///
/// Echoes the question back with a fixed notice so the chat page stays
/// usable without an API key. Never fails.
pub struct DemoProvider;

#[async_trait]
impl AnswerProvider for DemoProvider {
    fn id(&self) -> &'static str {
        "demo"
    }

    async fn answer(&self, question: &str) -> Result<AskResponse, AnswerError> {
        Ok(AskResponse::new(demo_answer(question)))
    }
}
