// Chat page state (message list, loading flag)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::Source;

/// Assistant text used when a response body carries neither answer nor error
pub const NO_ANSWER_FALLBACK: &str = "응답 없음";

/// Prefix of the assistant message shown when the request itself fails
pub const NETWORK_ERROR_PREFIX: &str = "네트워크 오류";

// Message Sender
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Ai,
}

// Chat Message
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatMessage {
    pub sender: Sender,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sources: Option<Vec<Source>>,
    pub sent_at: DateTime<Utc>,
}

impl ChatMessage {
    /// Create a user message stamped with the current time.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::User,
            text: text.into(),
            sources: None,
            sent_at: Utc::now(),
        }
    }

    /// Create an assistant message stamped with the current time.
    pub fn ai(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::Ai,
            text: text.into(),
            sources: None,
            sent_at: Utc::now(),
        }
    }
}

// Chat Session
//
// One page visit's worth of conversation. Mirrors what the browser page
// keeps in memory: an ordered message list and a single in-flight flag.
#[derive(Debug, Clone, Default)]
pub struct ChatSession {
    messages: Vec<ChatMessage>,
    loading: bool,
}

impl ChatSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a submitted question.
    ///
    /// Trims the input first. Returns the question to send, or `None`
    /// when the input is blank or another request is still in flight
    /// (in which case nothing is appended).
    pub fn submit(&mut self, input: &str) -> Option<String> {
        if self.loading {
            return None;
        }
        let question = input.trim();
        if question.is_empty() {
            return None;
        }

        self.messages.push(ChatMessage::user(question));
        self.loading = true;
        Some(question.to_string())
    }

    /// Record the endpoint's response body for the in-flight question.
    ///
    /// The assistant text is taken from `answer`, then `error`, then the
    /// no-answer fallback. Sources are attached when present, decodable,
    /// and non-empty.
    pub fn resolve(&mut self, body: &Value) {
        let text = body
            .get("answer")
            .and_then(Value::as_str)
            .or_else(|| body.get("error").and_then(Value::as_str))
            .unwrap_or(NO_ANSWER_FALLBACK);

        let sources = body
            .get("sources")
            .and_then(|value| serde_json::from_value::<Vec<Source>>(value.clone()).ok())
            .filter(|sources| !sources.is_empty());

        let mut message = ChatMessage::ai(text);
        message.sources = sources;
        self.messages.push(message);
        self.loading = false;
    }

    /// Record a transport-level failure for the in-flight question.
    pub fn fail(&mut self, message: &str) {
        self.messages.push(ChatMessage::ai(format!(
            "{}: {}",
            NETWORK_ERROR_PREFIX, message
        )));
        self.loading = false;
    }

    /// Messages in send order.
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Whether a request is currently in flight.
    pub fn is_loading(&self) -> bool {
        self.loading
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_chat_message_serialization() {
        let message = ChatMessage::user("누가 질문했나");
        let value: serde_json::Value =
            serde_json::from_str(&serde_json::to_string(&message).unwrap()).unwrap();
        assert_eq!(value["sender"], "user");
        assert_eq!(value["text"], "누가 질문했나");
        assert!(value.get("sources").is_none());

        let reply = ChatMessage::ai("응답입니다");
        let value: serde_json::Value =
            serde_json::from_str(&serde_json::to_string(&reply).unwrap()).unwrap();
        assert_eq!(value["sender"], "ai");
    }

    #[test]
    fn test_submit_trims_and_appends_user_message() {
        let mut session = ChatSession::new();
        let question = session.submit("  What is 510(k)?  ");

        assert_eq!(question.as_deref(), Some("What is 510(k)?"));
        assert!(session.is_loading());
        assert_eq!(session.messages().len(), 1);
        assert_eq!(session.messages()[0].sender, Sender::User);
        assert_eq!(session.messages()[0].text, "What is 510(k)?");
    }

    #[test]
    fn test_submit_rejects_blank_input() {
        let mut session = ChatSession::new();
        assert!(session.submit("").is_none());
        assert!(session.submit("   ").is_none());
        assert!(session.messages().is_empty());
        assert!(!session.is_loading());
    }

    #[test]
    fn test_submit_blocked_while_loading() {
        let mut session = ChatSession::new();
        session.submit("first").unwrap();

        assert!(session.submit("second").is_none());
        assert_eq!(session.messages().len(), 1);
    }

    #[test]
    fn test_resolve_uses_answer_field() {
        let mut session = ChatSession::new();
        session.submit("question").unwrap();
        session.resolve(&json!({"answer": "the answer"}));

        assert!(!session.is_loading());
        assert_eq!(session.messages().len(), 2);
        assert_eq!(session.messages()[1].sender, Sender::Ai);
        assert_eq!(session.messages()[1].text, "the answer");
        assert!(session.messages()[1].sources.is_none());
    }

    #[test]
    fn test_resolve_falls_back_to_error_field() {
        let mut session = ChatSession::new();
        session.submit("question").unwrap();
        session.resolve(&json!({"error": "Upstream error"}));

        assert_eq!(session.messages()[1].text, "Upstream error");
    }

    #[test]
    fn test_resolve_falls_back_to_no_answer_text() {
        let mut session = ChatSession::new();
        session.submit("question").unwrap();
        session.resolve(&json!({}));

        assert_eq!(session.messages()[1].text, NO_ANSWER_FALLBACK);
    }

    #[test]
    fn test_resolve_attaches_sources() {
        let mut session = ChatSession::new();
        session.submit("question").unwrap();
        session.resolve(&json!({
            "answer": "cited answer",
            "sources": [
                {"source": "MDR 2017/745", "page": 12},
                {"source": "FDA guidance", "page": "Annex IV"}
            ]
        }));

        let sources = session.messages()[1].sources.as_ref().unwrap();
        assert_eq!(sources.len(), 2);
        assert_eq!(sources[0].source, "MDR 2017/745");
    }

    #[test]
    fn test_resolve_drops_empty_sources() {
        let mut session = ChatSession::new();
        session.submit("question").unwrap();
        session.resolve(&json!({"answer": "plain answer", "sources": []}));

        assert!(session.messages()[1].sources.is_none());
    }

    #[test]
    fn test_fail_appends_network_error_message() {
        let mut session = ChatSession::new();
        session.submit("question").unwrap();
        session.fail("connection refused");

        assert!(!session.is_loading());
        assert_eq!(session.messages()[1].text, "네트워크 오류: connection refused");
    }

    #[test]
    fn test_conversation_stays_in_send_order() {
        let mut session = ChatSession::new();
        session.submit("first question").unwrap();
        session.resolve(&json!({"answer": "first answer"}));
        session.submit("second question").unwrap();
        session.resolve(&json!({"answer": "second answer"}));

        let texts: Vec<&str> = session
            .messages()
            .iter()
            .map(|message| message.text.as_str())
            .collect();
        assert_eq!(
            texts,
            vec![
                "first question",
                "first answer",
                "second question",
                "second answer"
            ]
        );
        assert!(session.messages()[0].sent_at <= session.messages()[3].sent_at);
    }
}
