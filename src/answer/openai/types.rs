//! Wire types for the OpenAI chat completions API

use serde::{Deserialize, Serialize};

/// Chat completions request body
#[derive(Debug, Serialize)]
pub struct ApiRequest {
    pub model: String,
    pub messages: Vec<ApiMessage>,
    pub temperature: f32,
}

/// Single chat message in a request
#[derive(Debug, Serialize)]
pub struct ApiMessage {
    pub role: String,
    pub content: String,
}

/// Chat completions response body
///
/// Every field on the extraction path is optional, so a sparse or
/// unexpected body falls back to the no-content marker instead of
/// failing to decode.
#[derive(Debug, Deserialize)]
pub struct ApiResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

/// Response choice
#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: Option<ResponseMessage>,
}

/// Assistant message inside a choice
#[derive(Debug, Deserialize)]
pub struct ResponseMessage {
    pub content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serialization() {
        let request = ApiRequest {
            model: "gpt-4o-mini".to_string(),
            messages: vec![
                ApiMessage {
                    role: "system".to_string(),
                    content: "be brief".to_string(),
                },
                ApiMessage {
                    role: "user".to_string(),
                    content: "hello".to_string(),
                },
            ],
            temperature: 0.2,
        };

        let json: serde_json::Value =
            serde_json::from_str(&serde_json::to_string(&request).unwrap()).unwrap();
        assert_eq!(json["model"], "gpt-4o-mini");
        assert_eq!(json["temperature"], 0.2);
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["content"], "hello");
    }

    #[test]
    fn test_response_deserialization() {
        let json = r#"{
            "id": "chatcmpl-123",
            "choices": [
                {"index": 0, "message": {"role": "assistant", "content": "hi"}}
            ]
        }"#;

        let response: ApiResponse = serde_json::from_str(json).unwrap();
        let message = response.choices[0].message.as_ref().unwrap();
        assert_eq!(message.content.as_deref(), Some("hi"));
    }

    #[test]
    fn test_empty_response_body() {
        let response: ApiResponse = serde_json::from_str("{}").unwrap();
        assert!(response.choices.is_empty());
    }

    #[test]
    fn test_message_without_content() {
        let json = r#"{"choices": [{"message": {"role": "assistant"}}]}"#;
        let response: ApiResponse = serde_json::from_str(json).unwrap();
        let message = response.choices[0].message.as_ref().unwrap();
        assert!(message.content.is_none());
    }
}
