//! Test for the answer provider factory
//!
//! This test demonstrates how the server configuration selects between
//! the retrieval backend, the OpenAI client, and demo answers.

use globalreg::answer::{create_provider, AnswerProvider, DEMO_NOTICE};
use globalreg::config::AppConfig;

/// Helper to build a config without touching process environment
fn config(openai_api_key: Option<&str>, backend_url: Option<&str>) -> AppConfig {
    AppConfig {
        bind_addr: "127.0.0.1:3030".parse().unwrap(),
        openai_api_key: openai_api_key.map(String::from),
        backend_url: backend_url.map(String::from),
    }
}

#[test]
fn test_no_credentials_selects_demo() {
    let provider = create_provider(&config(None, None));
    assert_eq!(provider.id(), "demo");
}

#[test]
fn test_api_key_selects_openai() {
    let provider = create_provider(&config(Some("sk-test"), None));
    assert_eq!(provider.id(), "openai");
}

#[test]
fn test_backend_url_selects_backend() {
    let provider = create_provider(&config(None, Some("http://localhost:8000/ask")));
    assert_eq!(provider.id(), "backend");
}

#[test]
fn test_backend_url_wins_over_api_key() {
    let provider = create_provider(&config(
        Some("sk-test"),
        Some("http://localhost:8000/ask"),
    ));
    assert_eq!(provider.id(), "backend");
}

#[tokio::test]
async fn test_demo_provider_answers_without_network() {
    let provider = create_provider(&config(None, None));
    let response = provider.answer("네트워크 없이 답해줘").await.unwrap();

    assert!(response.answer.starts_with(DEMO_NOTICE));
    assert!(response.answer.ends_with("질문: 네트워크 없이 답해줘"));
}
