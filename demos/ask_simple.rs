/// Simple Ask Example
///
/// This example demonstrates the basic usage of the answer layer:
/// - Reading configuration from the environment
/// - Creating a provider using create_provider
/// - Asking a single question and printing the answer
///
/// To run this example:
/// 1. (Optional) Create a .env file in the project root with:
///    OPENAI_API_KEY=sk-...
///    Without a key the provider answers in demo mode.
/// 2. Run: cargo run --example ask_simple

use globalreg::answer::{create_provider, AnswerProvider};
use globalreg::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== GlobalRegAI - Simple Ask Example ===\n");

    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env()?;
    if config.openai_api_key.is_none() && config.backend_url.is_none() {
        eprintln!("Warning: OPENAI_API_KEY not set, answers will be demo replies");
    }

    let provider = create_provider(&config);

    let question = "미국 FDA 의료기기 510(k) 제출 요건 핵심을 요약해줘";
    println!("Question: {}\n", question);

    let response = provider.answer(question).await?;
    println!("Answer:\n{}", response.answer);

    if let Some(sources) = &response.sources {
        println!("\n[근거 자료]");
        for source in sources {
            println!("  - {} (페이지: {})", source.source, source.page);
        }
    }

    Ok(())
}
