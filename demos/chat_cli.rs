/// Chat CLI Example
///
/// Drives the same session model the browser page uses, from a terminal:
/// - submit() appends the user message and gates blank input
/// - resolve() folds the endpoint-shaped JSON body into the history
///
/// To run this example:
/// 1. (Optional) Create a .env file in the project root with:
///    OPENAI_API_KEY=sk-...
/// 2. Run: cargo run --example chat_cli
/// 3. Type a question and press Enter; empty input exits.

use std::io::{self, BufRead, Write};

use globalreg::answer::{create_provider, AnswerError, AnswerProvider};
use globalreg::config::AppConfig;
use globalreg::handlers::UPSTREAM_ERROR;
use globalreg::session::{ChatSession, Sender};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== GlobalRegAI - Chat CLI Example ===\n");

    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env()?;
    let provider = create_provider(&config);
    let mut session = ChatSession::new();

    let stdin = io::stdin();
    loop {
        print!("질문> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let question = match session.submit(&line) {
            Some(question) => question,
            None => break,
        };

        // Fold the same body shapes the HTTP endpoint produces into the
        // session, errors included.
        let body = match provider.answer(&question).await {
            Ok(answer) => serde_json::to_value(&answer)?,
            Err(AnswerError::UpstreamStatus { body, .. }) => {
                serde_json::json!({ "error": UPSTREAM_ERROR, "detail": body })
            }
            Err(err) => serde_json::json!({ "error": err.to_string() }),
        };
        session.resolve(&body);

        if let Some(message) = session.messages().last() {
            if message.sender == Sender::Ai {
                println!("\n{}\n", message.text);
                if let Some(sources) = &message.sources {
                    println!("[근거 자료]");
                    for source in sources {
                        println!("  - {} (페이지: {})", source.source, source.page);
                    }
                    println!();
                }
            }
        }
    }

    println!("대화를 종료합니다. (메시지 {}개)", session.messages().len());
    Ok(())
}
