// POST /api/ask handler

use std::convert::Infallible;
use std::sync::Arc;

use bytes::Bytes;
use tracing::{error, info, warn};
use warp::http::StatusCode;

use crate::answer::{AnswerError, AnswerProvider};
use crate::models::{AskRequest, ErrorResponse};

/// Error text returned when the body has no usable question
pub const MISSING_QUESTION_ERROR: &str = "Missing 'question' string in body";

/// Error text returned when the upstream replies with a non-success status
pub const UPSTREAM_ERROR: &str = "Upstream error";

pub async fn ask_handler(
    body: Bytes,
    provider: Arc<dyn AnswerProvider>,
) -> Result<impl warp::Reply, Infallible> {
    let question = match parse_question(&body) {
        Some(question) => question,
        None => {
            warn!("Rejected ask request without a 'question' string");
            return Ok(warp::reply::with_status(
                warp::reply::json(&ErrorResponse::new(MISSING_QUESTION_ERROR)),
                StatusCode::BAD_REQUEST,
            ));
        }
    };

    info!("POST /api/ask: {}", question);

    match provider.answer(&question).await {
        Ok(answer) => Ok(warp::reply::with_status(
            warp::reply::json(&answer),
            StatusCode::OK,
        )),
        Err(AnswerError::UpstreamStatus { status, body }) => {
            error!("Upstream request failed with status {}", status);
            Ok(warp::reply::with_status(
                warp::reply::json(&ErrorResponse::new(UPSTREAM_ERROR).with_detail(body)),
                StatusCode::INTERNAL_SERVER_ERROR,
            ))
        }
        Err(err) => {
            error!("Failed to produce an answer: {}", err);
            Ok(warp::reply::with_status(
                warp::reply::json(&ErrorResponse::new(err.to_string())),
                StatusCode::INTERNAL_SERVER_ERROR,
            ))
        }
    }
}

/// Extract a non-empty question string from the raw request body.
///
/// A non-JSON body, a missing field, a non-string value, and an empty
/// string all collapse into `None`; the endpoint answers every one of
/// them with the same 400 response.
fn parse_question(body: &[u8]) -> Option<String> {
    let request: AskRequest = serde_json::from_slice(body).ok()?;
    if request.question.is_empty() {
        return None;
    }
    Some(request.question)
}
