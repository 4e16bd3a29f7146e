// Non-POST /api/ask handler

use std::convert::Infallible;

use tracing::warn;
use warp::http::StatusCode;

use crate::models::ErrorResponse;

/// Error text returned for any method other than POST on the ask endpoint
pub const METHOD_NOT_ALLOWED_ERROR: &str = "Method Not Allowed";

pub async fn method_not_allowed_handler() -> Result<impl warp::Reply, Infallible> {
    warn!("Rejected non-POST request to /api/ask");
    Ok(warp::reply::with_status(
        warp::reply::json(&ErrorResponse::new(METHOD_NOT_ALLOWED_ERROR)),
        StatusCode::METHOD_NOT_ALLOWED,
    ))
}
