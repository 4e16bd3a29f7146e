// Route definitions

use std::convert::Infallible;
use std::sync::Arc;

use warp::Filter;

use crate::answer::AnswerProvider;
use crate::handlers;

pub fn configure_routes(
    provider: Arc<dyn AnswerProvider>,
) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    // GET /
    let index = warp::path::end()
        .and(warp::get())
        .and_then(handlers::index_handler);

    // POST /api/ask
    let ask = warp::path("api")
        .and(warp::path("ask"))
        .and(warp::path::end())
        .and(warp::post())
        .and(warp::body::bytes())
        .and(with_provider(provider))
        .and_then(handlers::ask_handler);

    // Any other method on /api/ask
    let ask_method_not_allowed = warp::path("api")
        .and(warp::path("ask"))
        .and(warp::path::end())
        .and_then(handlers::method_not_allowed_handler);

    // Combine routes
    index.or(ask).or(ask_method_not_allowed)
}

fn with_provider(
    provider: Arc<dyn AnswerProvider>,
) -> impl Filter<Extract = (Arc<dyn AnswerProvider>,), Error = Infallible> + Clone {
    warp::any().map(move || provider.clone())
}
