// GET / handler

use std::convert::Infallible;

use crate::page::CHAT_PAGE;

pub async fn index_handler() -> Result<impl warp::Reply, Infallible> {
    Ok(warp::reply::html(CHAT_PAGE))
}
