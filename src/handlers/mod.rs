// Handlers module

pub mod ask;
pub mod index;
pub mod method_not_allowed;

pub use ask::{ask_handler, MISSING_QUESTION_ERROR, UPSTREAM_ERROR};
pub use index::index_handler;
pub use method_not_allowed::{method_not_allowed_handler, METHOD_NOT_ALLOWED_ERROR};
