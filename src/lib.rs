// HTTP Server modules
pub mod handlers;
pub mod models;
pub mod page;
pub mod routes;

// Chat page state
pub mod session;

// Answer provider layer
pub mod answer;

// Server configuration
pub mod config;
