//! HTTP request handlers for API endpoints.

pub mod create;
pub mod health;
pub mod resolve;

pub use create::create_handler;
pub use health::health_handler;
pub use resolve::resolve_handler;
