//! Application layer services implementing business logic.
//!
//! Services consume the store trait and the key codec and provide a clean API
//! for HTTP handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::shortener_service::ShortenerService`] - Short link creation and resolution

pub mod services;
