//! # shortkey
//!
//! A URL shortening service: a long URL goes in, a short globally unique key
//! comes out, and the key resolves back to the URL with a single store read.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Records, the store contract, error taxonomy
//! - **Application Layer** ([`application`]) - Create/resolve orchestration and retry policy
//! - **Infrastructure Layer** ([`infrastructure`]) - Redis and in-memory record stores
//! - **API Layer** ([`api`]) - HTTP handlers, DTOs, and middleware
//! - **Utilities** ([`utils`]) - Key codec and URL validation
//!
//! ## Correctness
//!
//! Keys are random base62 strings of fixed length. The store's atomic
//! insert-if-absent (`SET NX` on Redis) is the only write, so two concurrent
//! creates can never end up sharing a key, no matter how many service
//! instances run.
//!
//! ## Quick Start
//!
//! ```bash
//! export REDIS_URL="redis://localhost:6379"
//! export ENDPOINT="https://s.example.com"
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::ShortenerService;
    pub use crate::domain::entities::{CreatedLink, InsertOutcome, ShortUrlRecord};
    pub use crate::domain::errors::{ShortenerError, StoreError};
    pub use crate::domain::repositories::RecordStore;
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::{InMemoryRecordStore, RedisRecordStore};
    pub use crate::state::AppState;
    pub use crate::utils::key_codec::{Base62Codec, KeyCodec};
}
