//! Short link creation and resolution service.

use std::sync::Arc;

use tracing::{debug, error, info};

use crate::domain::entities::{CreatedLink, InsertOutcome};
use crate::domain::errors::ShortenerError;
use crate::domain::repositories::RecordStore;
use crate::utils::key_codec::{KeyCodec, is_legacy_key};
use crate::utils::url_validator::validate_long_url;

/// Default bound on key generation attempts per create.
pub const DEFAULT_MAX_ATTEMPTS: usize = 5;

/// Orchestrates the key codec and the record store.
///
/// The service holds no mutable state. Uniqueness is enforced entirely by the
/// store's insert-if-absent primitive, so any number of instances may serve
/// requests against the same store without coordinating.
pub struct ShortenerService {
    store: Arc<dyn RecordStore>,
    codec: Arc<dyn KeyCodec>,
    public_base_url: String,
    max_attempts: usize,
}

impl ShortenerService {
    /// Creates a new shortener service.
    ///
    /// `public_base_url` is the externally visible prefix of short URLs; a
    /// trailing slash is ignored.
    pub fn new(
        store: Arc<dyn RecordStore>,
        codec: Arc<dyn KeyCodec>,
        public_base_url: impl Into<String>,
    ) -> Self {
        Self {
            store,
            codec,
            public_base_url: public_base_url.into().trim_end_matches('/').to_string(),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Overrides the number of generation attempts (at least 1).
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Shortens `long_url` under a freshly minted key.
    ///
    /// Every call mints a new key, even for a URL that was shortened before.
    ///
    /// # Collision handling
    ///
    /// Up to `max_attempts` keys are generated; a key the store already holds
    /// is discarded and another one is tried. Store failures are not retried
    /// here and end the request immediately.
    ///
    /// # Errors
    ///
    /// - [`ShortenerError::InvalidInput`] if `long_url` is not an absolute HTTP(S) URL
    ///   (no store call is made)
    /// - [`ShortenerError::KeySpaceExhausted`] if every attempt collided
    /// - [`ShortenerError::StoreUnavailable`] on store failure
    pub async fn create(&self, long_url: &str) -> Result<CreatedLink, ShortenerError> {
        let long_url =
            validate_long_url(long_url).map_err(|e| ShortenerError::InvalidInput(e.to_string()))?;

        for attempt in 1..=self.max_attempts {
            let key = self.codec.generate();

            match self.store.try_insert(&key, long_url).await? {
                InsertOutcome::Created(record) => {
                    info!(key = %record.key, attempt, "Short link created");
                    return Ok(CreatedLink {
                        short_url: self.short_url(&record.key),
                        key: record.key,
                        long_url: record.long_url,
                    });
                }
                InsertOutcome::AlreadyExists => {
                    debug!(key = %key, attempt, "Key collision, retrying");
                    metrics::counter!("shortener_key_collisions_total").increment(1);
                }
            }
        }

        error!(
            attempts = self.max_attempts,
            "Key space exhausted: every generated key collided; check key length and store size"
        );
        metrics::counter!("shortener_key_space_exhausted_total").increment(1);

        Err(ShortenerError::KeySpaceExhausted {
            attempts: self.max_attempts,
        })
    }

    /// Resolves `key` to its long URL.
    ///
    /// Read-only; store failures are not retried. Besides keys the codec
    /// accepts, keys in the previous deployment's shape are looked up too, so
    /// links minted before the migration keep resolving.
    ///
    /// # Errors
    ///
    /// - [`ShortenerError::InvalidInput`] if `key` is malformed (no store call is made)
    /// - [`ShortenerError::NotFound`] if no record exists for `key`
    /// - [`ShortenerError::StoreUnavailable`] on store failure
    pub async fn resolve(&self, key: &str) -> Result<String, ShortenerError> {
        if !self.codec.validate(key) && !is_legacy_key(key) {
            return Err(ShortenerError::InvalidInput(format!(
                "malformed key: {:?}",
                key
            )));
        }

        match self.store.get(key).await? {
            Some(record) => Ok(record.long_url),
            None => Err(ShortenerError::NotFound),
        }
    }

    /// Constructs the full short URL for a key.
    pub fn short_url(&self, key: &str) -> String {
        format!("{}/{}", self.public_base_url, key)
    }

    /// Checks if the backing store answers.
    pub async fn store_healthy(&self) -> bool {
        self.store.health_check().await
    }
}
