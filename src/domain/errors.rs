//! Error taxonomy shared by the store and the shortener service.

use thiserror::Error;

/// Failures raised by a [`crate::domain::repositories::RecordStore`].
///
/// `NotFound` and `AlreadyExists` are normal outcomes and are not represented
/// here.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing store could not be reached or did not answer in time.
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// A value exists for the key but could not be decoded.
    #[error("stored record for key {key} is unreadable: {reason}")]
    Corrupt { key: String, reason: String },

    /// A record could not be encoded for writing; nothing was stored.
    #[error("record for key {key} could not be encoded: {reason}")]
    Encode { key: String, reason: String },
}

/// Failures surfaced by [`crate::application::services::ShortenerService`].
#[derive(Debug, Error)]
pub enum ShortenerError {
    /// Malformed URL on create or malformed key on resolve.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The key is well-formed but unknown.
    #[error("short link not found")]
    NotFound,

    /// Every generation attempt collided with an existing key.
    #[error("failed to mint a unique key after {attempts} attempts")]
    KeySpaceExhausted { attempts: usize },

    /// Transient infrastructure failure; callers may retry with backoff.
    #[error("store unavailable: {0}")]
    StoreUnavailable(String),
}

impl From<StoreError> for ShortenerError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Unavailable(reason) => Self::StoreUnavailable(reason),
            other @ (StoreError::Corrupt { .. } | StoreError::Encode { .. }) => {
                Self::StoreUnavailable(other.to_string())
            }
        }
    }
}
