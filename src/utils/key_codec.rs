//! Short key generation and validation.
//!
//! Keys are fixed-length strings over the base62 alphabet (`[0-9A-Za-z]`).
//! With [`KEY_LENGTH`] = 7 there are 62^7 ≈ 3.5×10^12 possible keys, so
//! random collisions stay rare long after the store holds millions of
//! records; the service retries the few that happen.

use rand::Rng;
use rand::distr::Alphanumeric;

/// Number of characters in every generated key.
pub const KEY_LENGTH: usize = 7;

/// Length of keys minted by the previous deployment (nanoid, URL-safe alphabet).
pub const LEGACY_KEY_LENGTH: usize = 10;

/// Generates and validates short keys.
///
/// Implementations must be pure: no I/O and no shared mutable state, so one
/// instance can be used from any number of tasks at once.
#[cfg_attr(test, mockall::automock)]
pub trait KeyCodec: Send + Sync {
    /// Produces a fresh candidate key.
    fn generate(&self) -> String;

    /// Returns `true` if `key` is syntactically a key this codec could produce.
    fn validate(&self, key: &str) -> bool;
}

/// Uniformly random base62 keys of length [`KEY_LENGTH`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Base62Codec;

impl Base62Codec {
    pub fn new() -> Self {
        Self
    }
}

impl KeyCodec for Base62Codec {
    /// Draws [`KEY_LENGTH`] characters from the thread-local CSPRNG.
    ///
    /// `Alphanumeric` samples uniformly from exactly the 62 base62 characters.
    fn generate(&self) -> String {
        rand::rng()
            .sample_iter(&Alphanumeric)
            .take(KEY_LENGTH)
            .map(char::from)
            .collect()
    }

    fn validate(&self, key: &str) -> bool {
        is_valid_key(key)
    }
}

/// Checks length and alphabet of a key.
pub fn is_valid_key(key: &str) -> bool {
    key.len() == KEY_LENGTH && key.bytes().all(|b| b.is_ascii_alphanumeric())
}

/// Checks for a key in the previous deployment's shape: 10 characters over
/// `[A-Za-z0-9_-]`. Such keys are only ever resolved, never generated.
pub fn is_legacy_key(key: &str) -> bool {
    key.len() == LEGACY_KEY_LENGTH
        && key
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-')
}
