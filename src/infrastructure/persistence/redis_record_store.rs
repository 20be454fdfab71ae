//! Redis-backed record store.

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use redis::{AsyncCommands, Client, RedisResult, aio::ConnectionManager};
use tracing::{debug, info, warn};

use crate::domain::entities::{InsertOutcome, ShortUrlRecord, StoredRecord};
use crate::domain::errors::StoreError;
use crate::domain::repositories::RecordStore;
use crate::utils::key_codec::is_legacy_key;

/// Namespace prefix for record keys.
const KEY_PREFIX: &str = "url:";

/// Bound on establishing the initial connection.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Record store on a single Redis (or Redis-compatible) node or cluster endpoint.
///
/// Uses `ConnectionManager`, which multiplexes one auto-reconnecting connection
/// and is cheap to clone, so every call clones the handle instead of locking.
/// Each command is bounded by `timeout`; an elapsed call surfaces as
/// [`StoreError::Unavailable`] rather than hanging the request.
#[derive(Clone)]
pub struct RedisRecordStore {
    conn: ConnectionManager,
    timeout: Duration,
}

impl RedisRecordStore {
    /// Connects to Redis and validates the connection with a PING.
    ///
    /// # Arguments
    ///
    /// - `redis_url` - Redis connection string (e.g., `"redis://localhost:6379"`)
    /// - `timeout` - bound applied to every subsequent store command
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] if the URL is invalid, the connection
    /// cannot be established within 10s, or the PING fails.
    pub async fn connect(redis_url: &str, timeout: Duration) -> Result<Self, StoreError> {
        let client = Client::open(redis_url).map_err(|e| {
            StoreError::Unavailable(format!("Failed to create Redis client: {}", e))
        })?;

        let manager = tokio::time::timeout(CONNECT_TIMEOUT, ConnectionManager::new(client))
            .await
            .map_err(|_| {
                StoreError::Unavailable(format!(
                    "Timed out connecting to Redis after {}s",
                    CONNECT_TIMEOUT.as_secs()
                ))
            })?
            .map_err(|e| StoreError::Unavailable(format!("Failed to connect to Redis: {}", e)))?;

        let store = Self::new(manager, timeout);
        store
            .bounded("PING", async {
                let mut conn = store.conn.clone();
                conn.ping::<()>().await
            })
            .await?;

        info!("Connected to Redis record store");
        Ok(store)
    }

    /// Wraps an existing connection manager.
    pub fn new(conn: ConnectionManager, timeout: Duration) -> Self {
        Self { conn, timeout }
    }

    async fn bounded<T, F>(&self, op: &'static str, fut: F) -> Result<T, StoreError>
    where
        F: Future<Output = RedisResult<T>>,
    {
        bounded(op, self.timeout, fut).await
    }

    async fn get_raw(&self, redis_key: &str) -> Result<Option<String>, StoreError> {
        let mut conn = self.conn.clone();
        self.bounded("GET", conn.get::<_, Option<String>>(redis_key))
            .await
    }
}

/// Runs a Redis command under `timeout`.
///
/// Command errors and an elapsed timeout both become [`StoreError::Unavailable`].
pub(crate) async fn bounded<T, F>(
    op: &'static str,
    timeout: Duration,
    fut: F,
) -> Result<T, StoreError>
where
    F: Future<Output = RedisResult<T>>,
{
    match tokio::time::timeout(timeout, fut).await {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(e)) => {
            warn!(op, error = %e, "Redis command failed");
            Err(StoreError::Unavailable(format!("{} failed: {}", op, e)))
        }
        Err(_) => {
            warn!(op, timeout_ms = timeout.as_millis() as u64, "Redis command timed out");
            Err(StoreError::Unavailable(format!(
                "{} timed out after {}ms",
                op,
                timeout.as_millis()
            )))
        }
    }
}

/// Constructs the full Redis key with namespace prefix.
fn record_key(key: &str) -> String {
    format!("{}{}", KEY_PREFIX, key)
}

/// Maps a `SET .. NX` reply: `OK` when written, nil when the key already exists.
fn insert_outcome(reply: Option<String>, record: ShortUrlRecord) -> InsertOutcome {
    match reply {
        Some(_) => InsertOutcome::Created(record),
        None => InsertOutcome::AlreadyExists,
    }
}

/// Decodes a stored value.
///
/// Values are JSON [`StoredRecord`]s. A value that is not a JSON object is a
/// bare URL written by the previous deployment and is returned without a
/// timestamp.
fn decode_record(key: &str, raw: String) -> Result<ShortUrlRecord, StoreError> {
    if !raw.trim_start().starts_with('{') {
        return Ok(ShortUrlRecord {
            key: key.to_string(),
            long_url: raw,
            created_at: None,
        });
    }

    serde_json::from_str::<StoredRecord>(&raw)
        .map(|stored| ShortUrlRecord::from_stored(key.to_string(), stored))
        .map_err(|e| StoreError::Corrupt {
            key: key.to_string(),
            reason: e.to_string(),
        })
}

#[async_trait]
impl RecordStore for RedisRecordStore {
    async fn try_insert(&self, key: &str, long_url: &str) -> Result<InsertOutcome, StoreError> {
        let record = ShortUrlRecord::new(key.to_string(), long_url.to_string());
        let value = serde_json::to_string(&record.to_stored()).map_err(|e| StoreError::Encode {
            key: key.to_string(),
            reason: e.to_string(),
        })?;
        let redis_key = record_key(key);
        let mut conn = self.conn.clone();

        let mut cmd = redis::cmd("SET");
        cmd.arg(&redis_key).arg(&value).arg("NX");
        let reply: Option<String> = self.bounded("SET NX", cmd.query_async(&mut conn)).await?;

        let outcome = insert_outcome(reply, record);
        match outcome {
            InsertOutcome::Created(_) => debug!(key, "Record created"),
            InsertOutcome::AlreadyExists => debug!(key, "Key already present"),
        }
        Ok(outcome)
    }

    async fn get(&self, key: &str) -> Result<Option<ShortUrlRecord>, StoreError> {
        let mut raw = self.get_raw(&record_key(key)).await?;

        // The previous deployment wrote bare URLs under the unprefixed key.
        if raw.is_none() && is_legacy_key(key) {
            raw = self.get_raw(key).await?;
        }

        match raw {
            Some(raw) => decode_record(key, raw).map(Some),
            None => {
                debug!(key, "Record not found");
                Ok(None)
            }
        }
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.conn.clone();
        self.bounded("PING", conn.ping::<()>()).await.is_ok()
    }
}
