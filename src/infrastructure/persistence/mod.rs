//! Record store implementations.
//!
//! - [`RedisRecordStore`] - Production store on Redis, insert-if-absent via `SET NX`
//! - [`InMemoryRecordStore`] - Process-local store for tests and local runs

pub mod memory_record_store;
pub mod redis_record_store;

pub use memory_record_store::InMemoryRecordStore;
pub use redis_record_store::RedisRecordStore;
