#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use shortkey::application::services::ShortenerService;
use shortkey::domain::entities::{InsertOutcome, ShortUrlRecord};
use shortkey::domain::errors::StoreError;
use shortkey::domain::repositories::RecordStore;
use shortkey::infrastructure::persistence::InMemoryRecordStore;
use shortkey::routes::build_router;
use shortkey::state::AppState;
use shortkey::utils::key_codec::Base62Codec;
use std::sync::Arc;

pub const PUBLIC_BASE: &str = "https://s.example.com";
pub const API_BASE: &str = "/api";

/// Store that fails every call, standing in for an unreachable Redis.
pub struct UnavailableStore;

#[async_trait]
impl RecordStore for UnavailableStore {
    async fn try_insert(&self, _key: &str, _long_url: &str) -> Result<InsertOutcome, StoreError> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }

    async fn get(&self, _key: &str) -> Result<Option<ShortUrlRecord>, StoreError> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }

    async fn health_check(&self) -> bool {
        false
    }
}

pub fn create_test_state_with(store: Arc<dyn RecordStore>) -> AppState {
    let service = ShortenerService::new(store, Arc::new(Base62Codec::new()), PUBLIC_BASE);
    AppState::new(Arc::new(service))
}

pub fn create_test_state() -> (AppState, Arc<InMemoryRecordStore>) {
    let store = Arc::new(InMemoryRecordStore::new());
    (create_test_state_with(store.clone()), store)
}

pub fn make_server(state: AppState) -> TestServer {
    TestServer::new(build_router(state, API_BASE)).unwrap()
}

pub async fn seed_record(store: &InMemoryRecordStore, key: &str, url: &str) {
    let outcome = store.try_insert(key, url).await.unwrap();
    assert!(matches!(outcome, InsertOutcome::Created(_)));
}
