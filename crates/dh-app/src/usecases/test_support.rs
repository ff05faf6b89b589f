//! Test doubles for the use-case unit tests.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use mockall::mock;
use serde_json::{Map, Value};

use dh_core::ports::{CacheError, LocalCachePort, RemoteDocumentError, RemoteDocumentPort};
use dh_core::{ProfileField, UserId};

mock! {
    pub Remote {}

    #[async_trait]
    impl RemoteDocumentPort for Remote {
        async fn fetch_field(
            &self,
            user_id: &UserId,
            field: ProfileField,
        ) -> Result<Option<Value>, RemoteDocumentError>;
        async fn merge(
            &self,
            user_id: &UserId,
            patch: Map<String, Value>,
        ) -> Result<(), RemoteDocumentError>;
    }
}

/// In-memory cache that records every call and can be told to fail.
pub struct MemoryCache<R> {
    rows: Mutex<Vec<R>>,
    pub saves: AtomicUsize,
    pub clears: AtomicUsize,
    pub fail_get: AtomicBool,
    pub fail_save: AtomicBool,
}

impl<R: Clone> MemoryCache<R> {
    pub fn new() -> Self {
        Self::with_rows(Vec::new())
    }

    pub fn with_rows(rows: Vec<R>) -> Self {
        Self {
            rows: Mutex::new(rows),
            saves: AtomicUsize::new(0),
            clears: AtomicUsize::new(0),
            fail_get: AtomicBool::new(false),
            fail_save: AtomicBool::new(false),
        }
    }

    pub fn rows(&self) -> Vec<R> {
        self.rows.lock().unwrap().clone()
    }

    pub fn saves(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    pub fn clears(&self) -> usize {
        self.clears.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl<R> LocalCachePort<R> for MemoryCache<R>
where
    R: Clone + Send + Sync + 'static,
{
    async fn get(&self, _user_id: &UserId) -> Result<Vec<R>, CacheError> {
        if self.fail_get.load(Ordering::SeqCst) {
            return Err(CacheError::Storage("disk I/O error".into()));
        }
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn save(&self, _user_id: &UserId, records: &[R]) -> Result<(), CacheError> {
        self.saves.fetch_add(1, Ordering::SeqCst);
        if self.fail_save.load(Ordering::SeqCst) {
            return Err(CacheError::Storage("database is locked".into()));
        }
        *self.rows.lock().unwrap() = records.to_vec();
        Ok(())
    }

    async fn clear(&self, _user_id: &UserId) -> Result<(), CacheError> {
        self.clears.fetch_add(1, Ordering::SeqCst);
        self.rows.lock().unwrap().clear();
        Ok(())
    }
}

/// Unwraps a JSON object literal into a merge patch.
pub fn object(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("expected a JSON object, got {other}"),
    }
}
