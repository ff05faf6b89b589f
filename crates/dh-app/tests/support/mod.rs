//! Real adapters for the integration tests: diesel caches on temp SQLite files
//! and the JSON document store, with a remote wrapper that counts calls and can
//! be switched to fail.

#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{Map, Value};
use tempfile::TempDir;

use dh_app::{AppDeps, UserWriteLocks};
use dh_core::ports::{ClockPort, RemoteDocumentError, RemoteDocumentPort};
use dh_core::{ProfileField, UserId};
use dh_infra::db::caches::{
    DieselCategoryCache, DieselFuelRecordCache, DieselNicknameCache, DieselPaymentCache,
    DieselVehicleCache,
};
use dh_infra::db::executor::SqliteCacheExecutor;
use dh_infra::db::mappers::{
    CategoryRowMapper, FuelRecordRowMapper, NicknameRowMapper, PaymentMethodRowMapper,
    VehicleRowMapper,
};
use dh_infra::db::pool::{open_cache_store, CacheStore};
use dh_infra::{JsonFileDocumentStore, SystemClock};

pub struct CountingRemote {
    inner: JsonFileDocumentStore,
    pub fetches: AtomicUsize,
    pub merges: AtomicUsize,
    pub fail_merges: AtomicBool,
    pub reject_setup_status: AtomicBool,
}

impl CountingRemote {
    pub fn new(inner: JsonFileDocumentStore) -> Self {
        Self {
            inner,
            fetches: AtomicUsize::new(0),
            merges: AtomicUsize::new(0),
            fail_merges: AtomicBool::new(false),
            reject_setup_status: AtomicBool::new(false),
        }
    }

    pub fn fetches(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }

    pub fn set_failing(&self, failing: bool) {
        self.fail_merges.store(failing, Ordering::SeqCst);
    }

    /// Fails any merge that touches `setupStatus`, the way a rules layer
    /// guarding the flag map would.
    pub fn set_rejecting_setup_status(&self, rejecting: bool) {
        self.reject_setup_status.store(rejecting, Ordering::SeqCst);
    }
}

#[async_trait]
impl RemoteDocumentPort for CountingRemote {
    async fn fetch_field(
        &self,
        user_id: &UserId,
        field: ProfileField,
    ) -> Result<Option<Value>, RemoteDocumentError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        self.inner.fetch_field(user_id, field).await
    }

    async fn merge(
        &self,
        user_id: &UserId,
        patch: Map<String, Value>,
    ) -> Result<(), RemoteDocumentError> {
        self.merges.fetch_add(1, Ordering::SeqCst);
        if self.fail_merges.load(Ordering::SeqCst) {
            return Err(RemoteDocumentError::Unavailable("network unreachable".into()));
        }
        if self.reject_setup_status.load(Ordering::SeqCst)
            && patch.contains_key(ProfileField::SetupStatus.as_str())
        {
            return Err(RemoteDocumentError::PermissionDenied("setupStatus is read-only".into()));
        }
        self.inner.merge(user_id, patch).await
    }
}

pub struct Harness {
    _dir: TempDir,
    pub remote: Arc<CountingRemote>,
    pub deps: AppDeps,
    pub locks: Arc<UserWriteLocks>,
}

impl Harness {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let cache_dir = dir.path().join("cache");
        let remote = Arc::new(CountingRemote::new(JsonFileDocumentStore::new(
            dir.path().join("documents"),
        )));

        let executor = |store| {
            SqliteCacheExecutor::new(
                open_cache_store(&cache_dir, store).expect("Failed to open cache store"),
            )
        };

        let clock: Arc<dyn ClockPort> = Arc::new(SystemClock);
        let deps = AppDeps {
            remote: remote.clone(),
            payment_cache: Arc::new(DieselPaymentCache::new(
                executor(CacheStore::Payments),
                PaymentMethodRowMapper,
            )),
            category_cache: Arc::new(DieselCategoryCache::new(
                executor(CacheStore::Categories),
                CategoryRowMapper,
            )),
            nickname_cache: Arc::new(DieselNicknameCache::new(
                executor(CacheStore::Nickname),
                NicknameRowMapper,
            )),
            vehicle_cache: Arc::new(DieselVehicleCache::new(
                executor(CacheStore::Vehicles),
                VehicleRowMapper,
            )),
            fuel_record_cache: Arc::new(DieselFuelRecordCache::new(
                executor(CacheStore::Fuel),
                FuelRecordRowMapper,
            )),
            clock,
        };

        Self {
            _dir: dir,
            remote,
            deps,
            locks: Arc::new(UserWriteLocks::new()),
        }
    }
}
