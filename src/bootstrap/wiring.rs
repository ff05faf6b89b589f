//! # Dependency Wiring / 依赖注入
//!
//! Opens every infrastructure adapter and groups them into [`AppDeps`].
//! 打开所有基础设施适配器并打包为 [`AppDeps`]。
//!
//! Each cached domain gets its own SQLite file; all of them are opened (and
//! migrated) here, once, before any use case runs.

use std::path::Path;
use std::sync::Arc;

use dh_app::AppDeps;
use dh_core::ports::{ClockPort, RemoteDocumentPort};
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

use super::config::ResolvedConfig;

pub type WiringResult<T> = Result<T, WiringError>;

/// Errors during dependency injection
/// 依赖注入错误（基础设施初始化失败）
#[derive(Debug, thiserror::Error)]
pub enum WiringError {
    #[error("Cache initialization failed for {store}: {message}")]
    CacheInit {
        store: &'static str,
        message: String,
    },

    #[error("Document store initialization failed: {0}")]
    DocumentStoreInit(String),
}

fn open_executor(cache_dir: &Path, store: CacheStore) -> WiringResult<SqliteCacheExecutor> {
    let pool = open_cache_store(cache_dir, store).map_err(|e| WiringError::CacheInit {
        store: store.file_name(),
        message: format!("{e:#}"),
    })?;
    Ok(SqliteCacheExecutor::new(pool))
}

/// Build all application dependencies from resolved configuration.
/// 从解析后的配置构建所有应用依赖。
///
/// # Errors / 错误
///
/// Returns `WiringError` if a cache database cannot be opened or migrated, or
/// the document directory cannot be created.
pub fn wire_dependencies(config: &ResolvedConfig) -> WiringResult<AppDeps> {
    std::fs::create_dir_all(&config.documents_dir).map_err(|e| {
        WiringError::DocumentStoreInit(format!(
            "Failed to create {}: {}",
            config.documents_dir.display(),
            e
        ))
    })?;
    let remote: Arc<dyn RemoteDocumentPort> =
        Arc::new(JsonFileDocumentStore::new(config.documents_dir.clone()));

    let cache_dir = config.cache_dir.as_path();
    let clock: Arc<dyn ClockPort> = Arc::new(SystemClock);

    let deps = AppDeps {
        remote,
        payment_cache: Arc::new(DieselPaymentCache::new(
            open_executor(cache_dir, CacheStore::Payments)?,
            PaymentMethodRowMapper,
        )),
        category_cache: Arc::new(DieselCategoryCache::new(
            open_executor(cache_dir, CacheStore::Categories)?,
            CategoryRowMapper,
        )),
        nickname_cache: Arc::new(DieselNicknameCache::new(
            open_executor(cache_dir, CacheStore::Nickname)?,
            NicknameRowMapper,
        )),
        vehicle_cache: Arc::new(DieselVehicleCache::new(
            open_executor(cache_dir, CacheStore::Vehicles)?,
            VehicleRowMapper,
        )),
        fuel_record_cache: Arc::new(DieselFuelRecordCache::new(
            open_executor(cache_dir, CacheStore::Fuel)?,
            FuelRecordRowMapper,
        )),
        clock,
    };

    tracing::debug!(
        cache_dir = %config.cache_dir.display(),
        documents_dir = %config.documents_dir.display(),
        "dependencies wired"
    );
    Ok(deps)
}
