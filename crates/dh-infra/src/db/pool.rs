use std::path::Path;

use anyhow::{Context, Result};
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::sqlite::SqliteConnection;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use tracing::info;

pub const PAYMENT_MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations/payments");
pub const CATEGORY_MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations/categories");
pub const NICKNAME_MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations/nickname");
pub const VEHICLE_MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations/vehicles");
pub const FUEL_MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations/fuel");

/// Type alias for SQLite connection pool
pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;

/// One on-device database file per cached domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheStore {
    Payments,
    Categories,
    Nickname,
    Vehicles,
    Fuel,
}

impl CacheStore {
    pub const ALL: [CacheStore; 5] = [
        CacheStore::Payments,
        CacheStore::Categories,
        CacheStore::Nickname,
        CacheStore::Vehicles,
        CacheStore::Fuel,
    ];

    pub fn file_name(&self) -> &'static str {
        match self {
            CacheStore::Payments => "payments.db",
            CacheStore::Categories => "categories.db",
            CacheStore::Nickname => "nickname.db",
            CacheStore::Vehicles => "vehicles.db",
            CacheStore::Fuel => "fuel.db",
        }
    }

    fn migrations(&self) -> EmbeddedMigrations {
        match self {
            CacheStore::Payments => PAYMENT_MIGRATIONS,
            CacheStore::Categories => CATEGORY_MIGRATIONS,
            CacheStore::Nickname => NICKNAME_MIGRATIONS,
            CacheStore::Vehicles => VEHICLE_MIGRATIONS,
            CacheStore::Fuel => FUEL_MIGRATIONS,
        }
    }
}

/// Open the database file for `store` under `dir` and run its migrations.
///
/// This function should be called **once per store at application startup**;
/// the pool is held for the process lifetime.
pub fn open_cache_store(dir: &Path, store: CacheStore) -> Result<DbPool> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("create cache dir failed: {}", dir.display()))?;
    let path = dir.join(store.file_name());
    let url = path
        .to_str()
        .with_context(|| format!("cache path is not valid UTF-8: {}", path.display()))?;
    init_db_pool(url, store.migrations())
}

/// Create database connection pool and run migrations
///
/// The pool holds a single connection, so SQLite sees every statement for this
/// file through one connection, in order.
pub fn init_db_pool(database_url: &str, migrations: EmbeddedMigrations) -> Result<DbPool> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);

    let pool = Pool::builder()
        .max_size(1)
        .build(manager)
        .with_context(|| format!("Failed to create database pool for {database_url}"))?;

    run_migrations(&pool, migrations)?;

    Ok(pool)
}

/// Run embedded Diesel migrations
fn run_migrations(pool: &DbPool, migrations: EmbeddedMigrations) -> Result<()> {
    let mut conn = pool.get()?;

    info!("Running database migrations...");
    conn.run_pending_migrations(migrations)
        .map_err(|e| anyhow::anyhow!("Migration failed: {}", e))?;
    info!("Database migrations completed");

    Ok(())
}
